pub mod db;
pub mod handlers;
pub mod service;
pub mod models;
pub mod dto;
pub mod errors;
pub mod settings;

use actix_cors::Cors;
use actix_web::{HttpServer, App, web};
use db::init_store;
use dotenv::dotenv;
use log::{error, info};
use service::log::{init_logger, LoggerMiddleware};
use settings::Settings;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    init_logger();
    let settings = Settings::from_env().map_err(|e| {
        error!("failed to read settings: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let store = web::Data::new(init_store(settings.seed_data));
    info!("listening on http://{}:{}/api", settings.host, settings.port);
    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(Cors::permissive())
            .wrap(LoggerMiddleware)
            .configure(handlers::config)
            .default_service(web::route().to(handlers::not_found))
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}

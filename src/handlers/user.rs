use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::db::SharedStore;
use crate::dto::{ApiResponse, NewUserDto, UpdateUserDto};
use crate::errors::ApiError;
use crate::service;

#[get("")]
pub async fn get_all(store: web::Data<SharedStore>) -> Result<HttpResponse, ApiError> {
    let users = service::user::get_all(&store.lock());
    let message = format!("Retrieved {} users", users.len());
    Ok(HttpResponse::Ok().json(ApiResponse::ok(users).with_message(message)))
}

#[get("/{id}")]
pub async fn get_by_id(id: web::Path<Uuid>, store: web::Data<SharedStore>) -> Result<HttpResponse, ApiError> {
    let user = service::user::get_by_id(id.into_inner(), &store.lock())?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(user)))
}

#[post("")]
pub async fn create(dto: web::Json<NewUserDto>, store: web::Data<SharedStore>) -> Result<HttpResponse, ApiError> {
    let user = service::user::create(dto.into_inner(), &mut store.lock())?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(user).with_message("User created successfully")))
}

#[put("/{id}")]
pub async fn update(
    id: web::Path<Uuid>,
    dto: web::Json<UpdateUserDto>,
    store: web::Data<SharedStore>,
) -> Result<HttpResponse, ApiError> {
    let user = service::user::update(id.into_inner(), dto.into_inner(), &mut store.lock())?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(user).with_message("User updated successfully")))
}

#[delete("/{id}")]
pub async fn delete_by_id(id: web::Path<Uuid>, store: web::Data<SharedStore>) -> Result<HttpResponse, ApiError> {
    service::user::delete(id.into_inner(), &mut store.lock())?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("User deleted successfully")))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_all)
        .service(get_by_id)
        .service(create)
        .service(update)
        .service(delete_by_id);
}

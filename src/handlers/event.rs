use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::{
   db::SharedStore,
   dto::{ApiResponse, NewEventDto, UpdateEventDto},
   errors::ApiError,
   service,
};

#[get("")]
pub async fn get_all(store: web::Data<SharedStore>) -> Result<HttpResponse, ApiError> {
   let events = service::event::get_all(&store.lock());
   let message = format!("Retrieved {} events", events.len());
   Ok(HttpResponse::Ok().json(ApiResponse::ok(events).with_message(message)))
}

#[get("/host/{host_id}")]
pub async fn get_by_host(host_id: web::Path<Uuid>, store: web::Data<SharedStore>) -> Result<HttpResponse, ApiError> {
   let (host, events) = service::event::get_by_host(host_id.into_inner(), &store.lock())?;
   let message = format!("Retrieved {} events for host {}", events.len(), host.name);
   Ok(HttpResponse::Ok().json(ApiResponse::ok(events).with_message(message)))
}

#[get("/{id}")]
pub async fn get_by_id(id: web::Path<Uuid>, store: web::Data<SharedStore>) -> Result<HttpResponse, ApiError> {
   let event = service::event::get_by_id(id.into_inner(), &store.lock())?;
   Ok(HttpResponse::Ok().json(ApiResponse::ok(event)))
}

#[post("")]
pub async fn create(new_event_dto: web::Json<NewEventDto>, store: web::Data<SharedStore>) -> Result<HttpResponse, ApiError> {
   let event = service::event::create(new_event_dto.into_inner(), &mut store.lock())?;
   Ok(HttpResponse::Created().json(ApiResponse::ok(event).with_message("Event created successfully")))
}

#[put("/{id}")]
pub async fn update(
   id: web::Path<Uuid>,
   update_event_dto: web::Json<UpdateEventDto>,
   store: web::Data<SharedStore>
) -> Result<HttpResponse, ApiError> {
   let event = service::event::update(
      id.into_inner(),
      update_event_dto.into_inner(),
      &mut store.lock()
   )?;
   Ok(HttpResponse::Ok().json(ApiResponse::ok(event).with_message("Event updated successfully")))
}

#[delete("/{id}")]
pub async fn delete_by_id(id: web::Path<Uuid>, store: web::Data<SharedStore>) -> Result<HttpResponse, ApiError> {
   service::event::delete(id.into_inner(), &mut store.lock())?;
   Ok(HttpResponse::Ok().json(ApiResponse::message("Event and associated invites deleted successfully")))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
   cfg.service(get_all);
   cfg.service(get_by_host);
   cfg.service(get_by_id);
   cfg.service(create);
   cfg.service(update);
   cfg.service(delete_by_id);
}

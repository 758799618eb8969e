use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::{
   db::SharedStore,
   dto::{ApiResponse, NewInviteDto, UpdateInviteStatusDto},
   errors::ApiError,
   service,
};

#[get("")]
pub async fn get_all(store: web::Data<SharedStore>) -> Result<HttpResponse, ApiError> {
   let invites = service::invite::get_all(&store.lock());
   let message = format!("Retrieved {} invites", invites.len());
   Ok(HttpResponse::Ok().json(ApiResponse::ok(invites).with_message(message)))
}

#[get("/event/{event_id}")]
pub async fn get_by_event(event_id: web::Path<Uuid>, store: web::Data<SharedStore>) -> Result<HttpResponse, ApiError> {
   let (event, invites) = service::invite::get_by_event(event_id.into_inner(), &store.lock())?;
   let message = format!("Retrieved {} invites for event \"{}\"", invites.len(), event.title);
   Ok(HttpResponse::Ok().json(ApiResponse::ok(invites).with_message(message)))
}

#[get("/user/{user_id}")]
pub async fn get_by_user(user_id: web::Path<Uuid>, store: web::Data<SharedStore>) -> Result<HttpResponse, ApiError> {
   let (user, invites) = service::invite::get_by_user(user_id.into_inner(), &store.lock())?;
   let message = format!("Retrieved {} invites for user \"{}\"", invites.len(), user.name);
   Ok(HttpResponse::Ok().json(ApiResponse::ok(invites).with_message(message)))
}

#[get("/{id}")]
pub async fn get_by_id(id: web::Path<Uuid>, store: web::Data<SharedStore>) -> Result<HttpResponse, ApiError> {
   let invite = service::invite::get_by_id(id.into_inner(), &store.lock())?;
   Ok(HttpResponse::Ok().json(ApiResponse::ok(invite)))
}

#[post("")]
pub async fn create(dto: web::Json<NewInviteDto>, store: web::Data<SharedStore>) -> Result<HttpResponse, ApiError> {
   let invite = service::invite::create(dto.into_inner(), &mut store.lock())?;
   Ok(HttpResponse::Created().json(ApiResponse::ok(invite).with_message("Invite created successfully")))
}

#[put("/{id}/status")]
pub async fn update_status(
   id: web::Path<Uuid>,
   dto: web::Json<UpdateInviteStatusDto>,
   store: web::Data<SharedStore>
) -> Result<HttpResponse, ApiError> {
   let invite = service::invite::update_status(id.into_inner(), dto.into_inner(), &mut store.lock())?;
   let message = format!("Invite status updated to {}", invite.status);
   Ok(HttpResponse::Ok().json(ApiResponse::ok(invite).with_message(message)))
}

#[delete("/{id}")]
pub async fn delete_by_id(id: web::Path<Uuid>, store: web::Data<SharedStore>) -> Result<HttpResponse, ApiError> {
   service::invite::delete(id.into_inner(), &mut store.lock())?;
   Ok(HttpResponse::Ok().json(ApiResponse::message("Invite deleted successfully")))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
   cfg.service(get_all);
   cfg.service(get_by_event);
   cfg.service(get_by_user);
   cfg.service(get_by_id);
   cfg.service(create);
   cfg.service(update_status);
   cfg.service(delete_by_id);
}

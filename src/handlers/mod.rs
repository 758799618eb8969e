pub mod event;
pub mod invite;
pub mod user;


use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use chrono::{Duration, Utc};
use serde_json::json;

use crate::{dto::ApiResponse, errors::ApiError};

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Event Management API is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Route listing with sample request bodies.
#[get("/")]
pub async fn index() -> impl Responder {
    let start = Utc::now() + Duration::days(1);
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Event Management API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "users": {
                "GET /api/users": "Get all users",
                "GET /api/users/:id": "Get user by ID",
                "POST /api/users": "Create new user",
                "PUT /api/users/:id": "Update user",
                "DELETE /api/users/:id": "Delete user",
            },
            "events": {
                "GET /api/events": "Get all events",
                "GET /api/events/:id": "Get event by ID",
                "GET /api/events/host/:hostId": "Get events by host ID",
                "POST /api/events": "Create new event",
                "PUT /api/events/:id": "Update event",
                "DELETE /api/events/:id": "Delete event",
            },
            "invites": {
                "GET /api/invites": "Get all invites",
                "GET /api/invites/:id": "Get invite by ID",
                "GET /api/invites/event/:eventId": "Get invites by event ID",
                "GET /api/invites/user/:userId": "Get invites by user ID",
                "POST /api/invites": "Create new invite",
                "PUT /api/invites/:id/status": "Update invite status",
                "DELETE /api/invites/:id": "Delete invite",
            },
        },
        "sampleData": {
            "createUser": {
                "email": "user@example.com",
                "name": "John Doe",
            },
            "createEvent": {
                "title": "Team Meeting",
                "description": "Weekly team sync",
                "location": "Conference Room A",
                "hostId": "user-id-here",
                "startDateTime": start.to_rfc3339(),
                "endDateTime": (start + Duration::hours(1)).to_rfc3339(),
                "maxAttendees": 10,
                "isPublic": false,
            },
            "createInvite": {
                "eventId": "event-id-here",
                "userId": "user-id-here",
            },
            "updateInviteStatus": {
                "status": "accepted",
            },
        },
    }))
}

/// Message for a path id that is not a UUID, matching the one given for an
/// unknown id on the same route.
fn missing_entity(path: &str) -> &'static str {
    let path = path.trim_start_matches("/api");
    if path.starts_with("/users") || path.starts_with("/invites/user/") {
        "User not found"
    } else if path.starts_with("/events/host/") {
        "Host not found"
    } else if path.starts_with("/events") || path.starts_with("/invites/event/") {
        "Event not found"
    } else if path.starts_with("/invites") {
        "Invite not found"
    } else {
        "Resource not found"
    }
}

/// Fallback for every route nothing else matched.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::failure(format!(
        "Route {} {} not found",
        req.method(),
        req.uri()
    )))
}

/// Mounts the API under `/api` and makes extractor failures answer with the
/// response envelope.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::bad_request(format!("Invalid JSON body: {}", err)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|_err, req| {
        ApiError::not_found(missing_entity(req.path())).into()
    }))
    .service(index)
    .service(health)
    .service(
        web::scope("/api")
            .service(web::scope("/users").configure(user::init_routes))
            .service(web::scope("/events").configure(event::init_routes))
            .service(web::scope("/invites").configure(invite::init_routes)),
    );
}

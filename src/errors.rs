use actix_web::{
    error,
    http::StatusCode,
    HttpResponse,
};
use derive_more::Display;
use log::error;

use crate::dto::ApiResponse;

#[derive(Debug, Display, PartialEq)]
pub enum ApiError {
    #[display(fmt = "internal server error")]
    InternalError,

    #[display(fmt = "{}", _0)]
    BadClientData(String),

    #[display(fmt = "{}", _0)]
    NotFound(String),

    #[display(fmt = "{}", _0)]
    Conflict(String),

    #[display(fmt = "Event has reached maximum capacity")]
    CapacityReached,
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadClientData(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        ApiError::Conflict(msg.into())
    }
}

impl error::ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        if let ApiError::InternalError = self {
            error!("[{:} : {:}] INTERNAL SERVER ERROR: {:?}", file!(), line!(), self);
        }
        HttpResponse::build(self.status_code())
            .json(ApiResponse::<()>::failure(self.to_string()))
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadClientData(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::CapacityReached => StatusCode::BAD_REQUEST,
        }
    }
}

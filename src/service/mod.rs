pub mod event;
pub mod invite;
pub mod log;
pub mod user;

use uuid::Uuid;

use crate::errors::ApiError;

/// Treats missing and blank strings alike.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Ids arriving in a request body. An id that cannot be parsed cannot resolve
/// to an entity, so it is reported the same way as an unknown one.
pub(crate) fn parse_id(raw: &str, not_found: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ApiError::not_found(not_found))
}

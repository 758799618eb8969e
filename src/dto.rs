use serde::{Deserialize, Deserializer, Serialize};

/// Envelope wrapping every response body.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            message: Some(message.into()),
        }
    }
}

// Required fields are optional here so that a missing field is reported as a
// validation error instead of a deserialization failure.

#[derive(Debug, Deserialize, Clone, Default)]
pub struct NewUserDto {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewEventDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub host_id: Option<String>,
    pub start_date_time: Option<String>,
    pub end_date_time: Option<String>,
    pub max_attendees: Option<u32>,
    pub is_public: Option<bool>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_date_time: Option<String>,
    pub end_date_time: Option<String>,
    /// Absent keeps the limit, `null` clears it.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub max_attendees: Option<Option<u32>>,
    pub is_public: Option<bool>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewInviteDto {
    pub event_id: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct UpdateInviteStatusDto {
    pub status: Option<String>,
}

fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub host_id: Uuid,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    Pending,
    Accepted,
    Declined,
    Cancelled,
}

impl InviteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InviteStatus::Pending => "pending",
            InviteStatus::Accepted => "accepted",
            InviteStatus::Declined => "declined",
            InviteStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InviteStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InviteStatus::Pending),
            "accepted" => Ok(InviteStatus::Accepted),
            "declined" => Ok(InviteStatus::Declined),
            "cancelled" => Ok(InviteStatus::Cancelled),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invite {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub status: InviteStatus,
    pub invited_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data the store needs to insert a user; id and timestamps are assigned on insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub host_id: Uuid,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub max_attendees: Option<u32>,
    pub is_public: bool,
}

#[derive(Debug, Clone)]
pub struct NewInvite {
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub status: InviteStatus,
    pub invited_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

/// Field-by-field update of a user. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EventChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_date_time: Option<DateTime<Utc>>,
    pub end_date_time: Option<DateTime<Utc>>,
    /// `Some(None)` clears the attendee limit.
    pub max_attendees: Option<Option<u32>>,
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct InviteChanges {
    pub status: Option<InviteStatus>,
    pub responded_at: Option<DateTime<Utc>>,
}

/// Event as returned by the API, with its host and invites resolved.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWithHost {
    #[serde(flatten)]
    pub event: Event,
    pub host: Option<User>,
    pub invites: Vec<Invite>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteWithDetails {
    #[serde(flatten)]
    pub invite: Invite,
    pub event: Option<Event>,
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invite_status_parses_only_known_values() {
        assert_eq!("accepted".parse::<InviteStatus>(), Ok(InviteStatus::Accepted));
        assert_eq!("cancelled".parse::<InviteStatus>(), Ok(InviteStatus::Cancelled));
        assert!("Accepted".parse::<InviteStatus>().is_err());
        assert!("maybe".parse::<InviteStatus>().is_err());
    }

    #[test]
    fn event_serializes_in_camel_case_without_empty_limit() {
        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4(),
            title: "Standup".to_string(),
            description: String::new(),
            location: "Room 1".to_string(),
            host_id: Uuid::new_v4(),
            start_date_time: now,
            end_date_time: now,
            max_attendees: None,
            is_public: true,
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert!(value.get("hostId").is_some());
        assert!(value.get("startDateTime").is_some());
        assert!(value.get("isPublic").is_some());
        assert!(value.get("maxAttendees").is_none());
    }
}

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use log::info;
use uuid::Uuid;

use crate::{
    db::Store,
    dto::{NewEventDto, UpdateEventDto},
    errors::ApiError,
    models::{Event, EventChanges, EventWithHost, NewEvent, User},
};

use super::{non_empty, parse_id};

/// Accepts RFC 3339, an ISO date-time without offset, or a bare date. The
/// last two are read as UTC.
fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn validate_max_attendees(max_attendees: Option<u32>) -> Result<(), ApiError> {
    match max_attendees {
        Some(0) => Err(ApiError::bad_request("maxAttendees must be at least 1")),
        _ => Ok(()),
    }
}

fn with_host(event: Event, store: &Store) -> EventWithHost {
    let host = store.get_user_by_id(event.host_id);
    let invites = store.get_invites_by_event_id(event.id);
    EventWithHost {
        event,
        host,
        invites,
    }
}

pub fn get_all(store: &Store) -> Vec<EventWithHost> {
    store
        .get_all_events()
        .into_iter()
        .map(|event| with_host(event, store))
        .collect()
}

pub fn get_by_id(id: Uuid, store: &Store) -> Result<EventWithHost, ApiError> {
    store
        .get_event_by_id(id)
        .map(|event| with_host(event, store))
        .ok_or_else(|| ApiError::not_found("Event not found"))
}

pub fn get_by_host(host_id: Uuid, store: &Store) -> Result<(User, Vec<EventWithHost>), ApiError> {
    let host = store
        .get_user_by_id(host_id)
        .ok_or_else(|| ApiError::not_found("Host not found"))?;
    let events = store
        .get_events_by_host_id(host_id)
        .into_iter()
        .map(|event| with_host(event, store))
        .collect();
    Ok((host, events))
}

pub fn create(dto: NewEventDto, store: &mut Store) -> Result<Event, ApiError> {
    let NewEventDto {
        title,
        description,
        location,
        host_id,
        start_date_time,
        end_date_time,
        max_attendees,
        is_public,
    } = dto;
    let (title, location, host_id, start_raw, end_raw) = match (
        non_empty(title),
        non_empty(location),
        non_empty(host_id),
        non_empty(start_date_time),
        non_empty(end_date_time),
    ) {
        (Some(title), Some(location), Some(host_id), Some(start), Some(end)) => {
            (title, location, host_id, start, end)
        }
        _ => {
            return Err(ApiError::bad_request(
                "Title, location, hostId, startDateTime, and endDateTime are required",
            ))
        }
    };

    let host_id = parse_id(&host_id, "Host not found")?;
    if store.get_user_by_id(host_id).is_none() {
        return Err(ApiError::not_found("Host not found"));
    }

    let (start, end) = match (parse_datetime(&start_raw), parse_datetime(&end_raw)) {
        (Some(start), Some(end)) => (start, end),
        _ => return Err(ApiError::bad_request("Invalid date format")),
    };
    if start >= end {
        return Err(ApiError::bad_request("Start date must be before end date"));
    }
    if start < Utc::now() {
        return Err(ApiError::bad_request("Start date cannot be in the past"));
    }
    validate_max_attendees(max_attendees)?;

    let event = store.create_event(NewEvent {
        title,
        description: description.unwrap_or_default(),
        location,
        host_id,
        start_date_time: start,
        end_date_time: end,
        max_attendees,
        is_public: is_public.unwrap_or(true),
    });
    info!("event {} created by host {}", event.id, event.host_id);
    Ok(event)
}

pub fn update(id: Uuid, dto: UpdateEventDto, store: &mut Store) -> Result<Event, ApiError> {
    let existing = store
        .get_event_by_id(id)
        .ok_or_else(|| ApiError::not_found("Event not found"))?;

    // Blank date strings leave the stored value in place.
    let start = match non_empty(dto.start_date_time.clone()) {
        Some(raw) => Some(
            parse_datetime(&raw).ok_or_else(|| ApiError::bad_request("Invalid start date format"))?,
        ),
        None => None,
    };
    let end = match non_empty(dto.end_date_time.clone()) {
        Some(raw) => Some(
            parse_datetime(&raw).ok_or_else(|| ApiError::bad_request("Invalid end date format"))?,
        ),
        None => None,
    };
    if start.unwrap_or(existing.start_date_time) >= end.unwrap_or(existing.end_date_time) {
        return Err(ApiError::bad_request("Start date must be before end date"));
    }

    if dto.title.is_some() && non_empty(dto.title.clone()).is_none() {
        return Err(ApiError::bad_request("Title cannot be empty"));
    }
    if dto.location.is_some() && non_empty(dto.location.clone()).is_none() {
        return Err(ApiError::bad_request("Location cannot be empty"));
    }
    if let Some(max_attendees) = dto.max_attendees {
        validate_max_attendees(max_attendees)?;
    }

    let changes = EventChanges {
        title: dto.title,
        description: dto.description,
        location: dto.location,
        start_date_time: start,
        end_date_time: end,
        max_attendees: dto.max_attendees,
        is_public: dto.is_public,
    };
    store.update_event(id, changes).ok_or(ApiError::InternalError)
}

/// Deletes the event and all of its invites.
pub fn delete(id: Uuid, store: &mut Store) -> Result<(), ApiError> {
    if store.get_event_by_id(id).is_none() {
        return Err(ApiError::not_found("Event not found"));
    }
    if store.delete_event(id) {
        info!("event {} deleted", id);
        Ok(())
    } else {
        Err(ApiError::InternalError)
    }
}

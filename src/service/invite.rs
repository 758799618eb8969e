//! Invite lifecycle rules.
//!
//! An event with `maxAttendees` never holds more accepted invites than the
//! limit, and `respondedAt` is stamped once, when an invite first leaves
//! `pending` for `accepted` or `declined`.
use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

use crate::{
    db::Store,
    dto::{NewInviteDto, UpdateInviteStatusDto},
    errors::ApiError,
    models::{Event, Invite, InviteChanges, InviteStatus, InviteWithDetails, NewInvite, User},
};

use super::{non_empty, parse_id};

/// Fails when the event is already at its attendee limit.
fn ensure_capacity(event: &Event, store: &Store) -> Result<(), ApiError> {
    if let Some(max_attendees) = event.max_attendees {
        let accepted = store.count_accepted_invites(event.id);
        if accepted >= max_attendees as usize {
            debug!(
                "event {} is full: {} of {} accepted",
                event.id, accepted, max_attendees
            );
            return Err(ApiError::CapacityReached);
        }
    }
    Ok(())
}

fn stamps_response(current: InviteStatus, next: InviteStatus) -> bool {
    current == InviteStatus::Pending
        && matches!(next, InviteStatus::Accepted | InviteStatus::Declined)
}

fn with_details(invite: Invite, store: &Store) -> InviteWithDetails {
    let event = store.get_event_by_id(invite.event_id);
    let user = store.get_user_by_id(invite.user_id);
    InviteWithDetails {
        invite,
        event,
        user,
    }
}

pub fn get_all(store: &Store) -> Vec<InviteWithDetails> {
    store
        .get_all_invites()
        .into_iter()
        .map(|invite| with_details(invite, store))
        .collect()
}

pub fn get_by_id(id: Uuid, store: &Store) -> Result<InviteWithDetails, ApiError> {
    store
        .get_invite_by_id(id)
        .map(|invite| with_details(invite, store))
        .ok_or_else(|| ApiError::not_found("Invite not found"))
}

pub fn get_by_event(
    event_id: Uuid,
    store: &Store,
) -> Result<(Event, Vec<InviteWithDetails>), ApiError> {
    let event = store
        .get_event_by_id(event_id)
        .ok_or_else(|| ApiError::not_found("Event not found"))?;
    let invites = store
        .get_invites_by_event_id(event_id)
        .into_iter()
        .map(|invite| with_details(invite, store))
        .collect();
    Ok((event, invites))
}

pub fn get_by_user(
    user_id: Uuid,
    store: &Store,
) -> Result<(User, Vec<InviteWithDetails>), ApiError> {
    let user = store
        .get_user_by_id(user_id)
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    let invites = store
        .get_invites_by_user_id(user_id)
        .into_iter()
        .map(|invite| with_details(invite, store))
        .collect();
    Ok((user, invites))
}

pub fn create(dto: NewInviteDto, store: &mut Store) -> Result<Invite, ApiError> {
    let (event_id, user_id) = match (non_empty(dto.event_id), non_empty(dto.user_id)) {
        (Some(event_id), Some(user_id)) => (event_id, user_id),
        _ => return Err(ApiError::bad_request("EventId and userId are required")),
    };

    let event_id = parse_id(&event_id, "Event not found")?;
    let event = store
        .get_event_by_id(event_id)
        .ok_or_else(|| ApiError::not_found("Event not found"))?;
    let user_id = parse_id(&user_id, "User not found")?;
    if store.get_user_by_id(user_id).is_none() {
        return Err(ApiError::not_found("User not found"));
    }

    if store.get_invite_by_event_and_user(event_id, user_id).is_some() {
        return Err(ApiError::conflict(
            "Invite already exists for this user and event",
        ));
    }
    ensure_capacity(&event, store)?;

    let invite = store.create_invite(NewInvite {
        event_id,
        user_id,
        status: InviteStatus::Pending,
        invited_at: Utc::now(),
        responded_at: None,
    });
    info!("invite {} created: user {} to event {}", invite.id, user_id, event_id);
    Ok(invite)
}

pub fn update_status(
    id: Uuid,
    dto: UpdateInviteStatusDto,
    store: &mut Store,
) -> Result<Invite, ApiError> {
    let status: InviteStatus = dto
        .status
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| ApiError::bad_request("Valid status is required"))?;

    let existing = store
        .get_invite_by_id(id)
        .ok_or_else(|| ApiError::not_found("Invite not found"))?;

    if status == InviteStatus::Accepted && existing.status != InviteStatus::Accepted {
        if let Some(event) = store.get_event_by_id(existing.event_id) {
            ensure_capacity(&event, store)?;
        }
    }

    let changes = InviteChanges {
        status: Some(status),
        responded_at: stamps_response(existing.status, status).then(Utc::now),
    };
    let invite = store
        .update_invite(id, changes)
        .ok_or(ApiError::InternalError)?;
    info!("invite {}: {} -> {}", id, existing.status, invite.status);
    Ok(invite)
}

pub fn delete(id: Uuid, store: &mut Store) -> Result<(), ApiError> {
    if store.get_invite_by_id(id).is_none() {
        return Err(ApiError::not_found("Invite not found"));
    }
    if store.delete_invite(id) {
        Ok(())
    } else {
        Err(ApiError::InternalError)
    }
}

pub mod user;
pub mod event;
pub mod invitations;

use std::collections::HashMap;

use chrono::{Duration, Utc};
use log::info;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::models::{Event, Invite, InviteStatus, NewEvent, NewInvite, NewUser, User};

/// Store shared between all workers. Each request holds the lock for the whole
/// validate-then-mutate sequence.
pub type SharedStore = Mutex<Store>;

/// In-process entity store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct Store {
    users: HashMap<Uuid, User>,
    events: HashMap<Uuid, Event>,
    invites: HashMap<Uuid, Invite>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with a few users, events and invites for local runs.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        let now = Utc::now();

        let john = store.create_user(NewUser {
            email: "john.doe@example.com".to_string(),
            name: "John Doe".to_string(),
        });
        let jane = store.create_user(NewUser {
            email: "jane.smith@example.com".to_string(),
            name: "Jane Smith".to_string(),
        });
        let bob = store.create_user(NewUser {
            email: "bob.wilson@example.com".to_string(),
            name: "Bob Wilson".to_string(),
        });

        let workshop_start = now + Duration::days(7);
        let workshop = store.create_event(NewEvent {
            title: "Team Building Workshop".to_string(),
            description: "Annual team building activities and lunch".to_string(),
            location: "Conference Room A, 123 Main St".to_string(),
            host_id: john.id,
            start_date_time: workshop_start,
            end_date_time: workshop_start + Duration::hours(4),
            max_attendees: Some(20),
            is_public: false,
        });

        let meetup_start = now + Duration::days(3);
        let meetup = store.create_event(NewEvent {
            title: "Coffee Meetup".to_string(),
            description: "Casual coffee and networking".to_string(),
            location: "Starbucks Downtown".to_string(),
            host_id: jane.id,
            start_date_time: meetup_start,
            end_date_time: meetup_start + Duration::hours(2),
            max_attendees: None,
            is_public: true,
        });

        store.create_invite(NewInvite {
            event_id: workshop.id,
            user_id: jane.id,
            status: InviteStatus::Pending,
            invited_at: now,
            responded_at: None,
        });
        store.create_invite(NewInvite {
            event_id: workshop.id,
            user_id: bob.id,
            status: InviteStatus::Accepted,
            invited_at: now - Duration::days(1),
            responded_at: Some(now - Duration::hours(12)),
        });
        store.create_invite(NewInvite {
            event_id: meetup.id,
            user_id: john.id,
            status: InviteStatus::Pending,
            invited_at: now,
            responded_at: None,
        });

        store
    }
}

pub fn init_store(seed: bool) -> SharedStore {
    let store = if seed { Store::seeded() } else { Store::new() };
    info!(
        "store ready: {} users, {} events, {} invites",
        store.users.len(),
        store.events.len(),
        store.invites.len()
    );
    Mutex::new(store)
}

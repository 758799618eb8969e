use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::models::{Event, EventChanges, NewEvent};

use super::Store;

impl Store {
    pub fn create_event(&mut self, data: NewEvent) -> Event {
        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            location: data.location,
            host_id: data.host_id,
            start_date_time: data.start_date_time,
            end_date_time: data.end_date_time,
            max_attendees: data.max_attendees,
            is_public: data.is_public,
            created_at: now,
            updated_at: now,
        };
        self.events.insert(event.id, event.clone());
        event
    }

    pub fn get_event_by_id(&self, id: Uuid) -> Option<Event> {
        self.events.get(&id).cloned()
    }

    pub fn get_all_events(&self) -> Vec<Event> {
        self.events.values().cloned().collect()
    }

    pub fn get_events_by_host_id(&self, host_id: Uuid) -> Vec<Event> {
        self.events
            .values()
            .filter(|event| event.host_id == host_id)
            .cloned()
            .collect()
    }

    pub fn update_event(&mut self, id: Uuid, changes: EventChanges) -> Option<Event> {
        let event = self.events.get_mut(&id)?;
        if let Some(title) = changes.title {
            event.title = title;
        }
        if let Some(description) = changes.description {
            event.description = description;
        }
        if let Some(location) = changes.location {
            event.location = location;
        }
        if let Some(start) = changes.start_date_time {
            event.start_date_time = start;
        }
        if let Some(end) = changes.end_date_time {
            event.end_date_time = end;
        }
        if let Some(max_attendees) = changes.max_attendees {
            event.max_attendees = max_attendees;
        }
        if let Some(is_public) = changes.is_public {
            event.is_public = is_public;
        }
        event.updated_at = Utc::now();
        Some(event.clone())
    }

    /// Removes the event together with every invite that references it.
    pub fn delete_event(&mut self, id: Uuid) -> bool {
        let invite_ids: Vec<Uuid> = self
            .invites
            .values()
            .filter(|invite| invite.event_id == id)
            .map(|invite| invite.id)
            .collect();
        for invite_id in &invite_ids {
            self.invites.remove(invite_id);
        }
        debug!("event {}: removed {} invites", id, invite_ids.len());
        self.events.remove(&id).is_some()
    }
}

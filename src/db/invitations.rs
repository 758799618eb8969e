use chrono::Utc;
use uuid::Uuid;

use crate::models::{Invite, InviteChanges, InviteStatus, NewInvite};

use super::Store;

impl Store {
    pub fn create_invite(&mut self, data: NewInvite) -> Invite {
        let now = Utc::now();
        let invite = Invite {
            id: Uuid::new_v4(),
            event_id: data.event_id,
            user_id: data.user_id,
            status: data.status,
            invited_at: data.invited_at,
            responded_at: data.responded_at,
            created_at: now,
            updated_at: now,
        };
        self.invites.insert(invite.id, invite.clone());
        invite
    }

    pub fn get_invite_by_id(&self, id: Uuid) -> Option<Invite> {
        self.invites.get(&id).cloned()
    }

    pub fn get_all_invites(&self) -> Vec<Invite> {
        self.invites.values().cloned().collect()
    }

    pub fn get_invites_by_event_id(&self, event_id: Uuid) -> Vec<Invite> {
        self.invites
            .values()
            .filter(|invite| invite.event_id == event_id)
            .cloned()
            .collect()
    }

    pub fn get_invites_by_user_id(&self, user_id: Uuid) -> Vec<Invite> {
        self.invites
            .values()
            .filter(|invite| invite.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn get_invite_by_event_and_user(&self, event_id: Uuid, user_id: Uuid) -> Option<Invite> {
        self.invites
            .values()
            .find(|invite| invite.event_id == event_id && invite.user_id == user_id)
            .cloned()
    }

    pub fn count_accepted_invites(&self, event_id: Uuid) -> usize {
        self.invites
            .values()
            .filter(|invite| invite.event_id == event_id && invite.status == InviteStatus::Accepted)
            .count()
    }

    pub fn update_invite(&mut self, id: Uuid, changes: InviteChanges) -> Option<Invite> {
        let invite = self.invites.get_mut(&id)?;
        if let Some(status) = changes.status {
            invite.status = status;
        }
        if let Some(responded_at) = changes.responded_at {
            invite.responded_at = Some(responded_at);
        }
        invite.updated_at = Utc::now();
        Some(invite.clone())
    }

    pub fn delete_invite(&mut self, id: Uuid) -> bool {
        self.invites.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(event_id: Uuid, user_id: Uuid) -> NewInvite {
        NewInvite {
            event_id,
            user_id,
            status: InviteStatus::Pending,
            invited_at: Utc::now(),
            responded_at: None,
        }
    }

    #[test]
    fn lookups_by_event_user_and_pair() {
        let mut store = Store::new();
        let (event_a, event_b) = (Uuid::new_v4(), Uuid::new_v4());
        let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
        let a_alice = store.create_invite(pending(event_a, alice));
        store.create_invite(pending(event_a, bob));
        store.create_invite(pending(event_b, alice));

        assert_eq!(store.get_invites_by_event_id(event_a).len(), 2);
        assert_eq!(store.get_invites_by_user_id(alice).len(), 2);
        assert_eq!(store.get_invites_by_user_id(bob).len(), 1);
        assert_eq!(
            store.get_invite_by_event_and_user(event_a, alice).map(|i| i.id),
            Some(a_alice.id)
        );
        assert!(store.get_invite_by_event_and_user(event_b, bob).is_none());
    }

    #[test]
    fn counts_only_accepted() {
        let mut store = Store::new();
        let event = Uuid::new_v4();
        let first = store.create_invite(pending(event, Uuid::new_v4()));
        store.create_invite(pending(event, Uuid::new_v4()));
        assert_eq!(store.count_accepted_invites(event), 0);

        store.update_invite(
            first.id,
            InviteChanges {
                status: Some(InviteStatus::Accepted),
                responded_at: Some(Utc::now()),
            },
        );
        assert_eq!(store.count_accepted_invites(event), 1);
        assert_eq!(store.count_accepted_invites(Uuid::new_v4()), 0);
    }

    #[test]
    fn update_keeps_responded_at_when_not_given() {
        let mut store = Store::new();
        let invite = store.create_invite(pending(Uuid::new_v4(), Uuid::new_v4()));
        let stamp = Utc::now();
        store.update_invite(
            invite.id,
            InviteChanges {
                status: Some(InviteStatus::Declined),
                responded_at: Some(stamp),
            },
        );
        let updated = store
            .update_invite(
                invite.id,
                InviteChanges {
                    status: Some(InviteStatus::Cancelled),
                    responded_at: None,
                },
            )
            .unwrap();
        assert_eq!(updated.status, InviteStatus::Cancelled);
        assert_eq!(updated.responded_at, Some(stamp));
    }

    #[test]
    fn delete_invite() {
        let mut store = Store::new();
        let invite = store.create_invite(pending(Uuid::new_v4(), Uuid::new_v4()));
        assert!(store.delete_invite(invite.id));
        assert!(!store.delete_invite(invite.id));
        assert!(store.update_invite(invite.id, InviteChanges::default()).is_none());
    }
}

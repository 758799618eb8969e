use chrono::Utc;
use uuid::Uuid;

use crate::models::{NewUser, User, UserChanges};

use super::Store;

impl Store {
    pub fn create_user(&mut self, data: NewUser) -> User {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: data.email,
            name: data.name,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(user.id, user.clone());
        user
    }

    pub fn get_user_by_id(&self, id: Uuid) -> Option<User> {
        self.users.get(&id).cloned()
    }

    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.users.values().find(|user| user.email == email).cloned()
    }

    pub fn get_all_users(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    pub fn update_user(&mut self, id: Uuid, changes: UserChanges) -> Option<User> {
        let user = self.users.get_mut(&id)?;
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(name) = changes.name {
            user.name = name;
        }
        user.updated_at = Utc::now();
        Some(user.clone())
    }

    pub fn delete_user(&mut self, id: Uuid) -> bool {
        self.users.remove(&id).is_some()
    }
}

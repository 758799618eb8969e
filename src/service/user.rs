use log::{info, warn};
use uuid::Uuid;

use crate::{
    db::Store,
    dto::{NewUserDto, UpdateUserDto},
    errors::ApiError,
    models::{NewUser, User, UserChanges},
};

use super::non_empty;

pub fn create(dto: NewUserDto, store: &mut Store) -> Result<User, ApiError> {
    let NewUserDto { email, name } = dto;
    let (email, name) = match (non_empty(email), non_empty(name)) {
        (Some(email), Some(name)) => (email, name),
        _ => return Err(ApiError::bad_request("Email and name are required")),
    };
    if store.get_user_by_email(&email).is_some() {
        return Err(ApiError::conflict("User with this email already exists"));
    }
    let user = store.create_user(NewUser { email, name });
    info!("user {} created", user.id);
    Ok(user)
}

pub fn get_all(store: &Store) -> Vec<User> {
    store.get_all_users()
}

pub fn get_by_id(id: Uuid, store: &Store) -> Result<User, ApiError> {
    store
        .get_user_by_id(id)
        .ok_or_else(|| ApiError::not_found("User not found"))
}

pub fn update(id: Uuid, dto: UpdateUserDto, store: &mut Store) -> Result<User, ApiError> {
    let UpdateUserDto { email, name } = dto;
    if email.is_none() && name.is_none() {
        return Err(ApiError::bad_request(
            "At least one field (email or name) is required for update",
        ));
    }
    if email.is_some() && non_empty(email.clone()).is_none() {
        return Err(ApiError::bad_request("Email cannot be empty"));
    }
    if name.is_some() && non_empty(name.clone()).is_none() {
        return Err(ApiError::bad_request("Name cannot be empty"));
    }

    let existing = get_by_id(id, store)?;
    if let Some(email) = &email {
        if *email != existing.email && store.get_user_by_email(email).is_some() {
            return Err(ApiError::conflict("User with this email already exists"));
        }
    }

    store
        .update_user(id, UserChanges { email, name })
        .ok_or(ApiError::InternalError)
}

/// Hosted events and invites are left in place.
pub fn delete(id: Uuid, store: &mut Store) -> Result<(), ApiError> {
    get_by_id(id, store)?;
    let hosted = store.get_events_by_host_id(id).len();
    let invited = store.get_invites_by_user_id(id).len();
    if hosted > 0 || invited > 0 {
        warn!(
            "deleting user {} leaves {} hosted events and {} invites without a user",
            id, hosted, invited
        );
    }
    if store.delete_user(id) {
        Ok(())
    } else {
        Err(ApiError::InternalError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(email: &str, name: &str) -> NewUserDto {
        NewUserDto {
            email: Some(email.to_string()),
            name: Some(name.to_string()),
        }
    }

    #[test]
    fn create_requires_email_and_name() {
        let mut store = Store::new();
        let err = create(
            NewUserDto {
                email: Some("a@example.com".to_string()),
                name: None,
            },
            &mut store,
        )
        .unwrap_err();
        assert_eq!(err, ApiError::bad_request("Email and name are required"));
        assert!(create(dto("", "Ann"), &mut store).is_err());
        assert!(store.get_all_users().is_empty());
    }

    #[test]
    fn duplicate_email_conflicts() {
        let mut store = Store::new();
        let first = create(dto("a@example.com", "Ann"), &mut store).unwrap();
        let err = create(dto("a@example.com", "Other Ann"), &mut store).unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
        assert_eq!(get_all(&store), vec![first]);
    }

    #[test]
    fn update_checks_email_against_other_users() {
        let mut store = Store::new();
        let ann = create(dto("ann@example.com", "Ann"), &mut store).unwrap();
        create(dto("bob@example.com", "Bob"), &mut store).unwrap();

        let err = update(
            ann.id,
            UpdateUserDto {
                email: Some("bob@example.com".to_string()),
                name: None,
            },
            &mut store,
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));

        // Re-submitting your own email is not a conflict.
        let same = update(
            ann.id,
            UpdateUserDto {
                email: Some("ann@example.com".to_string()),
                name: Some("Annie".to_string()),
            },
            &mut store,
        )
        .unwrap();
        assert_eq!(same.name, "Annie");
        assert_eq!(same.email, "ann@example.com");
        assert_eq!(same.id, ann.id);
    }

    #[test]
    fn update_rejects_empty_payload_and_unknown_user() {
        let mut store = Store::new();
        let ann = create(dto("ann@example.com", "Ann"), &mut store).unwrap();
        assert!(matches!(
            update(ann.id, UpdateUserDto::default(), &mut store),
            Err(ApiError::BadClientData(_))
        ));
        assert!(matches!(
            update(
                ann.id,
                UpdateUserDto {
                    email: None,
                    name: Some(" ".to_string())
                },
                &mut store
            ),
            Err(ApiError::BadClientData(_))
        ));
        assert!(matches!(
            update(
                Uuid::new_v4(),
                UpdateUserDto {
                    email: None,
                    name: Some("Ghost".to_string())
                },
                &mut store
            ),
            Err(ApiError::NotFound(_))
        ));
        assert_eq!(get_by_id(ann.id, &store).unwrap().name, "Ann");
    }

    #[test]
    fn delete_unknown_user_is_not_found() {
        let mut store = Store::new();
        let ann = create(dto("ann@example.com", "Ann"), &mut store).unwrap();
        assert_eq!(delete(ann.id, &mut store), Ok(()));
        assert!(matches!(delete(ann.id, &mut store), Err(ApiError::NotFound(_))));
    }
}

//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{NewUser, User};

/// User API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub account_number: String,
    pub card_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            account_number: u.account_number,
            card_number: u.card_number,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Request body for create and update.
///
/// An `id` field in the body is ignored; the identity comes from the
/// store on create and from the path on update.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 64))]
    pub account_number: String,
    #[validate(length(min = 1, max = 64))]
    pub card_number: String,
}

impl From<UserPayload> for NewUser {
    fn from(p: UserPayload) -> Self {
        Self {
            name: p.name,
            email: p.email,
            account_number: p.account_number,
            card_number: p.card_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_mirrors_domain_user() {
        let now = Utc::now();
        let user = User {
            id: 7,
            name: "Alice".into(),
            email: "alice@example.com".into(),
            account_number: "AC1".into(),
            card_number: "CD1".into(),
            created_at: now,
            updated_at: now,
        };

        let dto = UserDto::from(user);
        assert_eq!(dto.id, 7);
        assert_eq!(dto.account_number, "AC1");
        assert_eq!(dto.card_number, "CD1");
    }

    #[test]
    fn payload_ignores_id_field() {
        // Clients may echo back a full user object; the id must not matter.
        let payload: UserPayload = serde_json::from_str(
            r#"{"id": 99, "name": "Alice", "email": "alice@example.com",
                "account_number": "AC1", "card_number": "CD1"}"#,
        )
        .unwrap();

        assert_eq!(payload.name, "Alice");
        let new: NewUser = payload.into();
        assert_eq!(new.account_number, "AC1");
    }

    #[test]
    fn payload_requires_nonempty_numbers() {
        let payload = UserPayload {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            account_number: String::new(),
            card_number: "CD1".into(),
        };
        assert!(payload.validate().is_err());
    }
}

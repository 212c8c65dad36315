//! User domain entity

use chrono::{DateTime, Utc};

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store-assigned identity, immutable once assigned
    pub id: i64,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Account number, unique across all users
    pub account_number: String,
    /// Card number, unique across all users
    pub card_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The replaceable field set of a user.
///
/// Used both for create (identity not yet assigned) and update
/// (full replacement of the mutable fields, identity preserved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub account_number: String,
    pub card_number: String,
}

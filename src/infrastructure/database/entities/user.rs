//! User entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User model - one row per registered user
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Store-assigned identity
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Account number, unique across all users
    #[sea_orm(unique)]
    pub account_number: String,

    /// Card number, unique across all users
    #[sea_orm(unique)]
    pub card_number: String,

    /// When the user was created
    pub created_at: DateTime<Utc>,

    /// When the user was last updated
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

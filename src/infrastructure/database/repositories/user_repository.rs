//! SeaORM implementation of the user repository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use crate::domain::{DomainError, DomainResult, NewUser, User, UserRepository};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        account_number: model.account_number,
        card_number: model.card_number,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

/// Translate a unique-index violation into a domain conflict.
///
/// The indexes on account_number and card_number are what makes the
/// check-then-insert sequence safe under concurrent requests: a racing
/// insert that lost still surfaces as `Conflict`, never as a duplicate row.
fn write_err(e: sea_orm::DbErr) -> DomainError {
    let msg = e.to_string();
    if msg.contains("UNIQUE") || msg.contains("duplicate") {
        DomainError::Conflict("account or card number already in use".to_string())
    } else {
        db_err(e)
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find().all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }

    async fn create(&self, new: NewUser) -> DomainResult<User> {
        let now = Utc::now();
        let active = user::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            email: Set(new.email),
            account_number: Set(new.account_number),
            card_number: Set(new.card_number),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&self.db).await.map_err(write_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn update(&self, id: i64, new: NewUser) -> DomainResult<Option<User>> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: user::ActiveModel = existing.into();
        active.name = Set(new.name);
        active.email = Set(new.email);
        active.account_number = Set(new.account_number);
        active.card_number = Set(new.card_number);
        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(write_err)?;
        Ok(Some(model_to_domain(updated)))
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<bool> {
        let result = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn exists_by_account_number(&self, account_number: &str) -> DomainResult<bool> {
        let count = user::Entity::find()
            .filter(user::Column::AccountNumber.eq(account_number))
            .count(&self.db)
            .await
            .map_err(db_err)?;

        Ok(count > 0)
    }

    async fn exists_by_card_number(&self, card_number: &str) -> DomainResult<bool> {
        let count = user::Entity::find()
            .filter(user::Column::CardNumber.eq(card_number))
            .count(&self.db)
            .await
            .map_err(db_err)?;

        Ok(count > 0)
    }
}

// ── Tests ──────────────────────────────────────────────────────

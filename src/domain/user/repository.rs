//! User repository interface

use async_trait::async_trait;

use crate::domain::{DomainResult, NewUser, User};

/// Persistence contract for user records.
///
/// The two existence checks back the uniqueness invariant on account and
/// card numbers. They report a consistent view of committed writes; the
/// store's own unique indexes remain the authority under concurrency.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<User>>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>>;

    /// Insert a new record; the store assigns the identity.
    async fn create(&self, new: NewUser) -> DomainResult<User>;

    /// Replace the mutable fields of an existing record.
    /// Returns `None` when no record with `id` exists.
    async fn update(&self, id: i64, new: NewUser) -> DomainResult<Option<User>>;

    /// Remove a record permanently. Returns `false` when nothing was deleted.
    async fn delete_by_id(&self, id: i64) -> DomainResult<bool>;

    async fn exists_by_account_number(&self, account_number: &str) -> DomainResult<bool>;

    async fn exists_by_card_number(&self, card_number: &str) -> DomainResult<bool>;
}

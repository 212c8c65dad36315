//! User management service — application-layer orchestration
//!
//! All user-related business logic lives here: the uniqueness invariant on
//! account and card numbers, and the NotFound semantics of the CRUD
//! operations. HTTP handlers are thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, DomainResult, NewUser, User, UserRepository};

/// User service — orchestrates all user-management use-cases.
///
/// Generic over `R: UserRepository` so it stays decoupled from the
/// concrete persistence layer.
pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// List all users. Ordering is not part of the contract.
    pub async fn find_all(&self) -> DomainResult<Vec<User>> {
        self.repo.find_all().await
    }

    /// Get a single user by id.
    pub async fn find_by_id(&self, id: i64) -> DomainResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Create a new user.
    ///
    /// Account and card numbers must not collide with any existing user.
    /// The pre-checks give precise error messages; the store's unique
    /// indexes close the remaining check-then-insert window, and the
    /// repository reports that case as `Conflict` as well.
    pub async fn create(&self, new: NewUser) -> DomainResult<User> {
        if self.repo.exists_by_account_number(&new.account_number).await? {
            return Err(DomainError::Conflict(format!(
                "account number '{}' is already in use",
                new.account_number
            )));
        }
        if self.repo.exists_by_card_number(&new.card_number).await? {
            return Err(DomainError::Conflict(format!(
                "card number '{}' is already in use",
                new.card_number
            )));
        }

        let user = self.repo.create(new).await?;
        info!(user_id = user.id, "user created");
        Ok(user)
    }

    /// Replace the mutable fields of an existing user.
    ///
    /// Uniqueness is re-checked against *other* users only: when the
    /// incoming number equals the record's current one the check is
    /// skipped, which is equivalent to excluding the record itself.
    pub async fn update(&self, id: i64, new: NewUser) -> DomainResult<User> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        if new.account_number != current.account_number
            && self.repo.exists_by_account_number(&new.account_number).await?
        {
            return Err(DomainError::Conflict(format!(
                "account number '{}' is already in use",
                new.account_number
            )));
        }
        if new.card_number != current.card_number
            && self.repo.exists_by_card_number(&new.card_number).await?
        {
            return Err(DomainError::Conflict(format!(
                "card number '{}' is already in use",
                new.card_number
            )));
        }

        let updated = self
            .repo
            .update(id, new)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        info!(user_id = id, "user updated");
        Ok(updated)
    }

    /// Delete a user permanently. Deleting an absent id is NotFound,
    /// including a repeated delete of the same id.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        if !self.repo.delete_by_id(id).await? {
            return Err(DomainError::user_not_found(id));
        }
        info!(user_id = id, "user deleted");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;

    /// In-memory stand-in for the SeaORM repository.
    #[derive(Default)]
    struct InMemoryUserRepository {
        inner: Mutex<MemState>,
    }

    #[derive(Default)]
    struct MemState {
        users: Vec<User>,
        next_id: i64,
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn find_all(&self) -> DomainResult<Vec<User>> {
            Ok(self.inner.lock().unwrap().users.clone())
        }

        async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
            Ok(self
                .inner
                .lock()
                .unwrap()
                .users
                .iter()
                .find(|u| u.id == id)
                .cloned())
        }

        async fn create(&self, new: NewUser) -> DomainResult<User> {
            let mut state = self.inner.lock().unwrap();
            state.next_id += 1;
            let now = Utc::now();
            let user = User {
                id: state.next_id,
                name: new.name,
                email: new.email,
                account_number: new.account_number,
                card_number: new.card_number,
                created_at: now,
                updated_at: now,
            };
            state.users.push(user.clone());
            Ok(user)
        }

        async fn update(&self, id: i64, new: NewUser) -> DomainResult<Option<User>> {
            let mut state = self.inner.lock().unwrap();
            let Some(user) = state.users.iter_mut().find(|u| u.id == id) else {
                return Ok(None);
            };
            user.name = new.name;
            user.email = new.email;
            user.account_number = new.account_number;
            user.card_number = new.card_number;
            user.updated_at = Utc::now();
            Ok(Some(user.clone()))
        }

        async fn delete_by_id(&self, id: i64) -> DomainResult<bool> {
            let mut state = self.inner.lock().unwrap();
            let before = state.users.len();
            state.users.retain(|u| u.id != id);
            Ok(state.users.len() != before)
        }

        async fn exists_by_account_number(&self, account_number: &str) -> DomainResult<bool> {
            Ok(self
                .inner
                .lock()
                .unwrap()
                .users
                .iter()
                .any(|u| u.account_number == account_number))
        }

        async fn exists_by_card_number(&self, card_number: &str) -> DomainResult<bool> {
            Ok(self
                .inner
                .lock()
                .unwrap()
                .users
                .iter()
                .any(|u| u.card_number == card_number))
        }
    }

    fn service() -> UserService<InMemoryUserRepository> {
        UserService::new(Arc::new(InMemoryUserRepository::default()))
    }

    fn new_user(name: &str, account: &str, card: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            account_number: account.to_string(),
            card_number: card.to_string(),
        }
    }

    #[tokio::test]
    async fn created_user_round_trips_through_find_by_id() {
        let svc = service();
        let created = svc.create(new_user("Alice", "AC1", "CD1")).await.unwrap();
        assert!(created.id > 0);

        let fetched = svc.find_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn duplicate_account_number_is_rejected() {
        let svc = service();
        svc.create(new_user("Alice", "AC1", "CD1")).await.unwrap();

        // Other fields differ, only the account number collides.
        let err = svc.create(new_user("Bob", "AC1", "CD2")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn duplicate_card_number_is_rejected() {
        let svc = service();
        svc.create(new_user("Alice", "AC1", "CD1")).await.unwrap();

        let err = svc.create(new_user("Bob", "AC2", "CD1")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn find_by_id_on_unknown_id_is_not_found() {
        let svc = service();
        let err = svc.find_by_id(42).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn update_on_unknown_id_is_not_found_and_changes_nothing() {
        let svc = service();
        let err = svc
            .update(42, new_user("Ghost", "AC9", "CD9"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }), "got {err:?}");
        assert!(svc.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_is_effective_and_final() {
        let svc = service();
        let created = svc.create(new_user("Alice", "AC1", "CD1")).await.unwrap();

        svc.delete(created.id).await.unwrap();

        let err = svc.find_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn repeated_delete_is_not_found_both_times() {
        let svc = service();
        let created = svc.create(new_user("Alice", "AC1", "CD1")).await.unwrap();
        svc.delete(created.id).await.unwrap();

        for _ in 0..2 {
            let err = svc.delete(created.id).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound { .. }), "got {err:?}");
        }
    }

    #[tokio::test]
    async fn update_keeps_own_numbers_but_blocks_collisions_with_others() {
        let svc = service();

        let a = svc.create(new_user("Alice", "AC1", "CD1")).await.unwrap();
        assert_eq!(a.id, 1);

        // B collides with A's account number.
        let err = svc.create(new_user("Bob", "AC1", "CD2")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)), "got {err:?}");

        // A may keep its own card number while changing the account number.
        let updated = svc.update(a.id, new_user("Alice", "AC2", "CD1")).await.unwrap();
        assert_eq!(updated.account_number, "AC2");
        assert_eq!(updated.card_number, "CD1");

        // C collides with A's *new* account number.
        let err = svc.create(new_user("Carol", "AC2", "CD3")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn update_cannot_steal_another_users_card_number() {
        let svc = service();
        let a = svc.create(new_user("Alice", "AC1", "CD1")).await.unwrap();
        svc.create(new_user("Bob", "AC2", "CD2")).await.unwrap();

        let err = svc
            .update(a.id, new_user("Alice", "AC1", "CD2"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)), "got {err:?}");
    }
}

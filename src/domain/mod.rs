//! Domain layer — core entities, errors and repository contracts.

pub mod error;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use user::{NewUser, User, UserRepository};

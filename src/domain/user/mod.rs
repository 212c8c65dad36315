//! User aggregate
//!
//! Contains the User entity, the input shape for writes, and the
//! repository interface.

pub mod model;
pub mod repository;

pub use model::{NewUser, User};
pub use repository::UserRepository;

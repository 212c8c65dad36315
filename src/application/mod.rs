//! Application layer — use-case orchestration on top of the domain.

pub mod users;

pub use users::UserService;

//! # User Management Service
//!
//! REST API for managing user records backed by a relational store.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, errors and repository traits
//! - **application**: Business logic and use cases (uniqueness enforcement)
//! - **infrastructure**: External concerns (SeaORM entities, migrations, repositories)
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_router;

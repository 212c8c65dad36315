//! Infrastructure layer — persistence via SeaORM.

pub mod database;

pub use database::{init_database, DatabaseConfig};

//! Shared HTTP building blocks.

pub mod error;
pub mod validated_json;

pub use error::{ApiError, ErrorBody};
pub use validated_json::ValidatedJson;

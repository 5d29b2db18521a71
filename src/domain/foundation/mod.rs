//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the assessment domain.

mod dimension;
mod errors;
mod ids;
mod percentage;
mod rating;
mod timestamp;

pub use dimension::Dimension;
pub use errors::{ErrorCode, ValidationError};
pub use ids::SessionId;
pub use percentage::Percentage;
pub use rating::Rating;
pub use timestamp::Timestamp;

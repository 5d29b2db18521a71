//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (dimensions, ratings, percentages, errors)
//! - `questionnaire` - Static question catalog and answer sheets
//! - `scoring` - Score aggregation, percentage feedback and results reports
//! - `insights` - Synthetic data, train/test split and category prediction
//! - `session` - Per-session context handed to section handlers

pub mod foundation;
pub mod insights;
pub mod questionnaire;
pub mod scoring;
pub mod session;

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `classifier` - Category classifiers (random forest, nearest centroid)
//! - `http` - Axum routes and DTOs
//! - `storage` - Session state storage (in-memory)

pub mod classifier;
pub mod http;
pub mod storage;

pub use classifier::{build_classifier, NearestCentroidClassifier, RandomForestClassifier};
pub use self::http::{assessment_router, AssessmentAppState};
pub use storage::InMemorySessionStore;

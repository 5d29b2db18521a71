//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - session-scoped storage of the latest assessment
//! - `CategoryClassifier` / `TrainedModel` - pluggable multi-class learner

mod category_classifier;
mod session_store;

pub use category_classifier::{CategoryClassifier, TrainedModel};
pub use session_store::{SessionStore, SessionStoreError};

//! Core domain logic for Coursetrack.
//! This crate is the single source of truth for assignment-tracking
//! invariants; the GUI only calls in and renders the results.

pub mod logging;
pub mod model;
pub mod persist;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::assignment::{Assignment, AssignmentId, AssignmentValidationError};
pub use model::due_date::{DueDate, DueDateError};
pub use persist::{
    load, save, LoadOutcome, ParseWarning, PersistError, PersistResult, STORE_FILE_NAME,
};
pub use service::tracker::{Tracker, TrackerError};
pub use store::assignment_store::{AssignmentStore, SortKey, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

//! JSON-document persistence for the assignment store.
//!
//! # Responsibility
//! - Define the persistence error and load-outcome types.
//! - Keep wire-format details inside the persistence boundary.
//!
//! # Invariants
//! - A malformed document is recoverable: load degrades to an empty store
//!   with a [`ParseWarning`] and leaves the file on disk untouched.
//! - A missing file is not an error and produces no warning.

use crate::store::assignment_store::AssignmentStore;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod json_file;

pub use json_file::{load, save};

/// Well-known file name the tracker persists to.
pub const STORE_FILE_NAME: &str = "assignments.json";

/// Result type for persistence APIs.
pub type PersistResult<T> = Result<T, PersistError>;

/// Hard persistence failure surfaced to the caller.
#[derive(Debug)]
pub enum PersistError {
    /// Reading or writing the backing file failed.
    Io(std::io::Error),
    /// Encoding the store into the document failed.
    Serialize(serde_json::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "store file I/O failed: {err}"),
            Self::Serialize(err) => write!(f, "store document encoding failed: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Recoverable signal that a present store file could not be decoded.
///
/// Distinct from the absent-file case so callers can tell "first run" apart
/// from "your data file is damaged". The damaged file is never rewritten or
/// discarded by load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// Path of the unreadable document.
    pub path: PathBuf,
    /// Human-readable decode failure.
    pub reason: String,
}

impl Display for ParseWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "store file `{}` could not be read ({}); starting from an empty store",
            self.path.display(),
            self.reason
        )
    }
}

/// Result of loading the persisted store.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Decoded store, or an empty one when the file was absent or damaged.
    pub store: AssignmentStore,
    /// Present only when a damaged document was replaced by an empty store.
    pub warning: Option<ParseWarning>,
}

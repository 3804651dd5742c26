//! Tracker use-case facade.
//!
//! # Responsibility
//! - Bundle the in-memory store with its backing file path.
//! - Expose the exact surface the presentation layer calls: add,
//!   complete, set_marks, sort_active, filter, save, plus read access.
//!
//! # Invariants
//! - Every mutating call emits one key=value log event.
//! - Errors are returned to the caller for display; nothing panics and
//!   nothing is retried.

use crate::model::assignment::{Assignment, AssignmentId};
use crate::persist::{self, ParseWarning, PersistError};
use crate::store::assignment_store::{AssignmentStore, SortKey, StoreError};
use log::{info, warn};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Error surfaced by tracker operations.
#[derive(Debug)]
pub enum TrackerError {
    /// In-memory operation failed (validation, unknown ID).
    Store(StoreError),
    /// Persistence failed (I/O or encoding).
    Persist(PersistError),
}

impl Display for TrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Persist(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TrackerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Persist(err) => Some(err),
        }
    }
}

impl From<StoreError> for TrackerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<PersistError> for TrackerError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

/// One open tracker: the store plus the file it loads from and saves to.
pub struct Tracker {
    store: AssignmentStore,
    file_path: PathBuf,
    load_warning: Option<ParseWarning>,
}

impl Tracker {
    /// Opens a tracker backed by the file at `path`, loading it if present.
    ///
    /// A damaged file degrades to an empty store; the warning is kept and
    /// exposed through [`Tracker::load_warning`] so the UI can tell the
    /// user, distinctly from the silent first-run case.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, TrackerError> {
        let file_path = path.into();
        let outcome = persist::load(&file_path)?;

        Ok(Self {
            store: outcome.store,
            file_path,
            load_warning: outcome.warning,
        })
    }

    /// Creates an empty tracker that will save to `path`.
    ///
    /// Test and first-run convenience; nothing is read from disk.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            store: AssignmentStore::new(),
            file_path: path.into(),
            load_warning: None,
        }
    }

    /// Adds a new active assignment and returns its stable ID.
    pub fn add(
        &mut self,
        course: &str,
        title: &str,
        due_date: &str,
    ) -> Result<AssignmentId, TrackerError> {
        match self.store.add(course, title, due_date) {
            Ok(id) => {
                info!(
                    "event=assignment_add module=service status=ok id={id} active={}",
                    self.store.active().len()
                );
                Ok(id)
            }
            Err(err) => {
                warn!("event=assignment_add module=service status=error error={err}");
                Err(err.into())
            }
        }
    }

    /// Moves an active assignment into the completed list.
    pub fn complete(&mut self, id: AssignmentId) -> Result<(), TrackerError> {
        match self.store.complete(id) {
            Ok(()) => {
                info!(
                    "event=assignment_complete module=service status=ok id={id} completed={}",
                    self.store.completed().len()
                );
                Ok(())
            }
            Err(err) => {
                warn!("event=assignment_complete module=service status=error id={id} error={err}");
                Err(err.into())
            }
        }
    }

    /// Overwrites the marks of a completed assignment.
    pub fn set_marks(&mut self, id: AssignmentId, marks: &str) -> Result<(), TrackerError> {
        match self.store.set_marks(id, marks) {
            Ok(()) => {
                info!("event=marks_update module=service status=ok id={id}");
                Ok(())
            }
            Err(err) => {
                warn!("event=marks_update module=service status=error id={id} error={err}");
                Err(err.into())
            }
        }
    }

    /// Stable-sorts the active list by the given column.
    pub fn sort_active(&mut self, key: SortKey) {
        self.store.sort_active(key);
        info!("event=active_sort module=service status=ok key={key:?}");
    }

    /// Case-insensitive search over active course names and titles.
    pub fn filter(&self, term: &str) -> Vec<Assignment> {
        self.store.filter(term)
    }

    /// Remembers a course name for the selection dropdown.
    pub fn remember_course(&mut self, name: &str) {
        self.store.remember_course(name);
    }

    /// Saves the store to the backing file, fully overwriting it.
    pub fn save(&self) -> Result<(), TrackerError> {
        persist::save(&self.store, &self.file_path)?;
        Ok(())
    }

    /// Active assignments in display order.
    pub fn active(&self) -> &[Assignment] {
        self.store.active()
    }

    /// Completed assignments in completion order.
    pub fn completed(&self) -> &[Assignment] {
        self.store.completed()
    }

    /// Known course names for the selection dropdown.
    pub fn courses(&self) -> &BTreeSet<String> {
        self.store.courses()
    }

    /// Warning from the opening load, when the file was present but
    /// unreadable. `None` after a clean load or a first run.
    pub fn load_warning(&self) -> Option<&ParseWarning> {
        self.load_warning.as_ref()
    }

    /// Path of the backing store file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

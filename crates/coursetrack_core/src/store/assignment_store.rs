//! In-memory assignment store and its operations.
//!
//! # Responsibility
//! - Own the active and completed record sequences plus the course set.
//! - Provide the add/complete/grade/sort/filter operations the
//!   presentation layer calls.
//!
//! # Invariants
//! - A record lives in exactly one sequence; the only transition is
//!   active -> completed and it is one-directional.
//! - Records are never deleted.
//! - Insertion order is preserved unless an explicit sort is requested.
//! - The course set always contains every course named by a record.

use crate::model::assignment::{Assignment, AssignmentId, AssignmentValidationError};
use crate::model::due_date::{DueDate, DueDateError};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by store mutations.
#[derive(Debug)]
pub enum StoreError {
    /// A required text field was empty.
    Validation(AssignmentValidationError),
    /// The due-date text was malformed or impossible.
    DueDate(DueDateError),
    /// The ID does not resolve into the sequence the operation expects.
    NotFound(AssignmentId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DueDate(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "assignment not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DueDate(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<AssignmentValidationError> for StoreError {
    fn from(value: AssignmentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DueDateError> for StoreError {
    fn from(value: DueDateError) -> Self {
        Self::DueDate(value)
    }
}

/// Column the active list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Lexicographic on the raw course name.
    Course,
    /// Lexicographic on the raw assignment title.
    Title,
    /// Calendar order, never text order.
    DueDate,
}

/// The single in-memory store behind one tracker window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentStore {
    active: Vec<Assignment>,
    completed: Vec<Assignment>,
    courses: BTreeSet<String>,
}

impl AssignmentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from already-decoded sequences.
    ///
    /// Used by persistence after load. The course set becomes the union of
    /// record courses and the explicitly remembered names, so a stale or
    /// missing persisted course list cannot hide courses that records use.
    pub fn from_parts(
        active: Vec<Assignment>,
        completed: Vec<Assignment>,
        remembered_courses: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut courses: BTreeSet<String> = remembered_courses.into_iter().collect();
        courses.extend(active.iter().map(|record| record.course.clone()));
        courses.extend(completed.iter().map(|record| record.course.clone()));

        Self {
            active,
            completed,
            courses,
        }
    }

    /// Adds a new active record and returns its stable ID.
    ///
    /// # Errors
    /// - `StoreError::Validation` for empty course/title.
    /// - `StoreError::DueDate` when `due_date` is not canonical
    ///   `DD-MM-YYYY` text for a real calendar date.
    ///
    /// # Side effects
    /// The course is remembered in the course set when new.
    pub fn add(
        &mut self,
        course: &str,
        title: &str,
        due_date: &str,
    ) -> StoreResult<AssignmentId> {
        let due: DueDate = due_date.parse()?;
        let record = Assignment::new(course, title, due)?;
        let id = record.id;

        self.courses.insert(record.course.clone());
        self.active.push(record);
        Ok(id)
    }

    /// Moves an active record into the completed sequence.
    ///
    /// The record keeps its course, title and due date; `marks` starts as
    /// an empty string. Appending preserves completion order.
    pub fn complete(&mut self, id: AssignmentId) -> StoreResult<()> {
        let position = self
            .active
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut record = self.active.remove(position);
        record.complete();
        self.completed.push(record);
        Ok(())
    }

    /// Overwrites the marks of a completed record in place.
    ///
    /// Repeating the call with the same value is a no-op; position within
    /// the completed sequence never changes.
    pub fn set_marks(&mut self, id: AssignmentId, marks: &str) -> StoreResult<()> {
        let record = self
            .completed
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;

        record.marks = Some(marks.to_string());
        Ok(())
    }

    /// Stable-sorts the active sequence ascending by the given key.
    ///
    /// Ties keep their pre-sort relative order. The completed sequence is
    /// never sorted; it stays in completion order.
    pub fn sort_active(&mut self, key: SortKey) {
        match key {
            SortKey::Course => self.active.sort_by(|a, b| a.course.cmp(&b.course)),
            SortKey::Title => self.active.sort_by(|a, b| a.title.cmp(&b.title)),
            SortKey::DueDate => self.active.sort_by(|a, b| a.due_date.cmp(&b.due_date)),
        }
    }

    /// Returns active records whose course or title contains `term`,
    /// case-insensitively, preserving the current active order.
    ///
    /// A blank term matches everything. Completed records are never
    /// searched; only the active screen exposes search.
    pub fn filter(&self, term: &str) -> Vec<Assignment> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.active.clone();
        }

        self.active
            .iter()
            .filter(|record| {
                record.course.to_lowercase().contains(&needle)
                    || record.title.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Remembers a course name without creating a record.
    ///
    /// Backs the course dropdown; whitespace-only names are ignored.
    pub fn remember_course(&mut self, name: &str) {
        if !name.trim().is_empty() {
            self.courses.insert(name.to_string());
        }
    }

    /// Looks a record up by ID in either sequence.
    pub fn find(&self, id: AssignmentId) -> Option<&Assignment> {
        self.active
            .iter()
            .chain(self.completed.iter())
            .find(|record| record.id == id)
    }

    /// Active records in display order.
    pub fn active(&self) -> &[Assignment] {
        &self.active
    }

    /// Completed records in completion order.
    pub fn completed(&self) -> &[Assignment] {
        &self.completed
    }

    /// Known course names, deterministically ordered.
    pub fn courses(&self) -> &BTreeSet<String> {
        &self.courses
    }
}

#[cfg(test)]
mod tests {
    use super::{AssignmentStore, StoreError};
    use uuid::Uuid;

    #[test]
    fn add_remembers_the_course() {
        let mut store = AssignmentStore::new();
        store
            .add("Mathematics", "Problem set 3", "05-01-2024")
            .expect("valid add");

        assert!(store.courses().contains("Mathematics"));
    }

    #[test]
    fn remember_course_ignores_blank_names() {
        let mut store = AssignmentStore::new();
        store.remember_course("   ");
        store.remember_course("History");

        assert_eq!(store.courses().len(), 1);
        assert!(store.courses().contains("History"));
    }

    #[test]
    fn find_resolves_ids_in_both_sequences() {
        let mut store = AssignmentStore::new();
        let active_id = store.add("Art", "Sketchbook", "20-01-2024").unwrap();
        let completed_id = store.add("Art", "Portfolio", "01-12-2023").unwrap();
        store.complete(completed_id).unwrap();

        assert_eq!(store.find(active_id).unwrap().title, "Sketchbook");
        assert_eq!(store.find(completed_id).unwrap().title, "Portfolio");
        assert!(store.find(Uuid::new_v4()).is_none());
    }

    #[test]
    fn set_marks_requires_a_completed_record() {
        let mut store = AssignmentStore::new();
        let id = store.add("Art", "Sketchbook", "20-01-2024").unwrap();

        let err = store.set_marks(id, "A").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(missing) if missing == id));
    }
}

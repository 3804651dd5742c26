//! Assignment domain model.
//!
//! # Responsibility
//! - Define the canonical assignment record shared by all store operations.
//! - Provide lifecycle helpers for the one-way active -> completed move.
//!
//! # Invariants
//! - `id` is stable for the record's in-memory lifetime and never reused.
//! - `marks` is `None` while active and `Some` (possibly empty) once
//!   completed; an empty string means "not yet graded".

use crate::model::due_date::DueDate;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one assignment record.
///
/// Minted at creation time so mutating operations can address records by
/// identity instead of by display position. Not persisted; re-minted on
/// every load.
pub type AssignmentId = Uuid;

/// Validation error for required text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentValidationError {
    /// `course` is empty or whitespace-only.
    EmptyCourse,
    /// `title` is empty or whitespace-only.
    EmptyTitle,
}

impl Display for AssignmentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCourse => write!(f, "course name must not be empty"),
            Self::EmptyTitle => write!(f, "assignment title must not be empty"),
        }
    }
}

impl Error for AssignmentValidationError {}

/// One homework assignment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Stable in-memory identity.
    pub id: AssignmentId,
    /// Course this assignment belongs to. Not unique across records.
    pub course: String,
    /// Assignment name.
    pub title: String,
    /// Canonical due date.
    pub due_date: DueDate,
    /// Grading state. `None` while active; set on completion.
    pub marks: Option<String>,
}

impl Assignment {
    /// Creates a new active record with a freshly minted ID.
    ///
    /// # Errors
    /// Rejects empty or whitespace-only `course`/`title`. The raw text is
    /// kept as entered; only the emptiness check trims.
    pub fn new(
        course: impl Into<String>,
        title: impl Into<String>,
        due_date: DueDate,
    ) -> Result<Self, AssignmentValidationError> {
        let course = course.into();
        let title = title.into();
        if course.trim().is_empty() {
            return Err(AssignmentValidationError::EmptyCourse);
        }
        if title.trim().is_empty() {
            return Err(AssignmentValidationError::EmptyTitle);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            course,
            title,
            due_date,
            marks: None,
        })
    }

    /// Transitions this record into the completed state.
    ///
    /// Course, title and due date are untouched; `marks` becomes an empty
    /// string awaiting a grade.
    pub fn complete(&mut self) {
        self.marks = Some(String::new());
    }

    /// Whether the record has been completed.
    pub fn is_completed(&self) -> bool {
        self.marks.is_some()
    }

    /// Whether a non-empty grade has been recorded.
    pub fn is_graded(&self) -> bool {
        self.marks.as_deref().is_some_and(|marks| !marks.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{Assignment, AssignmentValidationError};
    use crate::model::due_date::DueDate;

    fn due(text: &str) -> DueDate {
        text.parse().expect("test date should parse")
    }

    #[test]
    fn new_record_is_active_and_ungraded() {
        let record = Assignment::new("Mathematics", "Problem set 3", due("05-01-2024"))
            .expect("valid record");

        assert!(!record.id.is_nil());
        assert_eq!(record.marks, None);
        assert!(!record.is_completed());
        assert!(!record.is_graded());
    }

    #[test]
    fn empty_fields_are_rejected() {
        let err = Assignment::new("  ", "Essay", due("05-01-2024")).unwrap_err();
        assert_eq!(err, AssignmentValidationError::EmptyCourse);

        let err = Assignment::new("History", "", due("05-01-2024")).unwrap_err();
        assert_eq!(err, AssignmentValidationError::EmptyTitle);
    }

    #[test]
    fn completion_sets_empty_marks() {
        let mut record =
            Assignment::new("Art", "Sketchbook", due("20-01-2024")).expect("valid record");
        record.complete();

        assert!(record.is_completed());
        assert!(!record.is_graded());
        assert_eq!(record.marks.as_deref(), Some(""));
    }

    #[test]
    fn ids_are_unique_per_record() {
        let a = Assignment::new("Art", "Sketchbook", due("20-01-2024")).unwrap();
        let b = Assignment::new("Art", "Sketchbook", due("20-01-2024")).unwrap();
        assert_ne!(a.id, b.id);
    }
}

//! Store document encoding and file I/O.
//!
//! # Responsibility
//! - Map the domain store onto the wire document and back.
//! - Normalize legacy `DD/MM/YY` due dates while decoding.
//!
//! # Invariants
//! - Wire field names (`assignment`, `due_date`, ...) stay exactly as
//!   written by existing saved files.
//! - Record IDs are never persisted; they are re-minted on load.

use super::{LoadOutcome, ParseWarning, PersistResult};
use crate::model::assignment::Assignment;
use crate::model::due_date::DueDate;
use crate::store::assignment_store::AssignmentStore;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Serialize, Deserialize)]
struct ActiveRecordDoc {
    course: String,
    assignment: String,
    due_date: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct CompletedRecordDoc {
    course: String,
    assignment: String,
    due_date: String,
    // Older files may omit marks on completed records.
    #[serde(default)]
    marks: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    assignments: Vec<ActiveRecordDoc>,
    #[serde(default)]
    completed_assignments: Vec<CompletedRecordDoc>,
    #[serde(default)]
    courses: Vec<String>,
}

/// Serializes the store and fully overwrites the file at `path`.
///
/// # Errors
/// Write failures (disk full, permission denied) surface as
/// [`super::PersistError::Io`]; nothing is swallowed.
pub fn save(store: &AssignmentStore, path: impl AsRef<Path>) -> PersistResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let document = encode_store(store);
    let text = serde_json::to_string_pretty(&document)?;

    match std::fs::write(path, text) {
        Ok(()) => {
            info!(
                "event=store_save module=persist status=ok active={} completed={} courses={} duration_ms={}",
                store.active().len(),
                store.completed().len(),
                store.courses().len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=store_save module=persist status=error path={} error={}",
                path.display(),
                err
            );
            Err(err.into())
        }
    }
}

/// Loads the store from `path`.
///
/// - Absent file: empty store, no warning (first run, not an error).
/// - Unreadable file: hard [`super::PersistError::Io`].
/// - Present but undecodable document: empty store plus a
///   [`ParseWarning`]; the damaged file is left untouched for recovery.
/// - Legacy `DD/MM/YY` due dates in either sequence are rewritten to the
///   canonical form while decoding.
pub fn load(path: impl AsRef<Path>) -> PersistResult<LoadOutcome> {
    let path = path.as_ref();
    let started_at = Instant::now();

    if !path.exists() {
        info!(
            "event=store_load module=persist status=ok mode=missing path={}",
            path.display()
        );
        return Ok(LoadOutcome::default());
    }

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            error!(
                "event=store_load module=persist status=error path={} error={}",
                path.display(),
                err
            );
            return Err(err.into());
        }
    };

    let decoded = serde_json::from_str::<StoreDocument>(&text)
        .map_err(|err| err.to_string())
        .and_then(decode_document);

    match decoded {
        Ok(store) => {
            info!(
                "event=store_load module=persist status=ok mode=file active={} completed={} courses={} duration_ms={}",
                store.active().len(),
                store.completed().len(),
                store.courses().len(),
                started_at.elapsed().as_millis()
            );
            Ok(LoadOutcome {
                store,
                warning: None,
            })
        }
        Err(reason) => {
            let warning = ParseWarning {
                path: path.to_path_buf(),
                reason,
            };
            warn!(
                "event=store_load module=persist status=recovered path={} reason={}",
                path.display(),
                warning.reason
            );
            Ok(LoadOutcome {
                store: AssignmentStore::new(),
                warning: Some(warning),
            })
        }
    }
}

fn encode_store(store: &AssignmentStore) -> StoreDocument {
    StoreDocument {
        assignments: store
            .active()
            .iter()
            .map(|record| ActiveRecordDoc {
                course: record.course.clone(),
                assignment: record.title.clone(),
                due_date: record.due_date.to_string(),
            })
            .collect(),
        completed_assignments: store
            .completed()
            .iter()
            .map(|record| CompletedRecordDoc {
                course: record.course.clone(),
                assignment: record.title.clone(),
                due_date: record.due_date.to_string(),
                marks: record.marks.clone().unwrap_or_default(),
            })
            .collect(),
        courses: store.courses().iter().cloned().collect(),
    }
}

fn decode_document(document: StoreDocument) -> Result<AssignmentStore, String> {
    let mut active = Vec::with_capacity(document.assignments.len());
    for (index, doc) in document.assignments.into_iter().enumerate() {
        let record = decode_record(doc.course, doc.assignment, &doc.due_date, None)
            .map_err(|reason| format!("assignments[{index}]: {reason}"))?;
        active.push(record);
    }

    let mut completed = Vec::with_capacity(document.completed_assignments.len());
    for (index, doc) in document.completed_assignments.into_iter().enumerate() {
        let record = decode_record(doc.course, doc.assignment, &doc.due_date, Some(doc.marks))
            .map_err(|reason| format!("completed_assignments[{index}]: {reason}"))?;
        completed.push(record);
    }

    Ok(AssignmentStore::from_parts(
        active,
        completed,
        document.courses,
    ))
}

fn decode_record(
    course: String,
    title: String,
    due_date: &str,
    marks: Option<String>,
) -> Result<Assignment, String> {
    let due = DueDate::parse_normalized(due_date).map_err(|err| err.to_string())?;
    let mut record = Assignment::new(course, title, due).map_err(|err| err.to_string())?;
    record.marks = marks;
    Ok(record)
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `coursetrack_core` linkage.
//! - Print a one-look summary of the persisted store for local checks.

use coursetrack_core::{core_version, Tracker, STORE_FILE_NAME};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| STORE_FILE_NAME.to_string());

    println!("coursetrack_core version={}", core_version());

    match Tracker::open(path.as_str()) {
        Ok(tracker) => {
            if let Some(warning) = tracker.load_warning() {
                eprintln!("warning: {warning}");
            }
            println!(
                "store={} active={} completed={} courses={}",
                path,
                tracker.active().len(),
                tracker.completed().len(),
                tracker.courses().len()
            );
        }
        Err(err) => {
            eprintln!("failed to open store `{path}`: {err}");
            std::process::exit(1);
        }
    }
}

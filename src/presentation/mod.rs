//! Presentation layer for command-line reports.

/// Text and JSON reports.
pub mod report;

pub use report::{PHOTO_PLACEHOLDER, render_candidates, render_json, render_resolved};

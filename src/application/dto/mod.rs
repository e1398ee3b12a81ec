//! Data transfer objects for the application layer.

mod resolved_photo;

pub use resolved_photo::{PhotoOutcome, ProbeAttempt, ResolvedPhoto};

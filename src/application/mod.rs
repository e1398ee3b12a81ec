//! Application layer with photo resolution services and use cases.

/// Data transfer objects.
pub mod dto;
/// Candidate building and session state.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{PhotoOutcome, ProbeAttempt, ResolvedPhoto};
pub use services::{DisplayState, LoadFailure, PhotoSession, Transition, advance, build_candidates};
pub use use_cases::ResolvePhotoUseCase;

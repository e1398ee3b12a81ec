//! Application services.

pub mod candidate_builder;
pub mod photo_session;

pub use candidate_builder::{build_candidates, local_candidates, remote_candidates};
pub use photo_session::{DisplayState, LoadFailure, PhotoSession, Transition, advance};

//! Persona photos - photo resolution with remote-first, bundled fallback.
//!
//! This crate resolves the photos of chat personas: it builds an ordered
//! list of candidate locations for a persona code and walks that list as
//! candidates fail to load.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing services, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing command-line reports.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "persona-photos";

//! Domain layer with core photo entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{CandidateList, CandidateSource, PersonaCode, RemoteBase};
pub use errors::{AssetError, ProbeError};
pub use ports::{AssetIndexPort, ImageProbePort};

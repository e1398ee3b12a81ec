//! Domain error types.

mod asset_error;
mod probe_error;

pub use asset_error::AssetError;
pub use probe_error::ProbeError;

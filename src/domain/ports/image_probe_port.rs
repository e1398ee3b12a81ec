//! Port definition for loading a candidate.

use async_trait::async_trait;

use crate::domain::entities::CandidateSource;
use crate::domain::errors::ProbeError;

/// Attempts to load a candidate the way the display layer would.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageProbePort: Send + Sync {
    /// Loads the candidate, returning the failure that should advance the cursor.
    async fn probe(&self, candidate: &CandidateSource) -> Result<(), ProbeError>;
}

//! Photo resolution DTOs.

use serde::Serialize;

use crate::domain::entities::{CandidateList, PersonaCode};

/// One probe of a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeAttempt {
    /// Cursor position that was probed.
    pub index: usize,
    /// Location handed to the probe.
    pub location: String,
    /// Failure message, or `None` if the candidate loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeAttempt {
    /// Returns true if the candidate loaded.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Final display state after probing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PhotoOutcome {
    /// A candidate loaded.
    Loaded {
        /// Cursor position of the loaded candidate.
        index: usize,
        /// Its location.
        location: String,
    },
    /// Every candidate failed; the last one stays on screen, broken.
    Exhausted {
        /// Location left on screen.
        last: String,
    },
    /// No candidates; the placeholder is shown.
    Empty,
}

impl PhotoOutcome {
    /// Returns the location being displayed, if any loaded.
    #[must_use]
    pub fn loaded_location(&self) -> Option<&str> {
        match self {
            Self::Loaded { location, .. } => Some(location),
            Self::Exhausted { .. } | Self::Empty => None,
        }
    }
}

/// Result of resolving one persona photo.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPhoto {
    /// Persona code.
    pub code: PersonaCode,
    /// Candidates in priority order.
    pub candidates: CandidateList,
    /// Final state.
    pub outcome: PhotoOutcome,
    /// Probes in the order they ran.
    pub attempts: Vec<ProbeAttempt>,
}

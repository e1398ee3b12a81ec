//! Photo resolution use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{PhotoOutcome, ProbeAttempt, ResolvedPhoto};
use crate::application::services::{DisplayState, PhotoSession, Transition, build_candidates};
use crate::domain::entities::{CandidateList, PersonaCode, RemoteBase};
use crate::domain::ports::{AssetIndexPort, ImageProbePort};

/// Resolves persona photos by loading candidates in order until one works.
pub struct ResolvePhotoUseCase {
    remote_base: RemoteBase,
    asset_index: Arc<dyn AssetIndexPort>,
    probe: Arc<dyn ImageProbePort>,
}

impl ResolvePhotoUseCase {
    /// Creates new use case.
    #[must_use]
    pub fn new(
        remote_base: RemoteBase,
        asset_index: Arc<dyn AssetIndexPort>,
        probe: Arc<dyn ImageProbePort>,
    ) -> Self {
        Self {
            remote_base,
            asset_index,
            probe,
        }
    }

    /// Lists candidates for `code` without loading any of them.
    #[must_use]
    pub fn candidates(&self, code: &PersonaCode) -> CandidateList {
        build_candidates(code, &self.remote_base, self.asset_index.as_ref())
    }

    /// Loads candidates for `code` one at a time, advancing on every failure.
    ///
    /// Stops at the first candidate that loads, or once the cursor can no
    /// longer move.
    pub async fn execute(&self, code: PersonaCode) -> ResolvedPhoto {
        let mut session = PhotoSession::new(code, &self.remote_base, self.asset_index.as_ref());
        let mut attempts = Vec::new();

        debug!(
            code = %session.code(),
            candidates = session.candidates().len(),
            "Resolving persona photo"
        );

        let outcome = loop {
            let (index, candidate) = match session.state() {
                DisplayState::Empty => {
                    info!(code = %session.code(), "No photo candidates, showing placeholder");
                    break PhotoOutcome::Empty;
                }
                DisplayState::Active { index, candidate } => (index, candidate.clone()),
            };

            match self.probe.probe(&candidate).await {
                Ok(()) => {
                    debug!(code = %session.code(), index, location = %candidate, "Photo loaded");
                    attempts.push(ProbeAttempt {
                        index,
                        location: candidate.location().to_string(),
                        error: None,
                    });
                    break PhotoOutcome::Loaded {
                        index,
                        location: candidate.location().to_string(),
                    };
                }
                Err(e) => {
                    debug!(code = %session.code(), index, error = %e, "Photo candidate failed");
                    attempts.push(ProbeAttempt {
                        index,
                        location: candidate.location().to_string(),
                        error: Some(e.to_string()),
                    });
                }
            }

            let failure = session.failure_for_current();
            match session.on_load_failure(&failure) {
                Transition::Advanced(_) => {}
                Transition::Saturated | Transition::Ignored => {
                    warn!(
                        code = %session.code(),
                        location = %candidate,
                        "All photo candidates failed"
                    );
                    break PhotoOutcome::Exhausted {
                        last: candidate.location().to_string(),
                    };
                }
            }
        };

        ResolvedPhoto {
            code: session.code().clone(),
            candidates: session.candidates().clone(),
            outcome,
            attempts,
        }
    }
}

impl std::fmt::Debug for ResolvePhotoUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvePhotoUseCase")
            .field("remote_base", &self.remote_base)
            .field("assets", &self.asset_index.len())
            .finish_non_exhaustive()
    }
}

//! Candidate list construction.
//!
//! Remote candidates come first (slots 1, 2, 3), then whichever bundled
//! photos exist for the same slots.

use tracing::trace;

use crate::domain::entities::{
    CandidateList, CandidateSource, PHOTO_SLOTS, PersonaCode, REMOTE_EXTENSION, RemoteBase,
};
use crate::domain::ports::AssetIndexPort;

/// Builds the ordered candidate list for a persona code.
///
/// Pure: the same inputs always produce an equal list. An empty list is a
/// valid outcome and means the caller shows a placeholder.
#[must_use]
pub fn build_candidates(
    code: &PersonaCode,
    remote_base: &RemoteBase,
    index: &dyn AssetIndexPort,
) -> CandidateList {
    let candidates = remote_candidates(code, remote_base)
        .into_iter()
        .chain(local_candidates(code, index));
    let list = CandidateList::new(code.clone(), candidates);

    trace!(code = %code, count = list.len(), "Built photo candidates");
    list
}

/// Remote tier: `{base}/{code}{slot}.png` for every slot, or nothing when
/// the base is disabled.
#[must_use]
pub fn remote_candidates(code: &PersonaCode, remote_base: &RemoteBase) -> Vec<CandidateSource> {
    if !remote_base.is_enabled() {
        return Vec::new();
    }

    PHOTO_SLOTS
        .iter()
        .filter_map(|&slot| {
            remote_base.join(&format!("{}.{REMOTE_EXTENSION}", code.slot_name(slot)))
        })
        .map(CandidateSource::remote)
        .collect()
}

/// Local tier: bundled photos named `{code}{slot}`; missing slots are skipped.
#[must_use]
pub fn local_candidates(code: &PersonaCode, index: &dyn AssetIndexPort) -> Vec<CandidateSource> {
    PHOTO_SLOTS
        .iter()
        .filter_map(|&slot| index.find(&code.slot_name(slot)))
        .map(CandidateSource::local)
        .collect()
}

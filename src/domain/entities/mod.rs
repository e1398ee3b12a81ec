//! Domain entity definitions.

mod candidate;
mod persona_code;
mod remote_base;

pub use candidate::{
    AssetHandle, CandidateList, CandidateSource, CandidateTier, PHOTO_SLOTS, REMOTE_EXTENSION,
};
pub use persona_code::PersonaCode;
pub use remote_base::RemoteBase;

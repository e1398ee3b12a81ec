//! Candidate image locations for a persona photo.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::PersonaCode;

/// Photo slots tried for every persona, in priority order.
pub const PHOTO_SLOTS: [u8; 3] = [1, 2, 3];

/// Extension used for every remote candidate.
pub const REMOTE_EXTENSION: &str = "png";

/// Opaque handle to a bundled photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AssetHandle {
    public_path: String,
    #[serde(skip)]
    source: PathBuf,
}

impl AssetHandle {
    /// Creates a handle from the path served to the display layer and the
    /// file it was built from.
    #[must_use]
    pub fn new(public_path: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            public_path: public_path.into(),
            source: source.into(),
        }
    }

    /// Path the display layer renders.
    #[must_use]
    pub fn public_path(&self) -> &str {
        &self.public_path
    }

    /// File the asset was bundled from.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Tier a candidate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateTier {
    /// Built from the remote base URL.
    Remote,
    /// Resolved from the bundled asset index.
    Local,
}

impl fmt::Display for CandidateTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// One possible location of a persona photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "tier", rename_all = "lowercase")]
pub enum CandidateSource {
    /// Absolute URL on the remote tier.
    Remote {
        /// Full URL.
        url: String,
    },
    /// Bundled asset.
    Local {
        /// Resolved handle.
        asset: AssetHandle,
    },
}

impl CandidateSource {
    /// Creates a remote candidate.
    #[must_use]
    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote { url: url.into() }
    }

    /// Creates a local candidate.
    #[must_use]
    pub const fn local(asset: AssetHandle) -> Self {
        Self::Local { asset }
    }

    /// Location handed to the display layer.
    #[must_use]
    pub fn location(&self) -> &str {
        match self {
            Self::Remote { url } => url,
            Self::Local { asset } => asset.public_path(),
        }
    }

    /// Returns the tier of this candidate.
    #[must_use]
    pub const fn tier(&self) -> CandidateTier {
        match self {
            Self::Remote { .. } => CandidateTier::Remote,
            Self::Local { .. } => CandidateTier::Local,
        }
    }
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.location())
    }
}

/// Ordered candidates built for a single persona code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateList {
    code: PersonaCode,
    entries: Vec<CandidateSource>,
}

impl CandidateList {
    /// Creates a list, dropping repeated locations after their first occurrence.
    #[must_use]
    pub fn new(code: PersonaCode, candidates: impl IntoIterator<Item = CandidateSource>) -> Self {
        let mut entries: Vec<CandidateSource> = Vec::new();
        for candidate in candidates {
            if !entries.iter().any(|c| c.location() == candidate.location()) {
                entries.push(candidate);
            }
        }
        Self { code, entries }
    }

    /// Creates an empty list for the code.
    #[must_use]
    pub const fn empty(code: PersonaCode) -> Self {
        Self {
            code,
            entries: Vec::new(),
        }
    }

    /// Code the list was built for.
    #[must_use]
    pub const fn code(&self) -> &PersonaCode {
        &self.code
    }

    /// Returns the candidate at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CandidateSource> {
        self.entries.get(index)
    }

    /// Number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing can be displayed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates candidates in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, CandidateSource> {
        self.entries.iter()
    }

    /// Locations in priority order.
    #[must_use]
    pub fn locations(&self) -> Vec<&str> {
        self.entries.iter().map(CandidateSource::location).collect()
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a CandidateSource;
    type IntoIter = std::slice::Iter<'a, CandidateSource>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_of_each_tier() {
        let remote = CandidateSource::remote("https://cdn.x.com/elif1.png");
        let local = CandidateSource::local(AssetHandle::new(
            "assets/elif1-0a1b2c3d.jpg",
            "photo/elif1.jpg",
        ));

        assert_eq!(remote.location(), "https://cdn.x.com/elif1.png");
        assert_eq!(remote.tier(), CandidateTier::Remote);
        assert_eq!(local.location(), "assets/elif1-0a1b2c3d.jpg");
        assert_eq!(local.tier(), CandidateTier::Local);
    }

    #[test]
    fn test_list_drops_duplicate_locations() {
        let list = CandidateList::new(
            PersonaCode::new("elif"),
            [
                CandidateSource::remote("https://cdn.x.com/elif1.png"),
                CandidateSource::remote("https://cdn.x.com/elif2.png"),
                CandidateSource::remote("https://cdn.x.com/elif1.png"),
            ],
        );

        assert_eq!(
            list.locations(),
            vec!["https://cdn.x.com/elif1.png", "https://cdn.x.com/elif2.png"]
        );
    }

    #[test]
    fn test_empty_list() {
        let list = CandidateList::empty(PersonaCode::new("unknown"));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.get(0).is_none());
        assert_eq!(list.code().as_str(), "unknown");
    }

    #[test]
    fn test_serializes_with_tier_tag() {
        let list = CandidateList::new(
            PersonaCode::new("Elif"),
            [CandidateSource::remote("https://cdn.x.com/elif1.png")],
        );
        let json = serde_json::to_value(&list).unwrap();

        assert_eq!(json["code"], "elif");
        assert_eq!(json["entries"][0]["tier"], "remote");
        assert_eq!(json["entries"][0]["url"], "https://cdn.x.com/elif1.png");
    }
}

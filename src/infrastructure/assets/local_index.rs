//! Bundled persona photo index.
//!
//! Replaces the bundler glob: the photo directory is scanned once at startup
//! and every supported image is registered under its lower-cased file stem.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use sha2::{Digest, Sha256};
use tracing::{debug, info, trace};

use crate::domain::entities::AssetHandle;
use crate::domain::errors::AssetError;
use crate::domain::ports::AssetIndexPort;

/// File extensions picked up by the scan.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "avif"];

/// Directory prefix of public asset paths.
pub const PUBLIC_ASSETS_DIR: &str = "assets";

const HASH_LEN: usize = 8;

static IMAGE_FILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?i)^(?P<stem>.+)\.(?P<ext>{})$",
        SUPPORTED_EXTENSIONS.join("|")
    );
    Regex::new(&pattern).expect("Invalid image file regex")
});

/// Splits `name` into stem and extension if it is a supported image.
#[must_use]
pub fn split_image_name(name: &str) -> Option<(&str, &str)> {
    let caps = IMAGE_FILE_RE.captures(name)?;
    Some((caps.name("stem")?.as_str(), caps.name("ext")?.as_str()))
}

/// Public path of a bundled file: `assets/{stem}-{hash}.{ext}`.
#[must_use]
pub fn public_path(stem: &str, ext: &str, contents: &[u8]) -> String {
    let digest = Sha256::digest(contents);
    let hash = hex::encode(digest);
    format!("{PUBLIC_ASSETS_DIR}/{stem}-{}.{ext}", &hash[..HASH_LEN])
}

/// In-memory registry of bundled photos keyed by normalized base name.
#[derive(Debug, Clone, Default)]
pub struct LocalAssetIndex {
    assets: HashMap<String, AssetHandle>,
}

impl LocalAssetIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from `(file name, handle)` pairs.
    ///
    /// Names without a supported extension are skipped; for names sharing a
    /// stem the first one wins.
    #[must_use]
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, AssetHandle)>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for (name, handle) in entries {
            if let Some((stem, _)) = split_image_name(name.as_ref()) {
                index.insert(stem, handle);
            }
        }
        index
    }

    /// Scans `dir` (not recursively) for supported images.
    ///
    /// A missing directory yields an empty index. Files are visited in path
    /// order so the winner for a shared stem is stable.
    ///
    /// # Errors
    /// Returns error if the directory or one of its images cannot be read.
    pub fn scan_dir(dir: &Path) -> Result<Self, AssetError> {
        if !dir.is_dir() {
            debug!(path = %dir.display(), "Photo directory not found, no local photos");
            return Ok(Self::new());
        }

        let read_dir = |source: std::io::Error| AssetError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_dir)? {
            let path = entry.map_err(read_dir)?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut index = Self::new();
        for path in paths {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some((stem, ext)) = split_image_name(name) else {
                trace!(path = %path.display(), "Skipping non-image file");
                continue;
            };
            if index.contains(stem) {
                debug!(path = %path.display(), "Photo shadowed by an earlier file");
                continue;
            }

            let contents = fs::read(&path).map_err(|source| AssetError::ReadFile {
                path: path.clone(),
                source,
            })?;
            let handle = AssetHandle::new(public_path(stem, ext, &contents), path.clone());
            index.insert(stem, handle);
        }

        info!(path = %dir.display(), count = index.len(), "Indexed local photos");
        Ok(index)
    }

    /// Returns true if an asset is registered for `base_name`.
    #[must_use]
    pub fn contains(&self, base_name: &str) -> bool {
        self.assets.contains_key(&base_name.to_lowercase())
    }

    /// Registered base names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.assets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn insert(&mut self, stem: &str, handle: AssetHandle) {
        self.assets.entry(stem.to_lowercase()).or_insert(handle);
    }
}

impl AssetIndexPort for LocalAssetIndex {
    fn find(&self, base_name: &str) -> Option<AssetHandle> {
        self.assets.get(&base_name.to_lowercase()).cloned()
    }

    fn len(&self) -> usize {
        self.assets.len()
    }
}

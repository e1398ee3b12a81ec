//! Port definition for bundled photo lookup.

use crate::domain::entities::AssetHandle;

/// Registry of bundled photos keyed by normalized base name.
pub trait AssetIndexPort: Send + Sync {
    /// Looks up the asset whose file stem equals `base_name`, ignoring case.
    fn find(&self, base_name: &str) -> Option<AssetHandle>;

    /// Number of indexed assets.
    fn len(&self) -> usize;

    /// Returns true if no assets are indexed.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

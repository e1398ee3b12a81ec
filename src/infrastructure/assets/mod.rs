//! Bundled photo registry.

pub mod local_index;

pub use local_index::{LocalAssetIndex, SUPPORTED_EXTENSIONS, public_path, split_image_name};

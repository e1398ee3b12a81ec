mod asset_index_port;
mod image_probe_port;

pub use asset_index_port::AssetIndexPort;
pub use image_probe_port::ImageProbePort;

#[cfg(test)]
pub mod mocks {
    pub use super::asset_index_port::mock::MockAssetIndex;
    pub use super::image_probe_port::MockImageProbePort;
}

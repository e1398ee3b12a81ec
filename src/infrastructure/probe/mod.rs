//! Candidate probing.

pub mod image_probe;

pub use image_probe::ImageProbe;

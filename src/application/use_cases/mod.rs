//! Use case implementations.

mod resolve_photo_use_case;

pub use resolve_photo_use_case::ResolvePhotoUseCase;

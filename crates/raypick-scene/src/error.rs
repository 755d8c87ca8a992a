//! Error types for the scene layer.

use raypick_bvh::BvhError;
use thiserror::Error;

/// Errors that can occur while building meshes or validating settings.
#[derive(Error, Debug)]
pub enum SceneError {
    /// The mesh's triangle BVH could not be built.
    #[error("failed to build mesh BVH: {0}")]
    Bvh(#[from] BvhError),

    /// Invalid scene settings.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;

//! Error types for mesh loading and camera setup.

use thiserror::Error;

/// Errors raised while turning a mesh source into a renderable mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The mesh source could not be read.
    #[error("failed to read mesh source: {0}")]
    Io(#[from] std::io::Error),
    /// The source parsed to zero triangles.
    #[error("mesh contains no triangles")]
    Empty,
    /// The largest axis extent is zero or not finite, so the mesh cannot be rescaled.
    #[error("mesh has a degenerate extent (largest axis size {0})")]
    Degenerate(f32),
}

/// Errors raised by invalid camera optics.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CameraError {
    #[error("viewport must have a positive width and height, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("invalid lens: {0}")]
    InvalidLens(String),
}

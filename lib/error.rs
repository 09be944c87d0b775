use std::path::PathBuf;
use thiserror::Error;

/// Failures of the checked point/vector operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Zero (or non-finite) length vector passed to a checked normalization.
    #[error("cannot normalize a degenerate vector (length {0})")]
    DegenerateVector(f64),
    /// Two points added together. Only point + vector and vector + vector are affine.
    #[error("cannot add two points")]
    PointSum,
    /// Placement transform with no inverse (determinant given).
    #[error("placement transform is singular (determinant {0})")]
    SingularTransform(f64),
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MaterialError {
    #[error("ambient coefficient alpha must lie in [0, 1], got {0}")]
    Alpha(f64),
    #[error("diffuse/specular balance beta must lie in [0, 1], got {0}")]
    Beta(f64),
    #[error("shininess exponent must be positive, got {0}")]
    Shininess(f64),
}

#[derive(Error, Debug)]
pub enum TextureError {
    #[error("could not load texture {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("texture {0} has no pixels")]
    Empty(PathBuf),
}

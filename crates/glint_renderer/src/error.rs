//! Construction errors for scene and camera parameters.

use thiserror::Error;

/// Rejected construction parameters.
///
/// Degenerate geometry is the only true failure class in the kernel:
/// intersection misses and absorbed rays are ordinary `Option` branches.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BuildError {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("camera look_from and look_at coincide")]
    DegenerateView,

    #[error("camera up vector is parallel to the view direction")]
    DegenerateUp,

    #[error("vertical field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f64),

    #[error("focus distance must be positive and finite, got {0}")]
    InvalidFocusDistance(f64),

    #[error("aperture must be non-negative and finite, got {0}")]
    InvalidAperture(f64),
}

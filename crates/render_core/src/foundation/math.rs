//! Math utilities and types
//!
//! Scene geometry is kept in double precision, which is what the immediate-mode
//! backend consumes directly.

use serde::{Deserialize, Serialize};

pub use nalgebra::Matrix4;

/// 3D point type used for all scene geometry
pub type Point3 = nalgebra::Point3<f64>;

/// 4x4 matrix type used for view and projection transforms
pub type Mat4 = Matrix4<f64>;

/// Axis-aligned orthographic view volume
///
/// Maps `[left, right] x [bottom, top] x [-near, -far]` onto normalized device
/// coordinates, the same mapping as the classic `glOrtho` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrthoVolume {
    /// Left clipping plane
    pub left: f64,
    /// Right clipping plane
    pub right: f64,
    /// Bottom clipping plane
    pub bottom: f64,
    /// Top clipping plane
    pub top: f64,
    /// Near clipping plane
    pub near: f64,
    /// Far clipping plane
    pub far: f64,
}

impl OrthoVolume {
    /// Create a new view volume
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        }
    }

    /// Width of the volume along X
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height of the volume along Y
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Projection matrix for this volume
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_orthographic(self.left, self.right, self.bottom, self.top, self.near, self.far)
    }
}

/// Build points from a flat `x, y, z, x, y, z, ...` coordinate buffer
///
/// Trailing coordinates that do not form a full triple are ignored; callers
/// check the length first.
pub fn points_from_coords(coords: &[f64]) -> impl Iterator<Item = Point3> + '_ {
    coords
        .chunks_exact(3)
        .map(|xyz| Point3::new(xyz[0], xyz[1], xyz[2]))
}

//! Camera component: derives view/projection matrices from its owner

use crate::foundation::math::{utils, Mat4, Mat4Ext};
use crate::scene::component::Component;

/// Marks its owner as a viewpoint and derives camera matrices from it
///
/// Both matrices are stateless derivations recomputed on every call: the
/// view matrix inverts the owner's world transform, and the projection
/// matrix combines the stored lens parameters with an externally supplied
/// aspect ratio. The per-frame update is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraComponent {
    /// Vertical field of view in radians
    pub fov_y: f32,

    /// Near clip plane distance
    pub near: f32,

    /// Far clip plane distance
    pub far: f32,
}

impl Default for CameraComponent {
    fn default() -> Self {
        Self {
            fov_y: utils::deg_to_rad(45.0),
            near: 0.1,
            far: 100.0,
        }
    }
}

impl CameraComponent {
    /// Create a camera with the given lens parameters
    pub fn new(fov_y: f32, near: f32, far: f32) -> Self {
        Self { fov_y, near, far }
    }

    /// Compute the view matrix from the owner's world transform
    ///
    /// Falls back to identity when the world matrix is non-invertible
    /// (for example a zero scale somewhere up the parent chain).
    pub fn view_matrix(&self, owner_world: &Mat4) -> Mat4 {
        owner_world.try_inverse().unwrap_or_else(Mat4::identity)
    }

    /// Compute the projection matrix for the given aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective(self.fov_y, aspect, self.near, self.far)
    }
}

impl Component for CameraComponent {}

//! Input seam for anchor tracking.
//!
//! The camera/input subsystem lives outside the crate; the simulation only
//! needs a pointer projected into world space at a chosen depth in front of
//! the camera.

use glam::Vec3;

/// Source of the pointer's world-space position.
pub trait PointerSource {
    /// World point under the pointer, `depth_offset` units along the view
    /// direction.
    fn pointer_world_point(&self, depth_offset: f32) -> Vec3;
}

impl<F> PointerSource for F
where
    F: Fn(f32) -> Vec3,
{
    fn pointer_world_point(&self, depth_offset: f32) -> Vec3 {
        self(depth_offset)
    }
}

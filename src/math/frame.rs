//! Local coordinate frame of a shoreline instance.

use crate::core::types::{Affine3A, Quat, Vec3};

/// Placement of a shoreline in world space.
///
/// In local space `x` points out to sea, `y` is up and `z` runs along the
/// shore. The inverse is cached so that per-query transforms stay cheap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShoreFrame {
    to_world: Affine3A,
    to_local: Affine3A,
}

impl ShoreFrame {
    /// Build a frame from a local-to-world transform.
    pub fn new(to_world: Affine3A) -> Self {
        Self {
            to_world,
            to_local: to_world.inverse(),
        }
    }

    /// Build a frame from translation, rotation and scale.
    pub fn from_scale_rotation_translation(scale: Vec3, rotation: Quat, translation: Vec3) -> Self {
        Self::new(Affine3A::from_scale_rotation_translation(scale, rotation, translation))
    }

    /// Frame translated to `origin` with no rotation.
    pub fn from_translation(origin: Vec3) -> Self {
        Self::new(Affine3A::from_translation(origin))
    }

    #[inline]
    pub fn to_local(&self, world: Vec3) -> Vec3 {
        self.to_local.transform_point3(world)
    }

    #[inline]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.to_world.transform_point3(local)
    }
}

impl Default for ShoreFrame {
    fn default() -> Self {
        Self::new(Affine3A::IDENTITY)
    }
}

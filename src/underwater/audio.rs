//! Placement of the looping surf sound.

use crate::core::types::Vec3;
use crate::math::ShoreFrame;

/// Falloff of the spatial blend with squared listener distance.
const SPATIAL_FALLOFF: f32 = 0.00007;

/// Where to play the surf and how directional it should sound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfAudio {
    /// Source position in the shoreline's local frame.
    pub source_local: Vec3,
    /// 0 = plain stereo, 1 = fully positional.
    pub spatial_blend: f32,
}

impl SurfAudio {
    pub fn world_source(&self, frame: &ShoreFrame) -> Vec3 {
        frame.to_world(self.source_local)
    }
}

/// The source tracks the listener along the shore and sits halfway between
/// the waterline and the listener when they are out at sea, never inland of
/// the waterline. Under water the sound surrounds the listener.
pub fn surf_audio(listener_local: Vec3, underwater: bool) -> SurfAudio {
    let source_local = Vec3::new((listener_local.x * 0.5).max(0.0), 0.0, listener_local.z);
    let spatial_blend = if underwater {
        0.0
    } else {
        1.0 - 1.0 / (1.0 + listener_local.distance_squared(source_local) * SPATIAL_FALLOFF)
    };

    SurfAudio { source_local, spatial_blend }
}

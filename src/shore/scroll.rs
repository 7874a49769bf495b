//! Decoration that scrolls along the shore in step with the waves.

use crate::math::shading::repeat;
use crate::math::Aabb;

/// A strip of props (driftwood, shells, foam decals) recycled along the
/// shore as the wave pattern scrolls.
///
/// Each prop keeps its authored along-shore position as an anchor and is
/// wrapped into the strip's extent as the scroll advances.
#[derive(Clone, Debug)]
pub struct ScrollStrip {
    start: f32,
    length: f32,
    anchors: Vec<f32>,
}

impl ScrollStrip {
    pub fn new(start: f32, length: f32, anchors: Vec<f32>) -> Self {
        Self { start, length, anchors }
    }

    /// Strip spanning the X extent of `bounds`.
    pub fn from_bounds(bounds: &Aabb, anchors: Vec<f32>) -> Self {
        Self::new(bounds.min.x, bounds.size().x, anchors)
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Current position of every prop for the field's scroll position.
    pub fn positions(&self, scroll_position: f32) -> impl Iterator<Item = f32> + '_ {
        self.anchors
            .iter()
            .map(move |&x| repeat(x - scroll_position, self.length) + self.start)
    }
}

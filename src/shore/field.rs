//! Shoreline height field.
//!
//! [`ShorelineField`] answers "where is the water surface at this point and
//! time" for gameplay code. It evaluates the same closed-form wave model the
//! shore shader runs per vertex, so floating objects and underwater checks
//! line up with what is drawn.

use rayon::prelude::*;

use crate::core::types::{Result, Vec3};
use crate::math::shading::{lerp, smoothstep};
use crate::math::ShoreFrame;
use crate::session::clock::wrap_time;
use crate::session::sync::ShoreSync;
use crate::shore::config::ShoreConfig;
use crate::shore::wave::WaveModel;

/// Immutable, thread-safe water surface of one shoreline instance.
#[derive(Clone, Debug)]
pub struct ShorelineField {
    model: WaveModel,
    seed: f32,
    frame: ShoreFrame,
}

impl ShorelineField {
    /// Validate `config` and build a field in an identity frame.
    pub fn new(config: ShoreConfig, seed: f32) -> Result<Self> {
        config.validate()?;
        let model = WaveModel::new(config);
        log::debug!(
            "ShorelineField: seed={}, max shoreline length={:.3}",
            seed,
            model.max_shoreline_length()
        );
        Ok(Self {
            model,
            seed,
            frame: ShoreFrame::default(),
        })
    }

    /// Build a field using the seed broadcast by the session owner.
    pub fn from_sync(config: ShoreConfig, sync: &ShoreSync) -> Result<Self> {
        sync.validate()?;
        Self::new(config, sync.seed)
    }

    /// Place the field in world space.
    pub fn with_frame(mut self, frame: ShoreFrame) -> Self {
        self.frame = frame;
        self
    }

    #[inline]
    pub fn config(&self) -> &ShoreConfig {
        self.model.config()
    }

    #[inline]
    pub fn seed(&self) -> f32 {
        self.seed
    }

    #[inline]
    pub fn frame(&self) -> &ShoreFrame {
        &self.frame
    }

    /// Local `x` below which the field has no surface at all.
    #[inline]
    pub fn max_shoreline_length(&self) -> f32 {
        self.model.max_shoreline_length()
    }

    /// Scaled animation time for session time `time` (seconds).
    ///
    /// Time is wrapped before scaling so `f32` keeps ~2 ms resolution
    /// however long the session runs.
    #[inline]
    pub fn animation_time(&self, time: f64) -> f32 {
        self.config().time_scale * wrap_time(time) as f32
    }

    /// Along-shore scroll of the wave pattern, for decoration that has to
    /// move with the waves. Excludes the seed.
    #[inline]
    pub fn scroll_position(&self, time: f64) -> f32 {
        let c = self.config();
        self.animation_time(time) * c.side_scroll_speed + c.side_scroll_offset
    }

    /// World-space height of the water surface above `point`.
    ///
    /// Only the projection of `point` onto the field's local XZ plane is
    /// used. Returns `None` where the beach is dry.
    pub fn height(&self, point: Vec3, time: f64) -> Option<f32> {
        let local = self.frame.to_local(point);
        let h = self.local_height(local.x, local.z, time)?;
        Some(self.frame.to_world(Vec3::new(local.x, h, local.z)).y)
    }

    /// Height in the field's local frame. `x` is distance out to sea,
    /// `z` the along-shore coordinate.
    pub fn local_height(&self, x: f32, z: f32, time: f64) -> Option<f32> {
        if x < self.model.max_shoreline_length() {
            return None;
        }

        let c = self.model.config();
        let animation_time = self.animation_time(time);
        let y = z + animation_time * c.side_scroll_speed + c.side_scroll_offset + self.seed;
        let timer = self.model.current_time(y, animation_time);

        // Stages with zero weight are skipped; the results are identical
        // to evaluating everything as the shader does.
        let shoreline_blend = smoothstep(-c.interval, 0.0, -x);
        let mut front_height = 0.0;
        if shoreline_blend > 0.0 {
            front_height = self.model.shoreline(x, y, timer)?;
        }

        let far_blend = self.model.far_wave_blend(x);

        let mut near_waves = 0.0;
        if shoreline_blend < 1.0 && x < self.model.near_wave_limit() {
            near_waves = self.model.near_waves(x, y, timer);
        }

        let mut far_waves = 0.0;
        if far_blend > 0.0 {
            far_waves = self.model.far_waves(x, y, timer, far_blend);
        }

        let open_water = near_waves + far_waves + c.sea_level;
        Some(lerp(open_water, -x * c.beach_slope + front_height, shoreline_blend))
    }

    /// Surface normal from forward differences `delta` apart.
    ///
    /// Falls back to straight up where any of the three samples is dry, or
    /// when `delta` is not a positive spacing.
    pub fn surface_normal(&self, point: Vec3, time: f64, delta: f32) -> Vec3 {
        if !(delta > 0.0 && delta.is_finite()) {
            return Vec3::Y;
        }
        let sample = |p: Vec3| self.height(p, time);
        let Some(h) = sample(point) else {
            return Vec3::Y;
        };
        let Some(hx) = sample(point + Vec3::new(delta, 0.0, 0.0)) else {
            return Vec3::Y;
        };
        let Some(hz) = sample(point + Vec3::new(0.0, 0.0, delta)) else {
            return Vec3::Y;
        };

        let tangent = Vec3::new(delta, hx - h, 0.0).normalize();
        let binormal = Vec3::new(0.0, hz - h, delta).normalize();
        binormal.cross(tangent).normalize()
    }

    /// Evaluate many points at once, in parallel.
    pub fn sample_transect(&self, points: &[Vec3], time: f64) -> Vec<Option<f32>> {
        points.par_iter().map(|&p| self.height(p, time)).collect()
    }
}

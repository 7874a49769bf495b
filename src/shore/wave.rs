//! Wave stages of the shoreline field: breaking bands, swash and open-water swell.
//!
//! All distances are in the field's local frame, where `x` grows out to sea
//! and `y` runs along the shore. `timer` is the distorted animation time, in
//! wave periods; band `id` has its crest at `(id - timer) * interval`.

use crate::math::shading::{frac, lerp, pow2, saturate, smooth, smoothstep, step};
use crate::shore::config::ShoreConfig;
use crate::shore::noise::{absfbm1d, fbm1d};

/// Shape of one wave band at a given position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WaveCurve {
    /// Along-shore strength of the band, in [0, 1].
    pub power: f32,
    /// How much of that strength has been lost to breaking.
    pub compression: f32,
    /// Visible crest height (m).
    pub height: f32,
}

/// `sqrt(x² + c) - sqrt(c)`, rescaled so that `bottom_smooth(1) == 1`.
#[inline]
fn bottom_smooth(x: f32) -> f32 {
    (f32::sqrt(x * x + 0.04) - 0.2) * 1.219_803_9
}

/// Foam pattern just behind the run-up front.
#[inline]
fn front_form(x: f32, origin: f32, len: f32, width: f32) -> f32 {
    frac(1.0 - saturate((x - origin + len) / width))
}

/// Coefficients plus the reciprocals the hot path needs.
#[derive(Clone, Debug)]
pub struct WaveModel {
    config: ShoreConfig,
    inv_wave_width: f32,
    inv_front_wave_width: f32,
    inv_interval: f32,
    inv_steepness: f32,
    max_shoreline_length: f32,
}

impl WaveModel {
    /// Precompute derived constants. `config` must already be validated.
    pub fn new(config: ShoreConfig) -> Self {
        Self {
            inv_wave_width: 1.0 / config.wave_width,
            inv_front_wave_width: 1.0 / config.front_wave_width,
            inv_interval: 1.0 / config.interval,
            inv_steepness: 1.0 / config.steepness,
            max_shoreline_length: -9.0 / (16.0 * config.backwash_velocity) - config.interval * 0.75,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &ShoreConfig {
        &self.config
    }

    /// Furthest inland reach of any run-up. Negative.
    #[inline]
    pub fn max_shoreline_length(&self) -> f32 {
        self.max_shoreline_length
    }

    /// Offshore distance past which every near-shore crest is flattened
    /// to zero, so the breaking stage can be skipped.
    #[inline]
    pub fn near_wave_limit(&self) -> f32 {
        self.config.breaker_offset(1.0) + self.config.interval * 0.5
    }

    #[inline]
    pub fn wave_power(&self, id: i32, y: f32) -> f32 {
        fbm1d(y * self.inv_wave_width, id, self.config.noise_octaves)
    }

    /// Animation time with the along-shore arrival jitter applied.
    #[inline]
    pub fn current_time(&self, y: f32, animation_time: f32) -> f32 {
        let c = &self.config;
        let distortion = fbm1d(
            y * self.inv_wave_width * c.time_distortion_width,
            0,
            c.time_distortion_noise_level,
        );
        animation_time + distortion * c.time_distortion_power
    }

    #[inline]
    pub fn id_to_pos(&self, id: i32, timer: f32) -> f32 {
        (id as f32 - timer) * self.config.interval
    }

    /// Global sink applied to every band: rises to 1 at the breaker line
    /// and dips below zero in the last interval before the shore.
    fn height_offset(&self, x: f32) -> f32 {
        let c = &self.config;
        let getup = smoothstep(c.breaker_offset(2.0), c.breaker_offset(1.0), x);
        let swell = -smoothstep(c.interval, 0.0, x) * (c.wave_break_threshold + 0.1);
        getup + swell
    }

    /// Evaluate band `id` with its crest at `x`.
    pub fn wave_curve(&self, id: i32, x: f32, y: f32) -> WaveCurve {
        let c = &self.config;
        let power = self.wave_power(id, y);

        // Waves in the middle of the surf zone sit lower and break earlier
        let pit_center = c.breaker_offset(2.1) * 0.5;
        let pit = 1.0 - smooth(saturate((x / pit_center - 1.0).abs()));
        let depth = self.height_offset(x) + pit * (1.0 - c.wave_break_threshold) * 0.5;
        let p0 = (power - depth).max(0.0);
        let threshold = c.wave_break_threshold * (1.0 - pit * 0.2);

        // Height a fully broken wave settles to
        let dest = (1.0 - bottom_smooth(1.0 - ((1.0 - power) / (1.0 - threshold)).min(1.0))) * threshold;

        let comp_amount = smoothstep(
            c.breaker_offset(2.5) + power * c.interval,
            c.breaker_offset(2.9) + power * c.interval,
            x,
        );
        let slope = threshold.max(dest);
        let p = lerp(p0, slope, comp_amount).min(p0);

        let mut height = smooth(p) * c.wave_power * (1.0 - pit * 0.5);
        height *= (x * 0.5) / c.breaker_offset(0.0) + 0.5;

        WaveCurve {
            power,
            compression: (p0 - p).max(0.0),
            height,
        }
    }

    #[inline]
    fn front_form_length(&self, compression: f32) -> f32 {
        (compression + 1.0).log2() * (self.config.interval * 0.5)
    }

    /// Swash zone: run-up and backwash of the last few bands.
    ///
    /// Returns `None` when none of the tracked bands covers `x`, i.e. the
    /// sand is dry here.
    pub fn shoreline(&self, x: f32, y: f32, timer: f32) -> Option<f32> {
        let c = &self.config;
        let mut foam = 0.0;
        let mut height: f32 = 0.0;
        let mut wet = false;

        for i in -1..c.swell_zone_buffer.min(2) {
            let id = (timer.floor() as i32).wrapping_sub(i);
            // Time since this band's crest crossed the waterline, in metres of travel
            let t = -self.id_to_pos(id, timer);
            let curve = self.wave_curve(id, -t, y);

            let power = absfbm1d(y * self.inv_front_wave_width, id, c.front_wave_noise_level) + 1.0;

            // Time at which the run-up reaches its furthest point
            let d = power / (c.backwash_velocity * 2.0);
            let amount = saturate(t / d);
            let smooth_amount = smooth(amount);
            let td = t.min(d);

            let nearshore = self.front_form_length(curve.compression);
            let foreshore = power * c.interval * 0.5;
            let shore_offset = power * td - pow2(td) * c.backwash_velocity;
            let b = nearshore * 0.5 * (1.0 - amount);

            let swash_line = lerp(nearshore + t, foreshore + shore_offset, smooth_amount);
            let backwash_line = swash_line - pow2(((t - d) * 0.125).max(0.0));

            let shore_mask = step(-x, backwash_line);
            foam += (front_form(x, -swash_line + b, b, b * (1.0 - amount)) - amount).max(0.0);
            height = height.max(((1.0 - smooth_amount) * (1.0 - foam)).max(0.01) * shore_mask);

            wet |= shore_mask != 0.0;
        }

        wet.then(|| pow2(height) * 0.5)
    }

    /// Breaking band nearest to `x`: a rational bump under a triangular window.
    pub fn near_waves(&self, x: f32, y: f32, timer: f32) -> f32 {
        let c = &self.config;
        let id = (timer + (x + c.interval * 0.5) * self.inv_interval).floor() as i32;
        let w_x = self.id_to_pos(id, timer);
        let curve = self.wave_curve(id, w_x, y);

        let steepness = self.inv_steepness / (1.0 + self.inv_steepness * pow2(w_x)) * c.steepness;

        let distance = x - w_x;
        let rational_bump = curve.height / (1.0 + curve.height * steepness * pow2(distance));
        let triangle = 1.0 - distance.abs() * self.inv_interval * 2.0;

        rational_bump * smooth(triangle)
    }

    /// Weight of the open-water swell at `x`. Exceeds 1 just before the
    /// breaker line and fades to 0 at `far_wave_decay_distance` beyond it.
    pub fn far_wave_blend(&self, x: f32) -> f32 {
        let c = &self.config;
        let start = c.breaker_offset(1.0);
        let decay = c.far_wave_decay_distance;

        let mut falloff = (x.min(start + decay) - start) - decay;
        falloff *= falloff;
        falloff /= pow2(decay);

        smoothstep(start - c.interval, start, x) * falloff
    }

    /// Unbroken swell: a squared triangle wave scaled by band power.
    pub fn far_waves(&self, x: f32, y: f32, timer: f32, blend: f32) -> f32 {
        let c = &self.config;
        let t = (x + timer * c.interval) * self.inv_interval;
        let mut triangle = (frac(t) - 0.5).abs() * 2.0;
        triangle *= triangle;
        let id = t.round_ties_even() as i32;

        smooth(triangle) * self.wave_power(id, y) * blend * c.far_wave_height
    }
}

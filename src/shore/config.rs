//! Shoreline coefficients shared by the height field and the shore/beach shaders.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Largest octave count accepted by the fractal noise helpers.
pub const MAX_NOISE_LEVEL: i32 = 8;

/// Tunable coefficients of one shoreline instance.
///
/// Loaded once and never mutated afterwards. The same struct drives the CPU
/// height field and the GPU uniform, so both always see identical values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoreConfig {
    /// Animation speed multiplier applied to wrapped session time.
    pub time_scale: f32,
    /// Along-shore scroll speed (m per animation second).
    pub side_scroll_speed: f32,
    /// Static along-shore offset.
    pub side_scroll_offset: f32,

    // -- Wave train --------------------------------------------------------

    /// Distance between consecutive wave crests (m).
    pub interval: f32,
    /// Number of wave bands between the breaker line and the open sea.
    pub number_of_waves: i32,
    /// fbm octaves for the along-shore wave power.
    pub noise_octaves: i32,
    /// Overall height multiplier for breaking waves.
    pub wave_power: f32,
    /// Along-shore width of the wave power noise (m).
    pub wave_width: f32,
    /// Normalized height at which a wave starts to break, in `[0, 1)`.
    pub wave_break_threshold: f32,
    /// Crest sharpness of the near-shore rational bump.
    pub steepness: f32,

    // -- Open water --------------------------------------------------------

    /// Height of the swell beyond the breaker line (m).
    pub far_wave_height: f32,
    /// Distance over which the far swell fades out (m).
    pub far_wave_decay_distance: f32,

    // -- Swash zone --------------------------------------------------------

    /// Number of older waves still tracked on the beach.
    pub swell_zone_buffer: i32,
    /// absfbm octaves for the ragged front of the run-up.
    pub front_wave_noise_level: i32,
    /// Along-shore width of the front noise (m).
    pub front_wave_width: f32,
    /// Deceleration of the run-up; higher values pull water back sooner.
    pub backwash_velocity: f32,
    /// Beach gradient inland of the waterline.
    pub beach_slope: f32,
    /// Vertical offset of the whole water surface (m).
    pub sea_level: f32,
    /// Foam trail length, only read by the beach shader.
    pub back_form_length: f32,

    // -- Time distortion ---------------------------------------------------

    /// How far (in wave periods) arrival times wander along the shore.
    pub time_distortion_power: f32,
    /// Along-shore frequency scale of the time distortion.
    pub time_distortion_width: f32,
    /// fbm octaves for the time distortion.
    pub time_distortion_noise_level: i32,
}

impl Default for ShoreConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            side_scroll_speed: 0.2,
            side_scroll_offset: 0.0,

            interval: 10.0,
            number_of_waves: 5,
            noise_octaves: 3,
            wave_power: 1.0,
            wave_width: 5.0,
            wave_break_threshold: 0.5,
            steepness: 1.0,

            far_wave_height: 0.2,
            far_wave_decay_distance: 20.0,

            swell_zone_buffer: 3,
            front_wave_noise_level: 3,
            front_wave_width: 5.0,
            backwash_velocity: 0.5,
            beach_slope: 0.01,
            sea_level: 0.0,
            back_form_length: 1.0,

            time_distortion_power: 0.5,
            time_distortion_width: 1.0,
            time_distortion_noise_level: 2,
        }
    }
}

impl ShoreConfig {
    /// Check every coefficient the field divides by or loops over.
    ///
    /// The height field itself never guards against degenerate values, so
    /// this must pass before a field is built.
    pub fn validate(&self) -> Result<()> {
        let floats = [
            ("time_scale", self.time_scale),
            ("side_scroll_speed", self.side_scroll_speed),
            ("side_scroll_offset", self.side_scroll_offset),
            ("interval", self.interval),
            ("wave_power", self.wave_power),
            ("wave_width", self.wave_width),
            ("wave_break_threshold", self.wave_break_threshold),
            ("steepness", self.steepness),
            ("far_wave_height", self.far_wave_height),
            ("far_wave_decay_distance", self.far_wave_decay_distance),
            ("front_wave_width", self.front_wave_width),
            ("backwash_velocity", self.backwash_velocity),
            ("beach_slope", self.beach_slope),
            ("sea_level", self.sea_level),
            ("back_form_length", self.back_form_length),
            ("time_distortion_power", self.time_distortion_power),
            ("time_distortion_width", self.time_distortion_width),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(Error::coefficient(name, value, "must be finite"));
            }
        }

        let positive = [
            ("interval", self.interval),
            ("wave_width", self.wave_width),
            ("steepness", self.steepness),
            ("far_wave_decay_distance", self.far_wave_decay_distance),
            ("front_wave_width", self.front_wave_width),
            ("backwash_velocity", self.backwash_velocity),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(Error::coefficient(name, value, "must be greater than zero"));
            }
        }

        if !(0.0..1.0).contains(&self.wave_break_threshold) {
            return Err(Error::coefficient(
                "wave_break_threshold",
                self.wave_break_threshold,
                "must be in [0, 1)",
            ));
        }

        // Below two bands the breaker line sits on top of the swash zone.
        if self.number_of_waves < 2 {
            return Err(Error::coefficient("number_of_waves", self.number_of_waves, "must be at least 2"));
        }

        if self.swell_zone_buffer < 0 {
            return Err(Error::coefficient("swell_zone_buffer", self.swell_zone_buffer, "must not be negative"));
        }

        let levels = [
            ("noise_octaves", self.noise_octaves),
            ("front_wave_noise_level", self.front_wave_noise_level),
            ("time_distortion_noise_level", self.time_distortion_noise_level),
        ];
        for (name, level) in levels {
            if !(1..=MAX_NOISE_LEVEL).contains(&level) {
                return Err(Error::coefficient(name, level, "octave count must be in 1..=8"));
            }
        }

        if self.time_scale == 0.0 {
            log::warn!("ShoreConfig: time_scale is 0, waves will not move");
        }

        Ok(())
    }

    /// Load and validate a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::debug!("Loaded shore config from {}", path.display());
        Ok(config)
    }

    /// Save as pretty JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Distance from the shoreline at which band `n` (counted from the open
    /// sea) reaches the breaker zone.
    #[inline]
    pub fn breaker_offset(&self, n: f32) -> f32 {
        (self.number_of_waves as f32 - n) * self.interval
    }
}

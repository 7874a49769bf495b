//! GPU-ready shoreline uniform (96 bytes, 16-byte aligned).
//!
//! Both the shore and the beach material read this one block, so there is
//! no per-material copy of the coefficients to keep in step. Animation time
//! is driven from the CPU; the shader must not advance time on its own.

use bytemuck::{Pod, Zeroable};

use crate::shore::config::ShoreConfig;
use crate::shore::field::ShorelineField;

/// GPU uniform for the shore and beach shaders. Must match `ShoreParams`
/// in the shader source.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ShoreUniform {
    pub manual_time_offset: f32,
    pub side_scroll_speed: f32,
    /// Side-scroll offset with the session seed folded in.
    pub side_scroll_offset: f32,
    pub interval: f32,
    // -- 16 bytes --
    pub wave_power: f32,
    pub wave_width: f32,
    pub wave_break_threshold: f32,
    pub steepness: f32,
    // -- 16 bytes --
    pub far_wave_height: f32,
    pub far_wave_decay_distance: f32,
    pub front_wave_width: f32,
    pub backwash_velocity: f32,
    // -- 16 bytes --
    pub beach_slope: f32,
    pub sea_level: f32,
    pub time_distortion_power: f32,
    pub time_distortion_width: f32,
    // -- 16 bytes --
    pub back_form_length: f32,
    pub number_of_waves: i32,
    pub noise_octaves: i32,
    pub swell_zone_buffer: i32,
    // -- 16 bytes --
    pub front_wave_noise_level: i32,
    pub time_distortion_noise_level: i32,
    pub _pad: [f32; 2],
    // -- 16 bytes --
    // Total: 96 bytes
}

impl ShoreUniform {
    /// Pack `config` for the shader at the given animation time.
    pub fn new(config: &ShoreConfig, seed: f32, animation_time: f32) -> Self {
        Self {
            manual_time_offset: animation_time,
            side_scroll_speed: config.side_scroll_speed,
            side_scroll_offset: config.side_scroll_offset + seed,
            interval: config.interval,
            wave_power: config.wave_power,
            wave_width: config.wave_width,
            wave_break_threshold: config.wave_break_threshold,
            steepness: config.steepness,
            far_wave_height: config.far_wave_height,
            far_wave_decay_distance: config.far_wave_decay_distance,
            front_wave_width: config.front_wave_width,
            backwash_velocity: config.backwash_velocity,
            beach_slope: config.beach_slope,
            sea_level: config.sea_level,
            time_distortion_power: config.time_distortion_power,
            time_distortion_width: config.time_distortion_width,
            back_form_length: config.back_form_length,
            number_of_waves: config.number_of_waves,
            noise_octaves: config.noise_octaves,
            swell_zone_buffer: config.swell_zone_buffer,
            front_wave_noise_level: config.front_wave_noise_level,
            time_distortion_noise_level: config.time_distortion_noise_level,
            _pad: [0.0; 2],
        }
    }

    /// Uniform matching `field` at session time `time`.
    pub fn from_field(field: &ShorelineField, time: f64) -> Self {
        Self::new(field.config(), field.seed(), field.animation_time(time))
    }

    /// Advance to a new frame; everything else stays fixed for the session.
    #[inline]
    pub fn set_animation_time(&mut self, animation_time: f32) {
        self.manual_time_offset = animation_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shore_uniform_size() {
        assert_eq!(std::mem::size_of::<ShoreUniform>(), 96);
    }

    #[test]
    fn test_shore_uniform_alignment() {
        assert_eq!(std::mem::size_of::<ShoreUniform>() % 16, 0);
    }

    #[test]
    fn test_bytemuck_cast() {
        let u = ShoreUniform::zeroed();
        let bytes = bytemuck::bytes_of(&u);
        assert_eq!(bytes.len(), 96);
    }

    #[test]
    fn test_seed_folded_into_scroll_offset() {
        let config = ShoreConfig { side_scroll_offset: 2.0, ..Default::default() };
        let u = ShoreUniform::new(&config, 100.0, 0.0);
        assert_eq!(u.side_scroll_offset, 102.0);
        assert_eq!(u.number_of_waves, config.number_of_waves);
    }

    #[test]
    fn test_from_field_time() {
        let config = ShoreConfig { time_scale: 0.5, ..Default::default() };
        let field = ShorelineField::new(config, 0.0).expect("valid config");
        let mut u = ShoreUniform::from_field(&field, 10.0);
        assert!((u.manual_time_offset - 5.0).abs() < 1e-6);
        u.set_animation_time(field.animation_time(20.0));
        assert!((u.manual_time_offset - 10.0).abs() < 1e-6);
    }
}

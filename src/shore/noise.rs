//! 1D value noise for the wave field.
//!
//! Noise is keyed by `(lattice cell, seed)` where the seed is usually a wave
//! band id, so each band gets its own independent along-shore profile. The
//! hash is a variant of Giorgi Azmaipharashvili's fiHash (MIT).

use crate::math::shading::smooth;
use crate::shore::config::MAX_NOISE_LEVEL;

/// Integer hash producing a value in [0, 1).
#[inline]
pub fn hash(x: i32, y: i32) -> f32 {
    let ux = (x as u32).wrapping_add(0x7FFF_FFFF).wrapping_mul(141_421_356);
    let uy = (y as u32).wrapping_add(0x7FFF_FFFF).wrapping_mul(2_718_281_828);
    let h = (ux ^ uy).wrapping_mul(3_141_592_653);
    // Top 24 bits convert to f32 exactly, which keeps the result below 1.
    (h >> 8) as f32 * (1.0 / 16_777_216.0)
}

/// Value noise along `x`, smoothly interpolated between lattice hashes.
#[inline]
pub fn noise1d(x: f32, seed: i32) -> f32 {
    let cell = x.floor();
    let t = smooth(x - cell);
    let q = cell as i32;

    let h0 = hash(q, seed);
    let h1 = hash(q.wrapping_add(1), seed);
    h0 + (h1 - h0) * t
}

/// Fractal sum of `level` octaves, normalized to [0, 1].
///
/// The first octave samples at twice the input frequency. `level` must be
/// in `1..=MAX_NOISE_LEVEL`; zero octaves normalize to NaN.
pub fn fbm1d(x: f32, seed: i32, level: i32) -> f32 {
    debug_assert!((1..=MAX_NOISE_LEVEL).contains(&level), "octave count {level} out of range");
    let mut result = 0.0;
    let mut m = 0.5;
    let mut n = 2.0;

    for _ in 0..level {
        result += noise1d(x * n, seed) * m;
        m *= 0.5;
        n *= 2.0;
    }

    result * (1.0 / (1.0 - m * 2.0))
}

/// Ridged fractal sum of `|noise - 0.5|`, in [0, 0.5]. Same octave range
/// as [`fbm1d`].
pub fn absfbm1d(x: f32, seed: i32, level: i32) -> f32 {
    debug_assert!((1..=MAX_NOISE_LEVEL).contains(&level), "octave count {level} out of range");
    let mut result = 0.0;
    let mut m = 1.0;
    let mut n = 1.0;

    for _ in 0..level {
        m *= 0.5;
        n *= 2.0;
        result += (noise1d(x * n, seed) - 0.5).abs() * m;
    }

    result * (1.0 / (1.0 - m))
}

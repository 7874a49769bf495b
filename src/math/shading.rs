//! Shader-style scalar helpers.
//!
//! These follow HLSL semantics rather than the usual Rust ones so that the
//! CPU evaluation of the wave field matches what the shader computes:
//! [`saturate`] maps NaN to 0 and [`smoothstep`] accepts `min > max`.

/// Fractional part, `x - floor(x)`. Always in `[0, 1)` for finite input.
#[inline]
pub fn frac(x: f32) -> f32 {
    x - x.floor()
}

/// Clamp to `[0, 1]`, with NaN mapped to 0.
#[inline]
pub fn saturate(x: f32) -> f32 {
    if x > 0.0 {
        x.min(1.0)
    } else {
        0.0
    }
}

/// `0` when `x < edge`, otherwise `1`.
#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge { 0.0 } else { 1.0 }
}

/// Cubic Hermite kernel `x²(3 - 2x)`, unclamped.
#[inline]
pub fn smooth(x: f32) -> f32 {
    x * x * (3.0 - 2.0 * x)
}

/// Smooth ramp from 0 at `min` to 1 at `max`. Reversed when `min > max`.
#[inline]
pub fn smoothstep(min: f32, max: f32, x: f32) -> f32 {
    smooth(saturate((x - min) / (max - min)))
}

#[inline]
pub fn pow2(x: f32) -> f32 {
    x * x
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * saturate(t)
}

/// Wrap `t` into `[0, length]`, like a sawtooth with period `length`.
#[inline]
pub fn repeat(t: f32, length: f32) -> f32 {
    (t - (t / length).floor() * length).clamp(0.0, length)
}

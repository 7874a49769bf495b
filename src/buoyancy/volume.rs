//! Submerged volume of simple float shapes.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Shape used to approximate a floating object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeGeometry {
    #[default]
    Sphere,
    /// Ring lying flat on the water, like a swim ring.
    Torus,
}

/// How much of a body is under water.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Submersion {
    /// Submerged depth of the shape, clamped to its height.
    pub depth: f32,
    /// Displaced volume (m³).
    pub volume: f32,
    /// Frontal area facing vertical motion (m²).
    pub area: f32,
    /// Fraction used to blend drag density from air to water, in [0, 1].
    pub immersion: f32,
}

/// Submersion of a shape whose center lies `depth_below_surface` under the
/// water (negative when above it).
///
/// Torus depth is measured on a sphere the thickness of the tube placed at
/// the ring's center, regardless of orientation. Degenerate shapes (no
/// radius, or a ring whose hole fills it) displace nothing.
pub fn submerge(geometry: VolumeGeometry, radius: f32, inner_radius: f32, depth_below_surface: f32) -> Submersion {
    let radius = radius.max(0.0);
    let (depth, volume, area) = match geometry {
        VolumeGeometry::Sphere => {
            if radius == 0.0 {
                return Submersion::default();
            }
            let depth = (depth_below_surface + radius).clamp(0.0, radius * 2.0);
            // Spherical cap
            let volume = PI * depth * depth * (radius - depth / 3.0);
            (depth, volume, PI * radius * radius)
        }
        VolumeGeometry::Torus => {
            let minor = ((radius - inner_radius) * 0.5).max(0.0);
            if minor == 0.0 {
                return Submersion::default();
            }
            let depth = (depth_below_surface + minor).clamp(0.0, minor * 2.0);

            // Circular segment of the tube cross-section, swept around the ring
            let theta = 2.0 * ((minor - depth) / minor).clamp(-1.0, 1.0).acos();
            let segment = 0.5 * minor * minor * (theta - theta.sin());
            let length = minor * PI * 2.0;
            (depth, segment * length, minor * length * 2.0)
        }
    };

    Submersion {
        depth,
        volume,
        area,
        immersion: (depth / (radius * 2.0)).clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_dry() {
        let s = submerge(VolumeGeometry::Sphere, 0.5, 0.0, -3.0);
        assert_eq!(s.depth, 0.0);
        assert_eq!(s.volume, 0.0);
        assert_eq!(s.immersion, 0.0);
    }

    #[test]
    fn test_sphere_half_submerged() {
        let r = 0.5;
        let s = submerge(VolumeGeometry::Sphere, r, 0.0, 0.0);
        let half = 2.0 / 3.0 * PI * r * r * r;
        assert!((s.volume - half).abs() < 1e-5);
        assert!((s.immersion - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_sphere_fully_submerged() {
        let r = 0.5;
        let s = submerge(VolumeGeometry::Sphere, r, 0.0, 10.0);
        let full = 4.0 / 3.0 * PI * r * r * r;
        assert!((s.volume - full).abs() < 1e-5);
        assert_eq!(s.depth, 1.0);
        assert_eq!(s.immersion, 1.0);
        assert!((s.area - PI * r * r).abs() < 1e-6);
    }

    #[test]
    fn test_torus_extremes() {
        let dry = submerge(VolumeGeometry::Torus, 1.0, 0.6, -5.0);
        assert!(dry.volume.abs() < 1e-6);

        let full = submerge(VolumeGeometry::Torus, 1.0, 0.6, 5.0);
        let minor: f32 = 0.2;
        // Whole tube cross-section swept around the ring
        let expected = PI * minor * minor * (minor * PI * 2.0);
        assert!((full.volume - expected).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_shapes_displace_nothing() {
        // Hole wider than the ring
        let s = submerge(VolumeGeometry::Torus, 0.5, 0.6, 0.2);
        assert_eq!(s, Submersion::default());

        // Hole exactly as wide as the ring
        let s = submerge(VolumeGeometry::Torus, 0.5, 0.5, 0.2);
        assert_eq!(s, Submersion::default());
        assert!(!s.volume.is_nan());

        let s = submerge(VolumeGeometry::Sphere, -1.0, 0.0, 0.2);
        assert_eq!(s, Submersion::default());
    }

    #[test]
    fn test_torus_volume_monotonic() {
        let mut prev = 0.0;
        for i in 0..=40 {
            let d = -0.3 + i as f32 * 0.015;
            let s = submerge(VolumeGeometry::Torus, 1.0, 0.6, d);
            assert!(s.volume + 1e-6 >= prev);
            prev = s.volume;
        }
    }
}

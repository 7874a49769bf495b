//! Kinematic floating body driven by the shoreline field.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::buoyancy::volume::{submerge, VolumeGeometry};
use crate::core::types::{Quat, Result, Vec3};
use crate::core::Error;
use crate::shore::ShorelineField;

/// Vertical gravity (m/s²).
pub const GRAVITY: f32 = -9.81;

/// Drag coefficient of a sphere.
const DRAG_COEFFICIENT: f32 = 0.47;

/// Acceleration clamp; very light bodies otherwise blow up.
const MAX_ACCELERATION: f32 = 100.0;

/// Velocity kept per 1/100 s while floating.
const FLOAT_DAMPING: f32 = 0.97;

/// Rate at which a floating body turns toward the surface normal (1/s).
const ROTATION_RATE: f32 = 5.0;

/// Spacing of the finite differences for the surface normal (m).
const NORMAL_DELTA: f32 = 0.01;

/// Physical description of a floating object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuoyancyParams {
    /// Outer radius (m).
    pub radius: f32,
    /// Hole radius, torus only (m).
    pub inner_radius: f32,
    /// Mass (kg).
    pub mass: f32,
    /// Air density (kg/m³), roughly sea level at 21 °C.
    pub air_density: f32,
    /// Water density (kg/m³), sea water.
    pub water_density: f32,
    pub geometry: VolumeGeometry,
    /// Tilt the body to follow the wave slope.
    pub apply_rotation: bool,
    /// Split each update into 10 ms steps.
    pub substepping: bool,
}

impl Default for BuoyancyParams {
    fn default() -> Self {
        Self {
            radius: 0.5,
            inner_radius: 0.0,
            mass: 20.0,
            air_density: 1.2,
            water_density: 1025.0,
            geometry: VolumeGeometry::Sphere,
            apply_rotation: false,
            substepping: false,
        }
    }
}

impl BuoyancyParams {
    /// Check the shape and densities before a body is built from them.
    ///
    /// A zero radius or mass is accepted and leaves the body inert.
    pub fn validate(&self) -> Result<()> {
        let floats = [
            ("radius", self.radius),
            ("inner_radius", self.inner_radius),
            ("mass", self.mass),
            ("air_density", self.air_density),
            ("water_density", self.water_density),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(Error::coefficient(name, value, "must be finite"));
            }
            if value < 0.0 {
                return Err(Error::coefficient(name, value, "must not be negative"));
            }
        }

        if self.water_density == 0.0 {
            return Err(Error::coefficient("water_density", self.water_density, "must be greater than zero"));
        }

        if self.geometry == VolumeGeometry::Torus && self.radius > 0.0 && self.inner_radius >= self.radius {
            return Err(Error::coefficient("inner_radius", self.inner_radius, "must be smaller than radius"));
        }

        Ok(())
    }
}

/// A body that bobs on the water surface.
///
/// Only the vertical axis is simulated. Surface queries are rate-limited:
/// bodies close to the observer resample up to 60 times a second, distant
/// ones 10 times, and bodies over dry land once a second until water
/// reaches them again.
#[derive(Clone, Debug)]
pub struct BuoyantBody {
    params: BuoyancyParams,
    position: Vec3,
    rotation: Quat,
    target_rotation: Quat,
    velocity: Vec3,
    acceleration: Vec3,
    depth: f32,
    floated: bool,
    active: bool,

    surface: Option<f32>,
    water_normal: Vec3,
    sample_timer: f32,
    lazy: bool,
}

impl BuoyantBody {
    /// Validate `params` and place a body at rest at `position`.
    pub fn new(params: BuoyancyParams, position: Vec3) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            position,
            rotation: Quat::IDENTITY,
            target_rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            depth: 0.0,
            floated: false,
            active: true,
            surface: None,
            water_normal: Vec3::Y,
            sample_timer: 0.0,
            lazy: false,
        })
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self.target_rotation = rotation;
        self
    }

    /// Start the resampling timer at a random phase so that many bodies
    /// spawned together don't all query the field on the same frame.
    pub fn randomize_sample_phase<R: Rng>(&mut self, rng: &mut R) {
        self.sample_timer = rng.gen_range(0.0..1.0);
    }

    pub fn params(&self) -> &BuoyancyParams {
        &self.params
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    /// Submerged depth of the shape after the last update.
    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn is_floating(&self) -> bool {
        self.floated
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last sampled water height under the body, if any.
    pub fn surface_height(&self) -> Option<f32> {
        self.surface
    }

    /// Freeze or release the body. Either way it restarts from rest.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.velocity = Vec3::ZERO;
        self.acceleration = Vec3::ZERO;
    }

    /// Move the body, e.g. when it is picked up.
    pub fn teleport(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
    }

    /// Advance the simulation by `dt` seconds at session time `time`.
    ///
    /// `observer` is the viewer position used to decide how often the
    /// water height is resampled.
    pub fn update(&mut self, field: &ShorelineField, time: f64, dt: f32, observer: Vec3) {
        // No volume or no mass: nothing to simulate
        if self.params.mass == 0.0 || self.params.radius == 0.0 {
            return;
        }

        if self.params.substepping {
            let steps = (dt * 100.0).ceil().max(1.0) as u32;
            let sub_dt = dt / steps as f32;
            for _ in 0..steps {
                self.tick(field, time, sub_dt, observer);
            }
        } else {
            self.tick(field, time, dt, observer);
        }
    }

    fn sample_surface(&mut self, field: &ShorelineField, time: f64, dt: f32, observer: Vec3) {
        if self.lazy {
            self.sample_timer += dt;
        } else {
            let rate = 10.0 + 50.0 / (1.0 + self.position.distance_squared(observer) * 0.005);
            self.sample_timer += dt * rate;
        }

        if self.sample_timer < 1.0 {
            return;
        }
        self.sample_timer = self.sample_timer.fract();

        self.surface = field.height(self.position, time);
        // Shallow water never needs buoyancy instantly, so a slow recheck is fine
        self.lazy = self.surface.is_none();

        if self.params.apply_rotation && self.floated {
            self.water_normal = field.surface_normal(self.position, time, NORMAL_DELTA);
        }

        log::trace!("BuoyantBody: resampled surface {:?} at {:?}", self.surface, self.position);
    }

    fn tick(&mut self, field: &ShorelineField, time: f64, dt: f32, observer: Vec3) {
        self.sample_surface(field, time, dt, observer);

        let p = &self.params;
        let below_surface = match self.surface {
            Some(h) => h - self.position.y,
            None => f32::NEG_INFINITY,
        };
        let submersion = submerge(p.geometry, p.radius, p.inner_radius, below_surface);
        self.depth = submersion.depth;

        if !self.active {
            return;
        }

        // Archimedes, vertical only
        let buoyancy = p.water_density * -GRAVITY * submersion.volume;
        let density = p.air_density + (p.water_density - p.air_density) * submersion.immersion;

        if !self.floated && self.depth > 0.0 {
            self.floated = true;
        } else if self.floated && self.depth == 0.0 {
            self.floated = false;
        }

        if p.apply_rotation && self.floated {
            let up = self.rotation * Vec3::Y;
            // Either face of the body may point up
            let normal = if up.dot(self.water_normal) > 0.0 { self.water_normal } else { -self.water_normal };
            self.target_rotation = Quat::from_rotation_arc(up, normal) * self.rotation;
        }

        let vy = self.velocity.y;
        let drag = density * submersion.area * vy.abs() * vy * -0.5 * DRAG_COEFFICIENT;
        self.acceleration.y = ((p.mass * GRAVITY + buoyancy + drag) / p.mass).clamp(-MAX_ACCELERATION, MAX_ACCELERATION);

        self.velocity += self.acceleration * dt;

        if self.floated {
            self.velocity *= FLOAT_DAMPING.powf(dt * 100.0);
            if p.apply_rotation {
                self.rotation = self.rotation.slerp(self.target_rotation, (ROTATION_RATE * dt).min(1.0)).normalize();
            }
        }

        self.position += self.velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shore::ShoreConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DT: f32 = 1.0 / 60.0;

    /// Flat open sea at height 0 far offshore.
    fn calm_sea() -> ShorelineField {
        let config = ShoreConfig { far_wave_height: 0.0, ..Default::default() };
        ShorelineField::new(config, 0.0).expect("valid config")
    }

    fn run(body: &mut BuoyantBody, field: &ShorelineField, seconds: f32) {
        let steps = (seconds / DT) as u32;
        for i in 0..steps {
            let observer = body.position();
            body.update(field, i as f64 * DT as f64, DT, observer);
        }
    }

    #[test]
    fn test_settles_at_equilibrium() {
        let field = calm_sea();
        let mut body = BuoyantBody::new(BuoyancyParams::default(), Vec3::new(300.0, 2.0, 0.0)).expect("valid params");
        run(&mut body, &field, 20.0);

        assert!(body.is_floating());
        assert!(body.velocity().y.abs() < 0.1);

        // Displaced water weighs as much as the body
        let p = body.params();
        let s = submerge(p.geometry, p.radius, p.inner_radius, -body.position().y);
        let displaced = s.volume * p.water_density;
        assert!((displaced - p.mass).abs() / p.mass < 0.1, "displaced {displaced} kg");
    }

    #[test]
    fn test_substepping_settles_too() {
        let field = calm_sea();
        let params = BuoyancyParams { substepping: true, ..Default::default() };
        let mut body = BuoyantBody::new(params, Vec3::new(300.0, 1.0, 0.0)).expect("valid params");
        run(&mut body, &field, 20.0);
        assert!(body.is_floating());
        assert!(body.position().y > 0.0 && body.position().y < 0.5);
    }

    #[test]
    fn test_heavy_body_sinks() {
        let field = calm_sea();
        let params = BuoyancyParams { mass: 2000.0, ..Default::default() };
        let mut body = BuoyantBody::new(params, Vec3::new(300.0, 0.0, 0.0)).expect("valid params");
        run(&mut body, &field, 5.0);
        assert!(body.position().y < -1.0);
        assert!(body.velocity().y < 0.0);
    }

    #[test]
    fn test_falls_freely_over_dry_land() {
        let field = calm_sea();
        let mut body = BuoyantBody::new(BuoyancyParams::default(), Vec3::new(-100.0, 50.0, 0.0)).expect("valid params");
        run(&mut body, &field, 1.0);
        assert!(!body.is_floating());
        assert_eq!(body.surface_height(), None);
        assert!(body.velocity().y < -8.0);
    }

    #[test]
    fn test_inactive_body_stays_put() {
        let field = calm_sea();
        let start = Vec3::new(300.0, 3.0, 0.0);
        let mut body = BuoyantBody::new(BuoyancyParams::default(), start).expect("valid params");
        body.set_active(false);
        run(&mut body, &field, 2.0);
        assert_eq!(body.position(), start);
        assert_eq!(body.velocity(), Vec3::ZERO);
    }

    #[test]
    fn test_massless_body_is_ignored() {
        let field = calm_sea();
        let start = Vec3::new(300.0, 3.0, 0.0);
        let params = BuoyancyParams { mass: 0.0, ..Default::default() };
        let mut body = BuoyantBody::new(params, start).expect("valid params");
        run(&mut body, &field, 1.0);
        assert_eq!(body.position(), start);
    }

    #[test]
    fn test_rotation_aligns_to_flat_water() {
        let field = calm_sea();
        let params = BuoyancyParams { apply_rotation: true, ..Default::default() };
        let mut body = BuoyantBody::new(params, Vec3::new(300.0, 0.3, 0.0)).expect("valid params")
            .with_rotation(Quat::from_rotation_x(0.6));
        run(&mut body, &field, 10.0);
        let up = body.rotation() * Vec3::Y;
        assert!(up.dot(Vec3::Y) > 0.99);
    }

    #[test]
    fn test_distant_bodies_sample_less_often() {
        let field = calm_sea();
        let mut near = BuoyantBody::new(BuoyancyParams::default(), Vec3::new(300.0, 0.3, 0.0)).expect("valid params");
        let mut far = BuoyantBody::new(BuoyancyParams::default(), Vec3::new(300.0, 0.3, 0.0)).expect("valid params");

        // First sample: 60/s close by, barely above 10/s a kilometre away
        near.update(&field, 0.0, 0.02, near.position());
        far.update(&field, 0.0, 0.02, Vec3::new(1300.0, 0.0, 0.0));
        assert!(near.surface_height().is_some());
        assert_eq!(far.surface_height(), None);
    }

    #[test]
    fn test_random_phase_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut body = BuoyantBody::new(BuoyancyParams::default(), Vec3::ZERO).expect("valid params");
        body.randomize_sample_phase(&mut rng);
        assert!((0.0..1.0).contains(&body.sample_timer));
    }

    #[test]
    fn test_rejects_ring_hole_wider_than_ring() {
        let params: BuoyancyParams =
            serde_json::from_str(r#"{ "geometry": "Torus", "radius": 0.5, "inner_radius": 0.6 }"#).expect("parse failed");
        let err = BuoyantBody::new(params, Vec3::ZERO).unwrap_err();
        assert!(matches!(err, Error::InvalidCoefficient { name: "inner_radius", .. }));
    }

    #[test]
    fn test_rejects_closed_ring() {
        let params = BuoyancyParams {
            geometry: VolumeGeometry::Torus,
            radius: 0.5,
            inner_radius: 0.5,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        let params = BuoyancyParams { radius: -0.5, ..Default::default() };
        assert!(matches!(params.validate(), Err(Error::InvalidCoefficient { name: "radius", .. })));

        let params = BuoyancyParams { mass: f32::NAN, ..Default::default() };
        assert!(params.validate().is_err());

        let params = BuoyancyParams { water_density: 0.0, ..Default::default() };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_torus_floats() {
        let field = calm_sea();
        let params = BuoyancyParams {
            geometry: VolumeGeometry::Torus,
            radius: 0.6,
            inner_radius: 0.2,
            mass: 5.0,
            ..Default::default()
        };
        let mut body = BuoyantBody::new(params, Vec3::new(300.0, 1.0, 0.0)).expect("valid params");
        run(&mut body, &field, 20.0);
        assert!(body.is_floating());
        // Light ring rides high: center a little under one tube radius up
        assert!(body.position().y > 0.1 && body.position().y < 0.2);
    }
}

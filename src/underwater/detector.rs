//! Underwater state of the viewer and its cameras.

use crate::core::types::Vec3;
use crate::shore::ShorelineField;

/// Change of underwater state reported by [`UnderwaterDetector`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnderwaterTransition {
    Entered,
    Exited,
}

/// Which camera a local post-process volume should follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Camera {
    Screen,
    Photo,
}

/// How the underwater post-process effect should be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostProcessMode {
    Disabled,
    /// Every camera is under water.
    Global,
    /// Only one camera is; center the effect volume on it.
    LocalAt(Camera),
}

/// Positions of the cameras rendering the scene this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub screen: Vec3,
    /// Set while a photo camera is active.
    pub photo: Option<Vec3>,
}

impl CameraRig {
    pub fn new(screen: Vec3) -> Self {
        Self { screen, photo: None }
    }

    pub fn with_photo(mut self, photo: Vec3) -> Self {
        self.photo = Some(photo);
        self
    }

    /// The point the player hears from: the photo camera when one is
    /// active, the screen camera otherwise.
    pub fn listener(&self) -> Vec3 {
        self.photo.unwrap_or(self.screen)
    }
}

/// Result of one [`UnderwaterDetector::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnderwaterFrame {
    pub post_process: PostProcessMode,
    pub transition: Option<UnderwaterTransition>,
    pub listener: Vec3,
}

/// Strictly below the surface. Dry sand counts as above water.
pub fn is_submerged(field: &ShorelineField, point: Vec3, time: f64) -> bool {
    field.height(point, time).is_some_and(|h| point.y < h)
}

pub fn post_process_mode(screen_under: bool, photo_under: bool) -> PostProcessMode {
    match (screen_under, photo_under) {
        (true, true) => PostProcessMode::Global,
        (true, false) => PostProcessMode::LocalAt(Camera::Screen),
        (false, true) => PostProcessMode::LocalAt(Camera::Photo),
        (false, false) => PostProcessMode::Disabled,
    }
}

/// Tracks whether the listener is under water.
///
/// Entering needs the point strictly below the surface and leaving needs it
/// strictly above, so sitting exactly on the surface keeps the current state.
#[derive(Clone, Debug, Default)]
pub struct UnderwaterDetector {
    underwater: bool,
}

impl UnderwaterDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_underwater(&self) -> bool {
        self.underwater
    }

    /// Feed one observation of height `y` against the water surface.
    pub fn observe(&mut self, y: f32, surface: Option<f32>) -> Option<UnderwaterTransition> {
        if !self.underwater {
            if surface.is_some_and(|h| y < h) {
                self.underwater = true;
                return Some(UnderwaterTransition::Entered);
            }
        } else if surface.is_none_or(|h| y > h) {
            self.underwater = false;
            return Some(UnderwaterTransition::Exited);
        }
        None
    }

    /// Evaluate both cameras for this frame.
    pub fn update(&mut self, field: &ShorelineField, rig: &CameraRig, time: f64) -> UnderwaterFrame {
        let screen_under = is_submerged(field, rig.screen, time);
        let photo_under = rig.photo.is_some_and(|p| is_submerged(field, p, time));

        let listener = rig.listener();
        let transition = self.observe(listener.y, field.height(listener, time));
        if let Some(t) = transition {
            log::debug!("UnderwaterDetector: {:?} at {:?}", t, listener);
        }

        UnderwaterFrame {
            post_process: post_process_mode(screen_under, photo_under),
            transition,
            listener,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shore::ShoreConfig;

    fn calm_sea() -> ShorelineField {
        let config = ShoreConfig { far_wave_height: 0.0, sea_level: 1.0, ..Default::default() };
        ShorelineField::new(config, 0.0).expect("valid config")
    }

    #[test]
    fn test_post_process_modes() {
        assert_eq!(post_process_mode(true, true), PostProcessMode::Global);
        assert_eq!(post_process_mode(true, false), PostProcessMode::LocalAt(Camera::Screen));
        assert_eq!(post_process_mode(false, true), PostProcessMode::LocalAt(Camera::Photo));
        assert_eq!(post_process_mode(false, false), PostProcessMode::Disabled);
    }

    #[test]
    fn test_hysteresis() {
        let mut d = UnderwaterDetector::new();
        assert_eq!(d.observe(1.0, Some(1.0)), None);
        assert_eq!(d.observe(0.5, Some(1.0)), Some(UnderwaterTransition::Entered));
        assert!(d.is_underwater());
        // Exactly on the surface: stay under
        assert_eq!(d.observe(1.0, Some(1.0)), None);
        assert_eq!(d.observe(0.5, Some(1.0)), None);
        assert_eq!(d.observe(1.5, Some(1.0)), Some(UnderwaterTransition::Exited));
        assert!(!d.is_underwater());
    }

    #[test]
    fn test_dry_sand_exits() {
        let mut d = UnderwaterDetector::new();
        assert_eq!(d.observe(-10.0, None), None);
        d.observe(0.0, Some(1.0));
        assert_eq!(d.observe(-10.0, None), Some(UnderwaterTransition::Exited));
    }

    #[test]
    fn test_listener_prefers_photo_camera() {
        let screen = Vec3::new(1.0, 2.0, 3.0);
        let photo = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(CameraRig::new(screen).listener(), screen);
        assert_eq!(CameraRig::new(screen).with_photo(photo).listener(), photo);
    }

    #[test]
    fn test_update_against_field() {
        let field = calm_sea();
        let mut d = UnderwaterDetector::new();

        let diver = CameraRig::new(Vec3::new(300.0, -2.0, 0.0));
        let frame = d.update(&field, &diver, 0.0);
        assert_eq!(frame.transition, Some(UnderwaterTransition::Entered));
        assert_eq!(frame.post_process, PostProcessMode::LocalAt(Camera::Screen));

        let with_photo = diver.with_photo(Vec3::new(300.0, 5.0, 0.0));
        let frame = d.update(&field, &with_photo, 0.0);
        // Listener follows the photo camera, which is in the air
        assert_eq!(frame.transition, Some(UnderwaterTransition::Exited));
        assert_eq!(frame.post_process, PostProcessMode::LocalAt(Camera::Screen));

        let both = CameraRig::new(Vec3::new(300.0, -2.0, 0.0)).with_photo(Vec3::new(310.0, -1.0, 0.0));
        let frame = d.update(&field, &both, 0.0);
        assert_eq!(frame.post_process, PostProcessMode::Global);
        assert_eq!(frame.transition, Some(UnderwaterTransition::Entered));
    }

    #[test]
    fn test_inland_is_never_submerged() {
        let field = calm_sea();
        assert!(!is_submerged(&field, Vec3::new(-100.0, -50.0, 0.0), 0.0));
    }
}

//! Underwater detection and surf audio placement for the local viewer.

pub mod audio;
pub mod detector;

pub use audio::{surf_audio, SurfAudio};
pub use detector::{
    is_submerged, post_process_mode, Camera, CameraRig, PostProcessMode, UnderwaterDetector, UnderwaterFrame,
    UnderwaterTransition,
};

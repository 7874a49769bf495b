//! Procedural shoreline: coefficients, noise, wave stages and the height field.

pub mod config;
pub mod noise;
pub mod wave;
pub mod field;
pub mod uniform;
pub mod scroll;

pub use config::ShoreConfig;
pub use field::ShorelineField;
pub use scroll::ScrollStrip;
pub use uniform::ShoreUniform;
pub use wave::{WaveCurve, WaveModel};

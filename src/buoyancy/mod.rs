//! Floating objects on the shoreline surface.

pub mod body;
pub mod volume;

pub use body::{BuoyancyParams, BuoyantBody, GRAVITY};
pub use volume::{submerge, Submersion, VolumeGeometry};

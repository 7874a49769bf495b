//! Mathematical utilities

pub mod aabb;
pub mod frame;
pub mod shading;

pub use aabb::Aabb;
pub use frame::ShoreFrame;

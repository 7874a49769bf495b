//! Seashore - procedural shoreline water surface
//!
//! A closed-form height field for a wave-driven beach: breaking bands near
//! the shore, swash running up the sand and swell out at sea. Gameplay code
//! queries the same surface the shore shader draws, for floating objects and
//! underwater checks.

pub mod core;
pub mod math;
pub mod shore;
pub mod session;
pub mod buoyancy;
pub mod underwater;

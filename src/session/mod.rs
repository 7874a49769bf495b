//! Session-wide time and seed shared by every replica of a shoreline.

pub mod clock;
pub mod sync;

pub use clock::{unix_ticks_now, wrap_time, ShoreClock, TIME_WRAP_PERIOD};
pub use sync::ShoreSync;

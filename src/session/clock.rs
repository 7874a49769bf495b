//! Shared session clock.
//!
//! Every replica must feed the same time into the wave field. The owner of
//! a session starts the clock at zero; replicas that join later shift their
//! local clock by the wall-clock time elapsed since the owner's start.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::session::sync::ShoreSync;

/// Session time wraps at this period (seconds). At 32768 an `f32` still
/// resolves 1/512 s.
pub const TIME_WRAP_PERIOD: f64 = 32768.0;

/// Wall-clock ticks per second (100 ns ticks).
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Wrap `t` into `[0, TIME_WRAP_PERIOD)`.
#[inline]
pub fn wrap_time(t: f64) -> f64 {
    t.rem_euclid(TIME_WRAP_PERIOD)
}

/// Current wall-clock time in 100 ns ticks since the Unix epoch.
pub fn unix_ticks_now() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => (elapsed.as_nanos() / 100) as i64,
        Err(before) => -((before.duration().as_nanos() / 100) as i64),
    }
}

/// Maps a local monotonic clock onto shared session time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShoreClock {
    local_offset: f64,
}

impl ShoreClock {
    /// Clock for the session owner: session time is zero at `local_time`.
    pub fn owner(local_time: f64) -> Self {
        Self { local_offset: -local_time }
    }

    /// Clock for a replica that received `sync` at wall-clock `now_ticks`
    /// while its local clock read `local_time`.
    pub fn replica(sync: &ShoreSync, now_ticks: i64, local_time: f64) -> Self {
        let elapsed = now_ticks.saturating_sub(sync.global_time_origin) as f64 / TICKS_PER_SECOND as f64;
        log::info!("ShoreClock: joined session {:.3}s after start", elapsed);
        Self { local_offset: elapsed - local_time }
    }

    /// Wrapped session time for local clock reading `local_time`.
    #[inline]
    pub fn session_time(&self, local_time: f64) -> f64 {
        wrap_time(local_time + self.local_offset)
    }

    /// Offset added to the local clock.
    #[inline]
    pub fn local_offset(&self) -> f64 {
        self.local_offset
    }
}

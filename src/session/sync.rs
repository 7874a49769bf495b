//! Seed and time-origin message broadcast by the session owner.
//!
//! Replicas build their [`ShorelineField`](crate::shore::ShorelineField) and
//! [`ShoreClock`](crate::session::ShoreClock) from this message, which is all
//! they need to reproduce the owner's waves exactly.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::session::clock::TICKS_PER_SECOND;

/// Seeds are drawn from `[-SEED_RANGE, SEED_RANGE)`, half the time wrap
/// period, so the along-shore offset stays within `f32` precision.
pub const SEED_RANGE: f32 = 16384.0;

/// Latest accepted time origin: 10000-01-01 in Unix ticks.
pub const MAX_TIME_ORIGIN: i64 = 253_402_300_800 * TICKS_PER_SECOND;

/// State the owner shares once per session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShoreSync {
    /// Along-shore offset that decorrelates this instance from others.
    pub seed: f32,
    /// Wall-clock ticks (100 ns, Unix epoch) at which session time was zero.
    pub global_time_origin: i64,
}

impl ShoreSync {
    /// Start a new session at `now_ticks` with a random seed.
    pub fn generate<R: Rng>(rng: &mut R, now_ticks: i64) -> Self {
        let sync = Self {
            seed: rng.gen_range(-SEED_RANGE..SEED_RANGE),
            global_time_origin: now_ticks,
        };
        log::info!("ShoreSync: new session, seed={:.3}", sync.seed);
        sync
    }

    pub fn validate(&self) -> Result<()> {
        if !self.seed.is_finite() || !(-SEED_RANGE..SEED_RANGE).contains(&self.seed) {
            return Err(Error::Sync(format!("seed {} outside [-{SEED_RANGE}, {SEED_RANGE})", self.seed)));
        }
        if !(0..=MAX_TIME_ORIGIN).contains(&self.global_time_origin) {
            return Err(Error::Sync(format!("time origin {} outside [0, {MAX_TIME_ORIGIN}]", self.global_time_origin)));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode and validate a message received from the owner.
    pub fn from_json(json: &str) -> Result<Self> {
        let sync: Self = serde_json::from_str(json)?;
        sync.validate()?;
        Ok(sync)
    }
}

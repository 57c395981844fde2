//! Rate gate for the main loop's GUI refresh.
//!
//! Each throttled call site owns its own `RefreshGate`. The period is a
//! const generic, so a zero period compiles down to `true`.

use crate::config::REFRESH_PERIOD_MS;

/// Grants at most one refresh per `PERIOD_MS` milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshGate<const PERIOD_MS: u32 = REFRESH_PERIOD_MS> {
    /// Timestamp of the last granted refresh; `None` until the first grant.
    last: Option<u32>,
}

impl<const PERIOD_MS: u32> RefreshGate<PERIOD_MS> {
    pub const fn new() -> Self {
        Self { last: None }
    }

    pub const fn period(&self) -> u32 {
        PERIOD_MS
    }

    /// Returns `true` and records `now_ms` if at least one period has
    /// elapsed since the last grant.
    ///
    /// Elapsed time uses wrapping subtraction: a `u32` timer rollover keeps
    /// its spacing, and a clock that jumps backwards reads as a very long
    /// gap and is granted.
    pub fn ready(&mut self, now_ms: u32) -> bool {
        if PERIOD_MS == 0 {
            return true;
        }

        if let Some(last) = self.last {
            if now_ms.wrapping_sub(last) < PERIOD_MS {
                return false;
            }
        }

        self.last = Some(now_ms);
        true
    }

    /// Forget the last grant; the next `ready` call succeeds.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

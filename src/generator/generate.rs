//! ID generation logic

use std::cmp::Ordering;

use super::state::State;
use super::time::millis_behind;
use super::wait::wait_next_millis;
use super::{SnowflakeGenerator, MAX_BATCH_SIZE};
use crate::error::{Result, SnowflakeError};

impl SnowflakeGenerator {
    /// Generate a new Snowflake ID
    ///
    /// The clock read, the branch decision and the state update happen under
    /// one lock, including any wait for the next millisecond.
    ///
    /// # Errors
    /// - [`SnowflakeError::ClockMovedBackwards`] if the clock reports an
    ///   instant before the last issued ID (or before the epoch)
    /// - [`SnowflakeError::WaitTimedOut`] if `max_wait` is configured and the
    ///   clock does not advance after sequence exhaustion
    ///
    /// A failed call leaves the generator state untouched.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn create_id(&self) -> Result<u64> {
        let mut state = self.state.lock();
        let now = self.now_ms();
        let last_ts = state.timestamp();

        let timestamp = match u64::try_from(now) {
            Ok(ts) if ts >= last_ts => ts,
            _ => return Err(Self::cold_clock_behind(last_ts, now)),
        };

        let next = match timestamp.cmp(&last_ts) {
            Ordering::Equal => match state.next_sequence() {
                Some(next) => next,
                None => State::rollover_to(self.wait_for_next_millis(last_ts)?),
            },
            _ => State::rollover_to(timestamp),
        };

        *state = next;
        Ok(self.assemble_id(next.timestamp(), next.sequence()))
    }

    /// Generate `count` IDs by repeated calls to [`create_id`](Self::create_id)
    ///
    /// `count` must be between 1 and [`MAX_BATCH_SIZE`].
    pub fn create_ids(&self, count: usize) -> Result<Vec<u64>> {
        if !(1..=MAX_BATCH_SIZE).contains(&count) {
            return Err(SnowflakeError::InvalidCount {
                count,
                max: MAX_BATCH_SIZE,
            });
        }
        (0..count).map(|_| self.create_id()).collect()
    }

    /// Spin until the clock passes `last_ts`
    #[cold]
    #[inline(never)]
    fn wait_for_next_millis(&self, last_ts: u64) -> Result<u64> {
        tracing::debug!(
            timestamp = last_ts,
            "sequence exhausted, waiting for next millisecond"
        );
        let max_wait = self.config.max_wait();
        wait_next_millis(last_ts, self.config.spin_yield_every(), max_wait, || {
            self.now_ms()
        })
        .ok_or_else(|| {
            let waited = max_wait.unwrap_or_default();
            tracing::error!(timestamp = last_ts, ?waited, "clock stalled after sequence exhaustion");
            SnowflakeError::WaitTimedOut {
                timestamp: last_ts,
                waited,
            }
        })
    }

    #[cold]
    #[inline(never)]
    fn cold_clock_behind(last_ts: u64, now: i64) -> SnowflakeError {
        let delta = millis_behind(last_ts, now);
        tracing::warn!(
            last_timestamp = last_ts,
            now,
            delta,
            "clock moved backwards, refusing to generate id"
        );
        SnowflakeError::ClockMovedBackwards { delta }
    }
}

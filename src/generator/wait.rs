//! Busy-wait for the next millisecond after sequence exhaustion

use std::thread;
use std::time::{Duration, Instant};

/// Poll `get_time` until it reports a timestamp past `from_timestamp`.
///
/// Yields the thread every `yield_every` polls (0 never yields). Returns
/// `None` if `max_wait` elapses first; the bound is measured on the host's
/// monotonic clock, not on `get_time`, so a stalled time source still times out.
pub fn wait_next_millis<F>(
    from_timestamp: u64,
    yield_every: u32,
    max_wait: Option<Duration>,
    get_time: F,
) -> Option<u64>
where
    F: Fn() -> i64,
{
    let started = Instant::now();
    let mut polls: u32 = 0;

    loop {
        if let Ok(ts) = u64::try_from(get_time()) {
            if ts > from_timestamp {
                return Some(ts);
            }
        }

        if let Some(max_wait) = max_wait {
            if started.elapsed() >= max_wait {
                return None;
            }
        }

        std::hint::spin_loop();
        polls = polls.wrapping_add(1);
        if yield_every != 0 && polls % yield_every == 0 {
            thread::yield_now();
        }
    }
}

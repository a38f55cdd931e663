//! Core Snowflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last timestamp + sequence, guarded by the generator lock
//! - `time` - Clock readings as milliseconds since the epoch
//! - `wait` - Busy-wait for the next millisecond
//! - `generate` - ID generation logic

mod generate;
mod state;
mod time;
mod wait;

use parking_lot::Mutex;

use crate::config::SnowflakeConfig;
use crate::extractor::SnowflakeExtractor;

use state::State;
use time::millis_since_epoch;

/// Upper bound for [`SnowflakeGenerator::create_ids`]
pub const MAX_BATCH_SIZE: usize = 100;

/// Snowflake ID generator for one datacenter/worker identity
///
/// The generator is `Sync`: share it behind an `Arc` and every call to
/// [`create_id`](Self::create_id) is serialized through an internal lock.
#[derive(Debug)]
pub struct SnowflakeGenerator {
    state: Mutex<State>,
    node_prefix: u64,
    pub config: SnowflakeConfig,
    pub extract: SnowflakeExtractor,
}

impl SnowflakeGenerator {
    /// Create a generator from a validated configuration
    pub fn new(config: SnowflakeConfig) -> Self {
        tracing::debug!(
            datacenter_id = config.datacenter_id(),
            worker_id = config.worker_id(),
            datacenter_id_bits = config.datacenter_id_bits(),
            worker_id_bits = config.worker_id_bits(),
            epoch = %config.epoch(),
            "snowflake generator created"
        );
        Self {
            state: Mutex::new(State::default()),
            node_prefix: Self::compute_node_prefix(&config),
            extract: SnowflakeExtractor::new(config.clone()),
            config,
        }
    }

    #[inline(always)]
    fn compute_node_prefix(config: &SnowflakeConfig) -> u64 {
        (config.datacenter_id() << config.datacenter_shift())
            | (config.worker_id() << config.worker_shift())
    }

    #[inline(always)]
    pub(crate) fn now_ms(&self) -> i64 {
        millis_since_epoch(self.config.now(), self.config.epoch())
    }

    #[inline(always)]
    pub(crate) fn assemble_id(&self, timestamp: u64, sequence: u64) -> u64 {
        ((timestamp & self.config.timestamp_mask()) << self.config.timestamp_shift())
            | self.node_prefix
            | sequence
    }
}

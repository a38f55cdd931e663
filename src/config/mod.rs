//! Configuration for the Snowflake generator
//!
//! A [`SnowflakeConfig`] can only be obtained through validation, so holding
//! one means every layout invariant already holds.

mod builder;
#[cfg(feature = "serde")]
mod settings;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

pub use builder::SnowflakeConfigBuilder;
#[cfg(feature = "serde")]
pub use settings::SnowflakeSettings;

use crate::clock::{Clock, SystemClock};
use crate::error::Result;

/// Bits reserved for the per-millisecond sequence
pub const SEQUENCE_BITS: u8 = 12;
/// Bits shared between the datacenter ID and the worker ID
pub const MAX_FREE_BITS: u8 = 10;
/// Bits left for the timestamp
pub const TIMESTAMP_BITS: u8 = 64 - SEQUENCE_BITS - MAX_FREE_BITS;
pub const DEFAULT_DATACENTER_ID_BITS: u8 = 4;
pub const DEFAULT_WORKER_ID_BITS: u8 = 6;

/// Validated generator configuration
#[derive(Clone)]
pub struct SnowflakeConfig {
    epoch: DateTime<Utc>,
    datacenter_id: u64,
    worker_id: u64,
    datacenter_id_bits: u8,
    worker_id_bits: u8,
    clock: Arc<dyn Clock>,
    spin_yield_every: u32,
    max_wait: Option<Duration>,
}

impl SnowflakeConfig {
    /// Calculate mask for given number of bits
    #[inline]
    pub(crate) const fn calculate_mask(bits: u8) -> u64 {
        (1u64 << bits) - 1
    }

    /// Validate with the default 4/6 bit split and the system clock
    pub fn new(epoch: DateTime<Utc>, datacenter_id: u64, worker_id: u64) -> Result<Self> {
        Self::builder(epoch)
            .datacenter_id(datacenter_id)
            .worker_id(worker_id)
            .build()
    }

    /// Create a new configuration builder
    pub fn builder(epoch: DateTime<Utc>) -> SnowflakeConfigBuilder {
        SnowflakeConfigBuilder::new(epoch)
    }

    pub(crate) fn from_builder(b: SnowflakeConfigBuilder) -> Self {
        Self {
            epoch: b.epoch,
            datacenter_id: b.datacenter_id,
            worker_id: b.worker_id,
            datacenter_id_bits: b.datacenter_id_bits,
            worker_id_bits: b.worker_id_bits,
            clock: match b.clock {
                Some(clock) => clock,
                None => Arc::new(SystemClock),
            },
            spin_yield_every: b.spin_yield_every,
            max_wait: b.max_wait,
        }
    }

    #[inline(always)]
    pub fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    #[inline(always)]
    pub const fn datacenter_id(&self) -> u64 {
        self.datacenter_id
    }

    #[inline(always)]
    pub const fn worker_id(&self) -> u64 {
        self.worker_id
    }

    #[inline(always)]
    pub const fn datacenter_id_bits(&self) -> u8 {
        self.datacenter_id_bits
    }

    #[inline(always)]
    pub const fn worker_id_bits(&self) -> u8 {
        self.worker_id_bits
    }

    /// Largest datacenter ID representable with `datacenter_id_bits`
    #[inline(always)]
    pub const fn max_datacenter_id(&self) -> u64 {
        Self::calculate_mask(self.datacenter_id_bits)
    }

    /// Largest worker ID representable with `worker_id_bits`
    #[inline(always)]
    pub const fn max_worker_id(&self) -> u64 {
        Self::calculate_mask(self.worker_id_bits)
    }

    #[inline(always)]
    pub const fn max_sequence(&self) -> u64 {
        Self::calculate_mask(SEQUENCE_BITS)
    }

    #[inline(always)]
    pub const fn timestamp_bits(&self) -> u8 {
        64 - self.timestamp_shift()
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Current instant according to the configured clock
    #[inline(always)]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    #[inline(always)]
    pub const fn max_wait(&self) -> Option<Duration> {
        self.max_wait
    }

    #[inline(always)]
    pub(crate) const fn worker_shift(&self) -> u8 {
        SEQUENCE_BITS
    }

    #[inline(always)]
    pub(crate) const fn datacenter_shift(&self) -> u8 {
        SEQUENCE_BITS + self.worker_id_bits
    }

    #[inline(always)]
    pub(crate) const fn timestamp_shift(&self) -> u8 {
        SEQUENCE_BITS + self.worker_id_bits + self.datacenter_id_bits
    }

    #[inline(always)]
    pub(crate) const fn timestamp_mask(&self) -> u64 {
        Self::calculate_mask(self.timestamp_bits())
    }
}

impl fmt::Debug for SnowflakeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowflakeConfig")
            .field("epoch", &self.epoch)
            .field("datacenter_id", &self.datacenter_id)
            .field("worker_id", &self.worker_id)
            .field("datacenter_id_bits", &self.datacenter_id_bits)
            .field("worker_id_bits", &self.worker_id_bits)
            .field("spin_yield_every", &self.spin_yield_every)
            .field("max_wait", &self.max_wait)
            .finish_non_exhaustive()
    }
}

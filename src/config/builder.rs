//! SnowflakeConfig builder for constructing configuration

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use super::{SnowflakeConfig, DEFAULT_DATACENTER_ID_BITS, DEFAULT_WORKER_ID_BITS, MAX_FREE_BITS};
use crate::clock::{Clock, SystemClock};
use crate::error::{ConfigField, Result, SnowflakeError};

pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

/// Builder for SnowflakeConfig
///
/// Setters never fail; every invariant is checked together in [`build`].
///
/// [`build`]: SnowflakeConfigBuilder::build
pub struct SnowflakeConfigBuilder {
    pub(super) epoch: DateTime<Utc>,
    pub(super) datacenter_id: u64,
    pub(super) worker_id: u64,
    pub(super) datacenter_id_bits: u8,
    pub(super) worker_id_bits: u8,
    pub(super) clock: Option<Arc<dyn Clock>>,
    pub(super) spin_yield_every: u32,
    pub(super) max_wait: Option<Duration>,
}

impl SnowflakeConfigBuilder {
    /// Create a new builder with default values for everything but the epoch
    pub fn new(epoch: DateTime<Utc>) -> Self {
        Self {
            epoch,
            datacenter_id: 0,
            worker_id: 0,
            datacenter_id_bits: DEFAULT_DATACENTER_ID_BITS,
            worker_id_bits: DEFAULT_WORKER_ID_BITS,
            clock: None,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
            max_wait: None,
        }
    }

    pub fn epoch(mut self, epoch: DateTime<Utc>) -> Self {
        self.epoch = epoch;
        self
    }

    pub const fn datacenter_id(mut self, id: u64) -> Self {
        self.datacenter_id = id;
        self
    }

    pub const fn worker_id(mut self, id: u64) -> Self {
        self.worker_id = id;
        self
    }

    /// Set the number of bits for the datacenter ID.
    /// Together with the worker ID bits this must add up to 10.
    pub const fn datacenter_id_bits(mut self, bits: u8) -> Self {
        self.datacenter_id_bits = bits;
        self
    }

    /// Set the number of bits for the worker ID.
    /// Together with the datacenter ID bits this must add up to 10.
    pub const fn worker_id_bits(mut self, bits: u8) -> Self {
        self.worker_id_bits = bits;
        self
    }

    /// Use a custom time source instead of the system clock
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Same as [`clock`](Self::clock) for an already shared time source
    pub fn shared_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Yield the thread every N polls while waiting for the next millisecond;
    /// 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Give up waiting for the next millisecond after `max_wait`.
    /// Unbounded when unset.
    pub const fn max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = Some(max_wait);
        self
    }

    /// Validate and build the final SnowflakeConfig
    pub fn build(self) -> Result<SnowflakeConfig> {
        self.validate()?;
        let config = SnowflakeConfig::from_builder(self);
        tracing::trace!(?config, "snowflake configuration validated");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.datacenter_id_bits == 0 {
            return Err(SnowflakeError::invalid(
                ConfigField::DatacenterIdBits,
                "Datacenter ID bits must be greater than zero",
            ));
        }

        if self.worker_id_bits == 0 {
            return Err(SnowflakeError::invalid(
                ConfigField::WorkerIdBits,
                "Worker ID bits must be greater than zero",
            ));
        }

        let free_bits = u16::from(self.datacenter_id_bits) + u16::from(self.worker_id_bits);
        if free_bits != u16::from(MAX_FREE_BITS) {
            return Err(SnowflakeError::invalid(
                ConfigField::DatacenterIdBits,
                format!(
                    "Datacenter ID bits '{}' and Worker ID bits '{}' must add up to {}",
                    self.datacenter_id_bits, self.worker_id_bits, MAX_FREE_BITS
                ),
            ));
        }

        let max_datacenter_id = SnowflakeConfig::calculate_mask(self.datacenter_id_bits);
        if self.datacenter_id > max_datacenter_id {
            return Err(SnowflakeError::invalid(
                ConfigField::DatacenterId,
                format!(
                    "Datacenter ID '{}' can't be greater than {}",
                    self.datacenter_id, max_datacenter_id
                ),
            ));
        }

        let max_worker_id = SnowflakeConfig::calculate_mask(self.worker_id_bits);
        if self.worker_id > max_worker_id {
            return Err(SnowflakeError::invalid(
                ConfigField::WorkerId,
                format!(
                    "Worker ID '{}' can't be greater than {}",
                    self.worker_id, max_worker_id
                ),
            ));
        }

        // Checked against the wall clock: the injected clock is only read by the generator
        let now = SystemClock.now();
        if self.epoch > now {
            return Err(SnowflakeError::invalid(
                ConfigField::Epoch,
                format!("Epoch {} must not be in the future (now is {})", self.epoch, now),
            ));
        }

        Ok(())
    }
}

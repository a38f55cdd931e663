use chrono::{DateTime, TimeDelta, Utc};

use crate::config::{SnowflakeConfig, SEQUENCE_BITS};

/// Fields of a decomposed Snowflake ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnowflakeParts {
    /// Milliseconds since the configured epoch
    pub timestamp: u64,
    pub datacenter_id: u64,
    pub worker_id: u64,
    pub sequence: u64,
}

/// Snowflake ID component extractor
#[derive(Debug, Clone)]
pub struct SnowflakeExtractor {
    config: SnowflakeConfig,
}

impl SnowflakeExtractor {
    /// Create a new extractor for IDs produced under `config`
    pub fn new(config: SnowflakeConfig) -> Self {
        Self { config }
    }

    /// Extract timestamp component from a Snowflake ID
    #[inline(always)]
    pub fn timestamp(&self, id: u64) -> u64 {
        (id >> self.config.timestamp_shift()) & self.config.timestamp_mask()
    }

    /// Extract datacenter component from a Snowflake ID
    #[inline(always)]
    pub fn datacenter_id(&self, id: u64) -> u64 {
        (id >> self.config.datacenter_shift()) & self.config.max_datacenter_id()
    }

    /// Extract worker component from a Snowflake ID
    #[inline(always)]
    pub fn worker_id(&self, id: u64) -> u64 {
        (id >> self.config.worker_shift()) & self.config.max_worker_id()
    }

    /// Extract sequence component from a Snowflake ID
    #[inline(always)]
    pub fn sequence(&self, id: u64) -> u64 {
        id & SnowflakeConfig::calculate_mask(SEQUENCE_BITS)
    }

    /// Decompose a Snowflake ID into all of its components
    #[inline]
    pub fn decompose(&self, id: u64) -> SnowflakeParts {
        SnowflakeParts {
            timestamp: self.timestamp(id),
            datacenter_id: self.datacenter_id(id),
            worker_id: self.worker_id(id),
            sequence: self.sequence(id),
        }
    }

    /// Wall-clock instant encoded in the ID, or `None` if it is out of range
    pub fn datetime(&self, id: u64) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.timestamp(id)).ok()?;
        self.config
            .epoch()
            .checked_add_signed(TimeDelta::try_milliseconds(millis)?)
    }
}

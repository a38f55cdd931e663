use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T, E = SnowflakeError> = std::result::Result<T, E>;

/// Configuration field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    Epoch,
    DatacenterId,
    WorkerId,
    DatacenterIdBits,
    WorkerIdBits,
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigField::Epoch => "epoch",
            ConfigField::DatacenterId => "datacenter_id",
            ConfigField::WorkerId => "worker_id",
            ConfigField::DatacenterIdBits => "datacenter_id_bits",
            ConfigField::WorkerIdBits => "worker_id_bits",
        };
        f.write_str(name)
    }
}

/// Represents errors that can occur while configuring or running a generator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnowflakeError {
    /// A configuration invariant was violated. Only raised at setup time.
    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfiguration { field: ConfigField, reason: String },
    /// The clock reported an instant earlier than the last issued ID
    #[error("Clock moved backwards. Refusing to generate id for {delta} milliseconds")]
    ClockMovedBackwards { delta: u64 },
    /// The sequence was exhausted and the clock did not advance within `max_wait`
    #[error("Clock did not advance past {timestamp} within {waited:?}")]
    WaitTimedOut { timestamp: u64, waited: Duration },
    /// A batch request asked for zero ids or more than the batch limit
    #[error("Requested {count} ids, count must be between 1 and {max}")]
    InvalidCount { count: usize, max: usize },
}

impl SnowflakeError {
    pub(crate) fn invalid(field: ConfigField, reason: impl Into<String>) -> Self {
        SnowflakeError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    /// The offending field, if this is a configuration error
    pub fn config_field(&self) -> Option<ConfigField> {
        match self {
            SnowflakeError::InvalidConfiguration { field, .. } => Some(*field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let invalid = SnowflakeError::invalid(
            ConfigField::WorkerId,
            "Worker ID 64 can't be greater than 63",
        );
        assert_eq!(
            invalid.to_string(),
            "Invalid configuration for worker_id: Worker ID 64 can't be greater than 63"
        );

        let clock_backwards = SnowflakeError::ClockMovedBackwards { delta: 100 };
        assert_eq!(
            clock_backwards.to_string(),
            "Clock moved backwards. Refusing to generate id for 100 milliseconds"
        );

        let count = SnowflakeError::InvalidCount { count: 101, max: 100 };
        assert_eq!(
            count.to_string(),
            "Requested 101 ids, count must be between 1 and 100"
        );
    }

    #[test]
    fn test_config_field() {
        let invalid = SnowflakeError::invalid(ConfigField::Epoch, "in the future");
        assert_eq!(invalid.config_field(), Some(ConfigField::Epoch));
        assert_eq!(
            SnowflakeError::ClockMovedBackwards { delta: 1 }.config_field(),
            None
        );
    }

    #[test]
    fn test_error_clone() {
        let original = SnowflakeError::invalid(ConfigField::DatacenterIdBits, "zero");
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }
}

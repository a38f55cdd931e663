//! Deserializable settings, for binding a generator to a configuration file

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{SnowflakeConfig, DEFAULT_DATACENTER_ID_BITS, DEFAULT_WORKER_ID_BITS};
use crate::clock::Clock;
use crate::error::Result;

/// Raw, unvalidated generator settings
///
/// ```
/// use snowflake_id::SnowflakeSettings;
///
/// let settings: SnowflakeSettings = serde_json::from_str(
///     r#"{ "epoch": "2020-01-01T00:00:00Z", "datacenter_id": 3, "worker_id": 17 }"#,
/// ).unwrap();
/// let config = settings.into_config().unwrap();
/// assert_eq!(config.worker_id(), 17);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnowflakeSettings {
    pub epoch: DateTime<Utc>,
    #[serde(default)]
    pub datacenter_id: u64,
    #[serde(default)]
    pub worker_id: u64,
    #[serde(default = "default_datacenter_id_bits")]
    pub datacenter_id_bits: u8,
    #[serde(default = "default_worker_id_bits")]
    pub worker_id_bits: u8,
    /// Upper bound on the next-millisecond wait, in milliseconds
    #[serde(default)]
    pub max_wait_ms: Option<u64>,
}

fn default_datacenter_id_bits() -> u8 {
    DEFAULT_DATACENTER_ID_BITS
}

fn default_worker_id_bits() -> u8 {
    DEFAULT_WORKER_ID_BITS
}

impl SnowflakeSettings {
    /// Validate into a config driven by the system clock
    pub fn into_config(self) -> Result<SnowflakeConfig> {
        self.into_builder().build()
    }

    /// Validate into a config driven by `clock`
    pub fn into_config_with_clock(self, clock: Arc<dyn Clock>) -> Result<SnowflakeConfig> {
        self.into_builder().shared_clock(clock).build()
    }

    fn into_builder(self) -> super::SnowflakeConfigBuilder {
        let builder = SnowflakeConfig::builder(self.epoch)
            .datacenter_id(self.datacenter_id)
            .worker_id(self.worker_id)
            .datacenter_id_bits(self.datacenter_id_bits)
            .worker_id_bits(self.worker_id_bits);
        match self.max_wait_ms {
            Some(ms) => builder.max_wait(Duration::from_millis(ms)),
            None => builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::error::{ConfigField, SnowflakeError};
    use chrono::TimeZone;

    #[test]
    fn test_defaults_applied() {
        let settings: SnowflakeSettings =
            serde_json::from_str(r#"{ "epoch": "2015-01-01T00:00:00Z" }"#).unwrap();
        assert_eq!(settings.datacenter_id, 0);
        assert_eq!(settings.worker_id, 0);
        assert_eq!(settings.datacenter_id_bits, 4);
        assert_eq!(settings.worker_id_bits, 6);
        assert_eq!(settings.max_wait_ms, None);

        let config = settings.into_config().unwrap();
        assert_eq!(config.max_datacenter_id(), 15);
        assert_eq!(config.max_worker_id(), 63);
    }

    #[test]
    fn test_full_settings() {
        let settings: SnowflakeSettings = serde_json::from_str(
            r#"{
                "epoch": "2015-01-01T00:00:00Z",
                "datacenter_id": 1,
                "worker_id": 200,
                "datacenter_id_bits": 2,
                "worker_id_bits": 8,
                "max_wait_ms": 50
            }"#,
        )
        .unwrap();

        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        let config = settings.into_config_with_clock(Arc::new(clock)).unwrap();
        assert_eq!(config.datacenter_id(), 1);
        assert_eq!(config.worker_id(), 200);
        assert_eq!(config.max_worker_id(), 255);
        assert_eq!(config.max_wait(), Some(Duration::from_millis(50)));
    }

    #[test]
    fn test_invalid_settings_rejected_on_conversion() {
        let settings: SnowflakeSettings = serde_json::from_str(
            r#"{ "epoch": "2015-01-01T00:00:00Z", "datacenter_id": 16 }"#,
        )
        .unwrap();
        let err = settings.into_config().unwrap_err();
        assert_eq!(err.config_field(), Some(ConfigField::DatacenterId));
        assert!(matches!(err, SnowflakeError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = serde_json::from_str::<SnowflakeSettings>(
            r#"{ "epoch": "2015-01-01T00:00:00Z", "node_id": 1 }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_bits_rejected() {
        let result = serde_json::from_str::<SnowflakeSettings>(
            r#"{ "epoch": "2015-01-01T00:00:00Z", "worker_id_bits": -1 }"#,
        );
        assert!(result.is_err());
    }
}

//! # Snowflake ID
//!
//! A Rust implementation of the Snowflake ID scheme.
//!
//! Every ID is a `u64` laid out as (most to least significant):
//!
//! | field        | bits                    |
//! |--------------|-------------------------|
//! | timestamp    | 42 (ms since the epoch) |
//! | datacenter   | `datacenter_id_bits`    |
//! | worker       | `worker_id_bits`        |
//! | sequence     | 12                      |
//!
//! where `datacenter_id_bits + worker_id_bits == 10`.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use snowflake_id::{SnowflakeConfig, SnowflakeGenerator};
//!
//! let epoch = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
//! let generator = SnowflakeGenerator::new(SnowflakeConfig::new(epoch, 1, 7)?);
//!
//! let a = generator.create_id()?;
//! let b = generator.create_id()?;
//! assert!(b > a);
//! assert_eq!(generator.extract.worker_id(a), 7);
//! # Ok::<(), snowflake_id::SnowflakeError>(())
//! ```

#![forbid(unsafe_code)]

pub mod clock;
mod config;
mod error;
mod extractor;
mod generator;

#[cfg(test)]
pub mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{
    SnowflakeConfig, SnowflakeConfigBuilder, DEFAULT_DATACENTER_ID_BITS, DEFAULT_WORKER_ID_BITS,
    MAX_FREE_BITS, SEQUENCE_BITS, TIMESTAMP_BITS,
};
#[cfg(feature = "serde")]
pub use config::SnowflakeSettings;
pub use error::{ConfigField, Result, SnowflakeError};
pub use extractor::{SnowflakeExtractor, SnowflakeParts};
pub use generator::{SnowflakeGenerator, MAX_BATCH_SIZE};

use std::time::Duration;

use chrono::{TimeZone, Utc};
use snowflake_id::{SnowflakeConfig, SnowflakeGenerator, SnowflakeSettings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Few datacenters, many workers: 2 bits = 4 datacenters, 8 bits = 256 workers
    let epoch = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();
    let config = SnowflakeConfig::builder(epoch)
        .datacenter_id_bits(2)
        .worker_id_bits(8)
        .datacenter_id(3)
        .worker_id(200)
        .max_wait(Duration::from_millis(50))
        .build()?;

    println!("Generator configuration:");
    println!("  Datacenter ID bits: {}", config.datacenter_id_bits());
    println!("  Worker ID bits: {}", config.worker_id_bits());
    println!("  Max datacenter ID: {}", config.max_datacenter_id());
    println!("  Max worker ID: {}", config.max_worker_id());
    println!("  Max sequence per ms: {}", config.max_sequence());

    let generator = SnowflakeGenerator::new(config);
    let id = generator.create_id()?;
    let parts = generator.extract.decompose(id);

    println!("\nGenerated ID: {}", id);
    println!("Components:");
    println!("  Timestamp: {} ms since epoch", parts.timestamp);
    println!("  Datacenter ID: {}", parts.datacenter_id);
    println!("  Worker ID: {}", parts.worker_id);
    println!("  Sequence: {}", parts.sequence);

    // The same configuration, read from a settings file section
    let settings: SnowflakeSettings = serde_json::from_str(
        r#"{
            "epoch": "2015-01-01T00:00:00Z",
            "datacenter_id": 3,
            "worker_id": 200,
            "datacenter_id_bits": 2,
            "worker_id_bits": 8,
            "max_wait_ms": 50
        }"#,
    )?;
    let from_file = SnowflakeGenerator::new(settings.into_config()?);
    println!("\nFrom settings: {}", from_file.create_id()?);

    // Invalid identities are rejected up front
    let err = SnowflakeConfig::new(epoch, 16, 0).unwrap_err();
    println!("\nRejected: {err}");
    Ok(())
}

use chrono::{TimeZone, Utc};
use snowflake_id::{SnowflakeConfig, SnowflakeGenerator};

fn main() -> Result<(), snowflake_id::SnowflakeError> {
    let epoch = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

    // Datacenter 1, worker 7, default 4/6 bit split
    let generator = SnowflakeGenerator::new(SnowflakeConfig::new(epoch, 1, 7)?);

    let id1 = generator.create_id()?;
    let id2 = generator.create_id()?;
    let id3 = generator.create_id()?;

    println!("Generated IDs (guaranteed to be increasing):");
    for id in [id1, id2, id3] {
        print_id(id, &generator);
    }

    // Or extract components individually
    println!("\nComponents of ID2 (extracted individually):");
    println!("  Timestamp: {} ms since epoch", generator.extract.timestamp(id2));
    println!("  Datacenter ID: {}", generator.extract.datacenter_id(id2));
    println!("  Worker ID: {}", generator.extract.worker_id(id2));
    println!("  Sequence: {}", generator.extract.sequence(id2));

    println!("\nA batch of five: {:?}", generator.create_ids(5)?);
    Ok(())
}

fn print_id(id: u64, generator: &SnowflakeGenerator) {
    let parts = generator.extract.decompose(id);
    let datetime = generator
        .extract
        .datetime(id)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "out of range".to_string());

    println!(
        "  ID: {id}, Human date: {datetime}, Datacenter: {}, Worker: {}, Sequence: {}",
        parts.datacenter_id, parts.worker_id, parts.sequence
    );
}

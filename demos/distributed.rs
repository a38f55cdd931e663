use chrono::{TimeZone, Utc};
use rand::{rng, Rng};
use snowflake_id::{SnowflakeConfig, SnowflakeGenerator};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    let epoch = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

    // One shared generator per identity; the generator serializes callers itself
    let generator = Arc::new(SnowflakeGenerator::new(
        SnowflakeConfig::new(epoch, 2, 11).unwrap(),
    ));
    let mut handles = vec![];

    for thread_id in 0..4 {
        let generator = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = generator.create_id().unwrap();
                let parts = generator.extract.decompose(id);

                println!(
                    "Thread {} generated ID {} (ts={}, dc={}, worker={}, seq={})",
                    thread_id, i, parts.timestamp, parts.datacenter_id, parts.worker_id, parts.sequence
                );

                assert!(ids.insert(id), "Duplicate ID generated!");

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());

    let mut ids: Vec<_> = all_ids.into_iter().collect();
    ids.sort_unstable();
    for i in 1..ids.len() {
        assert!(ids[i] > ids[i - 1], "IDs not monotonically increasing!");
    }
    println!("All IDs are unique and monotonically increasing!");
}

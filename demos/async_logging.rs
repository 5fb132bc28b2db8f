//! Async logging example
//!
//! Several game threads log concurrently while one worker owns the I/O.
//!
//! Run with: cargo run --example async_logging

use game_logger::prelude::*;
use game_logger::{finfo, info};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    println!("=== Game Logger - Async Logging Example ===\n");

    let config = LoggerConfig {
        min_level: LogLevel::Debug,
        file_path: "async_test.log".into(),
        file_logging: true,
        ..LoggerConfig::default()
    };
    config.validate()?;
    let logger = Arc::new(Logger::with_config(config));

    println!("1. Burst of 100 records from the main thread:");
    let start = Instant::now();
    for i in 0..100 {
        info!(logger, "Message #{}", i);
    }
    println!("   enqueued in {:?}", start.elapsed());

    println!("\n2. Five subsystems logging at once:");
    let subsystems = ["render", "audio", "physics", "network", "ai"];
    let handles: Vec<_> = subsystems
        .iter()
        .map(|name| {
            let logger = Arc::clone(&logger);
            let name = name.to_string();
            thread::spawn(move || {
                for tick in 0..20 {
                    finfo!(logger, "{} tick {}", name, tick);
                    thread::sleep(Duration::from_millis(5));
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("a subsystem thread panicked");
        }
    }

    logger.shutdown();
    let metrics = logger.metrics();
    println!(
        "\n   written: {}, filtered: {}, failures: {}",
        metrics.written(),
        metrics.filtered(),
        metrics.write_failures()
    );

    println!("\n=== Example completed successfully! ===");
    println!("Check 'async_test.log' for file output");

    Ok(())
}

//! File logging example
//!
//! Demonstrates the optional file sink next to the console.
//!
//! Run with: cargo run --example file_logging

use game_logger::prelude::*;
use game_logger::{ferror, finfo, fwarn, info, warn};

fn main() -> Result<()> {
    println!("=== Game Logger - File Logging Example ===\n");

    let logger = Logger::builder().file_path("application.log").build();

    println!("1. Writing to the file before enabling it:");
    finfo!(logger, "This message is dropped with a warning");

    println!("\n2. Enabling file logging:");
    logger.enable_file_logging(true);
    if !logger.is_file_logging_enabled() {
        warn!(logger, "could not open {}", logger.file_path().display());
    }

    info!(logger, "Application started");
    finfo!(logger, "Session started");
    for i in 1..=5 {
        finfo!(logger, "Processing item {}/5", i);
        if i == 3 {
            fwarn!(logger, "Item 3 took longer than expected");
        }
    }
    ferror!(logger, "Failed to load optional plugin");

    logger.enable_file_logging(false);
    logger.shutdown();

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the file output");

    Ok(())
}

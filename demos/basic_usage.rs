//! Basic logger usage example
//!
//! Demonstrates console logging at every level and the runtime level gate.
//!
//! Run with: cargo run --example basic_usage

use game_logger::prelude::*;
use game_logger::{debug, error, fatal, info, trace, warn};

fn main() {
    println!("=== Game Logger - Basic Usage Example ===\n");

    let logger = Logger::builder().min_level(LogLevel::Trace).build();

    println!("1. Logging at different levels:");
    trace!(logger, "This is a trace message");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    warn!(logger, "This is a warning message");
    error!(logger, "This is an error message");
    fatal!(logger, "This is a fatal message");

    println!("\n2. Raising the minimum level to INFO:");
    logger.set_level(LogLevel::Info);
    trace!(logger, "Trace message (hidden)");
    debug!(logger, "Debug message (hidden)");
    info!(logger, "Info message (visible)");
    warn!(logger, "Warning message (visible)");

    println!("\n3. Silencing everything with OFF:");
    logger.set_level(LogLevel::Off);
    fatal!(logger, "Fatal message (hidden)");

    // Wait for the worker to write everything before printing the footer
    logger.shutdown();
    println!("\n=== Example completed successfully! ===");
}

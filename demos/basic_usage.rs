//! Basic logger usage
//!
//! Demonstrates the styled severity presets, the formatting trichotomy,
//! and the graceful shutdown that drains the queue.
//!
//! Run with: cargo run --example basic_usage

use conlog::prelude::*;
use conlog::{error, info, warn};

fn main() {
    let logger = Logger::new();

    // Template verbatim, placeholder interpolation, space-separated append.
    info!(logger, "Hello, world!");
    info!(logger, "processing {} items for {}", 100, "alice");
    warn!(logger, "careful", "retry");

    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found");
    logger.error("critical failure: {}", &[LogValue::display(&err)]);
    error!(logger, "exit code {}", 3);

    // Drains every accepted line before returning.
    logger.shutdown();

    // Post-shutdown calls still reach stdout, synchronously.
    info!(logger, "goodbye after shutdown");

    // A real fatal would exit the process with status 1:
    // conlog::fatal!(logger, "unrecoverable: {}", "disk full");
}

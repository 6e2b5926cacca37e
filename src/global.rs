//! Process-wide convenience handle
//!
//! A single [`Logger`] shared by the whole process, created on first use.
//! Construction and shutdown remain first-class operations on [`Logger`];
//! this module only adds the ergonomic entry points. Call [`shutdown`]
//! once before orderly process exit so every queued line is flushed.

use crate::core::format::LogValue;
use crate::core::logger::Logger;
use crate::core::severity::Severity;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install a configured logger as the process-wide instance.
///
/// Returns the logger back as `Err` if one was already installed.
pub fn init(logger: Logger) -> Result<(), Logger> {
    GLOBAL.set(logger)
}

/// The process-wide logger, created with defaults on first use.
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Log at Info severity through the process-wide logger.
pub fn info(template: &str, args: &[LogValue]) {
    logger().log_at(Severity::Info, template, args);
}

/// Log at Warn severity through the process-wide logger.
pub fn warn(template: &str, args: &[LogValue]) {
    logger().log_at(Severity::Warn, template, args);
}

/// Log at Error severity through the process-wide logger.
pub fn error(template: &str, args: &[LogValue]) {
    logger().log_at(Severity::Error, template, args);
}

/// Log at Fatal severity, drain, and exit the process with status 1.
pub fn fatal(template: &str, args: &[LogValue]) -> ! {
    logger().fatal(template, args)
}

/// Shut down the process-wide logger if it was ever created.
///
/// Idempotent; later logging calls fall back to synchronous stdout writes.
pub fn shutdown() {
    if let Some(logger) = GLOBAL.get() {
        logger.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_handle_survives_shutdown() {
        info("global smoke test", &[]);
        shutdown();
        shutdown();
        // Post-shutdown calls take the synchronous bypass.
        warn("still audible", &[LogValue::from(1)]);
        assert!(logger().is_closed());
    }
}

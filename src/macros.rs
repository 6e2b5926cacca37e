//! Logging macros for ergonomic variadic calls.
//!
//! Each macro takes a logger handle, a message template, and any number of
//! arguments convertible into [`crate::LogValue`]. Values without a `From`
//! impl can be wrapped with `LogValue::display(..)` at the call site.
//!
//! # Examples
//!
//! ```
//! use conlog::prelude::*;
//! use conlog::{info, warn};
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server started");
//! let port = 8080;
//! info!(logger, "Listening on port {}", port);
//! warn!(logger, "careful", "retry");
//! logger.shutdown();
//! ```

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use conlog::prelude::*;
/// # let logger = Logger::new();
/// use conlog::log_at;
/// log_at!(logger, Severity::Info, "Simple message");
/// log_at!(logger, Severity::Error, "Error code: {}", 500);
/// # logger.shutdown();
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $severity:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_at($severity, $template, &[$($crate::LogValue::from($arg)),*])
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use conlog::prelude::*;
/// # let logger = Logger::new();
/// use conlog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// # logger.shutdown();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::Severity::Info, $template $(, $arg)*)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use conlog::prelude::*;
/// # let logger = Logger::new();
/// use conlog::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// # logger.shutdown();
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::Severity::Warn, $template $(, $arg)*)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use conlog::prelude::*;
/// # let logger = Logger::new();
/// use conlog::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// # logger.shutdown();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::Severity::Error, $template $(, $arg)*)
    };
}

/// Log a fatal-level message, drain the queue, and exit the process with a
/// non-zero status.
///
/// # Examples
///
/// ```no_run
/// # use conlog::prelude::*;
/// # let logger = Logger::new();
/// use conlog::fatal;
/// fatal!(logger, "Critical system failure");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatal($template, &[$($crate::LogValue::from($arg)),*])
    };
}

//! # Conlog
//!
//! An asynchronous ANSI-styled console logger with a bounded queue,
//! non-blocking enqueue, and a graceful shutdown that drains every
//! accepted line before the process exits.
//!
//! ## Design
//!
//! - **Never blocks producers**: enqueue is try-send-or-drop; under
//!   sustained overload excess lines are discarded, callers keep running
//! - **Single writer**: one background thread drains the queue and flushes
//!   stdout after every line
//! - **Once-only shutdown**: concurrent shutdown calls all return only
//!   after the queue is closed, drained, and flushed
//! - **Last-gasp delivery**: after shutdown, logging calls write
//!   synchronously to stdout so nothing is silently lost

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        config_for, format_line, render_message, LevelConfig, LogValue, Logger, LoggerBuilder,
        LoggerError, LoggerMetrics, Result, Severity, Style, DEFAULT_QUEUE_CAPACITY,
    };
    pub use crate::sinks::{ConsoleSink, Sink};
}

pub use crate::core::{
    config_for, format_line, render_message, LevelConfig, LogValue, Logger, LoggerBuilder,
    LoggerError, LoggerMetrics, Result, Severity, Style, DEFAULT_QUEUE_CAPACITY,
};
pub use crate::sinks::{ConsoleSink, Sink};

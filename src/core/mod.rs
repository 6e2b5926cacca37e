//! Core logger types

pub mod error;
pub mod format;
pub mod logger;
pub mod metrics;
pub mod severity;
pub mod style;

pub use error::{LoggerError, Result};
pub use format::{format_line, render_message, LogValue};
pub use logger::{Logger, LoggerBuilder, DEFAULT_QUEUE_CAPACITY};
pub use metrics::LoggerMetrics;
pub use severity::Severity;
pub use style::{config_for, LevelConfig, Style};

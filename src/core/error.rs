//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors raised on the sink side of the pipeline.
///
/// None of these ever reach callers of the logging facade: producers are
/// fire-and-forget, and a failing sink is fatal to the writer task alone.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create a writer error
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoggerError::writer("sink detached");
        assert_eq!(err.to_string(), "Writer error: sink detached");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();
        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}

//! Console sink implementation

use super::Sink;
use crate::core::error::Result;
use std::io::{self, BufWriter, Write};

/// Buffered stdout sink, the production destination.
///
/// The writer task flushes after every line, so buffering here only
/// coalesces the write syscalls of a single line.
pub struct ConsoleSink {
    out: BufWriter<io::Stdout>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            out: BufWriter::new(io::stdout()),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.out.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

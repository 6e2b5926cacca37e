//! Output destinations for formatted lines

pub mod console;

pub use console::ConsoleSink;

use crate::core::error::Result;

/// A destination the writer task delivers formatted lines to.
///
/// Lines arrive fully rendered and newline-terminated; a sink only has to
/// write and flush them. The writer treats any error as fatal to itself.
pub trait Sink: Send {
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

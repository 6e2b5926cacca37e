//! Main logger implementation
//!
//! The [`Logger`] owns the bounded line queue, the single background writer
//! thread, and the one-time shutdown coordinator. Producers format a line
//! and try-send it; the writer drains the queue and flushes the sink after
//! every line. Once shutdown has begun, the facade bypasses the queue and
//! writes lines synchronously so nothing said after teardown is lost.

use super::format::{format_line, LogValue};
use super::metrics::LoggerMetrics;
use super::severity::Severity;
use crate::sinks::{ConsoleSink, Sink};
use crossbeam_channel::{bounded, Sender, TrySendError};
use parking_lot::{Condvar, Mutex, RwLock};
use std::process;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;

/// Default capacity of the bounded line queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1000;

// Lifecycle states of the logger.
const RUNNING: u8 = 0;
const SHUTTING_DOWN: u8 = 1;
const CLOSED: u8 = 2;

type SharedSink = Arc<Mutex<Box<dyn Sink>>>;

/// Process-wide asynchronous console logger.
///
/// Intended lifecycle: construct once at process start, log from any number
/// of threads, shut down once at process end. A convenience global handle
/// lives in [`crate::global`]; construction and shutdown stay first-class
/// operations here.
pub struct Logger {
    state: AtomicU8,
    /// Sole sender for the queue; taken (and thereby closed) on shutdown.
    sender: RwLock<Option<Sender<String>>>,
    writer_handle: Mutex<Option<thread::JoinHandle<()>>>,
    /// Completion signal: every shutdown caller returns only once this is set.
    done: Mutex<bool>,
    drained: Condvar,
    sink: SharedSink,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger writing to stdout with the default queue capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }

    /// Create a logger writing to stdout with a custom queue capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(capacity, Box::new(ConsoleSink::new()))
    }

    fn with_config(capacity: usize, sink: Box<dyn Sink>) -> Self {
        let (sender, receiver) = bounded::<String>(capacity);
        let sink: SharedSink = Arc::new(Mutex::new(sink));
        let writer_sink = Arc::clone(&sink);

        // Sole consumer of the queue. Exits when the queue is closed and
        // empty, or when the sink fails (output failure is fatal to the
        // writer; producers never observe it).
        let handle = thread::spawn(move || {
            while let Ok(line) = receiver.recv() {
                let mut sink = writer_sink.lock();
                if sink.write_line(&line).is_err() {
                    return;
                }
                if sink.flush().is_err() {
                    return;
                }
            }
            let _ = writer_sink.lock().flush();
        });

        Self {
            state: AtomicU8::new(RUNNING),
            sender: RwLock::new(Some(sender)),
            writer_handle: Mutex::new(Some(handle)),
            done: Mutex::new(false),
            drained: Condvar::new(),
            sink,
            metrics: LoggerMetrics::new(),
        }
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Format a line for `severity` and hand it to the delivery pipeline.
    ///
    /// Never blocks the caller and never returns an error: while running,
    /// the line is try-sent into the queue (dropped if the queue is full);
    /// once shutdown has begun it is written synchronously to the sink.
    pub fn log_at(&self, severity: Severity, template: &str, args: &[LogValue]) {
        let line = format_line(severity, template, args);
        self.dispatch(line);
    }

    #[inline]
    pub fn info(&self, template: &str, args: &[LogValue]) {
        self.log_at(Severity::Info, template, args);
    }

    #[inline]
    pub fn warn(&self, template: &str, args: &[LogValue]) {
        self.log_at(Severity::Warn, template, args);
    }

    #[inline]
    pub fn error(&self, template: &str, args: &[LogValue]) {
        self.log_at(Severity::Error, template, args);
    }

    /// Log at Fatal severity, drain the queue, and terminate the process
    /// with a non-zero exit status. The only entry point that affects
    /// process lifetime.
    pub fn fatal(&self, template: &str, args: &[LogValue]) -> ! {
        self.log_fatal(template, args);
        process::exit(1);
    }

    /// Fatal logging minus the process exit: enqueue the line, then run the
    /// full shutdown sequence.
    pub(crate) fn log_fatal(&self, template: &str, args: &[LogValue]) {
        self.log_at(Severity::Fatal, template, args);
        self.shutdown();
    }

    fn dispatch(&self, line: String) {
        if self.state.load(Ordering::Acquire) != RUNNING {
            self.write_direct(&line);
            return;
        }

        let send_result = {
            let guard = self.sender.read();
            match guard.as_ref() {
                Some(sender) => sender.try_send(line),
                // Shutdown raced past the state check; deliver directly.
                None => Err(TrySendError::Disconnected(line)),
            }
        };

        match send_result {
            Ok(()) => {
                self.metrics.record_enqueued();
            }
            Err(TrySendError::Full(_)) => {
                // Queue full: the line is dropped, not queued. Liveness of
                // the caller wins over completeness of the log.
                self.metrics.record_dropped();
            }
            Err(TrySendError::Disconnected(line)) => {
                self.write_direct(&line);
            }
        }
    }

    /// Synchronous, unbuffered-in-spirit delivery: write and flush under
    /// the sink lock so the line is observable before this returns.
    fn write_direct(&self, line: &str) {
        self.metrics.record_bypass_write();
        let mut sink = self.sink.lock();
        let _ = sink.write_line(line);
        let _ = sink.flush();
    }

    /// Execute the termination sequence exactly once.
    ///
    /// The first caller closes the queue for new input, waits for the
    /// writer to drain every already-queued line, and performs the final
    /// flush. Every other caller, concurrent or later, blocks until that
    /// drain has completed and then returns; repeated calls never panic,
    /// deadlock, or double-close the queue.
    ///
    /// Once this returns, every line accepted into the queue before closure
    /// has been written and flushed.
    pub fn shutdown(&self) {
        match self.state.compare_exchange(
            RUNNING,
            SHUTTING_DOWN,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => {
                // Close the queue; already-queued lines stay deliverable.
                self.sender.write().take();

                // Wait for the writer to observe closure and drain.
                let handle = self.writer_handle.lock().take();
                if let Some(handle) = handle {
                    let _ = handle.join();
                }

                let _ = self.sink.lock().flush();

                self.state.store(CLOSED, Ordering::Release);
                let mut done = self.done.lock();
                *done = true;
                self.drained.notify_all();
            }
            Err(_) => {
                let mut done = self.done.lock();
                while !*done {
                    self.drained.wait(&mut done);
                }
            }
        }
    }

    /// Whether the shutdown sequence has fully completed.
    pub fn is_closed(&self) -> bool {
        self.state.load(Ordering::Acquire) == CLOSED
    }

    /// Queue health counters for this logger.
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if !self.is_closed() {
            self.shutdown();
        }
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use conlog::prelude::*;
///
/// let logger = Logger::builder().capacity(256).build();
/// logger.info("ready", &[]);
/// logger.shutdown();
/// ```
pub struct LoggerBuilder {
    capacity: usize,
    sink: Option<Box<dyn Sink>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_QUEUE_CAPACITY,
            sink: None,
        }
    }

    /// Set the queue capacity (fixed for the logger's lifetime)
    #[must_use = "builder methods return a new value"]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Replace the stdout sink with a custom one
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(ConsoleSink::new()));
        Logger::with_config(self.capacity, sink)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Result;

    struct VecSink {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl Sink for VecSink {
        fn write_line(&mut self, line: &str) -> Result<()> {
            self.lines.lock().push(line.to_string());
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "vec"
        }
    }

    fn capture_logger(capacity: usize) -> (Logger, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::builder()
            .capacity(capacity)
            .sink(VecSink {
                lines: Arc::clone(&lines),
            })
            .build();
        (logger, lines)
    }

    #[test]
    fn test_shutdown_drains_queue() {
        let (logger, lines) = capture_logger(64);
        for i in 0..10 {
            logger.info("message {}", &[LogValue::from(i)]);
        }
        logger.shutdown();

        let captured = lines.lock();
        assert_eq!(captured.len(), 10);
        for (i, line) in captured.iter().enumerate() {
            assert!(line.contains(&format!("message {}", i)), "line: {}", line);
        }
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let (logger, lines) = capture_logger(8);
        logger.info("once", &[]);
        logger.shutdown();
        logger.shutdown();
        assert!(logger.is_closed());
        assert_eq!(lines.lock().len(), 1);
    }

    #[test]
    fn test_log_fatal_drains_and_closes() {
        let (logger, lines) = capture_logger(8);
        logger.error("failing", &[]);
        logger.log_fatal("terminating", &[]);

        assert!(logger.is_closed());
        let captured = lines.lock();
        assert_eq!(captured.len(), 2);
        assert!(captured[1].contains(" FATAL "));
        assert!(captured[1].contains("terminating"));
    }

    #[test]
    fn test_drop_runs_shutdown() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        {
            let logger = Logger::builder()
                .capacity(16)
                .sink(VecSink {
                    lines: Arc::clone(&lines),
                })
                .build();
            for i in 0..5 {
                logger.info("drop {}", &[LogValue::from(i)]);
            }
        }
        assert_eq!(lines.lock().len(), 5);
    }

    #[test]
    fn test_post_shutdown_bypass_is_synchronous() {
        let (logger, lines) = capture_logger(8);
        logger.shutdown();

        logger.warn("after the end", &[]);
        // Observable before the call site moves on: no sleeps, no joins.
        assert_eq!(lines.lock().len(), 1);
        assert_eq!(logger.metrics().bypass_write_count(), 1);
    }
}

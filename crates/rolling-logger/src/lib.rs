//! Rolling Logger
//!
//! A `tracing` layer that keeps the most recent log lines in a circular
//! buffer and hands each new line to a sink (the browser console, stdout,
//! a test collector...). The buffer lets the UI show what happened just
//! before an error.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

pub const DEFAULT_CAPACITY: usize = 200;

/// One formatted log event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

type Sink = dyn Fn(&LogLine) + Send + Sync;

/// Handle to the ring buffer; cheap to clone
#[derive(Clone)]
pub struct RollingLogger {
    lines: Arc<Mutex<VecDeque<LogLine>>>,
    capacity: usize,
}

impl RollingLogger {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn push(&self, line: LogLine) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    /// Oldest first
    pub fn recent(&self) -> Vec<LogLine> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// The last `n` lines at or above `level`, oldest first
    pub fn tail(&self, n: usize, level: Level) -> Vec<LogLine> {
        let mut lines: Vec<LogLine> = self
            .recent()
            .into_iter()
            .rev()
            .filter(|l| l.level <= level)
            .take(n)
            .collect();
        lines.reverse();
        lines
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }

    /// Builds a layer that records into this logger and forwards to `sink`.
    pub fn layer(&self, max_level: Level, sink: impl Fn(&LogLine) + Send + Sync + 'static) -> RollingLayer {
        RollingLayer {
            logger: self.clone(),
            max_level,
            sink: Box::new(sink),
        }
    }
}

impl fmt::Debug for RollingLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RollingLogger").field("capacity", &self.capacity).finish()
    }
}

pub struct RollingLayer {
    logger: RollingLogger,
    max_level: Level,
    sink: Box<Sink>,
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if *metadata.level() > self.max_level {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let line = LogLine {
            timestamp: Utc::now(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.finish(),
        };
        (self.sink)(&line);
        self.logger.push(line);
    }
}

/// Collects the `message` field followed by `key=value` pairs
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else {
            format!("{}{}", self.message, self.fields)
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Installs the layer as the global subscriber and returns the buffer handle.
pub fn init(
    capacity: usize,
    max_level: Level,
    sink: impl Fn(&LogLine) + Send + Sync + 'static,
) -> Result<RollingLogger, tracing::subscriber::SetGlobalDefaultError> {
    let logger = RollingLogger::new(capacity);
    let subscriber = tracing_subscriber::registry().with(logger.layer(max_level, sink));
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(logger)
}

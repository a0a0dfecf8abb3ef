use std::{
    fmt::Display,
    ops::Deref,
    sync::{
        Arc, PoisonError, RwLock,
        atomic::{AtomicBool, Ordering},
    },
};

use chrono::Utc;
use loggos_core::Sink;

use crate::{level::Level, line_message::LineMessage};

/// Format of the timestamp prepended to every line by default.
pub const LINE_TIMESTAMP_FORMAT: &str = "%a %b %e %Y %H:%M:%S";

type TimestampFn = Arc<dyn Fn() -> String + Send + Sync>;

fn default_timestamp() -> String {
    Utc::now().format(LINE_TIMESTAMP_FORMAT).to_string()
}

/// Logger writing `{timestamp} {LEVEL} {message}` lines through a [`Sink`].
///
/// Dereferences to the sink for flushing, decorations, mutators and the
/// runtime toggles.
pub struct LineLogger {
    sink: Sink<LineMessage>,
    timestamp: RwLock<TimestampFn>,
    color: AtomicBool,
}

impl Deref for LineLogger {
    type Target = Sink<LineMessage>;
    fn deref(&self) -> &Self::Target {
        &self.sink
    }
}

impl From<Sink<LineMessage>> for LineLogger {
    fn from(sink: Sink<LineMessage>) -> Self {
        Self {
            sink,
            timestamp: RwLock::new(Arc::new(default_timestamp)),
            color: AtomicBool::new(false),
        }
    }
}

impl LineLogger {
    /// Creates a line logger buffering up to `capacity` lines.
    pub fn new(capacity: usize) -> Self {
        Self::from(Sink::new(capacity))
    }

    /// Replaces the function producing each line's timestamp.
    pub fn override_timestamping<F>(&self, f: F)
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        *self
            .timestamp
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(f);
    }

    /// Colors level tags.
    pub fn enable_color(&self, toggle: bool) {
        self.color.store(toggle, Ordering::SeqCst);
    }

    pub fn info(&self, message: impl Display) {
        self.log(Level::Info, message);
    }

    pub fn warn(&self, message: impl Display) {
        self.log(Level::Warn, message);
    }

    pub fn crit(&self, message: impl Display) {
        self.log(Level::Crit, message);
    }

    pub fn debug(&self, message: impl Display) {
        self.log(Level::Debug, message);
    }

    pub fn log(&self, level: Level, message: impl Display) {
        if self.is_shutdown() {
            return;
        }
        let timestamp = self
            .timestamp
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let mut line = LineMessage::new(level, timestamp(), message.to_string())
            .with_color(self.color.load(Ordering::SeqCst));
        self.sink.send(&mut line);
    }
}

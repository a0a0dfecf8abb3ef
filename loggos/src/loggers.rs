use std::{fmt::Display, sync::OnceLock};

use loggos_core::{Flushed, LOGGOS_CONFIG};

use crate::{
    json_logger::{JsonLogger, json_logger},
    json_message::JsonMessage,
    line_logger::LineLogger,
};

/// Application-owned pair of default loggers.
///
/// Each logger is started the first time it is used, sized from
/// `LOGGOS_LINE_BUFFER` / `LOGGOS_JSON_BUFFER` unless capacities are given
/// explicitly. Hand a reference (or an `Arc`) to the parts of the program
/// that log, and call [`Loggers::flush`] before exiting.
pub struct Loggers {
    line_capacity: usize,
    json_capacity: usize,
    line: OnceLock<LineLogger>,
    json: OnceLock<JsonLogger>,
}

impl Default for Loggers {
    fn default() -> Self {
        Self::with_capacities(LOGGOS_CONFIG.LINE_BUFFER, LOGGOS_CONFIG.JSON_BUFFER)
    }
}

impl Loggers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacities(line_capacity: usize, json_capacity: usize) -> Self {
        Self {
            line_capacity,
            json_capacity,
            line: OnceLock::new(),
            json: OnceLock::new(),
        }
    }

    /// The line logger, started on first use.
    pub fn line(&self) -> &LineLogger {
        self.line.get_or_init(|| LineLogger::new(self.line_capacity))
    }

    /// The JSON logger, started on first use.
    pub fn json(&self) -> &JsonLogger {
        self.json.get_or_init(|| json_logger(self.json_capacity))
    }

    pub fn send_json(&self, msg: &mut JsonMessage) {
        self.json().send(msg);
    }

    pub fn info(&self, message: impl Display) {
        self.line().info(message);
    }

    pub fn warn(&self, message: impl Display) {
        self.line().warn(message);
    }

    pub fn crit(&self, message: impl Display) {
        self.line().crit(message);
    }

    pub fn debug(&self, message: impl Display) {
        self.line().debug(message);
    }

    /// Flushes every logger started so far. The returned handle completes
    /// once all of them have drained.
    pub fn flush(&self) -> Flushed {
        let line = self.line.get().map(|logger| logger.flush());
        let json = self.json.get().map(|logger| logger.flush());
        Flushed::all(line.into_iter().chain(json))
    }
}

//! # loggos
//! JSON and line loggers that never block the caller unless asked to.
//!
//! Both loggers are built on [`loggos_core::Sink`]: records are decorated,
//! mutated and filtered in the calling thread, rendered, then queued for a
//! single writer thread. When the queue is full the record is dropped and
//! counted, unless audit mode is enabled, in which case the caller waits.
//!
//! ## JSON logging
//! ```rust
//! use loggos::{JsonMessage, json_logger};
//! use serde_json::json;
//!
//! let logger = json_logger(500);
//! logger.add_decoration([("service", json!("billing"))]);
//! let mut msg = JsonMessage::info("invoice sent");
//! msg.add("invoice_id", 42);
//! logger.send(&mut msg);
//! // wait until everything has been printed
//! logger.flush().wait();
//! ```
//!
//! ## Line logging
//! ```rust
//! use loggos::LineLogger;
//!
//! let logger = LineLogger::new(500);
//! logger.enable_debug_logging(true);
//! logger.info("Hello, world!");
//! logger.debug(format_args!("{} threads started", 4));
//! logger.flush().wait();
//! ```
//!
//! ## Default loggers
//! ```rust
//! use std::sync::Arc;
//!
//! use loggos::{JsonMessage, Loggers};
//!
//! let loggers = Arc::new(Loggers::new());
//! let handles: Vec<_> = (0..5).map(|i| {
//!     let loggers = Arc::clone(&loggers);
//!     std::thread::spawn(move || {
//!         loggers.warn(format_args!("Hello, world from thread {i}!"));
//!         loggers.send_json(&mut JsonMessage::info(i));
//!     })
//! }).collect();
//! for h in handles { h.join().unwrap(); }
//! loggers.flush().wait();
//! ```
//!
//! ## Redirecting output
//! ```rust
//! use loggos::LineLogger;
//!
//! let logger = LineLogger::new(16);
//! logger.override_printer(|line: &str| eprintln!("{line}"));
//! logger.crit("written to stderr");
//! logger.flush().wait();
//! ```

mod json_logger;
mod json_message;
mod level;
mod line_logger;
mod line_message;
mod log_bridge;
mod loggers;

pub use json_logger::{JsonLogger, json_logger};
pub use json_message::{
    ERROR_KEY, EpochNanos, HUMAN_TIMESTAMP_FORMAT, HUMAN_TIMESTAMP_KEY, JsonMessage, LEVEL_KEY,
    MESSAGE_KEY, TIMESTAMP_KEY, TimeStamper,
};
pub use level::Level;
pub use line_logger::{LINE_TIMESTAMP_FORMAT, LineLogger};
pub use line_message::LineMessage;
pub use log_bridge::init_log_bridge;
pub use loggers::Loggers;
pub use loggos_core::{
    Capture, Flushed, LOGGOS_CONFIG, LoggosConfig, Mutator, Record, Sink, SinkConfig, Stdout,
    Transport, sink_config,
};

//! # loggos-core
//! Core sink engine for loggos - shared buffering, filtering and flushing.
//!
//! A [`Sink`] owns a bounded queue of rendered lines and a single consumer
//! thread writing them to a [`Transport`] (stdout by default). Records are
//! decorated, mutated and filtered in the caller's thread before being
//! queued.
//!
//! ```rust
//! use loggos_core::{Capture, Record, Sink};
//!
//! struct Line(String);
//!
//! impl Record for Line {
//!     type Value = String;
//!     fn is_debug(&self) -> bool {
//!         false
//!     }
//!     fn insert(&mut self, key: &str, value: String) {
//!         self.0.push_str(&format!(" {key}={value}"));
//!     }
//!     fn render(&self) -> String {
//!         self.0.clone()
//!     }
//! }
//!
//! let capture = Capture::default();
//! let sink = Sink::<Line>::new(16);
//! sink.override_printer(capture.clone());
//! sink.add_decoration([("app", "demo".to_string())]);
//! sink.send(&mut Line("hello".into()));
//! sink.flush().wait();
//! assert_eq!(capture.show(), vec!["hello app=demo".to_string()]);
//! ```

mod config;
mod flushed;
mod record;
mod sink;
mod transport;

pub use config::{LOGGOS_CONFIG, LoggosConfig};
pub use flushed::Flushed;
pub use record::{Mutator, Record};
pub use sink::{DEFAULT_CAPACITY, Sink, SinkConfig, sink_config};
pub use transport::{Capture, Stdout, Transport};

use loggos_core::{Sink, SinkConfig};

use crate::json_message::JsonMessage;

/// Sink emitting [`JsonMessage`]s, one JSON document per line.
pub type JsonLogger = Sink<JsonMessage>;

/// Starts a JSON logger buffering up to `capacity` messages.
pub fn json_logger(capacity: usize) -> JsonLogger {
    SinkConfig::default().with_capacity(capacity).build()
}

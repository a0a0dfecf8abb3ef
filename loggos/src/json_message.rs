use std::fmt;

use chrono::{DateTime, Utc};
use loggos_core::Record;
use serde::Serialize;
use serde_json::{Map, Serializer, Value, ser::PrettyFormatter};

use crate::level::Level;

/// Key holding the creation timestamp.
pub const TIMESTAMP_KEY: &str = "timestamp";
/// Key holding the concern level.
pub const LEVEL_KEY: &str = "level";
/// Key holding the log message.
pub const MESSAGE_KEY: &str = "log_message";
/// Key holding the timestamp derived by [`JsonMessage::add_human_timestamp`].
pub const HUMAN_TIMESTAMP_KEY: &str = "human_readable_timestamp";
/// Key holding an error description.
pub const ERROR_KEY: &str = "error";
/// Format of the human readable timestamp.
pub const HUMAN_TIMESTAMP_FORMAT: &str = "%a %b %e %Y %H:%M:%S %Z";

/// Produces the value stored under [`TIMESTAMP_KEY`] in new messages.
pub trait TimeStamper {
    fn stamp(&self) -> String;
}

impl<F: Fn() -> String> TimeStamper for F {
    fn stamp(&self) -> String {
        self()
    }
}

/// Default stamper: nanoseconds since the Unix epoch, as a decimal string.
#[derive(Default, Debug, Clone, Copy)]
pub struct EpochNanos;

impl TimeStamper for EpochNanos {
    fn stamp(&self) -> String {
        Utc::now().timestamp_nanos_opt().unwrap_or_default().to_string()
    }
}

/// A structured log record rendered as a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonMessage {
    fields: Map<String, Value>,
}

impl Default for JsonMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonMessage {
    /// An empty message stamped with the current epoch nanoseconds.
    pub fn new() -> Self {
        Self::with_stamper(&EpochNanos)
    }

    /// An empty message stamped by `stamper`.
    pub fn with_stamper(stamper: &dyn TimeStamper) -> Self {
        let mut fields = Map::new();
        fields.insert(TIMESTAMP_KEY.into(), Value::String(stamper.stamp()));
        Self { fields }
    }

    pub fn info(message: impl fmt::Display) -> Self {
        Self::leveled(Level::Info, message)
    }

    pub fn warn(message: impl fmt::Display) -> Self {
        Self::leveled(Level::Warn, message)
    }

    pub fn crit(message: impl fmt::Display) -> Self {
        Self::leveled(Level::Crit, message)
    }

    pub fn debug(message: impl fmt::Display) -> Self {
        Self::leveled(Level::Debug, message)
    }

    fn leveled(level: Level, message: impl fmt::Display) -> Self {
        let mut msg = Self::new();
        msg.set_level(level).message(message);
        msg
    }

    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Adds any serializable value.
    pub fn add_serialize<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> serde_json::Result<&mut Self> {
        let value = serde_json::to_value(value)?;
        Ok(self.add(key, value))
    }

    /// Stores the formatted arguments as a string, e.g.
    /// `msg.addf("user", format_args!("{name}#{id}"))`.
    pub fn addf(&mut self, key: impl Into<String>, args: fmt::Arguments<'_>) -> &mut Self {
        self.add(key, args.to_string())
    }

    pub fn error<E: std::error::Error + ?Sized>(&mut self, err: &E) -> &mut Self {
        self.add(ERROR_KEY, err.to_string())
    }

    pub fn errorf(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        self.addf(ERROR_KEY, args)
    }

    pub fn set_level(&mut self, level: Level) -> &mut Self {
        self.add(LEVEL_KEY, level.as_str())
    }

    pub fn set_info(&mut self) -> &mut Self {
        self.set_level(Level::Info)
    }

    pub fn set_warn(&mut self) -> &mut Self {
        self.set_level(Level::Warn)
    }

    pub fn set_crit(&mut self) -> &mut Self {
        self.set_level(Level::Crit)
    }

    pub fn set_debug(&mut self) -> &mut Self {
        self.set_level(Level::Debug)
    }

    /// Sets the log message.
    pub fn message(&mut self, message: impl fmt::Display) -> &mut Self {
        self.add(MESSAGE_KEY, message.to_string())
    }

    pub fn is_debug(&self) -> bool {
        matches!(
            self.fields.get(LEVEL_KEY),
            Some(Value::String(level)) if level == Level::Debug.as_str()
        )
    }

    /// Converts the epoch-nanosecond timestamp into a human readable one,
    /// stored under [`HUMAN_TIMESTAMP_KEY`].
    ///
    /// Nothing is written when the timestamp is missing, is not a string or
    /// does not parse as an integer.
    pub fn add_human_timestamp(&mut self) -> &mut Self {
        let Some(Value::String(stamp)) = self.fields.get(TIMESTAMP_KEY) else {
            return self;
        };
        let Ok(epoch) = stamp.parse::<i64>() else {
            return self;
        };
        let human = DateTime::from_timestamp_nanos(epoch)
            .format(HUMAN_TIMESTAMP_FORMAT)
            .to_string();
        self.add(HUMAN_TIMESTAMP_KEY, human)
    }

    /// Indented rendering, four spaces per level.
    pub fn pretty_string(&self) -> String {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        match self.fields.serialize(&mut serializer) {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(err) => self.fallback(&err),
        }
    }

    pub fn raw(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Direct access to the fields, for mutators.
    pub fn raw_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.fields
    }

    fn fallback(&self, err: &serde_json::Error) -> String {
        let mut fallback = Map::new();
        fallback.insert(ERROR_KEY.into(), Value::String(err.to_string()));
        let raw = format!("{:?}", self.fields);
        fallback.insert("raw_string".into(), Value::String(raw));
        Value::Object(fallback).to_string()
    }
}

impl fmt::Display for JsonMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.fields) {
            Ok(line) => f.write_str(&line),
            Err(err) => f.write_str(&self.fallback(&err)),
        }
    }
}

impl Record for JsonMessage {
    type Value = Value;

    fn is_debug(&self) -> bool {
        JsonMessage::is_debug(self)
    }

    fn insert(&mut self, key: &str, value: Value) {
        self.add(key, value);
    }

    fn attach_human_timestamp(&mut self) {
        self.add_human_timestamp();
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn render_pretty(&self) -> String {
        self.pretty_string()
    }
}

use std::fmt::Write;

use loggos_core::Record;

use crate::level::Level;

/// A plain text log line: `{timestamp} {LEVEL} {message}` followed by any
/// `key=value` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMessage {
    level: Level,
    timestamp: String,
    message: String,
    fields: Vec<(String, String)>,
    colored: bool,
}

impl LineMessage {
    pub fn new(level: Level, timestamp: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: timestamp.into(),
            message: message.into(),
            fields: Vec::new(),
            colored: false,
        }
    }

    /// Colors the level tag when rendered.
    pub fn with_color(self, yes: bool) -> Self {
        Self {
            colored: yes,
            ..self
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl Record for LineMessage {
    type Value = String;

    fn is_debug(&self) -> bool {
        self.level == Level::Debug
    }

    fn insert(&mut self, key: &str, value: String) {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key.to_string(), value)),
        }
    }

    fn render(&self) -> String {
        let tag = if self.colored {
            self.level.colored().to_string()
        } else {
            self.level.as_str().to_string()
        };
        let mut line = if self.message.is_empty() {
            format!("{} {tag}", self.timestamp)
        } else {
            format!("{} {tag} {}", self.timestamp, self.message)
        };
        for (key, value) in &self.fields {
            write!(line, " {key}={value}").ok();
        }
        line
    }
}

#[test]
fn test_line_rendering() {
    let mut line = LineMessage::new(Level::Warn, "Mon Jan  1 2024 10:00:00", "disk almost full");
    assert_eq!(line.render(), "Mon Jan  1 2024 10:00:00 WARN disk almost full");
    line.insert("host", "a".into());
    line.insert("zone", "eu".into());
    line.insert("host", "b".into());
    assert_eq!(
        line.render(),
        "Mon Jan  1 2024 10:00:00 WARN disk almost full host=b zone=eu"
    );
    assert_eq!(line.field("zone"), Some("eu"));
    assert!(!line.is_debug());
}

#[test]
fn test_empty_message_has_no_trailing_space() {
    let line = LineMessage::new(Level::Debug, "ts", "");
    assert_eq!(line.render(), "ts DEBUG");
    assert!(line.is_debug());
}

#[test]
fn test_colored_tag() {
    use colored::Colorize;
    colored::control::set_override(true);
    let line = LineMessage::new(Level::Crit, "ts", "boom").with_color(true);
    assert_eq!(line.render(), format!("ts {} boom", "CRIT".red()));
    assert!(line.render().contains("\u{1b}["));
}

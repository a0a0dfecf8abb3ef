use std::fmt;

use colored::{ColoredString, Colorize};

/// Concern level of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Warn,
    Crit,
    Debug,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Crit => "CRIT",
            Level::Debug => "DEBUG",
        }
    }

    pub fn colored(self) -> ColoredString {
        match self {
            Level::Crit => self.as_str().red(),
            Level::Warn => self.as_str().yellow(),
            Level::Info => self.as_str().green(),
            Level::Debug => self.as_str().blue(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Crit,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

#[test]
fn test_level_mapping() {
    assert_eq!(Level::from(log::Level::Error), Level::Crit);
    assert_eq!(Level::from(log::Level::Trace), Level::Debug);
    assert_eq!(Level::Warn.to_string(), "WARN");
    assert!(Level::Crit.colored().to_string().contains("CRIT"));
}

use std::fmt;
use std::str::FromStr;

use super::{ParseError, trim_field};

/// Levels accepted in the level column, in their canonical spelling
pub const ALLOWED_LEVELS: [&str; 3] = ["INFO", "WARN", "ERROR"];

/// Log level of a validated record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Canonical uppercase spelling, as written to the output file
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Look a level up by name, ignoring case but not surrounding whitespace
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "INFO" => Some(LogLevel::Info),
            "WARN" => Some(LogLevel::Warn),
            "ERROR" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::from_name(trim_field(s))
            .ok_or_else(|| ParseError::UnknownLevel(s.to_string()))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four trimmed columns of a well-shaped line, not yet interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFields<'a> {
    pub timestamp: &'a str,
    pub level: &'a str,
    pub service: &'a str,
    pub message: &'a str,
}

/// A line that passed both the shape and the level checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: String,
    pub level: LogLevel,
    pub service: String,
    pub message: String,
    pub line_number: usize,
}

impl LogRecord {
    /// Validate the level column and take ownership of the fields.
    ///
    /// Fails with [`ParseError::UnknownLevel`] when the level is not one of
    /// INFO, WARN or ERROR in any letter case.
    pub fn from_fields(fields: LogFields<'_>, line_number: usize) -> Result<Self, ParseError> {
        let level = fields.level.parse::<LogLevel>()?;
        Ok(LogRecord {
            timestamp: fields.timestamp.to_string(),
            level,
            service: fields.service.to_string(),
            message: fields.message.to_string(),
            line_number,
        })
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.timestamp, self.level, self.service, self.message
        )
    }
}

use thiserror::Error;

mod entities;

pub use entities::{ALLOWED_LEVELS, LogFields, LogLevel, LogRecord};

/// Why a line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line is empty")]
    EmptyLine,

    #[error("expected 4 fields separated by '|', found {found}")]
    FieldCount { found: usize },

    #[error("unknown log level '{0}'. Valid levels are: INFO, WARN, ERROR")]
    UnknownLevel(String),
}

/// Strip surrounding whitespace, counting the ASCII separator controls
/// (`\x1c`..`\x1f`) as whitespace too
pub(crate) fn trim_field(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Split a raw line into its four columns.
///
/// Surrounding whitespace (including a trailing newline) is ignored, every
/// `|` is a separator and each column is trimmed. Only the shape is checked
/// here; the level column is returned exactly as written.
pub fn parse_line(line: &str) -> Result<LogFields<'_>, ParseError> {
    let raw = trim_field(line);
    if raw.is_empty() {
        return Err(ParseError::EmptyLine);
    }

    let parts: Vec<&str> = raw.split('|').map(trim_field).collect();
    match parts[..] {
        [timestamp, level, service, message] => Ok(LogFields {
            timestamp,
            level,
            service,
            message,
        }),
        _ => Err(ParseError::FieldCount { found: parts.len() }),
    }
}

/// Return true if the level is INFO, WARN or ERROR, ignoring case and
/// surrounding whitespace.
///
/// Records are validated by parsing the column into a [`LogLevel`], which
/// accepts exactly the same inputs.
pub fn is_valid_level(level: &str) -> bool {
    let upper = trim_field(level).to_uppercase();
    ALLOWED_LEVELS.contains(&upper.as_str())
}

/// Parse and validate one line into an owned record
pub fn parse_record(line: &str, line_number: usize) -> Result<LogRecord, ParseError> {
    let fields = parse_line(line)?;
    LogRecord::from_fields(fields, line_number)
}

use super::error::FilterError;
use crate::parser::{LogLevel, LogRecord};

/// Decide whether a validated line passes the level and service filters.
///
/// `level` must already be uppercased and `level_filter`, when present, too.
/// The service comparison is exact and case-sensitive. A missing filter
/// matches everything; two filters must both match.
pub fn matches_filters(
    level: &str,
    service: &str,
    level_filter: Option<&str>,
    service_filter: Option<&str>,
) -> bool {
    let level_match = level_filter.map(|filter| level == filter).unwrap_or(true);
    let service_match = service_filter
        .map(|filter| service == filter)
        .unwrap_or(true);

    level_match && service_match
}

/// Level and service criteria for a run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LogFilter {
    level: Option<LogLevel>,
    service: Option<String>,
}

impl LogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: Option<LogLevel>) -> Self {
        self.level = level;
        self
    }

    pub fn with_service(mut self, service: Option<impl Into<String>>) -> Self {
        self.service = service.map(|s| s.into());
        self
    }

    /// Build a filter from raw command-line values.
    ///
    /// Empty strings count as "not provided". The level is matched without
    /// regard to case but must name INFO, WARN or ERROR exactly; padding
    /// such as `" warn "` is rejected.
    pub fn from_options(level: Option<&str>, service: Option<&str>) -> Result<Self, FilterError> {
        let level = match level.filter(|l| !l.is_empty()) {
            Some(raw) => Some(
                LogLevel::from_name(raw)
                    .ok_or_else(|| FilterError::InvalidLevel(raw.to_string()))?,
            ),
            None => None,
        };
        let service = service.filter(|s| !s.is_empty());

        Ok(Self::new().with_level(level).with_service(service))
    }

    pub fn level(&self) -> Option<LogLevel> {
        self.level
    }

    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    /// True when no criteria are set and every record passes
    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.service.is_none()
    }

    pub fn matches(&self, record: &LogRecord) -> bool {
        matches_filters(
            record.level.as_str(),
            &record.service,
            self.level.map(|l| l.as_str()),
            self.service(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(level: LogLevel, service: &str) -> LogRecord {
        LogRecord {
            timestamp: "2024-01-01T00:00:00".to_string(),
            level,
            service: service.to_string(),
            message: "hello".to_string(),
            line_number: 1,
        }
    }

    #[test]
    fn test_absent_filters_match_everything() {
        assert!(matches_filters("INFO", "auth", None, None));
        assert!(matches_filters("ERROR", "", None, None));
        assert!(LogFilter::new().matches(&record(LogLevel::Warn, "db")));
    }

    #[test]
    fn test_both_filters_must_match() {
        assert!(matches_filters("WARN", "api", Some("WARN"), Some("api")));
        assert!(!matches_filters("WARN", "db", Some("WARN"), Some("api")));
        assert!(!matches_filters("INFO", "api", Some("WARN"), Some("api")));
    }

    #[test]
    fn test_service_filter_is_case_sensitive() {
        assert!(!matches_filters("INFO", "Auth", None, Some("auth")));
        assert!(!matches_filters("INFO", "auth ", None, Some("auth")));
    }

    #[test]
    fn test_from_options_normalizes_level_case() {
        let filter = LogFilter::from_options(Some("warn"), Some("api")).unwrap();
        assert_eq!(filter.level(), Some(LogLevel::Warn));
        assert_eq!(filter.service(), Some("api"));
        assert!(filter.matches(&record(LogLevel::Warn, "api")));
        assert!(!filter.matches(&record(LogLevel::Warn, "db")));
    }

    #[test]
    fn test_from_options_treats_empty_as_absent() {
        let filter = LogFilter::from_options(Some(""), Some("")).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_from_options_rejects_unknown_level() {
        let err = LogFilter::from_options(Some("verb"), None).unwrap_err();
        assert_eq!(err, FilterError::InvalidLevel("verb".to_string()));
        assert_eq!(
            err.to_string(),
            "--level must be one of INFO, WARN, ERROR (got: verb)"
        );
    }

    #[test]
    fn test_from_options_rejects_padded_level() {
        let err = LogFilter::from_options(Some(" warn "), None).unwrap_err();
        assert_eq!(err, FilterError::InvalidLevel(" warn ".to_string()));
    }

    #[test]
    fn test_adding_a_filter_never_grows_the_match_set() {
        let records = [
            record(LogLevel::Info, "auth"),
            record(LogLevel::Warn, "api"),
            record(LogLevel::Warn, "db"),
            record(LogLevel::Error, "api"),
        ];
        let count = |f: &LogFilter| records.iter().filter(|r| f.matches(r)).count();

        let none = LogFilter::new();
        let level_only = LogFilter::new().with_level(Some(LogLevel::Warn));
        let both = level_only.clone().with_service(Some("api"));

        assert_eq!(count(&none), records.len());
        assert_eq!(count(&level_only), 2);
        assert_eq!(count(&both), 1);
    }
}

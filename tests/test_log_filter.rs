use std::io::Cursor;

use log_filter::filter::LogFilter;
use log_filter::parser::{LogLevel, LogRecord};
use log_filter::pipeline::scan_lines;

fn create_test_record(level: LogLevel, service: &str) -> LogRecord {
    LogRecord {
        timestamp: "2024-01-01T00:00:00".to_string(),
        level,
        service: service.to_string(),
        message: "test message".to_string(),
        line_number: 1,
    }
}

const SAMPLE: &str = concat!(
    "2024-01-01T00:00:00 | INFO | auth | login ok\n",
    "2024-01-01T00:00:01 | warn | api | slow response\n",
    "2024-01-01T00:00:02 | WARN | db | slow query\n",
    "garbage without separators\n",
    "2024-01-01T00:00:03 | ERROR | api | upstream 502\n",
    "2024-01-01T00:00:04 | DEBUG | api | cache miss\n",
    "2024-01-01T00:00:05 | error | Auth | token expired\n",
);

fn written_with(filter: &LogFilter) -> Vec<String> {
    scan_lines(Cursor::new(SAMPLE), filter)
        .expect("in-memory scan")
        .lines
}

#[test]
fn test_level_filter_is_case_insensitive() {
    let record = create_test_record(LogLevel::Error, "core");

    for raw in ["error", "ERROR", "ErRoR"] {
        let filter = LogFilter::from_options(Some(raw), None).expect("known level");
        assert!(filter.matches(&record), "level filter {raw:?}");
    }
}

#[test]
fn test_service_filter_is_case_sensitive() {
    let record = create_test_record(LogLevel::Info, "auth");

    assert!(LogFilter::new().with_service(Some("auth")).matches(&record));
    assert!(!LogFilter::new().with_service(Some("AUTH")).matches(&record));
    assert!(!LogFilter::new().with_service(Some("aut")).matches(&record));
}

#[test]
fn test_no_filter_keeps_every_valid_line() {
    let outcome = scan_lines(Cursor::new(SAMPLE), &LogFilter::new()).expect("scan");
    assert_eq!(outcome.valid_scanned, 5);
    assert_eq!(outcome.lines.len(), outcome.valid_scanned);
}

#[test]
fn test_adding_filters_only_shrinks_output() {
    let none = written_with(&LogFilter::new());
    let api = written_with(&LogFilter::new().with_service(Some("api")));
    let warn_api = written_with(
        &LogFilter::new()
            .with_level(Some(LogLevel::Warn))
            .with_service(Some("api")),
    );

    assert!(api.iter().all(|line| none.contains(line)));
    assert!(warn_api.iter().all(|line| api.contains(line)));
    assert_eq!(api.len(), 2);
    assert_eq!(
        warn_api,
        vec!["2024-01-01T00:00:01 | WARN | api | slow response"]
    );
}

#[test]
fn test_output_preserves_input_order() {
    let errors = written_with(&LogFilter::new().with_level(Some(LogLevel::Error)));
    assert_eq!(
        errors,
        vec![
            "2024-01-01T00:00:03 | ERROR | api | upstream 502",
            "2024-01-01T00:00:05 | ERROR | Auth | token expired",
        ]
    );
}

use homework_bot::config::{LogFormat, LoggingConfig};
use homework_bot::observability::init_logging;
use std::fs;

#[test]
fn test_log_file_is_appended_in_line_format() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("program.log");
    fs::write(&log_file, "previous line\n").unwrap();

    let config = LoggingConfig {
        log_file: log_file.clone(),
        log_level: "debug".to_string(),
        log_format: LogFormat::Pretty,
    };
    let guard = init_logging(&config).unwrap();
    tracing::debug!("debug event");
    drop(guard);

    let contents = fs::read_to_string(&log_file).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("previous line"));
    assert!(
        lines.any(|line| line.contains(", DEBUG, ") && line.ends_with("debug event")),
        "no debug line in {contents:?}"
    );
}

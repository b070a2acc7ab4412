use todo_core::{default_log_level, init_logging, logging_status, LoggingError};

// One process-wide logger: keep every init assertion in a single test.
#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("logs");
    let log_dir_str = log_dir.to_str().unwrap().to_string();
    let other_dir = tempfile::tempdir().unwrap();
    let other_dir_str = other_dir.path().to_str().unwrap().to_string();

    assert!(logging_status().is_none());

    init_logging("info", &log_dir_str).unwrap();
    init_logging(" INFO ", &log_dir_str).unwrap();

    let level_err = init_logging("debug", &log_dir_str).unwrap_err();
    assert!(matches!(level_err, LoggingError::Conflict { .. }));
    assert!(level_err.to_string().contains("refusing to switch"));

    let dir_err = init_logging("info", &other_dir_str).unwrap_err();
    assert!(matches!(dir_err, LoggingError::Conflict { .. }));

    let (level, active_dir) = logging_status().unwrap();
    assert_eq!(level, "info");
    assert_eq!(active_dir, log_dir);
    assert!(log_dir.is_dir());

    log::logger().flush();

    let mut written = String::new();
    for entry in std::fs::read_dir(&log_dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_file() {
            written.push_str(&std::fs::read_to_string(path).unwrap());
        }
    }
    assert!(written.contains("event=logging_init"));
}

#[test]
fn init_logging_rejects_bad_input_before_touching_state() {
    assert!(matches!(
        init_logging("loud", "/tmp/todo-logs"),
        Err(LoggingError::UnsupportedLevel(_))
    ));
    assert!(matches!(
        init_logging("info", "relative/logs"),
        Err(LoggingError::InvalidDir(_))
    ));
}

#[test]
fn default_level_matches_build_mode() {
    let expected = if cfg!(debug_assertions) { "debug" } else { "info" };
    assert_eq!(default_log_level(), expected);
}

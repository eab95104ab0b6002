//! Configuration files feeding a mounted screen.

use std::io::Write;
use std::time::Duration;

use glitch_screen::config::loader::load_from_file;
use glitch_screen::screen::LOG_SCRIPT;
use glitch_screen::{AnimatedErrorScreen, ConfigError};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap_or_else(|e| panic!("{e}"));
    file.write_all(content.as_bytes())
        .unwrap_or_else(|e| panic!("{e}"));
    file
}

#[test]
fn test_empty_file_yields_defaults() {
    let file = write_config("");
    let config = load_from_file(file.path()).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(config.timing.error_code_ms, 3000);
    assert_eq!(config.timing.progress_ms, 500);
    assert_eq!(config.timing.log_ms, 2000);
    assert_eq!(config.log.window, 5);
    assert_eq!(config.pixels.count, 12);
    assert!(config.random.seed.is_none());
}

#[test]
fn test_invalid_file_reports_every_violation() {
    let file = write_config(
        r#"
[timing]
log_ms = 0

[log]
window = 0
"#,
    );
    match load_from_file(file.path()) {
        Err(ConfigError::Validation(msg)) => {
            assert!(msg.contains("timing.log_ms"), "{msg}");
            assert!(msg.contains("log.window"), "{msg}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_unknown_key_is_parse_error() {
    let file = write_config("[timing]\nlog_speed = 3\n");
    assert!(matches!(
        load_from_file(file.path()),
        Err(ConfigError::Parse { .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn test_configured_timers_drive_the_screen() {
    let file = write_config(
        r#"
[timing]
log_ms = 100

[log]
window = 3

[pixels]
count = 4

[random]
seed = 5
"#,
    );
    let config = load_from_file(file.path()).unwrap_or_else(|e| panic!("{e}"));
    let screen = AnimatedErrorScreen::mount(&config).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(screen.pixels().len(), 4);

    tokio::time::sleep(Duration::from_millis(450)).await;
    let lines = screen.snapshot().log_lines;
    assert_eq!(lines, LOG_SCRIPT[1..=3].to_vec());
}

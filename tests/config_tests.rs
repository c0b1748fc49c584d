use std::fs;

use taskpulse::error::{ConfigError, Error};
use taskpulse::infrastructure::config::settings::Config;
use tempfile::TempDir;

fn write_temp_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_file_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(
        &dir,
        r#"
[schedule]
cron = "30 8 * * *"

[todoist]
completed_limit = 50

[telegram]
chat_id = "-42"
"#,
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.schedule.cron, "30 8 * * *");
    assert_eq!(config.todoist.completed_limit, 50);
    assert_eq!(config.todoist.rest_url, "https://api.todoist.com/rest/v2");
    assert_eq!(config.report.lookback_days, 14);
    assert_eq!(config.http.timeout_secs, 30);
}

#[test]
fn config_rejects_non_http_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[chart]\nbase_url = \"ftp://charts.example\"\n");

    let result = Config::load(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "chart.base_url",
            ..
        }))
    ));
}

#[test]
fn config_rejects_zero_lookback() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[report]\nlookback_days = 0\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "lookback_days",
            ..
        }))
    ));
}

#[test]
fn config_reports_malformed_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[report\nlookback_days = 7\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn secrets_come_from_environment_lookup() {
    let config = Config::parse_toml_with_env("", |key| match key {
        "TODOIST_API_KEY" => Some("todoist-secret".to_string()),
        "TELEGRAM_BOT_TOKEN" => Some("  ".to_string()),
        "TELEGRAM_CHAT_ID" => Some("-777".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.todoist_token().unwrap(), "todoist-secret");
    assert!(matches!(
        config.telegram_token(),
        Err(Error::Config(ConfigError::MissingField {
            field: "TELEGRAM_BOT_TOKEN"
        }))
    ));
    assert_eq!(config.telegram.chat_id, "-777");
}

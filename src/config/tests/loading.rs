//! Tests for loading configuration from the environment and CLI flags.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use rstest::rstest;

use crate::ReviewDeckConfig;
use crate::config::OperationMode;
use crate::dashboard::DashboardTab;

/// Loads configuration with an isolated home directory so no real dotfile
/// is picked up.
fn load_with(env: &[(&str, Option<&str>)], cli_args: &[&str]) -> ReviewDeckConfig {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let mut vars: Vec<(&str, Option<&str>)> = vec![
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
        ("REVIEWDECK_API_URL", None),
        ("REVIEWDECK_TOKEN", None),
        ("REVIEWDECK_TAB", None),
        ("REVIEWDECK_TIMEOUT_SECONDS", None),
    ];
    vars.extend_from_slice(env);
    let _guard = env_lock::lock_env(vars);

    let mut args: Vec<OsString> = vec![OsString::from("reviewdeck")];
    args.extend(cli_args.iter().map(OsString::from));

    ReviewDeckConfig::load_from_iter(args).expect("config should load")
}

#[rstest]
fn loads_defaults_without_sources() {
    let config = load_with(&[], &[]);

    assert_eq!(config.api_url(), "http://localhost:3000");
    assert_eq!(config.timeout_seconds, 10);
    assert_eq!(config.initial_tab(), Ok(DashboardTab::MyReviews));
    assert_eq!(config.operation_mode(), OperationMode::Dashboard);
}

#[rstest]
fn loads_values_from_environment() {
    let config = load_with(
        &[
            ("REVIEWDECK_API_URL", Some("http://reviews.internal:8080")),
            ("REVIEWDECK_TAB", Some("cycles")),
            ("REVIEWDECK_TIMEOUT_SECONDS", Some("4")),
        ],
        &[],
    );

    assert_eq!(config.api_url(), "http://reviews.internal:8080");
    assert_eq!(config.initial_tab(), Ok(DashboardTab::Cycles));
    assert_eq!(config.timeout_seconds, 4);
}

#[rstest]
fn cli_flags_override_environment() {
    let config = load_with(
        &[("REVIEWDECK_API_URL", Some("http://from-env"))],
        &["-u", "http://from-cli", "--tab", "analytics", "-s"],
    );

    assert_eq!(config.api_url(), "http://from-cli");
    assert_eq!(config.initial_tab(), Ok(DashboardTab::Analytics));
    assert_eq!(config.operation_mode(), OperationMode::Summary);
}

#[rstest]
fn token_loads_from_short_flag() {
    let config = load_with(&[], &["-t", "dev-token"]);

    assert_eq!(config.token.as_deref(), Some("dev-token"));
    let settings = config.gateway_settings().expect("settings should build");
    assert_eq!(
        settings.token().map(crate::api::ApiToken::value),
        Some("dev-token")
    );
}

//! Tests for configuration layer precedence.

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::build_config_from_layers;
use crate::config::DEFAULT_API_URL;

#[rstest]
#[case::file_overrides_defaults(
    vec![
        ("defaults", json!({"api_url": "http://default"})),
        ("file", json!({"api_url": "http://file"})),
    ],
    "api_url",
    "http://file",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"token": "file-token"})), ("environment", json!({"token": "env-token"}))],
    "token",
    "env-token",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"tab": "cycles"})), ("cli", json!({"tab": "analytics"}))],
    "tab",
    "analytics",
    "CLI should override environment"
)]
fn test_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] field: &str,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let config = build_config_from_layers(&layers);

    let actual = match field {
        "api_url" => config.api_url.as_deref(),
        "token" => config.token.as_deref(),
        "tab" => config.tab.as_deref(),
        _ => panic!("unknown field: {field}"),
    };

    assert_eq!(actual, Some(expected), "{message}");
}

#[rstest]
fn defaults_apply_when_no_sources_provided() {
    let config = build_config_from_layers(&[(
        "defaults",
        json!({"api_url": null, "token": null, "tab": null}),
    )]);

    assert!(config.api_url.is_none(), "api_url should be None");
    assert!(config.token.is_none(), "token should be None");
    assert_eq!(config.api_url(), DEFAULT_API_URL);
    assert_eq!(
        config.timeout_seconds, 10,
        "timeout_seconds should default to 10 when unset"
    );
    assert!(!config.summary, "summary should default to false");
}

#[rstest]
fn full_precedence_chain() {
    let config = build_config_from_layers(&[
        (
            "defaults",
            json!({"api_url": "http://default", "token": "default-token", "timeout_seconds": 1}),
        ),
        (
            "file",
            json!({"api_url": "http://file", "token": "file-token", "timeout_seconds": 2}),
        ),
        (
            "environment",
            json!({"api_url": "http://env", "timeout_seconds": 3}),
        ),
        ("cli", json!({"api_url": "http://cli"})),
    ]);

    assert_eq!(config.api_url(), "http://cli", "CLI wins for api_url");
    assert_eq!(
        config.token.as_deref(),
        Some("file-token"),
        "file wins for token (no env/cli override)"
    );
    assert_eq!(
        config.timeout_seconds, 3,
        "environment wins for timeout_seconds"
    );
}

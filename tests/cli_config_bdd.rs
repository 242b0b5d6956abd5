//! Behavioural tests for CLI configuration loading.

use ortho_config::MergeComposer;
use reviewdeck::{DashboardError, ReviewDeckConfig};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Value, json};

/// State for configuration scenarios.
///
/// Uses JSON values to represent configuration layers since `MergeComposer`
/// doesn't implement Clone. The composer is built fresh in `build_config`.
#[derive(ScenarioState, Default)]
struct ConfigState {
    env_layer: Slot<Value>,
    cli_layer: Slot<Value>,
    config: Slot<ReviewDeckConfig>,
}

#[fixture]
fn config_state() -> ConfigState {
    ConfigState::default()
}

/// Builds and stores the configuration from the accumulated layers.
fn build_config(state: &ConfigState) {
    let mut composer = MergeComposer::new();

    // The defaults layer carries every field so the merge has a full shape.
    let defaults = serde_json::to_value(ReviewDeckConfig::default())
        .unwrap_or_else(|error| panic!("defaults should serialise: {error}"));
    composer.push_defaults(defaults);

    if let Some(env) = state.env_layer.get() {
        composer.push_environment(env);
    }

    if let Some(cli) = state.cli_layer.get() {
        composer.push_cli(cli);
    }

    match ReviewDeckConfig::merge_from_layers(composer.layers()) {
        Ok(config) => {
            state.config.set(config);
        }
        Err(error) => {
            panic!("failed to merge configuration: {error}");
        }
    }
}

fn built_config(state: &ConfigState) -> ReviewDeckConfig {
    state
        .config
        .get()
        .unwrap_or_else(|| panic!("configuration not built"))
}

fn set_cli(state: &ConfigState, layer: Value) {
    state.cli_layer.set(layer);
    build_config(state);
}

// --- Given steps ---

#[given("an empty configuration")]
fn empty_configuration(config_state: &ConfigState) {
    drop(config_state.env_layer.take());
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("a configuration with environment api_url {url}")]
fn env_api_url_set(config_state: &ConfigState, url: String) {
    config_state
        .env_layer
        .set(json!({"api_url": url.trim_matches('"')}));
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("a configuration with environment token {token}")]
fn env_token_set(config_state: &ConfigState, token: String) {
    config_state
        .env_layer
        .set(json!({"token": token.trim_matches('"')}));
}

// --- When steps ---

#[when("the CLI receives no arguments")]
fn cli_receives_nothing(config_state: &ConfigState) {
    build_config(config_state);
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[when("the CLI receives api_url {url}")]
fn cli_receives_api_url(config_state: &ConfigState, url: String) {
    set_cli(config_state, json!({"api_url": url.trim_matches('"')}));
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[when("the CLI receives tab {tab}")]
fn cli_receives_tab(config_state: &ConfigState, tab: String) {
    set_cli(config_state, json!({"tab": tab.trim_matches('"')}));
}

#[when("the CLI receives timeout_seconds {seconds:u64}")]
fn cli_receives_timeout(config_state: &ConfigState, seconds: u64) {
    set_cli(config_state, json!({"timeout_seconds": seconds}));
}

// --- Then steps ---

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the API URL is {expected}")]
fn assert_api_url(config_state: &ConfigState, expected: String) {
    let config = built_config(config_state);
    assert_eq!(config.api_url(), expected.trim_matches('"'), "api_url mismatch");
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the initial tab is {expected}")]
fn assert_initial_tab(config_state: &ConfigState, expected: String) {
    let tab = built_config(config_state)
        .initial_tab()
        .unwrap_or_else(|error| panic!("tab should resolve: {error}"));
    assert_eq!(tab.id(), expected.trim_matches('"'));
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the gateway token is {expected}")]
fn assert_gateway_token(config_state: &ConfigState, expected: String) {
    let settings = built_config(config_state)
        .gateway_settings()
        .unwrap_or_else(|error| panic!("settings should build: {error}"));
    assert_eq!(
        settings.token().map(|token| token.value()),
        Some(expected.trim_matches('"'))
    );
}

#[then("the configuration is valid")]
fn assert_valid(config_state: &ConfigState) {
    let result = built_config(config_state).validate();
    assert!(result.is_ok(), "expected valid configuration, got {result:?}");
}

#[then("validation fails with a configuration error")]
fn assert_configuration_error(config_state: &ConfigState) {
    let result = built_config(config_state).validate();
    assert!(
        matches!(result, Err(DashboardError::Configuration { .. })),
        "expected configuration error, got {result:?}"
    );
}

#[then("validation fails with an invalid URL error")]
fn assert_invalid_url(config_state: &ConfigState) {
    let result = built_config(config_state).validate();
    assert!(
        matches!(result, Err(DashboardError::InvalidBaseUrl(_))),
        "expected invalid URL error, got {result:?}"
    );
}

// --- Scenario bindings ---

#[scenario(path = "tests/features/cli_config.feature", index = 0)]
fn defaults_apply(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 1)]
fn cli_api_url_overrides_env(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 2)]
fn env_token_used_when_cli_not_provided(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 3)]
fn initial_tab_from_cli(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 4)]
fn unknown_tab_rejected(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 5)]
fn zero_timeout_rejected(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 6)]
fn unparseable_url_rejected(config_state: ConfigState) {
    let _ = config_state;
}

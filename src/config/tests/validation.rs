//! Tests for configuration validation.

use std::time::Duration;

use rstest::rstest;

use crate::ReviewDeckConfig;
use crate::api::DashboardError;
use crate::dashboard::DashboardTab;

#[rstest]
fn default_configuration_is_valid() {
    let config = ReviewDeckConfig::default();

    assert!(config.validate().is_ok(), "defaults should validate");
    let settings = config.gateway_settings().expect("settings should build");
    assert_eq!(settings.base_url().as_str(), "http://localhost:3000/");
    assert_eq!(settings.timeout(), Duration::from_secs(10));
    assert!(settings.token().is_none());
}

#[rstest]
#[case::not_a_url("not a url")]
#[case::unsupported_scheme("ftp://reviews.example.com")]
fn rejects_unusable_api_urls(#[case] api_url: &str) {
    let config = ReviewDeckConfig {
        api_url: Some(api_url.to_owned()),
        ..Default::default()
    };

    let result = config.validate();

    assert!(
        matches!(result, Err(DashboardError::InvalidBaseUrl(_))),
        "should reject {api_url}, got {result:?}"
    );
}

#[rstest]
fn rejects_blank_token() {
    let config = ReviewDeckConfig {
        token: Some("   ".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.validate(), Err(DashboardError::BlankToken));
}

#[rstest]
fn rejects_zero_timeout() {
    let config = ReviewDeckConfig {
        timeout_seconds: 0,
        ..Default::default()
    };

    let result = config.validate();

    assert!(
        matches!(
            result,
            Err(DashboardError::Configuration { ref message }) if message.contains("timeout")
        ),
        "should reject zero timeout, got {result:?}"
    );
}

#[rstest]
fn rejects_unknown_tab() {
    let config = ReviewDeckConfig {
        tab: Some("settings".to_owned()),
        ..Default::default()
    };

    let result = config.validate();

    assert!(
        matches!(
            result,
            Err(DashboardError::Configuration { ref message }) if message.contains("settings")
        ),
        "should reject unknown tab, got {result:?}"
    );
}

#[rstest]
#[case("my-reviews", DashboardTab::MyReviews)]
#[case("notifications", DashboardTab::Notifications)]
fn resolves_configured_tab(#[case] tab: &str, #[case] expected: DashboardTab) {
    let config = ReviewDeckConfig {
        tab: Some(tab.to_owned()),
        ..Default::default()
    };

    assert_eq!(config.initial_tab(), Ok(expected));
}

#[rstest]
fn rejects_telemetry_in_dashboard_mode() {
    let config = ReviewDeckConfig {
        telemetry: true,
        ..Default::default()
    };

    let result = config.validate();

    assert!(
        matches!(
            result,
            Err(DashboardError::Configuration { ref message }) if message.contains("--summary")
        ),
        "should reject telemetry without summary, got {result:?}"
    );
}

#[rstest]
fn accepts_telemetry_in_summary_mode() {
    let config = ReviewDeckConfig {
        telemetry: true,
        summary: true,
        ..Default::default()
    };

    assert_eq!(config.validate(), Ok(()));
}

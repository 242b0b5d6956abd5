//! Behavioural tests for loading dashboard datasets over HTTP.

use std::time::Duration;

use reviewdeck::dashboard::load_snapshot;
use reviewdeck::telemetry::NoopTelemetrySink;
use reviewdeck::{
    ApiToken, DashboardData, DashboardError, Endpoint, GatewaySettings, HttpDashboardGateway,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod support;

use support::runtime::{SharedRuntime, ensure_runtime_and_server};

#[derive(ScenarioState, Default)]
struct LoadState {
    runtime: Slot<SharedRuntime>,
    server: Slot<MockServer>,
    data: Slot<DashboardData>,
}

#[fixture]
fn load_state() -> LoadState {
    LoadState::default()
}

fn step_error(message: impl Into<String>) -> DashboardError {
    DashboardError::Api {
        message: message.into(),
    }
}

fn io_step_error(error: &std::io::Error) -> DashboardError {
    DashboardError::Io {
        message: error.to_string(),
    }
}

fn reviews_body(count: u64) -> Value {
    let reviews: Vec<Value> = (1..=count)
        .map(|index| {
            json!({
                "id": format!("r-{index}"),
                "reviewee": { "id": format!("u-{index}"), "name": format!("Reviewee {index}") },
                "status": "pending",
                "dueDate": "2030-01-01T00:00:00Z",
                "template": { "id": "t-1", "name": "Peer review" }
            })
        })
        .collect();
    json!({ "reviews": reviews })
}

fn cycles_body(count: u64) -> Value {
    let cycles: Vec<Value> = (1..=count)
        .map(|index| {
            json!({
                "id": index,
                "name": format!("Cycle {index}"),
                "status": "active",
                "startDate": "2025-01-01",
                "endDate": "2025-03-31",
                "progress": { "completionRate": 75.0, "completedReviews": 9, "totalReviews": 12 }
            })
        })
        .collect();
    json!({ "cycles": cycles })
}

fn analytics_body(total: u64) -> Value {
    json!({
        "analytics": {
            "totalReviews": total,
            "completedReviews": 0,
            "pendingReviews": total,
            "averageRating": 0.0
        }
    })
}

/// Mounts `mock` on the scenario's server.
fn mount(state: &LoadState, runtime: &SharedRuntime, mock: Mock) -> Result<(), DashboardError> {
    state
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .ok_or_else(|| step_error("mock server not initialised"))
}

fn ok_mock(endpoint: Endpoint, body: Value) -> Mock {
    Mock::given(method("GET"))
        .and(path(endpoint.path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
}

#[given(
    "a backend serving {reviews:u64} reviews, {cycles:u64} cycle and analytics totalling \
     {total:u64}"
)]
fn seed_backend(
    load_state: &LoadState,
    reviews: u64,
    cycles: u64,
    total: u64,
) -> Result<(), DashboardError> {
    let runtime = ensure_runtime_and_server(&load_state.runtime, &load_state.server)
        .map_err(|error| io_step_error(&error))?;

    mount(load_state, &runtime, ok_mock(Endpoint::Reviews, reviews_body(reviews)))?;
    mount(load_state, &runtime, ok_mock(Endpoint::Cycles, cycles_body(cycles)))?;
    mount(
        load_state,
        &runtime,
        ok_mock(Endpoint::AnalyticsOverview, analytics_body(total)),
    )
}

#[given("the cycles endpoint fails with status {status:u16}")]
fn fail_cycles(load_state: &LoadState, status: u16) -> Result<(), DashboardError> {
    let runtime = ensure_runtime_and_server(&load_state.runtime, &load_state.server)
        .map_err(|error| io_step_error(&error))?;

    let mock = Mock::given(method("GET"))
        .and(path(Endpoint::Cycles.path()))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(json!({ "error": "database unavailable" })),
        )
        .with_priority(1);
    mount(load_state, &runtime, mock)
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("a backend that requires the token {token}")]
fn seed_protected_backend(load_state: &LoadState, token: String) -> Result<(), DashboardError> {
    let runtime = ensure_runtime_and_server(&load_state.runtime, &load_state.server)
        .map_err(|error| io_step_error(&error))?;
    let authorization = format!("Bearer {}", token.trim_matches('"'));

    let bodies = [
        (Endpoint::Reviews, reviews_body(2)),
        (Endpoint::Cycles, cycles_body(1)),
        (Endpoint::AnalyticsOverview, analytics_body(2)),
    ];
    for (endpoint, body) in bodies {
        let mock = Mock::given(method("GET"))
            .and(path(endpoint.path()))
            .and(header("authorization", authorization.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body));
        mount(load_state, &runtime, mock)?;
    }

    let rejection = Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Unauthorized" })))
        .with_priority(10);
    mount(load_state, &runtime, rejection)
}

/// Loads a snapshot through the HTTP gateway and stores it.
fn load(load_state: &LoadState, token: Option<&str>) -> Result<(), DashboardError> {
    let runtime = load_state
        .runtime
        .get()
        .ok_or_else(|| step_error("runtime not initialised"))?;
    let server_url = load_state
        .server
        .with_ref(MockServer::uri)
        .ok_or_else(|| step_error("mock server URL missing"))?;

    let token = token.map(ApiToken::new).transpose()?;
    let settings = GatewaySettings::new(&server_url, token, Duration::from_secs(5))?;
    let gateway = HttpDashboardGateway::new(settings)?;

    let data = runtime.block_on(load_snapshot(&gateway, &NoopTelemetrySink));
    load_state.data.set(data);
    Ok(())
}

#[when("the dashboard loads a snapshot")]
fn load_without_token(load_state: &LoadState) -> Result<(), DashboardError> {
    load(load_state, None)
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[when("the dashboard loads a snapshot with token {token}")]
fn load_with_token(load_state: &LoadState, token: String) -> Result<(), DashboardError> {
    load(load_state, Some(token.trim_matches('"')))
}

/// Applies `check` to the loaded data.
fn with_data<T>(
    load_state: &LoadState,
    check: impl FnOnce(&DashboardData) -> T,
) -> Result<T, DashboardError> {
    load_state
        .data
        .with_ref(check)
        .ok_or_else(|| step_error("dashboard data missing"))
}

fn expect_count(label: &str, actual: usize, expected: u64) -> Result<(), DashboardError> {
    if u64::try_from(actual).is_ok_and(|count| count == expected) {
        Ok(())
    } else {
        Err(step_error(format!("expected {expected} {label} but found {actual}")))
    }
}

#[then("{count:u64} reviews are available")]
fn assert_reviews(load_state: &LoadState, count: u64) -> Result<(), DashboardError> {
    let actual = with_data(load_state, |data| data.reviews().len())?;
    expect_count("reviews", actual, count)
}

#[then("{count:u64} cycle is available")]
fn assert_cycles(load_state: &LoadState, count: u64) -> Result<(), DashboardError> {
    let actual = with_data(load_state, |data| data.cycles().len())?;
    expect_count("cycles", actual, count)
}

#[then("the analytics total is {total:u64}")]
fn assert_analytics_total(load_state: &LoadState, total: u64) -> Result<(), DashboardError> {
    let actual = with_data(load_state, |data| data.analytics().total_reviews)?;
    if actual == total {
        Ok(())
    } else {
        Err(step_error(format!(
            "expected analytics total {total} but found {actual}"
        )))
    }
}

#[then("no dataset failed")]
fn assert_no_failures(load_state: &LoadState) -> Result<(), DashboardError> {
    let failed = with_data(load_state, DashboardData::failed_endpoints)?;
    if failed.is_empty() {
        Ok(())
    } else {
        Err(step_error(format!("unexpected failures: {failed:?}")))
    }
}

#[then("only the cycles dataset failed")]
fn assert_only_cycles_failed(load_state: &LoadState) -> Result<(), DashboardError> {
    let failed = with_data(load_state, DashboardData::failed_endpoints)?;
    if failed == [Endpoint::Cycles] {
        Ok(())
    } else {
        Err(step_error(format!("expected only cycles to fail, got {failed:?}")))
    }
}

#[then("every dataset failed with an authentication error")]
fn assert_authentication_failures(load_state: &LoadState) -> Result<(), DashboardError> {
    let messages = with_data(load_state, |data| {
        [
            data.reviews.failure().map(str::to_owned),
            data.cycles.failure().map(str::to_owned),
            data.analytics.failure().map(str::to_owned),
        ]
    })?;

    for message in messages {
        let Some(text) = message else {
            return Err(step_error("expected every dataset to fail"));
        };
        if !text.contains("rejected the credentials") {
            return Err(step_error(format!(
                "expected an authentication failure, got {text}"
            )));
        }
    }
    Ok(())
}

#[scenario(path = "tests/features/dashboard_load.feature", index = 0)]
fn all_datasets_load(load_state: LoadState) {
    let _ = load_state;
}

#[scenario(path = "tests/features/dashboard_load.feature", index = 1)]
fn failing_endpoint_is_isolated(load_state: LoadState) {
    let _ = load_state;
}

#[scenario(path = "tests/features/dashboard_load.feature", index = 2)]
fn bearer_token_is_sent(load_state: LoadState) {
    let _ = load_state;
}

#[scenario(path = "tests/features/dashboard_load.feature", index = 3)]
fn rejected_credentials_are_reported(load_state: LoadState) {
    let _ = load_state;
}

//! HTTP gateway for the review dashboard endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::error::DashboardError;
use crate::api::models::{
    AnalyticsEnvelope, AnalyticsSummary, CyclesEnvelope, Review, ReviewCycle, ReviewsEnvelope,
};
use crate::api::settings::GatewaySettings;

use super::error_mapping::{extract_error_message, map_http_error, map_transport_error};
use super::{DashboardGateway, Endpoint};

/// Gateway for loading dashboard data over HTTP with `reqwest`.
///
/// Requests carry no parameters. When a token is configured it is sent as a
/// bearer credential. Requests are never retried.
#[derive(Debug, Clone)]
pub struct HttpDashboardGateway {
    client: Client,
    settings: GatewaySettings,
}

impl HttpDashboardGateway {
    /// Creates a gateway for the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Configuration`] if the HTTP client cannot be
    /// built.
    pub fn new(settings: GatewaySettings) -> Result<Self, DashboardError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|error| DashboardError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;
        Ok(Self { client, settings })
    }

    /// Returns the settings this gateway was built with.
    #[must_use]
    pub const fn settings(&self) -> &GatewaySettings {
        &self.settings
    }

    /// Issues a `GET` for the endpoint and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] when any of the following occur:
    ///
    /// - **Transport failures**: connection errors or timeouts.
    /// - **Rejected credentials**: 401/403 responses map to
    ///   [`DashboardError::Authentication`].
    /// - **Other non-success statuses**: mapped to [`DashboardError::Api`]
    ///   with the backend's message when one is present.
    /// - **Malformed bodies**: mapped to [`DashboardError::Decode`].
    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, DashboardError> {
        let url = self.settings.endpoint_url(endpoint.path())?;
        tracing::debug!(%endpoint, %url, "requesting dashboard data");

        let mut request = self.client.get(url);
        if let Some(token) = self.settings.token() {
            request = request.bearer_auth(token.value());
        }

        let response = request
            .send()
            .await
            .map_err(|error| map_transport_error(endpoint, &error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = map_http_error(endpoint, status, extract_error_message(&body));
            tracing::warn!(%endpoint, %status, "dashboard request failed");
            return Err(error);
        }

        response
            .json::<T>()
            .await
            .map_err(|error| DashboardError::Decode {
                message: format!("{endpoint} response could not be decoded: {error}"),
            })
    }
}

#[async_trait]
impl DashboardGateway for HttpDashboardGateway {
    async fn list_reviews(&self) -> Result<Vec<Review>, DashboardError> {
        let envelope: ReviewsEnvelope = self.get_json(Endpoint::Reviews).await?;
        Ok(envelope.reviews)
    }

    async fn list_cycles(&self) -> Result<Vec<ReviewCycle>, DashboardError> {
        let envelope: CyclesEnvelope = self.get_json(Endpoint::Cycles).await?;
        Ok(envelope.cycles)
    }

    async fn analytics_overview(&self) -> Result<AnalyticsSummary, DashboardError> {
        let envelope: AnalyticsEnvelope = self.get_json(Endpoint::AnalyticsOverview).await?;
        Ok(envelope.analytics)
    }
}

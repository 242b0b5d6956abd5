//! Connection settings for the dashboard backend.

use std::fmt;
use std::time::Duration;

use url::Url;

use super::error::DashboardError;

/// Bearer token sent with every request when configured.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a token, rejecting blank values.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::BlankToken`] when the value is empty or only
    /// whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, DashboardError> {
        let token = value.into();
        if token.trim().is_empty() {
            return Err(DashboardError::BlankToken);
        }
        Ok(Self(token))
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(<redacted>)")
    }
}

/// Everything the HTTP gateway needs to reach the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySettings {
    base_url: Url,
    token: Option<ApiToken>,
    timeout: Duration,
}

impl GatewaySettings {
    /// Parses the base URL and bundles it with the optional token and
    /// request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidBaseUrl`] when the URL does not parse
    /// or does not use `http`/`https`.
    pub fn new(
        base_url: &str,
        token: Option<ApiToken>,
        timeout: Duration,
    ) -> Result<Self, DashboardError> {
        let parsed = Url::parse(base_url)
            .map_err(|error| DashboardError::InvalidBaseUrl(format!("{base_url}: {error}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DashboardError::InvalidBaseUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }
        Ok(Self {
            base_url: parsed,
            token,
            timeout,
        })
    }

    /// Returns the backend origin.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the configured bearer token, if any.
    #[must_use]
    pub const fn token(&self) -> Option<&ApiToken> {
        self.token.as_ref()
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolves an absolute endpoint path against the base URL.
    ///
    /// Any path prefix on the base URL is preserved, so a backend mounted at
    /// `https://example.com/feedback` serves `/api/...` below that prefix.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidBaseUrl`] if the joined URL is not
    /// valid.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, DashboardError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let joined = format!("{base}{path}");
        Url::parse(&joined)
            .map_err(|error| DashboardError::InvalidBaseUrl(format!("{joined}: {error}")))
    }
}

//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.reviewdeck.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REVIEWDECK_API_URL`, `REVIEWDECK_TOKEN`,
//!    `REVIEWDECK_TAB`, `REVIEWDECK_TIMEOUT_SECONDS`
//! 4. **Command-line arguments** – `--api-url`/`-u`, `--token`/`-t`, `--tab`,
//!    `--timeout-seconds`, `--summary`/`-s`, `--telemetry`
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "https://feedback.example.com"
//! token = "dev-token"
//! tab = "cycles"
//! timeout_seconds = 5
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::api::{ApiToken, DashboardError, GatewaySettings};
use crate::dashboard::DashboardTab;

/// API origin used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive terminal dashboard.
    Dashboard,
    /// Print the selected panel once and exit.
    Summary,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use reviewdeck::ReviewDeckConfig;
///
/// let config = ReviewDeckConfig::load().expect("failed to load configuration");
/// let settings = config.gateway_settings().expect("valid gateway settings");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEWDECK",
    discovery(
        dotfile_name = ".reviewdeck.toml",
        config_file_name = "reviewdeck.toml",
        app_name = "reviewdeck"
    )
)]
pub struct ReviewDeckConfig {
    /// Origin of the feedback backend.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-u <URL>`
    /// - Environment: `REVIEWDECK_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub api_url: Option<String>,

    /// Bearer token sent with every request, if the backend needs one.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `REVIEWDECK_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Tab shown at start-up (`my-reviews`, `completed`, `cycles`,
    /// `analytics` or `notifications`).
    #[ortho_config()]
    pub tab: Option<String>,

    /// Per-request timeout, in seconds. Must be greater than zero.
    #[ortho_config()]
    pub timeout_seconds: u64,

    /// Prints the selected panel once instead of starting the dashboard.
    ///
    /// Note: ortho-config does not load boolean values from the environment,
    /// so `REVIEWDECK_SUMMARY` is ignored.
    #[ortho_config(cli_short = 's')]
    pub summary: bool,

    /// Writes dataset load telemetry to stderr as JSON lines.
    ///
    /// Only valid together with `--summary`: the dashboard owns the terminal,
    /// so stderr output would corrupt it.
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for ReviewDeckConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            token: None,
            tab: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            summary: false,
            telemetry: false,
        }
    }
}

impl ReviewDeckConfig {
    /// Returns the configured API origin, or [`DEFAULT_API_URL`].
    #[must_use]
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Resolves the tab to open first.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Configuration`] for an unknown identifier.
    pub fn initial_tab(&self) -> Result<DashboardTab, DashboardError> {
        self.tab
            .as_deref()
            .map_or_else(|| Ok(DashboardTab::default()), str::parse)
    }

    /// Returns the request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Configuration`] when the timeout is zero.
    pub fn timeout(&self) -> Result<Duration, DashboardError> {
        if self.timeout_seconds == 0 {
            return Err(DashboardError::Configuration {
                message: "timeout_seconds must be greater than zero".to_owned(),
            });
        }
        Ok(Duration::from_secs(self.timeout_seconds))
    }

    /// Builds the gateway settings from the configured URL, token and
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidBaseUrl`] for an unusable URL,
    /// [`DashboardError::BlankToken`] for a whitespace-only token and
    /// [`DashboardError::Configuration`] for a zero timeout.
    pub fn gateway_settings(&self) -> Result<GatewaySettings, DashboardError> {
        let token = self.token.as_deref().map(ApiToken::new).transpose()?;
        GatewaySettings::new(self.api_url(), token, self.timeout()?)
    }

    /// Determines the operation mode.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.summary {
            OperationMode::Summary
        } else {
            OperationMode::Dashboard
        }
    }

    /// Checks every value before any request is made.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found, in the order URL, token,
    /// timeout, tab, telemetry.
    pub fn validate(&self) -> Result<(), DashboardError> {
        self.gateway_settings()?;
        self.initial_tab()?;
        if self.telemetry && !self.summary {
            return Err(DashboardError::Configuration {
                message: "telemetry requires --summary; the dashboard draws on the terminal \
                          that telemetry would write to"
                    .to_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;

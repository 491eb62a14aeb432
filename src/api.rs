//! Synchronous client for the **Flag Explorer backend API**.
//!
//! Wraps the three proxy endpoints (`/health`, `/countries`,
//! `/countries/{name}`) and maps failures to [`ApiError`] variants so views
//! can render specific messages. The client never retries and never caches;
//! every failure propagates immediately to the caller.
//!
//! ### Notes
//! - The base URL is injected at construction. [`Client::from_env`] reads
//!   `FLAGX_API_URL` once and falls back to the local development address.
//! - Country names are percent-encoded into the detail path, so names with
//!   spaces ("Costa Rica") round-trip unchanged.
//!
//! Typical usage:
//! ```no_run
//! # use flagx_rs::Client;
//! let client = Client::default();
//! client.check_health()?;
//! let countries = client.fetch_all_countries()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::models::{Country, CountryDetails, Health};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "FLAGX_API_URL";

/// Local development backend, used when `FLAGX_API_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8001";

/// Failures surfaced by [`Client`] operations.
///
/// `NotFound` gets a dedicated variant because the detail view renders
/// "not found" wording distinct from generic HTTP failures. `HealthCheck`
/// folds every liveness-probe failure into one variant; callers use it only
/// to gate further fetches.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport failed before a response arrived (DNS, connection refused…).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server was reachable but answered with a non-success status.
    #[error("request failed with HTTP {status}")]
    Http { status: u16 },

    /// The detail endpoint answered 404 for this country name.
    #[error("country \"{name}\" not found")]
    NotFound { name: String },

    /// The response body was not valid JSON for the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),

    /// The `/health` probe failed (transport, status, or body).
    #[error("health check failed: {reason}")]
    HealthCheck { reason: String },
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::from_env()
    }
}

// Allow -, _, . unescaped in names; everything else (spaces included) is encoded.
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(name: &str) -> String {
    percent_encoding::utf8_percent_encode(name.trim(), SAFE).to_string()
}

fn build_http() -> HttpClient {
    HttpClient::builder()
        .timeout(Duration::from_secs(30)) // total request timeout
        .connect_timeout(Duration::from_secs(10)) // connect timeout
        .redirect(Policy::limited(5)) // cap redirects
        .user_agent(concat!("flagx_rs/", env!("CARGO_PKG_VERSION"))) // set user agent
        .build()
        .expect("reqwest client build")
}

impl Client {
    /// Build a client against an explicit base URL (trailing slashes are
    /// dropped so path joins stay predictable).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: build_http(),
        }
    }

    /// Build a client from `FLAGX_API_URL`, defaulting to
    /// [`DEFAULT_BASE_URL`]. Read once; there is no runtime reconfiguration.
    pub fn from_env() -> Self {
        let base = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    /// Fetch the full country summary list.
    ///
    /// ### Errors
    /// - [`ApiError::Network`] if the transport fails
    /// - [`ApiError::Http`] on any non-success status
    /// - [`ApiError::Decode`] if the body is not a JSON array of countries
    pub fn fetch_all_countries(&self) -> Result<Vec<Country>, ApiError> {
        let url = format!("{}/countries", self.base_url);
        let resp = self.http.get(&url).send().map_err(ApiError::Network)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }
        resp.json().map_err(ApiError::Decode)
    }

    /// Fetch the detail record for one country, looked up by name.
    ///
    /// A 404 surfaces as [`ApiError::NotFound`] carrying the requested name,
    /// so the detail view can render a specific "not found" message; every
    /// other non-success status surfaces as [`ApiError::Http`].
    pub fn fetch_country_by_name(&self, name: &str) -> Result<CountryDetails, ApiError> {
        let url = format!("{}/countries/{}", self.base_url, enc(name));
        let resp = self.http.get(&url).send().map_err(ApiError::Network)?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                name: name.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }
        resp.json().map_err(ApiError::Decode)
    }

    /// Probe backend liveness.
    ///
    /// Callers run this before the country-list fetch and short-circuit into
    /// an error render when it fails; any failure mode collapses into
    /// [`ApiError::HealthCheck`].
    pub fn check_health(&self) -> Result<Health, ApiError> {
        let url = format!("{}/health", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .map_err(|e| ApiError::HealthCheck {
                reason: e.to_string(),
            })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::HealthCheck {
                reason: format!("HTTP {}", status.as_u16()),
            });
        }
        resp.json().map_err(|e| ApiError::HealthCheck {
            reason: format!("bad response body: {e}"),
        })
    }
}

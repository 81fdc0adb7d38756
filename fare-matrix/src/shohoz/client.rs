//! Trip-search HTTP client.
//!
//! Issues one `search-trips-v2` request per call. The client applies no
//! concurrency limit of its own; the matrix coordinator owns the worker
//! budget.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::domain::{SeatType, TravelDate};

use super::error::ShohozError;
use super::types::TripSearchResponse;

/// Default base URL for the booking service.
pub const DEFAULT_BASE_URL: &str = "https://railspaapi.shohoz.com";

/// Path of the trip-search endpoint, relative to the base URL.
const SEARCH_PATH: &str = "/v1.0/web/bookings/search-trips-v2";

/// Default per-request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum number of body characters kept in parse errors.
const ERROR_BODY_LIMIT: usize = 500;

/// Configuration for the booking service client.
#[derive(Debug, Clone)]
pub struct ShohozConfig {
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Value sent in the User-Agent header
    pub user_agent: String,
}

impl ShohozConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("fare-matrix/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

impl Default for ShohozConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters of one trip search.
#[derive(Debug, Clone, PartialEq)]
pub struct TripQuery {
    pub from_city: String,
    pub to_city: String,
    pub date: TravelDate,
    pub seat_class: SeatType,
}

impl TripQuery {
    /// Query-string pairs in the order the service documents them.
    pub fn params(&self) -> [(&'static str, String); 4] {
        [
            ("from_city", self.from_city.clone()),
            ("to_city", self.to_city.clone()),
            ("date_of_journey", self.date.to_wire()),
            ("seat_class", self.seat_class.as_str().to_string()),
        ]
    }
}

/// Booking service API client.
#[derive(Debug, Clone)]
pub struct ShohozClient {
    http: reqwest::Client,
    base_url: String,
}

impl ShohozClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ShohozConfig) -> Result<Self, ShohozError> {
        let mut headers = HeaderMap::new();

        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| ShohozError::NotConfigured("invalid User-Agent value".to_string()))?;
        headers.insert(USER_AGENT, agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the trip-search endpoint.
    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }

    /// Search for trains between two cities on a date.
    ///
    /// Makes exactly one request; there is no retry.
    pub async fn search_trips(
        &self,
        query: &TripQuery,
    ) -> Result<TripSearchResponse, ShohozError> {
        let response = self
            .http
            .get(self.search_url())
            .query(&query.params())
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ShohozError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ShohozError::Api {
                status: status.as_u16(),
                message: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ShohozError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(ERROR_BODY_LIMIT).collect()),
        })
    }
}

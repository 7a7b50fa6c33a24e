//! Main Binance API client
use std::time::Duration;

use crate::request::Request;

/// Base URL of the Binance spot REST API
pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

/// How long a single request may take before it is abandoned
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The main Binance API client.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(feature = "reqwest")]
#[derive(Debug, Clone)]
pub struct Binance<Client: Request = reqwest::Client> {
    client: Client,
    base_url: String,
    timeout: Duration,
}

/// The main Binance API client.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
#[derive(Debug, Clone)]
pub struct Binance<Client: Request = crate::request::HyperClient> {
    client: Client,
    base_url: String,
    timeout: Duration,
}

/// The main Binance API client.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
#[derive(Debug, Clone)]
pub struct Binance<Client: Request> {
    client: Client,
    base_url: String,
    timeout: Duration,
}

/// Parse a `BINANCE_TIMEOUT_SECS` value: a positive whole number of seconds.
///
/// # Errors
///
/// Returns [`Error::Config`](crate::Error::Config) for zero, negative or non-numeric input.
pub fn parse_timeout_secs(raw: &str) -> crate::Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| {
            crate::Error::Config(format!("BINANCE_TIMEOUT_SECS must be a positive integer, got {raw:?}"))
        })
}

// Implementation for any Client that implements Request
impl<Client: Request> Binance<Client> {
    /// Create a new Binance client with the default HTTP client, base URL and timeout.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a client configured from the environment.
    ///
    /// Loads `.env` if present, then reads:
    /// - `BINANCE_BASE_URL`: overrides [`DEFAULT_BASE_URL`]
    /// - `BINANCE_TIMEOUT_SECS`: overrides [`DEFAULT_TIMEOUT`], must be a positive integer
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if `BINANCE_TIMEOUT_SECS` is set but invalid.
    #[cfg(feature = "dotenvy")]
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok(); // Try to load .env file, ignore errors

        let mut client = Self::new();
        if let Ok(base_url) = std::env::var("BINANCE_BASE_URL") {
            tracing::debug!(%base_url, "using base URL from environment");
            client = client.with_base_url(base_url);
        }
        if let Ok(raw) = std::env::var("BINANCE_TIMEOUT_SECS") {
            client = client.with_timeout(parse_timeout_secs(&raw)?);
        }
        Ok(client)
    }

    /// Sets the HTTP client for this instance.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set the base URL requests are sent to.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use binance_price::Binance;
    ///
    /// let client = Binance::default().with_base_url("https://api1.binance.com");
    /// ```
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout.
    ///
    /// A zero timeout would fail every request, so it is ignored and the
    /// current timeout kept, matching `BINANCE_TIMEOUT_SECS=0` being rejected.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if timeout.is_zero() {
            tracing::warn!(current = ?self.timeout, "ignoring zero request timeout");
            return self;
        }
        self.timeout = timeout;
        self
    }

    /// Get the base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Get the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get a reference to the underlying HTTP client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl<Client: Request> Default for Binance<Client> {
    fn default() -> Self {
        Self::new()
    }
}

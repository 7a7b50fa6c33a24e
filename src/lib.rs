//! Rust client for the Binance symbol price ticker
//!
//! # Quick Start
//!
//! ```no_run
//! use binance_price::Binance;
//! use binance_price::rest;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Binance::default();
//!     let quote = rest::ticker::price(&client, "BTCUSDT").get().await?;
//!     println!("Bitcoin Price: {}", quote.price);
//!     Ok(())
//! }
//! ```
//!
//! Each step of the pipeline (request, fetch, parse, extract) fails with its
//! own [`Error`] variant; [`Error::stage`] tells them apart. A response that
//! failed to fetch is never parsed, and a body that failed to parse is never
//! indexed.
//!
//! # Features
//!
//! - **`hyper`** (default) - Uses [`hyper`](https://docs.rs/hyper) as the HTTP client.
//!
//! - **`reqwest`** - Alternative HTTP client using [`reqwest`](https://docs.rs/reqwest).
//!   To use reqwest instead: `default-features = false, features = ["reqwest"]`.
//!
//! - **`dotenvy`** - Adds `Binance::from_env()`, which reads `BINANCE_BASE_URL` and
//!   `BINANCE_TIMEOUT_SECS` from `.env` or the environment.

#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod rest;

pub mod execute;
pub mod indicators;
/// Logging setup for the binary
pub mod logger;
pub mod processor;
pub mod report;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{Error, Result, Stage};
pub use processor::PriceQuote;
pub use request::Request;
pub use response::Response;

/// The main Binance API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::Binance<YourClient>` directly
#[cfg(feature = "reqwest")]
pub type Binance = client::Binance<reqwest::Client>;

/// The main Binance API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::Binance<YourClient>` directly
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
pub type Binance = client::Binance<request::HyperClient>;

// When neither reqwest nor hyper is enabled, re-export the generic Binance
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
pub use client::Binance;

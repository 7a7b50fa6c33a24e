use serde::Serialize;

use crate::client::Binance;
use crate::error::{Error, Result};
use crate::execute::Execute;
use crate::processor::{Processor, Raw};
use crate::request::Request;
use crate::request::common::Symbol;

/// Path of the symbol price ticker endpoint
pub const PATH: &str = "/api/v3/ticker/price";

/// Symbol price ticker request builder
pub struct TickerPrice<'a, Client: Request, P: Processor = Raw> {
    client: &'a Binance<Client>,
    /// Trading pair symbol
    pub symbol: String,
    processor: P,
}

// Constructor - always starts with Raw
impl<'a, C: Request> TickerPrice<'a, C, Raw> {
    /// Create new ticker price request (returns raw JSON by default)
    pub fn new(client: &'a Binance<C>, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            processor: Raw,
        }
    }
}

// Processor conversion and builder methods work on any processor type
impl<'a, C: Request, P: Processor + 'a> TickerPrice<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }

    /// Swap the processor that handles the response
    pub fn processor<Q: Processor + 'a>(self, processor: Q) -> TickerPrice<'a, C, Q> {
        TickerPrice {
            client: self.client,
            symbol: self.symbol,
            processor,
        }
    }

    /// The URL this request will be sent to.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidSymbol`] before any network traffic if the
    /// symbol cannot be sent.
    pub fn url(&self) -> Result<String> {
        let params = Params {
            symbol: self.symbol.parse()?,
        };
        let query = serde_urlencoded::to_string(&params)?;
        Ok(format!("{}{}?{}", self.client.base_url(), PATH, query))
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for TickerPrice<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        let url = self.url()?;
        let timeout = self.client.timeout();
        tracing::debug!(%url, ?timeout, "requesting ticker price");

        // Make request using Request trait, bounded by the client timeout
        let response = match tokio::time::timeout(timeout, self.client.client().get(&url)).await {
            Ok(response) => response,
            Err(_) => Err(Error::Timeout(timeout)),
        };

        // Process using associated Processor type
        self.processor.process(response)
    }
}

/// Query parameters of the ticker price endpoint
#[derive(Debug, Clone, Serialize)]
pub struct Params {
    /// Trading pair symbol
    pub symbol: Symbol,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::HttpResponse;

    struct UnusedClient;

    impl Request for UnusedClient {
        type Response = HttpResponse;

        fn new() -> Self {
            UnusedClient
        }

        async fn get(&self, url: &str) -> Result<HttpResponse> {
            panic!("no request expected, got {url}")
        }
    }

    #[test]
    fn test_default_url() {
        let client = Binance::<UnusedClient>::default();
        let url = TickerPrice::new(&client, "BTCUSDT").url().unwrap();
        assert_eq!(url, "https://api.binance.com/api/v3/ticker/price?symbol=BTCUSDT");
    }

    #[test]
    fn test_url_normalizes_symbol_and_base() {
        let client = Binance::<UnusedClient>::default().with_base_url("http://127.0.0.1:9000/");
        let url = TickerPrice::new(&client, "ethbtc").url().unwrap();
        assert_eq!(url, "http://127.0.0.1:9000/api/v3/ticker/price?symbol=ETHBTC");
    }

    #[tokio::test]
    async fn test_invalid_symbol_fails_before_request() {
        let client = Binance::<UnusedClient>::default();
        let result = TickerPrice::new(&client, "BTC&symbol=ETH").get().await;
        assert!(matches!(result, Err(Error::InvalidSymbol(_))));
    }
}

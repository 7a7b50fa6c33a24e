//! Price quote extraction for the ticker endpoint
use serde_json::Value;

use crate::error::Result;
use crate::processor::field::{field, str_field};
use crate::processor::{Processor, ensure_success};
use crate::response::Response;

/// Latest price for a symbol, as returned by `/api/v3/ticker/price`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    /// Symbol echoed by the endpoint, when present
    pub symbol: Option<String>,
    /// Price exactly as the endpoint encoded it
    pub price: String,
}

impl PriceQuote {
    /// Extract a quote from a decoded ticker response.
    ///
    /// `price` must be present and a string; `symbol` is optional.
    pub fn from_value(value: &Value) -> Result<Self> {
        let price = str_field(value, "price")?.to_owned();
        let symbol = field(value, "symbol")?
            .and_then(Value::as_str)
            .map(str::to_owned);
        Ok(Self { symbol, price })
    }
}

/// Processor that decodes the body and extracts a [`PriceQuote`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Quote;

impl Processor for Quote {
    type Output = PriceQuote;

    fn process<R: Response>(&self, response: Result<R>) -> Result<PriceQuote> {
        let resp = ensure_success(response?)?;
        let value: Value = serde_json::from_str(resp.body())?;
        let quote = PriceQuote::from_value(&value)?;
        tracing::debug!(symbol = ?quote.symbol, price = %quote.price, "extracted price");
        Ok(quote)
    }
}

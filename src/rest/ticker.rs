//! Symbol price ticker endpoint

use crate::client::Binance;
use crate::processor::{Json, Quote, Raw};
use crate::request::Request;
use crate::request::ticker::TickerPrice;

/// Get the latest price for a symbol
///
/// Returns a request builder that resolves to a [`PriceQuote`](crate::processor::PriceQuote).
///
/// # Example
/// ```no_run
/// # use binance_price::Binance;
/// # async fn example() -> binance_price::Result<()> {
/// let client = Binance::default();
/// let quote = binance_price::rest::ticker::price(&client, "BTCUSDT").get().await?;
/// println!("{}", quote.price);
/// # Ok(())
/// # }
/// ```
pub fn price<'a, Client: Request>(
    client: &'a Binance<Client>,
    symbol: impl Into<String>,
) -> TickerPrice<'a, Client, Quote> {
    TickerPrice::new(client, symbol).processor(Quote)
}

/// Get the latest price for a symbol as the raw JSON body
pub fn price_raw<'a, Client: Request>(
    client: &'a Binance<Client>,
    symbol: impl Into<String>,
) -> TickerPrice<'a, Client, Raw> {
    TickerPrice::new(client, symbol)
}

/// Get the latest price for a symbol as a decoded JSON tree
pub fn price_json<'a, Client: Request>(
    client: &'a Binance<Client>,
    symbol: impl Into<String>,
) -> TickerPrice<'a, Client, Json> {
    TickerPrice::new(client, symbol).processor(Json)
}

//! REST API endpoints for Binance
pub mod ticker;

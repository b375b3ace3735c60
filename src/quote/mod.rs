//! Market-order quoting against pre-sorted price levels.
//!
//! This module handles:
//! - Quote level and quote output types
//! - Greedy walk-the-book quoting for buys (USD budget) and sells (share quantity)

pub mod market;
pub mod types;

pub use market::{
    quote_market_buy, quote_market_buy_with, quote_market_sell, quote_market_sell_with,
};
pub use types::{MarketOrderQuote, PartialFillPolicy, QuoteLevel, QuotePolicy};

//! Order book construction and market-order quoting for binary-outcome
//! prediction markets.
//!
//! Resting limit orders on a binary exchange encode price as the ratio of
//! maker/taker base-unit amounts, and every order on one outcome token is
//! simultaneously liquidity on the complementary token at the inverted price,
//! because one YES plus one NO token always redeems for $1:
//!
//! ```text
//! BUY YES @ 0.48  ≡  SELL NO @ 0.52
//! ```
//!
//! The crate turns a snapshot of such orders into a canonical dual-outcome
//! depth table with best-price summaries, and walks one side of that table to
//! quote market orders:
//!
//! ```text
//! raw orders ──► build_split_book ──► SplitOrderBook ──► BestPrices
//!                                          │
//!                    asks/bids as levels   ▼
//!          quote_market_buy / quote_market_sell ──► MarketOrderQuote
//! ```
//!
//! Every function is a pure computation over its arguments: no caching, no
//! I/O, no shared state, so concurrent callers need no synchronization.
//!
//! # Modules
//!
//! - [`book`]: raw orders to depth table and best prices
//! - [`quote`]: walk-the-book market-order quoting
//! - [`units`]: centralized 10^6 base-unit conversions
//! - [`config`]: quoting policy from environment
//! - [`error`]: unified error types

pub mod book;
pub mod config;
pub mod error;
pub mod quote;
pub mod units;

pub use book::{
    build_split_book, BestPrices, CumulativeOrderRow, Outcome, RawOrder, Side, SplitOrderBook,
};
pub use config::QuoteConfig;
pub use error::{BookError, Error, Result};
pub use quote::{
    quote_market_buy, quote_market_sell, MarketOrderQuote, PartialFillPolicy, QuoteLevel,
    QuotePolicy,
};
pub use units::RoundingMode;

//! Order book construction for binary-outcome markets.
//!
//! This module handles:
//! - Raw resting order types and the split-book output shapes
//! - Classification, price inversion, and cumulative depth aggregation

pub mod builder;
pub mod types;

pub use builder::build_split_book;
pub use types::{BestPrices, CumulativeOrderRow, Outcome, RawOrder, Side, SplitOrderBook};

//! Types for market-order quoting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::units::{self, RoundingMode};

/// One price level offered to the quoter.
///
/// Levels can come from a [`SplitOrderBook`](crate::book::SplitOrderBook)
/// side or any other source; the quoter only requires the documented sort
/// order (asks ascending for a buy, bids descending for a sell).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteLevel {
    /// Price as a decimal fraction of $1, in [0, 1].
    pub price: Decimal,
    /// Size resting at this price, in token base units.
    pub quantity: u64,
}

impl QuoteLevel {
    /// Create a new quote level.
    pub fn new(price: Decimal, quantity: u64) -> Self {
        Self { price, quantity }
    }
}

/// Result of walking one side of the book with a market order.
///
/// The base-unit fields are the hard contract toward order construction:
/// for a buy the maker offers USD (`maker_amount`) and requires tokens
/// (`taker_amount`); for a sell the roles invert. Both serialize as decimal
/// strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderQuote {
    /// Tokens acquired (buy) or sold (sell).
    pub shares: Decimal,
    /// USD spent (buy) or received (sell).
    pub notional: Decimal,
    /// Notional-weighted average execution price.
    pub average_price: Decimal,
    /// Base units the maker offers.
    #[serde(with = "units::base_unit_string")]
    pub maker_amount: u64,
    /// Base units the maker requires.
    #[serde(with = "units::base_unit_string")]
    pub taker_amount: u64,
}

/// Whether a quote may reflect a partial fill when liquidity runs out.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum PartialFillPolicy {
    /// Quote whatever the book can fill; the caller decides whether to proceed.
    #[default]
    #[strum(serialize = "allow", serialize = "ALLOW")]
    Allow,
    /// Treat an incomplete fill as no quote at all.
    #[strum(serialize = "reject", serialize = "REJECT")]
    Reject,
}

/// Policy knobs applied when finalizing a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuotePolicy {
    /// Rounding for the final base-unit conversion.
    pub rounding: RoundingMode,
    /// Partial-fill handling when the book is too thin.
    pub partial_fills: PartialFillPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn quote_serializes_base_units_as_strings() {
        let quote = MarketOrderQuote {
            shares: dec!(140),
            notional: dec!(60),
            average_price: dec!(60) / dec!(140),
            maker_amount: 60_000_000,
            taker_amount: 140_000_000,
        };

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["makerAmount"], "60000000");
        assert_eq!(json["takerAmount"], "140000000");

        let back: MarketOrderQuote = serde_json::from_value(json).unwrap();
        assert_eq!(back, quote);
    }

    #[test]
    fn default_policy_is_floor_and_allow() {
        let policy = QuotePolicy::default();
        assert_eq!(policy.rounding, RoundingMode::Floor);
        assert_eq!(policy.partial_fills, PartialFillPolicy::Allow);
    }
}

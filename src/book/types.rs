//! Order book types for a single binary-outcome market.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::OffsetDateTime;

/// Side of a resting limit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Maker offers collateral (USD) and requires outcome tokens.
    #[strum(serialize = "BUY", serialize = "buy")]
    Buy,
    /// Maker offers outcome tokens and requires collateral.
    #[strum(serialize = "SELL", serialize = "sell")]
    Sell,
}

/// Outcome side of a binary market.
///
/// One YES plus one NO token always redeems for $1 of collateral, so their
/// prices sum to 1 and liquidity on one token is implied liquidity on the
/// other at the inverted price.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// YES token.
    #[default]
    #[strum(serialize = "yes", serialize = "YES")]
    Yes,
    /// NO token.
    #[strum(serialize = "no", serialize = "NO")]
    No,
}

impl Outcome {
    /// Get the complementary outcome.
    pub fn opposite(&self) -> Self {
        match self {
            Outcome::Yes => Outcome::No,
            Outcome::No => Outcome::Yes,
        }
    }
}

/// One resting limit order as supplied by the order-storage layer.
///
/// Amounts are string-encoded 6-decimal base-unit integers, exactly as they
/// appear on the wire. Parsing happens inside the builder, so a malformed
/// record is dropped rather than failing the whole book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawOrder {
    /// Order side (buy/sell).
    pub side: Side,
    /// Outcome token this order trades.
    pub token_id: String,
    /// Base units the maker offers.
    pub maker_amount: String,
    /// Base units the maker requires.
    pub taker_amount: String,
    /// Base units already executed against this order.
    #[serde(default = "zero_amount")]
    pub filled_amount: String,
}

fn zero_amount() -> String {
    "0".to_string()
}

impl RawOrder {
    /// Build an order from integer base-unit amounts.
    pub fn new(
        side: Side,
        token_id: impl Into<String>,
        maker_amount: u64,
        taker_amount: u64,
        filled_amount: u64,
    ) -> Self {
        Self {
            side,
            token_id: token_id.into(),
            maker_amount: maker_amount.to_string(),
            taker_amount: taker_amount.to_string(),
            filled_amount: filled_amount.to_string(),
        }
    }
}

/// One row of the cumulative depth table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CumulativeOrderRow {
    /// Price in integer cents (0..=100).
    pub price: u32,
    /// Shares resting at this price.
    pub shares: Decimal,
    /// Running USD notional of all rows at or better than this price.
    pub total: Decimal,
}

/// Dual-sided, dual-outcome depth table for one token pair.
///
/// Row ordering is a presentation contract: asks are worst-price-first (so a
/// UI renders depth top-down toward the touch), bids are best-price-first.
/// Every raw order populates one YES-side row and the complementary NO-side
/// row at the inverted price.
#[derive(Debug, Clone, Serialize)]
pub struct SplitOrderBook {
    /// YES asks, worst price first.
    pub yes_asks: Vec<CumulativeOrderRow>,
    /// YES bids, best price first.
    pub yes_bids: Vec<CumulativeOrderRow>,
    /// NO asks, worst price first.
    pub no_asks: Vec<CumulativeOrderRow>,
    /// NO bids, best price first.
    pub no_bids: Vec<CumulativeOrderRow>,
    /// When this snapshot was built.
    #[serde(with = "time::serde::rfc3339")]
    pub built_at: OffsetDateTime,
}

impl SplitOrderBook {
    /// Ask rows for one outcome.
    pub fn asks(&self, outcome: Outcome) -> &[CumulativeOrderRow] {
        match outcome {
            Outcome::Yes => &self.yes_asks,
            Outcome::No => &self.no_asks,
        }
    }

    /// Bid rows for one outcome.
    pub fn bids(&self, outcome: Outcome) -> &[CumulativeOrderRow] {
        match outcome {
            Outcome::Yes => &self.yes_bids,
            Outcome::No => &self.no_bids,
        }
    }

    /// Best prices on both outcomes as decimal fractions of $1.
    pub fn best_prices(&self) -> BestPrices {
        BestPrices {
            yes_best_bid: best_bid(&self.yes_bids),
            yes_best_ask: best_ask(&self.yes_asks),
            no_best_bid: best_bid(&self.no_bids),
            no_best_ask: best_ask(&self.no_asks),
        }
    }

    /// Check whether no side of either outcome has liquidity.
    pub fn is_empty(&self) -> bool {
        self.yes_asks.is_empty()
            && self.yes_bids.is_empty()
            && self.no_asks.is_empty()
            && self.no_bids.is_empty()
    }
}

// Asks are worst-first, so the touch is the last row.
fn best_ask(rows: &[CumulativeOrderRow]) -> Option<Decimal> {
    rows.last().map(|row| cents_to_price(row.price))
}

fn best_bid(rows: &[CumulativeOrderRow]) -> Option<Decimal> {
    rows.first().map(|row| cents_to_price(row.price))
}

fn cents_to_price(cents: u32) -> Decimal {
    Decimal::new(i64::from(cents), 2)
}

/// Best bid/ask per outcome, as decimal fractions in [0, 1].
///
/// `None` means the side has no liquidity; [`BestPrices::or_neutral`] applies
/// the 0.5 prior for callers that want a price regardless.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BestPrices {
    /// Highest price a YES buyer will pay.
    pub yes_best_bid: Option<Decimal>,
    /// Lowest price a YES seller will accept.
    pub yes_best_ask: Option<Decimal>,
    /// Highest price a NO buyer will pay.
    pub no_best_bid: Option<Decimal>,
    /// Lowest price a NO seller will accept.
    pub no_best_ask: Option<Decimal>,
}

impl BestPrices {
    /// Neutral prior used for sides with no liquidity.
    pub const NEUTRAL_PRICE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

    /// Apply the neutral 0.5 prior to any side with no liquidity.
    pub fn or_neutral(self) -> Self {
        Self {
            yes_best_bid: self.yes_best_bid.or(Some(Self::NEUTRAL_PRICE)),
            yes_best_ask: self.yes_best_ask.or(Some(Self::NEUTRAL_PRICE)),
            no_best_bid: self.no_best_bid.or(Some(Self::NEUTRAL_PRICE)),
            no_best_ask: self.no_best_ask.or(Some(Self::NEUTRAL_PRICE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn row(price: u32, shares: Decimal, total: Decimal) -> CumulativeOrderRow {
        CumulativeOrderRow {
            price,
            shares,
            total,
        }
    }

    #[test]
    fn outcome_opposite_works() {
        assert_eq!(Outcome::Yes.opposite(), Outcome::No);
        assert_eq!(Outcome::No.opposite(), Outcome::Yes);
    }

    #[test]
    fn side_from_string_works() {
        assert_eq!(Side::from_str("BUY").unwrap(), Side::Buy);
        assert_eq!(Side::from_str("sell").unwrap(), Side::Sell);
    }

    #[test]
    fn raw_order_deserializes_camel_case() {
        let order: RawOrder = serde_json::from_str(
            r#"{"side":"BUY","tokenId":"yes-token","makerAmount":"50000000","takerAmount":"100000000"}"#,
        )
        .unwrap();

        assert_eq!(order.side, Side::Buy);
        assert_eq!(order.token_id, "yes-token");
        assert_eq!(order.maker_amount, "50000000");
        assert_eq!(order.filled_amount, "0");
    }

    #[test]
    fn best_prices_read_the_touch() {
        let book = SplitOrderBook {
            // worst-first: touch is the 0.52 row at the end
            yes_asks: vec![row(60, dec!(10), dec!(10.2)), row(52, dec!(8), dec!(4.16))],
            yes_bids: vec![row(48, dec!(5), dec!(2.4)), row(40, dec!(5), dec!(4.4))],
            no_asks: vec![],
            no_bids: vec![],
            built_at: OffsetDateTime::now_utc(),
        };

        let best = book.best_prices();
        assert_eq!(best.yes_best_ask, Some(dec!(0.52)));
        assert_eq!(best.yes_best_bid, Some(dec!(0.48)));
        assert_eq!(best.no_best_ask, None);
        assert_eq!(best.no_best_bid, None);
    }

    #[test]
    fn or_neutral_fills_empty_sides() {
        let best = BestPrices {
            yes_best_bid: Some(dec!(0.48)),
            yes_best_ask: None,
            no_best_bid: None,
            no_best_ask: None,
        };

        let resolved = best.or_neutral();
        assert_eq!(resolved.yes_best_bid, Some(dec!(0.48)));
        assert_eq!(resolved.yes_best_ask, Some(dec!(0.5)));
        assert_eq!(resolved.no_best_bid, Some(dec!(0.5)));
        assert_eq!(resolved.no_best_ask, Some(dec!(0.5)));
    }

    #[test]
    fn neutral_price_is_half() {
        assert_eq!(BestPrices::NEUTRAL_PRICE, dec!(0.5));
    }
}

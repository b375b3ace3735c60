//! Construction of the dual-outcome depth table from raw resting orders.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use time::OffsetDateTime;
use tracing::{debug, instrument};

use super::types::{CumulativeOrderRow, RawOrder, Side, SplitOrderBook};
use crate::error::BookError;
use crate::units::{from_base_units, parse_base_units};

/// Price ticks per $1; rows aggregate at cent granularity.
const TICKS_PER_DOLLAR: u32 = 100;

/// Build the dual-outcome depth table for one market's token pair.
///
/// Each order contributes to its own outcome's side and, at the inverted
/// price `1 - p`, to the opposite outcome's other side: a buy of YES at `p`
/// is algebraically an offer to sell NO at `1 - p`, because one YES plus one
/// NO token always redeems for $1.
///
/// Malformed, zero-size, or fully-filled orders are dropped silently. The
/// only error is a market with no YES token id, which means the market
/// configuration itself is broken rather than merely illiquid.
#[instrument(skip(orders), fields(order_count = orders.len()))]
pub fn build_split_book(
    orders: &[RawOrder],
    yes_token_id: &str,
) -> Result<SplitOrderBook, BookError> {
    if yes_token_id.is_empty() {
        return Err(BookError::MissingYesTokenId);
    }

    let mut yes = OutcomeDepth::default();
    let mut no = OutcomeDepth::default();

    for order in orders {
        let Some(level) = resting_level(order) else {
            debug!(token_id = %order.token_id, "dropping malformed or exhausted resting order");
            continue;
        };
        let Some(tick) = price_to_tick(level.price) else {
            debug!(token_id = %order.token_id, price = %level.price, "dropping order priced outside [0, 1]");
            continue;
        };
        let inverted = TICKS_PER_DOLLAR - tick;

        let (own, other) = if order.token_id == yes_token_id {
            (&mut yes, &mut no)
        } else {
            (&mut no, &mut yes)
        };

        match order.side {
            Side::Buy => {
                own.add_bid(tick, level.size);
                other.add_ask(inverted, level.size);
            }
            Side::Sell => {
                own.add_ask(tick, level.size);
                other.add_bid(inverted, level.size);
            }
        }
    }

    Ok(SplitOrderBook {
        yes_asks: cumulative_asks(&yes.asks),
        yes_bids: cumulative_bids(&yes.bids),
        no_asks: cumulative_asks(&no.asks),
        no_bids: cumulative_bids(&no.bids),
        built_at: OffsetDateTime::now_utc(),
    })
}

/// Aggregated shares per cent tick for one outcome.
#[derive(Debug, Default)]
struct OutcomeDepth {
    bids: BTreeMap<u32, Decimal>,
    asks: BTreeMap<u32, Decimal>,
}

impl OutcomeDepth {
    fn add_bid(&mut self, tick: u32, shares: Decimal) {
        *self.bids.entry(tick).or_default() += shares;
    }

    fn add_ask(&mut self, tick: u32, shares: Decimal) {
        *self.asks.entry(tick).or_default() += shares;
    }
}

/// Price and remaining size of one resting order on its own token.
struct RestingLevel {
    price: Decimal,
    size: Decimal,
}

/// Derive price and unfilled size, keeping amount arithmetic in integers.
///
/// Base-unit amounts reach 10^15, so the remaining-size division runs in
/// u128 and converts to decimal tokens only at the end.
fn resting_level(order: &RawOrder) -> Option<RestingLevel> {
    let maker = parse_base_units(&order.maker_amount)?;
    let taker = parse_base_units(&order.taker_amount)?;
    let filled = parse_base_units(&order.filled_amount)?;
    if maker == 0 || taker == 0 {
        return None;
    }

    let (price, remaining_base) = match order.side {
        // Maker offers collateral: the unspent collateral (maker - filled)
        // buys tokens at price maker/taker, i.e. (maker - filled) * taker / maker.
        Side::Buy => {
            let unspent = maker.checked_sub(filled)?;
            let remaining = u128::from(unspent) * u128::from(taker) / u128::from(maker);
            (Decimal::from(maker) / Decimal::from(taker), remaining)
        }
        // Maker offers tokens: remaining size is maker - filled.
        Side::Sell => {
            let remaining = u128::from(maker.checked_sub(filled)?);
            (Decimal::from(taker) / Decimal::from(maker), remaining)
        }
    };

    if remaining_base == 0 {
        return None;
    }

    Some(RestingLevel {
        price,
        size: from_base_units(u64::try_from(remaining_base).ok()?),
    })
}

/// Round a price fraction to its cent tick; `None` if outside [0, 1].
fn price_to_tick(price: Decimal) -> Option<u32> {
    let cents = (price * Decimal::from(TICKS_PER_DOLLAR))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()?;
    (cents <= TICKS_PER_DOLLAR).then_some(cents)
}

/// Asks accumulate notional from the cheapest level outward, then present
/// worst-first.
fn cumulative_asks(levels: &BTreeMap<u32, Decimal>) -> Vec<CumulativeOrderRow> {
    let mut rows = cumulative_rows(levels.iter());
    rows.reverse();
    rows
}

/// Bids accumulate and present from the highest level down.
fn cumulative_bids(levels: &BTreeMap<u32, Decimal>) -> Vec<CumulativeOrderRow> {
    cumulative_rows(levels.iter().rev())
}

fn cumulative_rows<'a>(
    levels: impl Iterator<Item = (&'a u32, &'a Decimal)>,
) -> Vec<CumulativeOrderRow> {
    let mut total = Decimal::ZERO;
    levels
        .map(|(&price, &shares)| {
            total += shares * Decimal::new(i64::from(price), 2);
            CumulativeOrderRow {
                price,
                shares,
                total,
            }
        })
        .collect()
}

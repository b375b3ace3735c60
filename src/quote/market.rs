//! Walk-the-book quoting for market orders.
//!
//! Both quoters greedily consume pre-sorted price levels: whole levels while
//! the remaining budget or share quantity covers them, then one fractional
//! level, then stop. Per-level arithmetic never pre-rounds; only the final
//! base-unit conversion applies the configured rounding.

use rust_decimal::Decimal;
use tracing::instrument;

use super::types::{MarketOrderQuote, PartialFillPolicy, QuoteLevel, QuotePolicy};
use crate::units::{from_base_units, to_base_units_with};

/// Quote a market buy: spend up to `usdc_amount` against asks sorted
/// ascending by price (cheapest first).
///
/// Returns `None` for a zero budget or an empty book. When the asks cannot
/// absorb the full budget the quote reflects only the fillable portion.
#[instrument(skip(asks), fields(levels = asks.len(), usdc = %usdc_amount))]
pub fn quote_market_buy(asks: &[QuoteLevel], usdc_amount: Decimal) -> Option<MarketOrderQuote> {
    quote_market_buy_with(asks, usdc_amount, QuotePolicy::default())
}

/// Quote a market buy under an explicit policy.
pub fn quote_market_buy_with(
    asks: &[QuoteLevel],
    usdc_amount: Decimal,
    policy: QuotePolicy,
) -> Option<MarketOrderQuote> {
    if usdc_amount <= Decimal::ZERO || asks.is_empty() {
        return None;
    }

    let mut budget = usdc_amount;
    let mut shares = Decimal::ZERO;
    let mut cost = Decimal::ZERO;

    for level in asks {
        if level.price <= Decimal::ZERO || level.quantity == 0 {
            continue;
        }
        let quantity = from_base_units(level.quantity);
        let level_cost = level.price * quantity;
        if budget >= level_cost {
            shares += quantity;
            cost += level_cost;
            budget -= level_cost;
            if budget.is_zero() {
                break;
            }
        } else {
            // Fractional consumption: whatever the rest of the budget buys here.
            shares += budget / level.price;
            cost += budget;
            budget = Decimal::ZERO;
            break;
        }
    }

    let (average_price, shares_base, notional_base) =
        finalize(shares, cost, budget > Decimal::ZERO, policy)?;

    Some(MarketOrderQuote {
        shares,
        notional: cost,
        average_price,
        maker_amount: notional_base,
        taker_amount: shares_base,
    })
}

/// Quote a market sell: sell up to `shares` into bids sorted descending by
/// price (highest first).
///
/// Returns `None` for a zero quantity or an empty book. When the bids cannot
/// absorb all shares the quote reflects only the fillable portion.
#[instrument(skip(bids), fields(levels = bids.len(), shares = %shares))]
pub fn quote_market_sell(bids: &[QuoteLevel], shares: Decimal) -> Option<MarketOrderQuote> {
    quote_market_sell_with(bids, shares, QuotePolicy::default())
}

/// Quote a market sell under an explicit policy.
pub fn quote_market_sell_with(
    bids: &[QuoteLevel],
    shares: Decimal,
    policy: QuotePolicy,
) -> Option<MarketOrderQuote> {
    if shares <= Decimal::ZERO || bids.is_empty() {
        return None;
    }

    let mut remaining = shares;
    let mut sold = Decimal::ZERO;
    let mut proceeds = Decimal::ZERO;

    for level in bids {
        if level.price <= Decimal::ZERO || level.quantity == 0 {
            continue;
        }
        let quantity = from_base_units(level.quantity);
        if remaining >= quantity {
            sold += quantity;
            proceeds += level.price * quantity;
            remaining -= quantity;
            if remaining.is_zero() {
                break;
            }
        } else {
            sold += remaining;
            proceeds += level.price * remaining;
            remaining = Decimal::ZERO;
            break;
        }
    }

    let (average_price, shares_base, notional_base) =
        finalize(sold, proceeds, remaining > Decimal::ZERO, policy)?;

    // Maker/taker roles invert relative to a buy: the maker offers tokens
    // and requires USD.
    Some(MarketOrderQuote {
        shares: sold,
        notional: proceeds,
        average_price,
        maker_amount: shares_base,
        taker_amount: notional_base,
    })
}

/// Average price and base-unit amounts, or `None` when nothing filled or the
/// policy rejects a partial fill.
fn finalize(
    shares: Decimal,
    notional: Decimal,
    unfilled: bool,
    policy: QuotePolicy,
) -> Option<(Decimal, u64, u64)> {
    if shares.is_zero() {
        return None;
    }
    if unfilled && policy.partial_fills == PartialFillPolicy::Reject {
        return None;
    }

    // Notional-weighted: never an arithmetic mean of level prices.
    let average_price = notional / shares;
    Some((
        average_price,
        to_base_units_with(shares, policy.rounding),
        to_base_units_with(notional, policy.rounding),
    ))
}

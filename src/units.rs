//! Centralized base-unit conversions.
//!
//! On-chain amounts are integers scaled by 10^6 (6 decimal places). Every
//! conversion between that representation and decimal prices/sizes lives
//! here so the rounding policy cannot drift between call sites.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Base units per whole token / USD.
pub const BASE_UNIT_SCALE: u64 = 1_000_000;

/// Decimal places encoded in a base-unit amount.
pub const BASE_UNIT_DECIMALS: u32 = 6;

/// Rounding applied when converting a decimal amount to base units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Round toward zero; never claims more base units than the amount backs.
    #[default]
    #[strum(serialize = "floor", serialize = "FLOOR")]
    Floor,
    /// Round half away from zero.
    #[strum(serialize = "nearest", serialize = "NEAREST")]
    Nearest,
}

/// Convert a decimal amount to integer base units, flooring.
pub fn to_base_units(amount: Decimal) -> u64 {
    to_base_units_with(amount, RoundingMode::Floor)
}

/// Convert a decimal amount to integer base units under an explicit rounding mode.
///
/// Negative amounts never occur in quoting arithmetic and map to zero.
pub fn to_base_units_with(amount: Decimal, rounding: RoundingMode) -> u64 {
    if amount <= Decimal::ZERO {
        return 0;
    }
    let scaled = amount * Decimal::from(BASE_UNIT_SCALE);
    let rounded = match rounding {
        RoundingMode::Floor => scaled.floor(),
        // Decimal::round is banker's rounding; half away from zero is the
        // documented behavior here.
        RoundingMode::Nearest => {
            scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        }
    };
    rounded.to_u64().unwrap_or(u64::MAX)
}

/// Convert integer base units to a decimal amount.
pub fn from_base_units(amount: u64) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(amount), BASE_UNIT_DECIMALS)
}

/// Parse a string-encoded base-unit integer as it appears on the wire.
pub fn parse_base_units(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// Serde helper for base-unit integers carried as decimal strings.
pub mod base_unit_string {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize a base-unit amount as its decimal string form.
    pub fn serialize<S: Serializer>(amount: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&amount.to_string())
    }

    /// Deserialize a base-unit amount from its decimal string form.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.trim().parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn to_base_units_floors_by_default() {
        assert_eq!(to_base_units(dec!(1.2345678)), 1_234_567);
        assert_eq!(to_base_units(dec!(100)), 100_000_000);
        assert_eq!(to_base_units(dec!(0)), 0);
        assert_eq!(to_base_units(dec!(-5)), 0);
    }

    #[test]
    fn to_base_units_nearest_rounds_half_up() {
        assert_eq!(
            to_base_units_with(dec!(1.2345678), RoundingMode::Nearest),
            1_234_568
        );
        assert_eq!(to_base_units_with(dec!(0.0000005), RoundingMode::Nearest), 1);
    }

    #[test]
    fn from_base_units_round_trips() {
        assert_eq!(from_base_units(50_000_000), dec!(50));
        assert_eq!(from_base_units(1), dec!(0.000001));
        assert_eq!(to_base_units(from_base_units(123_456_789)), 123_456_789);
    }

    #[test]
    fn parse_base_units_accepts_wire_strings() {
        assert_eq!(parse_base_units("50000000"), Some(50_000_000));
        assert_eq!(parse_base_units(" 7 "), Some(7));
        assert_eq!(parse_base_units(""), None);
        assert_eq!(parse_base_units("-1"), None);
        assert_eq!(parse_base_units("1.5"), None);
    }

    #[test]
    fn rounding_mode_from_string() {
        use std::str::FromStr;
        assert_eq!(RoundingMode::from_str("floor").unwrap(), RoundingMode::Floor);
        assert_eq!(
            RoundingMode::from_str("NEAREST").unwrap(),
            RoundingMode::Nearest
        );
    }
}

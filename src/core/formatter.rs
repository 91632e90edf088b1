use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;

use crate::core::models::cost::CostPeriod;

/// Round half away from zero to `decimal_places` and pad with trailing zeros,
/// e.g. `15.755` at 2 places renders as `"15.76"`.
pub fn format_amount(amount: Decimal, decimal_places: u32) -> String {
    let mut rounded =
        amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimal_places);
    rounded.to_string()
}

/// Render `amount` as a share of `total`, e.g. `"25.0%"`. Empty totals render as `"-"`.
pub fn format_share(amount: Decimal, total: Decimal) -> String {
    if total.is_zero() {
        return "-".to_string();
    }
    let percent = (amount / total * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}%", percent)
}

/// `key=value` pairs sorted by key, comma separated. Empty maps render as `"-"`.
pub fn format_tags(tags: &HashMap<String, String>) -> String {
    if tags.is_empty() {
        return "-".to_string();
    }
    let mut pairs: Vec<(&String, &String)> = tags.iter().collect();
    pairs.sort();
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Cost Explorer periods are end-exclusive; render them as such.
pub fn format_period(period: &CostPeriod) -> String {
    format!(
        "{} .. {} (end exclusive)",
        period.start.format("%Y-%m-%d"),
        period.end.format("%Y-%m-%d")
    )
}

// src/domain/price.rs

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::errors::DomainError;

pub const CURRENCY_SYMBOL: &str = "$";

/// Format a major-unit amount as `$X.YY`.
///
/// Rounding is half away from zero, applied to the shortest decimal form of
/// the amount, so `49.995` becomes `$50.00` even though the nearest `f64` sits
/// a hair below it.
pub fn format_price(amount: f64) -> Result<String, DomainError> {
    if !amount.is_finite() {
        return Err(DomainError::invalid(format!("price must be finite, got {amount}")));
    }
    if amount < 0.0 {
        return Err(DomainError::invalid(format!(
            "price must not be negative, got {amount}"
        )));
    }
    // -0.0 passes the check above but would print as "-0".
    let amount = if amount == 0.0 { 0.0 } else { amount };

    let mut value = Decimal::from_str(&amount.to_string())
        .map_err(|e| DomainError::invalid(format!("price {amount} out of range: {e}")))?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(2);
    // rescale gives up scale when the integer part is too wide to hold two decimals.
    if value.scale() != 2 {
        return Err(DomainError::invalid(format!("price {amount} too large to format")));
    }

    Ok(format!("{CURRENCY_SYMBOL}{value}"))
}

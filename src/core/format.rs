use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::SepaError;

/// Format an amount with exactly two decimal places, rounding half-up.
///
/// Fails when the value is too large to carry two decimals in a `Decimal`.
pub fn format_amount(amount: Decimal) -> Result<String, SepaError> {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    if rounded.scale() != 2 {
        return Err(SepaError::Arithmetic(format!(
            "amount {amount} cannot be rendered with two decimals"
        )));
    }
    Ok(rounded.to_string())
}

/// Calendar date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// UTC timestamp as `YYYY-MM-DDTHH:MM:SS` (no fraction, no offset).
pub fn format_date_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
}

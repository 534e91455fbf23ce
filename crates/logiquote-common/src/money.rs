//! Money arithmetic
//!
//! Engine arithmetic saturates at `Decimal::MAX`/`Decimal::MIN` instead of
//! panicking, so out-of-range inputs still produce a breakdown.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::MONEY_DP;

/// Round an amount to 2 decimal places (half away from zero) with a fixed scale
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DP);
    rounded
}

/// `a / b`, saturating on overflow; zero when dividing by zero
pub fn saturating_div(a: Decimal, b: Decimal) -> Decimal {
    if b.is_zero() {
        return Decimal::ZERO;
    }
    a.checked_div(b).unwrap_or(if a.is_sign_negative() != b.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Sum of `values`, saturating on overflow
pub fn saturating_sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, value| acc.saturating_add(value))
}

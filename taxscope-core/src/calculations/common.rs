//! Shared arithmetic for tax calculations and their presentation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to two places using half-up rounding
/// (midpoints move away from zero).
///
/// Calculations keep full precision; this is applied only when amounts are
/// presented.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxscope_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1160.725)), dec!(1160.73));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Applies a percentage rate to an amount (`rate` of `22` means 22%).
///
/// The rate is scaled down first, so the product never exceeds `amount`
/// for rates up to 100. Returns `None` if the result is not representable.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxscope_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(5275), dec!(22)), Some(dec!(1160.5)));
/// ```
pub fn percent_of(
    amount: Decimal,
    rate: Decimal,
) -> Option<Decimal> {
    amount.checked_mul(rate.checked_div(Decimal::ONE_HUNDRED)?)
}

/// Expresses `part` as a percentage of `whole`, returning zero when `whole`
/// is zero.
pub fn percentage(
    part: Decimal,
    whole: Decimal,
) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        part / whole * Decimal::ONE_HUNDRED
    }
}

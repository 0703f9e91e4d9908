//! Common utility functions for tax calculations.
//!
//! This module provides shared functionality used by the bracket walk, the
//! deduction aggregator and the presentation layer, including clamping and
//! rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to whole rupees using half-up rounding.
///
/// Values at exactly 0.5 are rounded away from zero, matching how the
/// calculator displays currency.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1234.49)), dec!(1234));
/// assert_eq!(round_half_up(dec!(1234.50)), dec!(1235));
/// assert_eq!(round_half_up(dec!(-1234.50)), dec!(-1235)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to paise (two decimal places), half away from zero, keeping
/// trailing zeros so `5` becomes `5.00`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_to_paise;
///
/// assert_eq!(round_to_paise(dec!(0.125)).to_string(), "0.13");
/// assert_eq!(round_to_paise(dec!(0.005)).to_string(), "0.01");
/// assert_eq!(round_to_paise(dec!(117000)).to_string(), "117000.00");
/// ```
pub fn round_to_paise(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clamps a user-entered amount into `[0, cap]`.
///
/// Negative amounts become zero; amounts above the cap become the cap.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::clamp_to_cap;
///
/// assert_eq!(clamp_to_cap(dec!(200000), dec!(150000)), dec!(150000));
/// assert_eq!(clamp_to_cap(dec!(-5), dec!(150000)), dec!(0));
/// ```
pub fn clamp_to_cap(
    value: Decimal,
    cap: Decimal,
) -> Decimal {
    max(value, Decimal::ZERO).min(max(cap, Decimal::ZERO))
}

/// Treats a missing or negative amount as zero.
pub fn non_negative(value: Option<Decimal>) -> Decimal {
    max(value.unwrap_or(Decimal::ZERO), Decimal::ZERO)
}

//! Fixed-rate currency conversion for display.
//!
//! Amounts in the engine are INR. Comparison views also show CTCs in
//! USD at a fixed exchange rate; rate sourcing is out of scope.

use rust_decimal::{Decimal, RoundingStrategy};

/// The fixed INR-per-USD exchange rate used for display conversion.
pub const INR_PER_USD: Decimal = Decimal::from_parts(855, 0, 0, false, 1);

/// Converts an INR amount to USD at the given rate, rounded to whole
/// dollars.
///
/// A non-positive rate yields zero rather than an undefined quotient.
///
/// # Examples
///
/// ```
/// use retention_engine::calculation::{to_usd, INR_PER_USD};
/// use rust_decimal::Decimal;
///
/// let usd = to_usd(Decimal::new(2_500_030, 0), INR_PER_USD);
/// assert_eq!(usd, Decimal::new(29_240, 0));
/// ```
pub fn to_usd(amount_inr: Decimal, rate: Decimal) -> Decimal {
    if rate <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (amount_inr / rate).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

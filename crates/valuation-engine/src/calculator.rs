//! Valuation arithmetic.
//!
//! The one correctness-sensitive step: fixed-point decimals throughout, and
//! any arithmetic failure here surfaces as an error rather than a silently
//! wrong number.

use rust_decimal::{Decimal, RoundingStrategy};
use valuation_core::{PremiumBreakdown, ValuationError};

pub fn adjusted_multiple(base: Decimal, premiums: &PremiumBreakdown) -> Decimal {
    base + premiums.total()
}

/// EBITDA times the adjusted multiple, rounded to 2 dp half-up.
pub fn valuation(ebitda_used: Decimal, multiple: Decimal) -> Result<Decimal, ValuationError> {
    ebitda_used
        .checked_mul(multiple)
        .map(|v| v.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| ValuationError::Computation("valuation arithmetic overflowed".to_string()))
}

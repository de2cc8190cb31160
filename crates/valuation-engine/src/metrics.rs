//! Derived metrics.
//!
//! Pure input-to-metrics step with zero-revenue guards on every division.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use valuation_core::{DerivedMetrics, ValuationRequest};

/// Share of revenue assumed as EBITDA when none was supplied.
pub const DEFAULT_EBITDA_RATIO: Decimal = dec!(0.15);

pub fn derive_metrics(request: &ValuationRequest) -> DerivedMetrics {
    let revenue = request.annual_revenue;
    let ebitda_used = request
        .ebitda
        .unwrap_or_else(|| revenue * DEFAULT_EBITDA_RATIO);

    let (ebitda_margin, recurring_revenue_pct) = if revenue.is_zero() {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        (
            ebitda_used / revenue * dec!(100),
            (request.recurring_revenue / revenue * dec!(100))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    };

    DerivedMetrics {
        ebitda_used,
        ebitda_margin,
        recurring_revenue_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(revenue: Decimal, ebitda: Option<Decimal>, recurring: Decimal) -> ValuationRequest {
        ValuationRequest {
            industry: "HVAC".to_string(),
            annual_revenue: revenue,
            ebitda,
            growth_rate: Decimal::ZERO,
            customer_retention: Decimal::ZERO,
            geographic_reach: 0,
            recurring_revenue: recurring,
        }
    }

    #[test]
    fn margin_and_recurring_pct() {
        let metrics = derive_metrics(&request(
            dec!(2000000),
            Some(dec!(300000)),
            dec!(800000),
        ));
        assert_eq!(metrics.ebitda_used, dec!(300000));
        assert_eq!(metrics.ebitda_margin, dec!(15));
        assert_eq!(metrics.recurring_revenue_pct, dec!(40.00));
    }

    #[test]
    fn missing_ebitda_defaults_to_fifteen_percent_of_revenue() {
        let metrics = derive_metrics(&request(dec!(1000000), None, Decimal::ZERO));
        assert_eq!(metrics.ebitda_used, dec!(150000));
        assert_eq!(metrics.ebitda_margin, dec!(15));
    }

    #[test]
    fn zero_revenue_computes_zero_metrics_without_panicking() {
        let metrics = derive_metrics(&request(Decimal::ZERO, None, dec!(500)));
        assert_eq!(metrics.ebitda_used, Decimal::ZERO);
        assert_eq!(metrics.ebitda_margin, Decimal::ZERO);
        assert_eq!(metrics.recurring_revenue_pct, Decimal::ZERO);
    }

    #[test]
    fn recurring_pct_rounds_to_two_places() {
        // 1 / 3 of revenue -> 33.33%
        let metrics = derive_metrics(&request(dec!(3000000), None, dec!(1000000)));
        assert_eq!(metrics.recurring_revenue_pct, dec!(33.33));
    }
}

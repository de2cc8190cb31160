pub mod calculator;
pub mod metrics;
pub mod multiples;
pub mod premiums;
pub mod validator;

pub use metrics::DEFAULT_EBITDA_RATIO;
pub use multiples::DEFAULT_MULTIPLE;

use rust_decimal::Decimal;
use valuation_core::{
    DerivedMetrics, PremiumBreakdown, RawValuationInput, ValuationError, ValuationRequest,
};

/// Everything the core pipeline computes, before advisory enrichment.
#[derive(Debug, Clone)]
pub struct ValuationFigures {
    pub request: ValuationRequest,
    pub base_multiple: Decimal,
    pub metrics: DerivedMetrics,
    pub premiums: PremiumBreakdown,
    pub size_premium: Decimal,
    pub adjusted_multiple: Decimal,
    pub valuation: Decimal,
}

pub struct ValuationEngine;

impl ValuationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Validate -> derive metrics -> premiums -> valuation.
    pub fn evaluate(&self, raw: &RawValuationInput) -> Result<ValuationFigures, ValuationError> {
        let request = validator::validate(raw)?;
        let base_multiple = multiples::base_multiple(&request.industry);
        let metrics = metrics::derive_metrics(&request);
        let premiums = premiums::premium_breakdown(&request, &metrics);
        let size_premium = premiums::size_premium(request.annual_revenue);
        let adjusted_multiple = calculator::adjusted_multiple(base_multiple, &premiums);
        let valuation = calculator::valuation(metrics.ebitda_used, adjusted_multiple)?;

        Ok(ValuationFigures {
            request,
            base_multiple,
            metrics,
            premiums,
            size_premium,
            adjusted_multiple,
            valuation,
        })
    }
}

impl Default for ValuationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn hvac_input() -> RawValuationInput {
        RawValuationInput {
            industry: Some("HVAC".to_string()),
            annual_revenue: Some(json!(2_000_000)),
            ebitda: Some(json!(300_000)),
            growth_rate: Some(json!(20)),
            customer_retention: Some(json!(85)),
            geographic_reach: Some(json!(4)),
            recurring_revenue: Some(json!(800_000)),
        }
    }

    #[test]
    fn hvac_worked_example() {
        let figures = ValuationEngine::new().evaluate(&hvac_input()).unwrap();

        assert_eq!(figures.base_multiple, dec!(4.8));
        assert_eq!(figures.premiums.growth, dec!(0.8));
        assert_eq!(figures.premiums.margin, dec!(0.4));
        assert_eq!(figures.premiums.retention, dec!(0.5));
        assert_eq!(figures.premiums.recurring_revenue, dec!(0.4));
        assert_eq!(figures.premiums.geographic, dec!(0.3));
        assert_eq!(figures.adjusted_multiple, dec!(7.2));
        assert_eq!(figures.valuation, dec!(2160000.00));
        // Revenue of 2M sits in the >1M size band, reported as context only.
        assert_eq!(figures.size_premium, dec!(0.2));
    }

    #[test]
    fn valuation_reconstructs_from_breakdown() {
        let figures = ValuationEngine::new().evaluate(&hvac_input()).unwrap();
        let rebuilt = figures.metrics.ebitda_used
            * (figures.base_multiple + figures.premiums.total());
        assert_eq!(figures.valuation, rebuilt.round_dp(2));
    }

    #[test]
    fn unknown_industry_defaults_without_failing() {
        let mut input = hvac_input();
        input.industry = Some("Quantum Alpaca Grooming".to_string());
        let figures = ValuationEngine::new().evaluate(&input).unwrap();
        assert_eq!(figures.base_multiple, dec!(5.0));
    }

    #[test]
    fn growth_exactly_25_takes_the_lower_band() {
        let mut input = hvac_input();
        input.growth_rate = Some(json!(25.0));
        let figures = ValuationEngine::new().evaluate(&input).unwrap();
        assert_eq!(figures.premiums.growth, dec!(0.8));
    }

    #[test]
    fn zero_revenue_without_ebitda_produces_zero_valuation() {
        let input = RawValuationInput {
            industry: Some("HVAC".to_string()),
            annual_revenue: Some(json!(0)),
            ..Default::default()
        };
        let figures = ValuationEngine::new().evaluate(&input).unwrap();
        assert_eq!(figures.metrics.ebitda_margin, Decimal::ZERO);
        assert_eq!(figures.metrics.recurring_revenue_pct, Decimal::ZERO);
        assert_eq!(figures.valuation, dec!(0.00));
    }

    #[test]
    fn same_input_same_output() {
        let engine = ValuationEngine::new();
        let a = engine.evaluate(&hvac_input()).unwrap();
        let b = engine.evaluate(&hvac_input()).unwrap();
        assert_eq!(a.valuation, b.valuation);
        assert_eq!(a.adjusted_multiple, b.adjusted_multiple);
    }
}

pub mod benchmarks;
pub mod insights;
pub mod scenarios;

pub use benchmarks::compare_to_industry;
pub use insights::generate_insights;
pub use scenarios::build_scenarios;

use rust_decimal::Decimal;
use valuation_core::{
    DerivedMetrics, IndustryComparison, Scenario, ValuationRequest,
};

pub struct AdvisoryEngine;

impl AdvisoryEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn insights(
        &self,
        request: &ValuationRequest,
        metrics: &DerivedMetrics,
        size_premium: Decimal,
    ) -> Vec<String> {
        insights::generate_insights(request, metrics, size_premium)
    }

    pub fn scenarios(
        &self,
        ebitda_used: Decimal,
        current_multiple: Decimal,
        current_valuation: Decimal,
    ) -> Vec<Scenario> {
        scenarios::build_scenarios(ebitda_used, current_multiple, current_valuation)
    }

    pub fn industry_comparison(
        &self,
        request: &ValuationRequest,
        metrics: &DerivedMetrics,
    ) -> IndustryComparison {
        benchmarks::compare_to_industry(
            request.growth_rate,
            metrics.ebitda_margin,
            request.customer_retention,
        )
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

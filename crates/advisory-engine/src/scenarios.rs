//! Improvement scenarios.
//!
//! Illustrative projections at a fixed increment schedule over the current
//! multiple. No search or optimization; the descriptions name metric changes
//! that would plausibly justify each extra turn of EBITDA.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use valuation_core::Scenario;

pub struct ScenarioStep {
    pub increment: Decimal,
    pub description: &'static str,
}

pub const SCENARIO_STEPS: &[ScenarioStep] = &[
    ScenarioStep {
        increment: dec!(1.0),
        description: "Lift customer retention above 90% and EBITDA margin past 20% to support roughly one extra turn of EBITDA.",
    },
    ScenarioStep {
        increment: dec!(2.0),
        description: "Grow recurring revenue past 80% of sales and sustain growth above 25% year over year to support around two extra turns of EBITDA.",
    },
];

pub fn build_scenarios(
    ebitda_used: Decimal,
    current_multiple: Decimal,
    current_valuation: Decimal,
) -> Vec<Scenario> {
    SCENARIO_STEPS
        .iter()
        .filter_map(|step| {
            let multiple = current_multiple + step.increment;
            // Skip rather than abort on overflow; scenarios are advisory.
            let projected = ebitda_used
                .checked_mul(multiple)?
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            Some(Scenario {
                description: step.description.to_string(),
                multiple,
                projected_valuation: projected,
                uplift: projected - current_valuation,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_schedule_of_two_scenarios() {
        let scenarios = build_scenarios(dec!(300000), dec!(7.2), dec!(2160000.00));
        assert_eq!(scenarios.len(), 2);

        assert_eq!(scenarios[0].multiple, dec!(8.2));
        assert_eq!(scenarios[0].projected_valuation, dec!(2460000.00));
        assert_eq!(scenarios[0].uplift, dec!(300000.00));

        assert_eq!(scenarios[1].multiple, dec!(9.2));
        assert_eq!(scenarios[1].projected_valuation, dec!(2760000.00));
        assert_eq!(scenarios[1].uplift, dec!(600000.00));
    }

    #[test]
    fn zero_ebitda_projects_zero_uplift() {
        let scenarios = build_scenarios(Decimal::ZERO, dec!(5.0), Decimal::ZERO);
        assert!(scenarios.iter().all(|s| s.projected_valuation.is_zero()));
    }
}

//! Insight generation.
//!
//! Advisory strings keyed to the band crossings the rules engine already
//! computed. Order is fixed (growth, margin, retention, recurring,
//! geographic, size, industry) so the same input always produces the same
//! ordered output.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use valuation_core::{DerivedMetrics, ValuationRequest};

fn pct(value: Decimal) -> Decimal {
    value.round_dp(2).normalize()
}

pub fn generate_insights(
    request: &ValuationRequest,
    metrics: &DerivedMetrics,
    size_premium: Decimal,
) -> Vec<String> {
    let mut insights = Vec::new();

    let growth = request.growth_rate;
    if growth > dec!(15) {
        insights.push(format!(
            "Your high growth rate of {}% is driving an increased valuation multiple.",
            pct(growth)
        ));
    } else if growth < Decimal::ZERO {
        insights.push(format!(
            "Declining revenue (growth of {}%) is discounting your valuation multiple.",
            pct(growth)
        ));
    } else if growth < dec!(5) {
        insights.push(format!(
            "A low growth rate of {}% might reduce your valuation multiple.",
            pct(growth)
        ));
    }

    let margin = metrics.ebitda_margin;
    if margin >= dec!(25) {
        insights.push(format!(
            "An EBITDA margin of {}% places profitability well above typical operators.",
            pct(margin)
        ));
    } else if margin < dec!(10) {
        insights.push(format!(
            "An EBITDA margin of {}% is compressing your multiple; margins below 10% trade at a discount.",
            pct(margin)
        ));
    }

    let retention = request.customer_retention;
    if retention >= dec!(90) {
        insights.push(format!(
            "Excellent customer retention ({}%) boosts your valuation.",
            pct(retention)
        ));
    } else if retention < dec!(70) {
        insights.push(format!(
            "Customer retention at {}% is below industry standards.",
            pct(retention)
        ));
    }

    let recurring = metrics.recurring_revenue_pct;
    if recurring >= dec!(60) {
        insights.push(format!(
            "Recurring revenue at {}% of sales supports a premium multiple.",
            pct(recurring)
        ));
    } else if recurring >= dec!(40) {
        insights.push(format!(
            "Recurring revenue at {}% of sales is approaching the level acquirers pay up for.",
            pct(recurring)
        ));
    }

    let reach = request.geographic_reach;
    if reach > 10 {
        insights.push(format!(
            "Operating in {reach} regions significantly enhances your valuation."
        ));
    } else if reach > 0 {
        insights.push(format!(
            "Geographic reach across {reach} regions provides moderate impact on valuation."
        ));
    }

    if size_premium > Decimal::ZERO {
        let threshold = if size_premium >= dec!(0.8) {
            "$10M"
        } else if size_premium >= dec!(0.5) {
            "$5M"
        } else {
            "$1M"
        };
        insights.push(format!(
            "Annual revenue above {threshold} typically widens the buyer pool and supports stronger offers."
        ));
    }

    if request.industry == "B2B Software" {
        insights.push(
            "B2B software businesses often see high multiples due to scalability and recurring revenue."
                .to_string(),
        );
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ValuationRequest {
        ValuationRequest {
            industry: "HVAC".to_string(),
            annual_revenue: dec!(2000000),
            ebitda: Some(dec!(300000)),
            growth_rate: dec!(20),
            customer_retention: dec!(85),
            geographic_reach: 4,
            recurring_revenue: dec!(800000),
        }
    }

    fn metrics() -> DerivedMetrics {
        DerivedMetrics {
            ebitda_used: dec!(300000),
            ebitda_margin: dec!(15),
            recurring_revenue_pct: dec!(40.00),
        }
    }

    #[test]
    fn high_growth_insight_fires_above_fifteen() {
        let insights = generate_insights(&request(), &metrics(), dec!(0.2));
        assert!(insights[0].contains("high growth rate of 20%"));
    }

    #[test]
    fn low_retention_flags_below_industry_standards() {
        let mut req = request();
        req.customer_retention = dec!(65);
        let insights = generate_insights(&req, &metrics(), Decimal::ZERO);
        assert!(insights
            .iter()
            .any(|i| i == "Customer retention at 65% is below industry standards."));
    }

    #[test]
    fn output_is_stable_for_the_same_input() {
        let a = generate_insights(&request(), &metrics(), dec!(0.2));
        let b = generate_insights(&request(), &metrics(), dec!(0.2));
        assert_eq!(a, b);
    }

    #[test]
    fn b2b_software_note_appears_last() {
        let mut req = request();
        req.industry = "B2B Software".to_string();
        let insights = generate_insights(&req, &metrics(), Decimal::ZERO);
        assert!(insights
            .last()
            .is_some_and(|i| i.starts_with("B2B software businesses")));
    }

    #[test]
    fn quiet_middle_of_every_band_yields_no_insights() {
        let req = ValuationRequest {
            industry: "Plumbing".to_string(),
            annual_revenue: dec!(500000),
            ebitda: None,
            growth_rate: dec!(8),
            customer_retention: dec!(75),
            geographic_reach: 0,
            recurring_revenue: Decimal::ZERO,
        };
        let m = DerivedMetrics {
            ebitda_used: dec!(75000),
            ebitda_margin: dec!(15),
            recurring_revenue_pct: Decimal::ZERO,
        };
        assert!(generate_insights(&req, &m, Decimal::ZERO).is_empty());
    }
}

//! Peer comparison against static industry benchmarks.
//!
//! Same step-function shape as the premium tables, different thresholds.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use valuation_core::{IndustryComparison, PercentileBand};

pub struct BenchmarkBands {
    pub top_decile: Decimal,
    pub top_quartile: Decimal,
    pub average: Decimal,
}

impl BenchmarkBands {
    pub fn classify(&self, value: Decimal) -> PercentileBand {
        if value > self.top_decile {
            PercentileBand::TopDecile
        } else if value > self.top_quartile {
            PercentileBand::TopQuartile
        } else if value > self.average {
            PercentileBand::Average
        } else {
            PercentileBand::BelowAverage
        }
    }
}

pub const GROWTH_BENCHMARK: BenchmarkBands = BenchmarkBands {
    top_decile: dec!(40),
    top_quartile: dec!(20),
    average: dec!(5),
};

pub const MARGIN_BENCHMARK: BenchmarkBands = BenchmarkBands {
    top_decile: dec!(30),
    top_quartile: dec!(20),
    average: dec!(12),
};

pub const RETENTION_BENCHMARK: BenchmarkBands = BenchmarkBands {
    top_decile: dec!(95),
    top_quartile: dec!(85),
    average: dec!(70),
};

pub fn compare_to_industry(
    growth_rate: Decimal,
    ebitda_margin: Decimal,
    customer_retention: Decimal,
) -> IndustryComparison {
    IndustryComparison {
        growth: GROWTH_BENCHMARK.classify(growth_rate),
        margin: MARGIN_BENCHMARK.classify(ebitda_margin),
        retention: RETENTION_BENCHMARK.classify(customer_retention),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_buckets() {
        assert_eq!(GROWTH_BENCHMARK.classify(dec!(50)), PercentileBand::TopDecile);
        assert_eq!(GROWTH_BENCHMARK.classify(dec!(25)), PercentileBand::TopQuartile);
        assert_eq!(GROWTH_BENCHMARK.classify(dec!(10)), PercentileBand::Average);
        assert_eq!(GROWTH_BENCHMARK.classify(dec!(2)), PercentileBand::BelowAverage);
    }

    #[test]
    fn comparison_covers_all_three_categories() {
        let comparison = compare_to_industry(dec!(20), dec!(15), dec!(85));
        assert_eq!(comparison.growth, PercentileBand::Average);
        assert_eq!(comparison.margin, PercentileBand::Average);
        assert_eq!(comparison.retention, PercentileBand::Average);
    }

    #[test]
    fn labels_read_like_percentiles() {
        assert_eq!(PercentileBand::TopDecile.label(), "Top 10%");
        assert_eq!(PercentileBand::BelowAverage.label(), "Below Average");
    }
}

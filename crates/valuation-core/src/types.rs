use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw key-value input as it arrives from the transport layer.
///
/// Numeric fields are kept as JSON values so the validator can accept both
/// numbers and numeric strings and reject anything else with the field named.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawValuationInput {
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub annual_revenue: Option<serde_json::Value>,
    #[serde(default)]
    pub ebitda: Option<serde_json::Value>,
    #[serde(default)]
    pub growth_rate: Option<serde_json::Value>,
    #[serde(default)]
    pub customer_retention: Option<serde_json::Value>,
    #[serde(default)]
    pub geographic_reach: Option<serde_json::Value>,
    #[serde(default)]
    pub recurring_revenue: Option<serde_json::Value>,
}

/// Validated valuation inputs, one per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRequest {
    pub industry: String,
    pub annual_revenue: Decimal,
    /// Defaults to 15% of revenue downstream when absent.
    pub ebitda: Option<Decimal>,
    /// Year-over-year revenue growth, percent.
    pub growth_rate: Decimal,
    /// Percent of customers retained year over year, 0-100.
    pub customer_retention: Decimal,
    /// Number of regions served.
    pub geographic_reach: u32,
    /// Recurring revenue as an amount, not a percent.
    pub recurring_revenue: Decimal,
}

/// Metrics derived from the raw inputs before rule evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Supplied EBITDA, or 15% of revenue when none was given.
    pub ebitda_used: Decimal,
    /// EBITDA as a percent of revenue; 0 when revenue is 0.
    pub ebitda_margin: Decimal,
    /// Recurring revenue as a percent of revenue, 2 dp; 0 when revenue is 0.
    pub recurring_revenue_pct: Decimal,
}

/// Per-category premium contributions that sum onto the base multiple.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    pub growth: Decimal,
    pub margin: Decimal,
    pub retention: Decimal,
    pub recurring_revenue: Decimal,
    pub geographic: Decimal,
}

impl PremiumBreakdown {
    pub fn total(&self) -> Decimal {
        self.growth + self.margin + self.retention + self.recurring_revenue + self.geographic
    }
}

/// Peer percentile bucket for the industry comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentileBand {
    TopDecile,
    TopQuartile,
    Average,
    BelowAverage,
}

impl PercentileBand {
    pub fn label(&self) -> &'static str {
        match self {
            PercentileBand::TopDecile => "Top 10%",
            PercentileBand::TopQuartile => "Top 25%",
            PercentileBand::Average => "Average",
            PercentileBand::BelowAverage => "Below Average",
        }
    }
}

// On the wire the buckets read as their percentile labels, not variant names.
impl Serialize for PercentileBand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for PercentileBand {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        match label.as_str() {
            "Top 10%" => Ok(PercentileBand::TopDecile),
            "Top 25%" => Ok(PercentileBand::TopQuartile),
            "Average" => Ok(PercentileBand::Average),
            "Below Average" => Ok(PercentileBand::BelowAverage),
            other => Err(serde::de::Error::unknown_variant(
                other,
                &["Top 10%", "Top 25%", "Average", "Below Average"],
            )),
        }
    }
}

/// How the business compares to industry benchmarks, per category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IndustryComparison {
    pub growth: PercentileBand,
    pub margin: PercentileBand,
    pub retention: PercentileBand,
}

/// A hypothetical improved-multiple projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub description: String,
    pub multiple: Decimal,
    pub projected_valuation: Decimal,
    /// Projected valuation minus the current one.
    pub uplift: Decimal,
}

/// Advisory market payload from the insight collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketOutlook {
    pub industry: String,
    pub sentiment_label: String,
    /// -1.0 (bearish) to 1.0 (bullish).
    pub sentiment_score: f64,
    pub risk_factors: Vec<String>,
    pub opportunities: Vec<String>,
    pub peer_tickers: Vec<String>,
}

impl MarketOutlook {
    /// Conservative fallback used when the collaborator fails.
    pub fn neutral(industry: &str) -> Self {
        Self {
            industry: industry.to_string(),
            sentiment_label: "Neutral".to_string(),
            sentiment_score: 0.0,
            risk_factors: Vec::new(),
            opportunities: Vec::new(),
            peer_tickers: Vec::new(),
        }
    }
}

/// Full valuation response, ephemeral per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationResult {
    pub industry: String,
    pub timestamp: DateTime<Utc>,
    /// EBITDA times the adjusted multiple, rounded to 2 dp half-up.
    pub valuation: Decimal,
    pub base_multiple: Decimal,
    pub adjusted_multiple: Decimal,
    pub metrics: DerivedMetrics,
    pub premiums: PremiumBreakdown,
    /// Revenue-scale premium, reported as context but not applied to the
    /// multiple.
    pub size_premium: Decimal,
    pub insights: Vec<String>,
    pub scenarios: Vec<Scenario>,
    pub industry_comparison: IndustryComparison,
    pub market_outlook: MarketOutlook,
}

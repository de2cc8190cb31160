//! Market insight collaborator.
//!
//! Ships a fixed advisory payload per industry: sentiment label, stock peers,
//! and stock risk/opportunity notes. Deliberately not a learned model; the
//! payloads are static configuration behind the [`MarketInsightProvider`]
//! seam so a real data source can replace them without touching the core.

use async_trait::async_trait;
use valuation_core::{MarketInsightProvider, MarketOutlook, ValuationError};

/// Public-market peers per industry, used as comparison context.
const INDUSTRY_TICKERS: &[(&str, &[&str])] = &[
    ("SaaS", &["CRM", "MSFT", "WDAY", "NOW"]),
    ("B2B Software", &["CRM", "MSFT", "WDAY", "NOW"]),
    ("IT Consulting", &["ACN", "CTSH", "EPAM"]),
    ("Healthcare", &["HCA", "UNH", "THC"]),
    ("Manufacturing", &["GE", "MMM", "CAT"]),
    ("Pest Control", &["ROL", "RTO"]),
    ("Pest Control - Residential", &["ROL", "RTO"]),
    ("HVAC", &["CARR", "TT", "JCI"]),
    ("HVAC - Commercial", &["CARR", "TT", "JCI"]),
    ("HVAC - Residential", &["CARR", "TT", "JCI"]),
];

/// Industries with structurally favorable buyer demand.
const FAVORED_INDUSTRIES: &[&str] = &[
    "SaaS",
    "B2B Software",
    "Pest Control",
    "Pest Control - Residential",
    "Veterinary Practice / Animal Hospital",
];

pub struct StaticMarketInsights;

impl StaticMarketInsights {
    pub fn new() -> Self {
        Self
    }

    fn peers(industry: &str) -> Vec<String> {
        INDUSTRY_TICKERS
            .iter()
            .find(|(name, _)| *name == industry)
            .map(|(_, tickers)| tickers.iter().map(|t| t.to_string()).collect())
            .unwrap_or_default()
    }
}

impl Default for StaticMarketInsights {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketInsightProvider for StaticMarketInsights {
    async fn market_outlook(&self, industry: &str) -> Result<MarketOutlook, ValuationError> {
        let favored = FAVORED_INDUSTRIES.contains(&industry);
        let (label, score) = if favored {
            ("Positive", 0.3)
        } else {
            ("Neutral", 0.0)
        };

        let mut risk_factors = vec![
            "Competitive pressure from regional consolidators".to_string(),
            "Labor availability and wage inflation".to_string(),
        ];
        if !favored {
            risk_factors.push("Cyclical demand sensitivity".to_string());
        }

        let mut opportunities = vec!["Geographic expansion into adjacent markets".to_string()];
        if favored {
            opportunities.push("Strong acquirer appetite for recurring-revenue models".to_string());
        }

        Ok(MarketOutlook {
            industry: industry.to_string(),
            sentiment_label: label.to_string(),
            sentiment_score: score,
            risk_factors,
            opportunities,
            peer_tickers: Self::peers(industry),
        })
    }
}

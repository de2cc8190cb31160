//! Pipeline orchestration.
//!
//! Validate -> metrics -> premiums -> valuation -> advisory -> assembly.
//! Validation failures stop immediately with the offending field named; the
//! advisory collaborator degrades to a neutral fallback so a bad market
//! payload never aborts a finished valuation. The valuation arithmetic
//! itself propagates its errors.

use advisory_engine::AdvisoryEngine;
use chrono::Utc;
use market_insights::StaticMarketInsights;
use std::sync::Arc;
use valuation_core::{
    MarketInsightProvider, MarketOutlook, RawValuationInput, ValuationError, ValuationResult,
};
use valuation_engine::ValuationEngine;


pub struct ValuationOrchestrator {
    engine: ValuationEngine,
    advisory: AdvisoryEngine,
    insight_provider: Arc<dyn MarketInsightProvider>,
}

impl ValuationOrchestrator {
    pub fn new() -> Self {
        Self::with_provider(Arc::new(StaticMarketInsights::new()))
    }

    pub fn with_provider(insight_provider: Arc<dyn MarketInsightProvider>) -> Self {
        Self {
            engine: ValuationEngine::new(),
            advisory: AdvisoryEngine::new(),
            insight_provider,
        }
    }

    pub async fn compute_valuation(
        &self,
        raw: &RawValuationInput,
    ) -> Result<ValuationResult, ValuationError> {
        let figures = self.engine.evaluate(raw)?;

        let insights = self
            .advisory
            .insights(&figures.request, &figures.metrics, figures.size_premium);
        let scenarios = self.advisory.scenarios(
            figures.metrics.ebitda_used,
            figures.adjusted_multiple,
            figures.valuation,
        );
        let industry_comparison = self
            .advisory
            .industry_comparison(&figures.request, &figures.metrics);

        let market_outlook = match self
            .insight_provider
            .market_outlook(&figures.request.industry)
            .await
        {
            Ok(outlook) => outlook,
            Err(err) => {
                tracing::warn!(
                    industry = %figures.request.industry,
                    error = %err,
                    "market insight provider failed, using neutral outlook"
                );
                MarketOutlook::neutral(&figures.request.industry)
            }
        };

        Ok(ValuationResult {
            industry: figures.request.industry,
            timestamp: Utc::now(),
            valuation: figures.valuation,
            base_multiple: figures.base_multiple,
            adjusted_multiple: figures.adjusted_multiple,
            metrics: figures.metrics,
            premiums: figures.premiums,
            size_premium: figures.size_premium,
            insights,
            scenarios,
            industry_comparison,
            market_outlook,
        })
    }
}

impl Default for ValuationOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

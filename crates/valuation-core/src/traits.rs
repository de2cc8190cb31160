use crate::{MarketOutlook, ValuationError};
use async_trait::async_trait;

/// Trait for market insight collaborators (sentiment, peer context).
#[async_trait]
pub trait MarketInsightProvider: Send + Sync {
    async fn market_outlook(&self, industry: &str) -> Result<MarketOutlook, ValuationError>;
}

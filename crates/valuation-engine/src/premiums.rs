//! Premium rules engine.
//!
//! Each category is an independent step-function lookup over one metric. The
//! tables are data, not branching code, so bands can be extended without new
//! conditionals. Band floors are inclusive lower bounds; the growth table is
//! the exception and uses strict greater-than, so a growth rate sitting
//! exactly on a boundary earns the next band down.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use valuation_core::{DerivedMetrics, PremiumBreakdown, ValuationRequest};

/// One band of a step function.
#[derive(Debug, Clone, Copy)]
pub struct PremiumBand {
    pub floor: Decimal,
    pub premium: Decimal,
}

/// Discount applied when the value falls strictly below `ceiling`.
#[derive(Debug, Clone, Copy)]
pub struct DiscountBand {
    pub ceiling: Decimal,
    pub premium: Decimal,
}

pub struct PremiumTable {
    /// Descending floors; first match wins, so a value crossing several bands
    /// earns only the top one.
    pub bands: &'static [PremiumBand],
    /// Whether a value sitting exactly on a floor belongs to that band.
    pub floor_inclusive: bool,
    pub discount: Option<DiscountBand>,
}

impl PremiumTable {
    pub fn lookup(&self, value: Decimal) -> Decimal {
        for band in self.bands {
            let hit = if self.floor_inclusive {
                value >= band.floor
            } else {
                value > band.floor
            };
            if hit {
                return band.premium;
            }
        }
        if let Some(discount) = &self.discount {
            if value < discount.ceiling {
                return discount.premium;
            }
        }
        Decimal::ZERO
    }
}

pub const GROWTH: PremiumTable = PremiumTable {
    bands: &[
        PremiumBand { floor: dec!(25), premium: dec!(1.2) },
        PremiumBand { floor: dec!(15), premium: dec!(0.8) },
        PremiumBand { floor: dec!(10), premium: dec!(0.5) },
    ],
    floor_inclusive: false,
    discount: Some(DiscountBand { ceiling: dec!(0), premium: dec!(-0.5) }),
};

pub const MARGIN: PremiumTable = PremiumTable {
    bands: &[
        PremiumBand { floor: dec!(25), premium: dec!(1.0) },
        PremiumBand { floor: dec!(20), premium: dec!(0.7) },
        PremiumBand { floor: dec!(15), premium: dec!(0.4) },
    ],
    floor_inclusive: true,
    discount: Some(DiscountBand { ceiling: dec!(10), premium: dec!(-0.3) }),
};

pub const RETENTION: PremiumTable = PremiumTable {
    bands: &[
        PremiumBand { floor: dec!(90), premium: dec!(0.8) },
        PremiumBand { floor: dec!(80), premium: dec!(0.5) },
        PremiumBand { floor: dec!(70), premium: dec!(0.2) },
    ],
    floor_inclusive: true,
    discount: Some(DiscountBand { ceiling: dec!(60), premium: dec!(-0.4) }),
};

pub const RECURRING: PremiumTable = PremiumTable {
    bands: &[
        PremiumBand { floor: dec!(80), premium: dec!(1.0) },
        PremiumBand { floor: dec!(60), premium: dec!(0.7) },
        PremiumBand { floor: dec!(40), premium: dec!(0.4) },
    ],
    floor_inclusive: true,
    discount: None,
};

pub const GEOGRAPHIC: PremiumTable = PremiumTable {
    bands: &[
        PremiumBand { floor: dec!(10), premium: dec!(0.8) },
        PremiumBand { floor: dec!(5), premium: dec!(0.5) },
        PremiumBand { floor: dec!(3), premium: dec!(0.3) },
    ],
    floor_inclusive: true,
    discount: None,
};

pub const SIZE: PremiumTable = PremiumTable {
    bands: &[
        PremiumBand { floor: dec!(10000000), premium: dec!(0.8) },
        PremiumBand { floor: dec!(5000000), premium: dec!(0.5) },
        PremiumBand { floor: dec!(1000000), premium: dec!(0.2) },
    ],
    floor_inclusive: true,
    discount: None,
};

/// The five operating-metric premiums that feed the adjusted multiple.
pub fn premium_breakdown(
    request: &ValuationRequest,
    metrics: &DerivedMetrics,
) -> PremiumBreakdown {
    PremiumBreakdown {
        growth: GROWTH.lookup(request.growth_rate),
        margin: MARGIN.lookup(metrics.ebitda_margin),
        retention: RETENTION.lookup(request.customer_retention),
        recurring_revenue: RECURRING.lookup(metrics.recurring_revenue_pct),
        geographic: GEOGRAPHIC.lookup(Decimal::from(request.geographic_reach)),
    }
}

/// Revenue-scale premium, reported alongside the breakdown as context rather
/// than applied to the multiple.
pub fn size_premium(annual_revenue: Decimal) -> Decimal {
    SIZE.lookup(annual_revenue)
}

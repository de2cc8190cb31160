//! Industry base multiples.
//!
//! Static, process-wide configuration. Industries absent from the table fall
//! back to [`DEFAULT_MULTIPLE`] (lenient policy) with a warning, since the
//! output is advisory rather than authoritative.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const DEFAULT_MULTIPLE: Decimal = dec!(5.0);

const INDUSTRY_MULTIPLES: &[(&str, Decimal)] = &[
    ("HVAC", dec!(4.8)),
    ("HVAC - Commercial", dec!(5.0)),
    ("HVAC - Residential", dec!(4.5)),
    ("Plumbing", dec!(4.0)),
    ("Roofing", dec!(3.5)),
    ("Landscaping - Commercial", dec!(3.0)),
    ("Landscaping - Residential", dec!(2.8)),
    ("Manufacturing", dec!(6.0)),
    ("Insurance Agency - Personal Lines", dec!(7.0)),
    ("Pest Control", dec!(5.5)),
    ("Pest Control - Residential", dec!(6.5)),
    ("Veterinary Practice / Animal Hospital", dec!(8.0)),
    ("SaaS", dec!(8.5)),
    ("B2B Software", dec!(10.0)),
];

/// Exact-match lookup against the multiple table.
pub fn lookup_multiple(industry: &str) -> Option<Decimal> {
    INDUSTRY_MULTIPLES
        .iter()
        .find(|(name, _)| *name == industry)
        .map(|(_, multiple)| *multiple)
}

/// Base multiple for an industry, defaulting when unknown.
pub fn base_multiple(industry: &str) -> Decimal {
    match lookup_multiple(industry) {
        Some(multiple) => multiple,
        None => {
            tracing::warn!(industry, "unknown industry, using default multiple");
            DEFAULT_MULTIPLE
        }
    }
}

/// All known industries with their base multiples.
pub fn industries() -> impl Iterator<Item = (&'static str, Decimal)> {
    INDUSTRY_MULTIPLES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_industry_multiple() {
        assert_eq!(lookup_multiple("HVAC"), Some(dec!(4.8)));
        assert_eq!(lookup_multiple("B2B Software"), Some(dec!(10.0)));
    }

    #[test]
    fn unknown_industry_falls_back_to_default() {
        assert_eq!(lookup_multiple("Underwater Basket Weaving"), None);
        assert_eq!(base_multiple("Underwater Basket Weaving"), DEFAULT_MULTIPLE);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup_multiple("hvac"), None);
    }
}

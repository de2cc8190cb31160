//! Input validation.
//!
//! Turns the raw key-value input into a [`ValuationRequest`], rejecting
//! missing required fields, unparseable numbers, and out-of-range values with
//! the offending field named. Validation failures stop processing
//! immediately; nothing downstream runs on unvalidated input.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use std::str::FromStr;
use valuation_core::{RawValuationInput, ValuationError, ValuationRequest};

const GROWTH_MIN: Decimal = dec!(-100);
const GROWTH_MAX: Decimal = dec!(1000);
const RETENTION_MAX: Decimal = dec!(100);

/// Accept JSON numbers and numeric strings; anything else is malformed.
fn parse_decimal(value: &Value, field: &str, label: &str) -> Result<Decimal, ValuationError> {
    let parsed = match value {
        Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .ok()
                .or_else(|| Decimal::from_scientific(&text).ok())
        }
        Value::String(s) => {
            let text = s.trim();
            if text.is_empty() {
                None
            } else {
                Decimal::from_str(text)
                    .ok()
                    .or_else(|| Decimal::from_scientific(text).ok())
            }
        }
        _ => None,
    };

    parsed.ok_or_else(|| ValuationError::validation(field, format!("{label} must be a number")))
}

/// Treat explicit JSON null the same as an absent field.
fn present(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|v| !v.is_null())
}

pub fn validate(raw: &RawValuationInput) -> Result<ValuationRequest, ValuationError> {
    let industry = raw
        .industry
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ValuationError::validation("industry", "Industry is required"))?
        .to_string();

    let annual_revenue = match present(&raw.annual_revenue) {
        Some(value) => parse_decimal(value, "annualRevenue", "Annual revenue")?,
        None => {
            return Err(ValuationError::validation(
                "annualRevenue",
                "Annual revenue is required",
            ))
        }
    };
    if annual_revenue < Decimal::ZERO {
        return Err(ValuationError::validation(
            "annualRevenue",
            "Annual revenue cannot be negative",
        ));
    }

    let ebitda = present(&raw.ebitda)
        .map(|value| parse_decimal(value, "ebitda", "EBITDA"))
        .transpose()?;

    let growth_rate = present(&raw.growth_rate)
        .map(|value| parse_decimal(value, "growthRate", "Growth rate"))
        .transpose()?
        .unwrap_or(Decimal::ZERO);
    if growth_rate < GROWTH_MIN || growth_rate > GROWTH_MAX {
        return Err(ValuationError::validation(
            "growthRate",
            "Growth rate must be between -100 and 1000",
        ));
    }

    let customer_retention = present(&raw.customer_retention)
        .map(|value| parse_decimal(value, "customerRetention", "Customer retention"))
        .transpose()?
        .unwrap_or(Decimal::ZERO);
    if customer_retention < Decimal::ZERO || customer_retention > RETENTION_MAX {
        return Err(ValuationError::validation(
            "customerRetention",
            "Customer retention must be between 0 and 100",
        ));
    }

    let geographic_reach = match present(&raw.geographic_reach) {
        Some(value) => {
            let reach = parse_decimal(value, "geographicReach", "Geographic reach")?;
            if reach < Decimal::ZERO {
                return Err(ValuationError::validation(
                    "geographicReach",
                    "Geographic reach cannot be negative",
                ));
            }
            if !reach.fract().is_zero() {
                return Err(ValuationError::validation(
                    "geographicReach",
                    "Geographic reach must be a whole number of regions",
                ));
            }
            reach.to_u32().ok_or_else(|| {
                ValuationError::validation(
                    "geographicReach",
                    "Geographic reach is out of range",
                )
            })?
        }
        None => 0,
    };

    let recurring_revenue = present(&raw.recurring_revenue)
        .map(|value| parse_decimal(value, "recurringRevenue", "Recurring revenue"))
        .transpose()?
        .unwrap_or(Decimal::ZERO);
    if recurring_revenue < Decimal::ZERO {
        return Err(ValuationError::validation(
            "recurringRevenue",
            "Recurring revenue cannot be negative",
        ));
    }

    Ok(ValuationRequest {
        industry,
        annual_revenue,
        ebitda,
        growth_rate,
        customer_retention,
        geographic_reach,
        recurring_revenue,
    })
}

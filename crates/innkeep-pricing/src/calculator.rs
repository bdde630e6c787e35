//! Subtotal, discount, tax and total

use serde::{Deserialize, Serialize};

use crate::money::round2;

/// Already-coerced inputs of a price computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    pub base_rate: f64,
    pub nights: u32,
    pub tax_rate_percent: f64,
    /// `0` when no discount applies
    pub discount_percent: f64,
    /// Manual nightly rate; replaces `base_rate` when present
    pub override_price: Option<f64>,
}

/// Derived booking amounts
///
/// `total = subtotal - discount + tax`. Values are unrounded; use
/// [`PricingResult::rounded`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub nights: u32,
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    pub total: f64,
}

impl PricingResult {
    /// Every amount rounded to 2 decimals
    pub fn rounded(&self) -> Self {
        Self {
            nights: self.nights,
            subtotal: round2(self.subtotal),
            discount: round2(self.discount),
            tax: round2(self.tax),
            total: round2(self.total),
        }
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Compute a full price breakdown
///
/// Nights are clamped to at least one, negative or non-finite rates count as
/// `0` and the discount percentage is capped at 100, so every amount is
/// non-negative and the discount never exceeds the subtotal.
pub fn compute_pricing(input: &PricingInput) -> PricingResult {
    let nights = input.nights.max(1);
    let unit_price = non_negative(input.override_price.unwrap_or(input.base_rate));
    let discount_percent = non_negative(input.discount_percent).min(100.0);
    let tax_percent = non_negative(input.tax_rate_percent);

    let subtotal = unit_price * f64::from(nights);
    let discount = subtotal * discount_percent / 100.0;
    let tax = (subtotal - discount) * tax_percent / 100.0;
    let total = subtotal - discount + tax;

    tracing::debug!(nights, subtotal, discount, tax, total, "pricing computed");

    PricingResult {
        nights,
        subtotal,
        discount,
        tax,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input(base_rate: f64, nights: u32, tax: f64) -> PricingInput {
        PricingInput {
            base_rate,
            nights,
            tax_rate_percent: tax,
            discount_percent: 0.0,
            override_price: None,
        }
    }

    #[test]
    fn test_three_nights_with_tax() {
        let result = compute_pricing(&input(2000.0, 3, 18.0));
        assert_eq!(
            result,
            PricingResult {
                nights: 3,
                subtotal: 6000.0,
                discount: 0.0,
                tax: 1080.0,
                total: 7080.0,
            }
        );
    }

    #[test]
    fn test_ten_percent_discount_is_taxed_after() {
        let result = compute_pricing(&PricingInput {
            discount_percent: 10.0,
            ..input(2000.0, 3, 18.0)
        });
        assert_eq!(result.discount, 600.0);
        assert_eq!(result.tax, 972.0);
        assert_eq!(result.total, 6372.0);
    }

    #[test]
    fn test_no_discount_total_is_subtotal_plus_tax() {
        let result = compute_pricing(&input(1234.56, 2, 12.0));
        assert_eq!(result.discount, 0.0);
        assert_eq!(result.total, result.subtotal + result.tax);
    }

    #[test]
    fn test_zero_nights_charged_as_one() {
        let result = compute_pricing(&input(2000.0, 0, 0.0));
        assert_eq!(result.nights, 1);
        assert_eq!(result.subtotal, 2000.0);
    }

    #[test]
    fn test_override_replaces_base_rate() {
        let result = compute_pricing(&PricingInput {
            override_price: Some(1500.0),
            ..input(2000.0, 2, 0.0)
        });
        assert_eq!(result.subtotal, 3000.0);
    }

    #[test]
    fn test_zero_override() {
        let result = compute_pricing(&PricingInput {
            override_price: Some(0.0),
            discount_percent: 20.0,
            ..input(2000.0, 4, 18.0)
        });
        assert_eq!(result.subtotal, 0.0);
        assert_eq!(result.discount, 0.0);
        assert_eq!(result.tax, 0.0);
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn test_amounts_never_negative() {
        let result = compute_pricing(&PricingInput {
            base_rate: -500.0,
            nights: 2,
            tax_rate_percent: -18.0,
            discount_percent: 250.0,
            override_price: None,
        });
        assert_eq!(result.subtotal, 0.0);
        assert_eq!(result.total, 0.0);

        let capped = compute_pricing(&PricingInput {
            discount_percent: 250.0,
            ..input(1000.0, 1, 18.0)
        });
        assert_eq!(capped.discount, capped.subtotal);
        assert_eq!(capped.total, 0.0);
    }

    #[test]
    fn test_rounding_is_display_only() {
        let result = compute_pricing(&input(1000.0, 3, 12.3456));
        assert!((result.tax - 370.368).abs() < 1e-9);
        assert_eq!(result.rounded().tax, 370.37);
        assert_eq!(result.rounded().total, 3370.37);
        assert_eq!(result.rounded().nights, 3);
    }
}

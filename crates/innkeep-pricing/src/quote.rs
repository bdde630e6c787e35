//! Raw booking-summary inputs

use serde::{Deserialize, Serialize};

use crate::calculator::{compute_pricing, PricingInput, PricingResult};
use crate::coerce::{coerce_amount, coerce_percent};
use crate::discount::DiscountTable;
use crate::stay::Stay;

/// What a booking summary knows before coercion
///
/// `base_rate` is the already-resolved nightly rate of the selected room;
/// the remaining inputs are kept as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteRequest {
    pub base_rate: f64,
    pub stay: Option<Stay>,
    pub tax_rate: String,
    pub discount_code: String,
    pub override_enabled: bool,
    pub override_price: String,
}

impl QuoteRequest {
    /// Coerce the raw inputs and resolve the discount code
    ///
    /// Without both dates the stay counts as one night. The override price is
    /// only used while the override toggle is on and a price is entered; a
    /// blank price keeps the room rate.
    pub fn to_input(&self, discounts: &DiscountTable) -> PricingInput {
        PricingInput {
            base_rate: self.base_rate,
            nights: self.stay.map(|stay| stay.nights()).unwrap_or(1),
            tax_rate_percent: coerce_percent(&self.tax_rate),
            discount_percent: discounts.percent_for(&self.discount_code),
            override_price: (self.override_enabled && !self.override_price.trim().is_empty())
                .then(|| coerce_amount(&self.override_price)),
        }
    }

    pub fn quote(&self, discounts: &DiscountTable) -> PricingResult {
        compute_pricing(&self.to_input(discounts))
    }
}

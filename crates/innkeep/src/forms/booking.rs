// File: src/forms/booking.rs
// Purpose: Booking form: guest, room, stay dates and price inputs

use innkeep_pricing::{parse_date, QuoteRequest, RateCard, Stay};
use innkeep_validation::{form_fields, rules, FieldValue, FormValues, Rule, RuleSet, Validate};
use serde::{Deserialize, Serialize};

use super::patterns::AMOUNT;
use super::{Editable, FieldInput, FormKind};

form_fields! {
    pub enum BookingField {
        Guest => "guestId",
        Room => "roomId",
        CheckIn => "checkIn",
        CheckOut => "checkOut",
        Adults => "adults",
        Children => "children",
        TaxRate => "taxRate",
        DiscountCode => "discountCode",
        OverrideEnabled => "overrideEnabled",
        OverridePrice => "overridePrice",
        SpecialRequests => "specialRequests",
    }
}

impl BookingField {
    /// Fields whose change invalidates the price summary
    pub fn affects_pricing(self) -> bool {
        matches!(
            self,
            BookingField::Room
                | BookingField::CheckIn
                | BookingField::CheckOut
                | BookingField::TaxRate
                | BookingField::DiscountCode
                | BookingField::OverrideEnabled
                | BookingField::OverridePrice
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingForm {
    pub guest_id: Option<String>,
    pub room_id: Option<String>,
    pub check_in: String,
    pub check_out: String,
    pub adults: String,
    pub children: String,
    pub tax_rate: String,
    pub discount_code: String,
    pub override_enabled: bool,
    pub override_price: String,
    pub special_requests: String,
}

impl BookingForm {
    /// Parsed stay, when both dates are valid
    pub fn stay(&self) -> Option<Stay> {
        Stay::parse(&self.check_in, &self.check_out)
    }

    /// Raw price inputs for the summary
    ///
    /// The nightly rate is the selected room's base rate, adjusted by the
    /// season the check-in date falls in. An unknown or missing room rates at
    /// `0`.
    pub fn quote_request(&self, rates: &RateCard) -> QuoteRequest {
        let base_rate = self
            .room_id
            .as_deref()
            .map(|id| rates.nightly_rate(id, parse_date(&self.check_in)))
            .unwrap_or(0.0);

        QuoteRequest {
            base_rate,
            stay: self.stay(),
            tax_rate: self.tax_rate.clone(),
            discount_code: self.discount_code.clone(),
            override_enabled: self.override_enabled,
            override_price: self.override_price.clone(),
        }
    }
}

impl FormValues<BookingField> for BookingForm {
    fn value(&self, field: BookingField) -> FieldValue<'_> {
        match field {
            BookingField::Guest => FieldValue::from(&self.guest_id),
            BookingField::Room => FieldValue::from(&self.room_id),
            BookingField::CheckIn => FieldValue::from(&self.check_in),
            BookingField::CheckOut => FieldValue::from(&self.check_out),
            BookingField::Adults => FieldValue::from(&self.adults),
            BookingField::Children => FieldValue::from(&self.children),
            BookingField::TaxRate => FieldValue::from(&self.tax_rate),
            BookingField::DiscountCode => FieldValue::from(&self.discount_code),
            BookingField::OverrideEnabled => FieldValue::from(self.override_enabled),
            BookingField::OverridePrice => FieldValue::from(&self.override_price),
            BookingField::SpecialRequests => FieldValue::from(&self.special_requests),
        }
    }
}

fn valid_date(message: &'static str) -> Rule<BookingField> {
    rules::custom(message, |value| parse_date(&value.as_text()).is_some())
}

fn after_check_in() -> Rule<BookingField> {
    Rule::new("Check-out must be after check-in", |value, form| {
        let check_out = parse_date(&value.as_text());
        let check_in = parse_date(&form.value(BookingField::CheckIn).as_text());
        match (check_in, check_out) {
            (Some(check_in), Some(check_out)) => check_out > check_in,
            // A malformed check-in is reported on its own field.
            _ => true,
        }
    })
}

impl Validate for BookingForm {
    type Field = BookingField;

    fn rules(&self) -> RuleSet<BookingField> {
        RuleSet::new()
            .field(BookingField::Guest, [rules::required("Please select a guest")])
            .field(BookingField::Room, [rules::required("Please select a room")])
            .field(
                BookingField::CheckIn,
                [
                    rules::required("Check-in date is required"),
                    valid_date("Enter a valid check-in date"),
                ],
            )
            .field(
                BookingField::CheckOut,
                [
                    rules::required("Check-out date is required"),
                    valid_date("Enter a valid check-out date"),
                    after_check_in(),
                ],
            )
            .field(
                BookingField::Adults,
                [
                    rules::required("Number of adults is required"),
                    rules::min(1.0, "At least one adult is required"),
                    rules::max(10.0, "At most 10 adults per booking"),
                ],
            )
            .field_if(
                !self.children.trim().is_empty(),
                BookingField::Children,
                [
                    rules::min(0.0, "Children cannot be negative"),
                    rules::max(10.0, "At most 10 children per booking"),
                ],
            )
            .field(
                BookingField::TaxRate,
                [
                    rules::required("Tax rate is required"),
                    rules::min(0.0, "Tax rate cannot be negative"),
                    rules::max(100.0, "Tax rate cannot exceed 100%"),
                ],
            )
            .field_if(
                self.override_enabled,
                BookingField::OverridePrice,
                [
                    rules::required("Enter the override price"),
                    rules::pattern(&AMOUNT, "Enter a valid positive amount"),
                    rules::min(0.01, "Enter a valid positive amount"),
                ],
            )
            .field(
                BookingField::SpecialRequests,
                [rules::max_length(500, "Special requests must be at most 500 characters")],
            )
    }
}

impl Editable for BookingForm {
    fn apply(&mut self, field: BookingField, input: FieldInput) {
        match field {
            BookingField::Guest => self.guest_id = input.into_choice(),
            BookingField::Room => self.room_id = input.into_choice(),
            BookingField::CheckIn => self.check_in = input.into_text(),
            BookingField::CheckOut => self.check_out = input.into_text(),
            BookingField::Adults => self.adults = input.into_text(),
            BookingField::Children => self.children = input.into_text(),
            BookingField::TaxRate => self.tax_rate = input.into_text(),
            BookingField::DiscountCode => self.discount_code = input.into_text(),
            BookingField::OverrideEnabled => self.override_enabled = input.into_flag(),
            BookingField::OverridePrice => self.override_price = input.into_text(),
            BookingField::SpecialRequests => self.special_requests = input.into_text(),
        }
    }
}

impl FormKind for BookingForm {
    const KIND: &'static str = "booking";
    const LABEL: &'static str = "Booking";
}

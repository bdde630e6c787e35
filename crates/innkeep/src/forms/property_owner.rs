// File: src/forms/property_owner.rs
// Purpose: Property owner onboarding form with conditional GST details

use innkeep_validation::{form_fields, rules, FieldValue, FormValues, Rule, RuleSet, Validate};
use serde::{Deserialize, Serialize};

use super::patterns::{GSTIN, PAN, PHONE, POSTAL_CODE};
use super::{Editable, FieldInput, FormKind};

form_fields! {
    pub enum PropertyOwnerField {
        OwnerName => "ownerName",
        Email => "email",
        Phone => "phone",
        PropertyName => "propertyName",
        Address => "address",
        City => "city",
        PostalCode => "postalCode",
        PanNumber => "panNumber",
        HasGst => "hasGst",
        GstNumber => "gstNumber",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyOwnerForm {
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub property_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub pan_number: String,
    pub has_gst: bool,
    pub gst_number: String,
}

impl FormValues<PropertyOwnerField> for PropertyOwnerForm {
    fn value(&self, field: PropertyOwnerField) -> FieldValue<'_> {
        match field {
            PropertyOwnerField::OwnerName => FieldValue::from(&self.owner_name),
            PropertyOwnerField::Email => FieldValue::from(&self.email),
            PropertyOwnerField::Phone => FieldValue::from(&self.phone),
            PropertyOwnerField::PropertyName => FieldValue::from(&self.property_name),
            PropertyOwnerField::Address => FieldValue::from(&self.address),
            PropertyOwnerField::City => FieldValue::from(&self.city),
            PropertyOwnerField::PostalCode => FieldValue::from(&self.postal_code),
            PropertyOwnerField::PanNumber => FieldValue::from(&self.pan_number),
            PropertyOwnerField::HasGst => FieldValue::from(self.has_gst),
            PropertyOwnerField::GstNumber => FieldValue::from(&self.gst_number),
        }
    }
}

/// A GSTIN embeds the holder's PAN at positions 3..13
fn gst_matches_pan() -> Rule<PropertyOwnerField> {
    Rule::new("GST number does not match the PAN", |value, form| {
        let gst = value.as_text();
        let pan = form.value(PropertyOwnerField::PanNumber).as_text();
        let pan = pan.trim();
        if !PAN.is_match(pan) {
            // The PAN field reports its own error.
            return true;
        }
        gst.trim().get(2..12) == Some(pan)
    })
}

impl Validate for PropertyOwnerForm {
    type Field = PropertyOwnerField;

    fn rules(&self) -> RuleSet<PropertyOwnerField> {
        RuleSet::new()
            .field(
                PropertyOwnerField::OwnerName,
                [
                    rules::required("Owner name is required"),
                    rules::min_length(2, "Name must be at least 2 characters"),
                ],
            )
            .field(
                PropertyOwnerField::Email,
                [
                    rules::required("Email is required"),
                    rules::email("Enter a valid email address"),
                ],
            )
            .field(
                PropertyOwnerField::Phone,
                [
                    rules::required("Phone number is required"),
                    rules::pattern(&PHONE, "Phone number must be 10 digits"),
                ],
            )
            .field(
                PropertyOwnerField::PropertyName,
                [rules::required("Property name is required")],
            )
            .field(
                PropertyOwnerField::Address,
                [
                    rules::required("Address is required"),
                    rules::min_length(10, "Address must be at least 10 characters"),
                ],
            )
            .field(PropertyOwnerField::City, [rules::required("City is required")])
            .field(
                PropertyOwnerField::PostalCode,
                [
                    rules::required("Postal code is required"),
                    rules::pattern(&POSTAL_CODE, "Postal code must be 6 digits"),
                ],
            )
            .field(
                PropertyOwnerField::PanNumber,
                [
                    rules::required("PAN number is required"),
                    rules::pattern(&PAN, "Enter a valid PAN, e.g. ABCDE1234F"),
                ],
            )
            .field_if(
                self.has_gst,
                PropertyOwnerField::GstNumber,
                [
                    rules::required("GST number is required"),
                    rules::pattern(&GSTIN, "Enter a valid 15-character GSTIN"),
                    gst_matches_pan(),
                ],
            )
    }
}

impl Editable for PropertyOwnerForm {
    fn apply(&mut self, field: PropertyOwnerField, input: FieldInput) {
        match field {
            PropertyOwnerField::OwnerName => self.owner_name = input.into_text(),
            PropertyOwnerField::Email => self.email = input.into_text(),
            PropertyOwnerField::Phone => self.phone = input.into_text(),
            PropertyOwnerField::PropertyName => self.property_name = input.into_text(),
            PropertyOwnerField::Address => self.address = input.into_text(),
            PropertyOwnerField::City => self.city = input.into_text(),
            PropertyOwnerField::PostalCode => self.postal_code = input.into_text(),
            PropertyOwnerField::PanNumber => self.pan_number = input.into_text().to_uppercase(),
            PropertyOwnerField::HasGst => self.has_gst = input.into_flag(),
            PropertyOwnerField::GstNumber => self.gst_number = input.into_text().to_uppercase(),
        }
    }
}

impl FormKind for PropertyOwnerForm {
    const KIND: &'static str = "property_owner";
    const LABEL: &'static str = "Property owner";
}

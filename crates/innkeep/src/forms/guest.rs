// File: src/forms/guest.rs
// Purpose: Guest registration form

use innkeep_validation::string::is_one_of;
use innkeep_validation::{form_fields, rules, FieldValue, FormValues, RuleSet, Validate};
use serde::{Deserialize, Serialize};

use super::patterns::{AADHAAR, PASSPORT, PHONE, VEHICLE_NUMBER};
use super::{Editable, FieldInput, FormKind};

pub const ID_TYPES: &[&str] = &["aadhaar", "passport", "driving_license", "voter_id"];

form_fields! {
    pub enum GuestField {
        FirstName => "firstName",
        LastName => "lastName",
        Email => "email",
        Phone => "phone",
        IdType => "idType",
        IdNumber => "idNumber",
        Address => "address",
        VehicleNumber => "vehicleNumber",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub id_type: Option<String>,
    pub id_number: String,
    pub address: String,
    pub vehicle_number: String,
}

impl GuestForm {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

impl FormValues<GuestField> for GuestForm {
    fn value(&self, field: GuestField) -> FieldValue<'_> {
        match field {
            GuestField::FirstName => FieldValue::from(&self.first_name),
            GuestField::LastName => FieldValue::from(&self.last_name),
            GuestField::Email => FieldValue::from(&self.email),
            GuestField::Phone => FieldValue::from(&self.phone),
            GuestField::IdType => FieldValue::from(&self.id_type),
            GuestField::IdNumber => FieldValue::from(&self.id_number),
            GuestField::Address => FieldValue::from(&self.address),
            GuestField::VehicleNumber => FieldValue::from(&self.vehicle_number),
        }
    }
}

impl Validate for GuestForm {
    type Field = GuestField;

    fn rules(&self) -> RuleSet<GuestField> {
        // The document number format follows the selected ID type.
        let id_format = match self.id_type.as_deref() {
            Some("aadhaar") => rules::pattern(&AADHAAR, "Aadhaar number must be 12 digits"),
            Some("passport") => rules::pattern(&PASSPORT, "Enter a valid passport number"),
            _ => rules::length_between(4, 20, "ID number must be 4 to 20 characters"),
        };

        RuleSet::new()
            .field(GuestField::FirstName, [rules::required("First name is required")])
            .field(GuestField::LastName, [rules::required("Last name is required")])
            .field(
                GuestField::Email,
                [
                    rules::required("Email is required"),
                    rules::email("Enter a valid email address"),
                ],
            )
            .field(
                GuestField::Phone,
                [
                    rules::required("Phone number is required"),
                    rules::pattern(&PHONE, "Phone number must be 10 digits"),
                ],
            )
            .field(
                GuestField::IdType,
                [
                    rules::required("Select an ID type"),
                    rules::custom("Select a supported ID type", |value| {
                        is_one_of(&value.as_text(), ID_TYPES)
                    }),
                ],
            )
            .field(
                GuestField::IdNumber,
                [rules::required("ID number is required"), id_format],
            )
            .field(
                GuestField::Address,
                [rules::max_length(200, "Address must be at most 200 characters")],
            )
            .field_if(
                !self.vehicle_number.trim().is_empty(),
                GuestField::VehicleNumber,
                [rules::pattern(
                    &VEHICLE_NUMBER,
                    "Enter a valid vehicle number, e.g. MH12AB1234",
                )],
            )
    }
}

impl Editable for GuestForm {
    fn apply(&mut self, field: GuestField, input: FieldInput) {
        match field {
            GuestField::FirstName => self.first_name = input.into_text(),
            GuestField::LastName => self.last_name = input.into_text(),
            GuestField::Email => self.email = input.into_text(),
            GuestField::Phone => self.phone = input.into_text(),
            GuestField::IdType => self.id_type = input.into_choice(),
            GuestField::IdNumber => self.id_number = input.into_text(),
            GuestField::Address => self.address = input.into_text(),
            GuestField::VehicleNumber => self.vehicle_number = input.into_text().to_uppercase(),
        }
    }
}

impl FormKind for GuestForm {
    const KIND: &'static str = "guest";
    const LABEL: &'static str = "Guest";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest() -> GuestForm {
        GuestForm {
            first_name: "Vikram".into(),
            last_name: "Sethi".into(),
            email: "vikram@example.com".into(),
            phone: "9123456780".into(),
            id_type: Some("aadhaar".into()),
            id_number: "123412341234".into(),
            address: "12 MG Road, Pune".into(),
            vehicle_number: String::new(),
        }
    }

    #[test]
    fn test_valid_guest() {
        assert!(guest().errors().is_empty());
        assert_eq!(guest().full_name(), "Vikram Sethi");
    }

    #[test]
    fn test_id_number_follows_id_type() {
        let passport = GuestForm {
            id_type: Some("passport".into()),
            ..guest()
        };
        assert_eq!(
            passport.errors().get(GuestField::IdNumber),
            Some("Enter a valid passport number")
        );

        let fixed = GuestForm {
            id_number: "K1234567".into(),
            ..passport
        };
        assert!(fixed.errors().is_empty());
    }

    #[test]
    fn test_other_id_number_length() {
        let short = GuestForm {
            id_type: Some("voter_id".into()),
            id_number: "AB1".into(),
            ..guest()
        };
        assert_eq!(
            short.errors().get(GuestField::IdNumber),
            Some("ID number must be 4 to 20 characters")
        );

        let long = GuestForm {
            id_number: "X".repeat(21),
            ..short.clone()
        };
        assert!(long.errors().has_error(GuestField::IdNumber));

        let ok = GuestForm {
            id_number: "ABC1234567".into(),
            ..short
        };
        assert!(ok.errors().is_empty());
    }

    #[test]
    fn test_unknown_id_type() {
        let form = GuestForm {
            id_type: Some("library_card".into()),
            ..guest()
        };
        assert_eq!(
            form.errors().get(GuestField::IdType),
            Some("Select a supported ID type")
        );
    }

    #[test]
    fn test_vehicle_number_is_optional() {
        assert!(!guest().rules().contains(GuestField::VehicleNumber));

        let mut form = guest();
        form.apply(GuestField::VehicleNumber, "mh12ab1234".into());
        assert_eq!(form.vehicle_number, "MH12AB1234");
        assert!(form.errors().is_empty());

        form.apply(GuestField::VehicleNumber, "1234".into());
        assert!(form.errors().has_error(GuestField::VehicleNumber));
    }
}

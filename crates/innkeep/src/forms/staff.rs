// File: src/forms/staff.rs
// Purpose: Staff member form

use innkeep_pricing::parse_date;
use innkeep_validation::string::is_one_of;
use innkeep_validation::{form_fields, rules, FieldValue, FormValues, Rule, RuleSet, Validate};
use serde::{Deserialize, Serialize};

use super::patterns::{AMOUNT, PHONE};
use super::{Editable, FieldInput, FormKind};

pub const STAFF_ROLES: &[&str] = &[
    "manager",
    "receptionist",
    "housekeeping",
    "chef",
    "maintenance",
    "security",
];

form_fields! {
    pub enum StaffField {
        FullName => "fullName",
        Email => "email",
        Phone => "phone",
        Role => "role",
        Salary => "salary",
        JoiningDate => "joiningDate",
        EmergencyContact => "emergencyContact",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: Option<String>,
    pub salary: String,
    pub joining_date: String,
    pub emergency_contact: String,
}

impl FormValues<StaffField> for StaffForm {
    fn value(&self, field: StaffField) -> FieldValue<'_> {
        match field {
            StaffField::FullName => FieldValue::from(&self.full_name),
            StaffField::Email => FieldValue::from(&self.email),
            StaffField::Phone => FieldValue::from(&self.phone),
            StaffField::Role => FieldValue::from(&self.role),
            StaffField::Salary => FieldValue::from(&self.salary),
            StaffField::JoiningDate => FieldValue::from(&self.joining_date),
            StaffField::EmergencyContact => FieldValue::from(&self.emergency_contact),
        }
    }
}

impl Validate for StaffForm {
    type Field = StaffField;

    fn rules(&self) -> RuleSet<StaffField> {
        let differs_from_phone = Rule::<StaffField>::new(
            "Emergency contact must differ from the staff member's phone",
            |value, form| value.as_text().trim() != form.value(StaffField::Phone).as_text().trim(),
        );

        RuleSet::new()
            .field(
                StaffField::FullName,
                [
                    rules::required("Full name is required"),
                    rules::min_length(2, "Name must be at least 2 characters"),
                ],
            )
            .field(
                StaffField::Email,
                [
                    rules::required("Email is required"),
                    rules::email("Enter a valid email address"),
                ],
            )
            .field(
                StaffField::Phone,
                [
                    rules::required("Phone number is required"),
                    rules::pattern(&PHONE, "Phone number must be 10 digits"),
                ],
            )
            .field(
                StaffField::Role,
                [
                    rules::required("Select a role"),
                    rules::custom("Select a valid role", |value| {
                        is_one_of(&value.as_text(), STAFF_ROLES)
                    }),
                ],
            )
            .field(
                StaffField::Salary,
                [
                    rules::required("Salary is required"),
                    rules::pattern(&AMOUNT, "Enter a valid salary amount"),
                ],
            )
            .field(
                StaffField::JoiningDate,
                [
                    rules::required("Joining date is required"),
                    rules::custom("Enter a valid date", |value| {
                        parse_date(&value.as_text()).is_some()
                    }),
                ],
            )
            .field_if(
                !self.emergency_contact.trim().is_empty(),
                StaffField::EmergencyContact,
                [
                    rules::pattern(&PHONE, "Emergency contact must be 10 digits"),
                    differs_from_phone,
                ],
            )
    }
}

impl Editable for StaffForm {
    fn apply(&mut self, field: StaffField, input: FieldInput) {
        match field {
            StaffField::FullName => self.full_name = input.into_text(),
            StaffField::Email => self.email = input.into_text(),
            StaffField::Phone => self.phone = input.into_text(),
            StaffField::Role => self.role = input.into_choice(),
            StaffField::Salary => self.salary = input.into_text(),
            StaffField::JoiningDate => self.joining_date = input.into_text(),
            StaffField::EmergencyContact => self.emergency_contact = input.into_text(),
        }
    }
}

impl FormKind for StaffForm {
    const KIND: &'static str = "staff";
    const LABEL: &'static str = "Staff member";
}

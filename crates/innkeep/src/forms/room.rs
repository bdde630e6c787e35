// File: src/forms/room.rs
// Purpose: Room inventory form and room status

use std::fmt;

use innkeep_validation::string::is_one_of;
use innkeep_validation::{form_fields, rules, FieldValue, FormValues, RuleSet, Validate};
use serde::{Deserialize, Serialize};

use super::patterns::{AMOUNT, ROOM_NUMBER};
use super::{Editable, FieldInput, FormKind};

pub const ROOM_TYPES: &[&str] = &["single", "double", "deluxe", "suite"];

/// Housekeeping state shown on the room-status board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Cleaning,
    Maintenance,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 4] = [
        RoomStatus::Available,
        RoomStatus::Occupied,
        RoomStatus::Cleaning,
        RoomStatus::Maintenance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Cleaning => "cleaning",
            RoomStatus::Maintenance => "maintenance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value.trim())
    }

    /// Only available rooms can take a new booking
    pub fn is_bookable(self) -> bool {
        self == RoomStatus::Available
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

form_fields! {
    pub enum RoomField {
        RoomNumber => "roomNumber",
        RoomType => "roomType",
        Floor => "floor",
        BaseRate => "baseRate",
        Capacity => "capacity",
        Status => "status",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomForm {
    pub room_number: String,
    pub room_type: Option<String>,
    pub floor: String,
    pub base_rate: String,
    pub capacity: String,
    pub status: Option<String>,
}

impl FormValues<RoomField> for RoomForm {
    fn value(&self, field: RoomField) -> FieldValue<'_> {
        match field {
            RoomField::RoomNumber => FieldValue::from(&self.room_number),
            RoomField::RoomType => FieldValue::from(&self.room_type),
            RoomField::Floor => FieldValue::from(&self.floor),
            RoomField::BaseRate => FieldValue::from(&self.base_rate),
            RoomField::Capacity => FieldValue::from(&self.capacity),
            RoomField::Status => FieldValue::from(&self.status),
        }
    }
}

impl Validate for RoomForm {
    type Field = RoomField;

    fn rules(&self) -> RuleSet<RoomField> {
        RuleSet::new()
            .field(
                RoomField::RoomNumber,
                [
                    rules::required("Room number is required"),
                    rules::pattern(&ROOM_NUMBER, "Room number may only contain letters, digits and dashes"),
                ],
            )
            .field(
                RoomField::RoomType,
                [
                    rules::required("Select a room type"),
                    rules::custom("Select a valid room type", |value| {
                        is_one_of(&value.as_text(), ROOM_TYPES)
                    }),
                ],
            )
            .field(
                RoomField::Floor,
                [
                    rules::required("Floor is required"),
                    rules::min(0.0, "Floor cannot be negative"),
                    rules::max(200.0, "Floor must be 200 or lower"),
                ],
            )
            .field(
                RoomField::BaseRate,
                [
                    rules::required("Base rate is required"),
                    rules::pattern(&AMOUNT, "Enter a valid amount"),
                    rules::min(1.0, "Base rate must be greater than zero"),
                ],
            )
            .field(
                RoomField::Capacity,
                [
                    rules::required("Capacity is required"),
                    rules::range(1.0, 10.0, "Capacity must be between 1 and 10"),
                ],
            )
            .field(
                RoomField::Status,
                [rules::custom("Select a valid status", |value| {
                    value.is_blank() || RoomStatus::parse(&value.as_text()).is_some()
                })],
            )
    }
}

impl Editable for RoomForm {
    fn apply(&mut self, field: RoomField, input: FieldInput) {
        match field {
            RoomField::RoomNumber => self.room_number = input.into_text(),
            RoomField::RoomType => self.room_type = input.into_choice(),
            RoomField::Floor => self.floor = input.into_text(),
            RoomField::BaseRate => self.base_rate = input.into_text(),
            RoomField::Capacity => self.capacity = input.into_text(),
            RoomField::Status => self.status = input.into_choice(),
        }
    }
}

impl FormKind for RoomForm {
    const KIND: &'static str = "room";
    const LABEL: &'static str = "Room";
}

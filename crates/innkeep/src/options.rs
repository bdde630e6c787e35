// File: src/options.rs
// Purpose: Select-box option lists fetched by the host application

use innkeep_pricing::{RateCard, Season};
use serde::{Deserialize, Serialize};

use crate::forms::RoomStatus;

/// A room offered in the booking form's room selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOption {
    pub id: String,
    pub room_number: String,
    pub room_type: String,
    pub base_rate: f64,
    #[serde(default)]
    pub status: RoomStatus,
}

impl RoomOption {
    pub fn label(&self) -> String {
        format!("{} ({}) - {:.2}/night", self.room_number, self.room_type, self.base_rate)
    }
}

/// A guest offered in the booking form's guest selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

pub fn find_room<'a>(rooms: &'a [RoomOption], id: &str) -> Option<&'a RoomOption> {
    rooms.iter().find(|room| room.id == id)
}

/// Rates of the listed rooms, adjusted by `seasons`
pub fn rate_card(rooms: &[RoomOption], seasons: &[Season]) -> RateCard {
    rooms
        .iter()
        .map(|room| (room.id.clone(), room.base_rate))
        .collect::<RateCard>()
        .with_seasons(seasons.iter().cloned())
}

pub fn find_guest<'a>(guests: &'a [GuestOption], id: &str) -> Option<&'a GuestOption> {
    guests.iter().find(|guest| guest.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_options_from_json() {
        let rooms: Vec<RoomOption> = serde_json::from_str(
            r#"[
                {"id": "r1", "roomNumber": "101", "roomType": "deluxe", "baseRate": 2000},
                {"id": "r2", "roomNumber": "102", "roomType": "suite", "baseRate": 4500, "status": "occupied"}
            ]"#,
        )
        .unwrap();

        assert_eq!(find_room(&rooms, "r1").map(|r| r.status), Some(RoomStatus::Available));
        assert_eq!(find_room(&rooms, "r2").map(|r| r.status), Some(RoomStatus::Occupied));
        assert!(find_room(&rooms, "r3").is_none());
        assert_eq!(rooms[0].label(), "101 (deluxe) - 2000.00/night");
    }

    #[test]
    fn test_rate_card_from_rooms() {
        let rooms = vec![RoomOption {
            id: "r1".into(),
            room_number: "101".into(),
            room_type: "deluxe".into(),
            base_rate: 2000.0,
            status: RoomStatus::Available,
        }];
        let card = rate_card(&rooms, &[]);
        assert_eq!(card.base_rate("r1"), Some(2000.0));
        assert_eq!(card.base_rate("101"), None);
    }

    #[test]
    fn test_find_guest() {
        let guests = vec![GuestOption {
            id: "g1".into(),
            name: "Vikram Sethi".into(),
            phone: None,
        }];
        assert_eq!(find_guest(&guests, "g1").map(|g| g.name.as_str()), Some("Vikram Sethi"));
    }
}

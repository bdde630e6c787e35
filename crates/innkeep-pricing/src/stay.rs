//! Stay length

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Nights between two dates, never less than one
///
/// A same-day or reversed stay is charged as a single night.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    let days = (check_out - check_in).num_days();
    u32::try_from(days.max(1)).unwrap_or(u32::MAX)
}

/// Parse an ISO `YYYY-MM-DD` date as sent by date inputs
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Check-in and check-out dates of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Stay {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self { check_in, check_out }
    }

    /// Both dates parsed from form text; `None` if either is malformed
    pub fn parse(check_in: &str, check_out: &str) -> Option<Self> {
        Some(Self::new(parse_date(check_in)?, parse_date(check_out)?))
    }

    pub fn nights(&self) -> u32 {
        nights_between(self.check_in, self.check_out)
    }

    /// Check-out strictly after check-in
    pub fn is_ordered(&self) -> bool {
        self.check_out > self.check_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[rstest]
    #[case("2024-03-01", "2024-03-04", 3)]
    #[case("2024-03-01", "2024-03-02", 1)]
    #[case("2024-03-01", "2024-03-01", 1)]
    #[case("2024-03-05", "2024-03-01", 1)]
    #[case("2024-02-28", "2024-03-01", 2)]
    fn test_nights_between(#[case] check_in: &str, #[case] check_out: &str, #[case] nights: u32) {
        assert_eq!(nights_between(date(check_in), date(check_out)), nights);
    }

    #[test]
    fn test_stay_parse() {
        let stay = Stay::parse("2024-12-24", "2024-12-27").unwrap();
        assert_eq!(stay.nights(), 3);
        assert!(stay.is_ordered());
        assert!(Stay::parse("2024-12-24", "27/12/2024").is_none());
        assert!(!Stay::parse("2024-12-24", "2024-12-24").unwrap().is_ordered());
    }
}

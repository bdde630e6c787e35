//! Room rates and seasonal adjustments

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date range during which nightly rates are adjusted
///
/// A positive surcharge raises the rate (peak season), a negative one lowers
/// it (off season). Adjustments below -100% are treated as -100%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub name: String,
    pub start: NaiveDate,
    /// Inclusive
    pub end: NaiveDate,
    pub surcharge_percent: f64,
}

impl Season {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn apply(&self, rate: f64) -> f64 {
        let surcharge = if self.surcharge_percent.is_finite() {
            self.surcharge_percent.max(-100.0)
        } else {
            0.0
        };
        rate + rate * surcharge / 100.0
    }
}

/// Nightly rate for a stay starting on `check_in`; the first season that
/// contains the date wins.
pub fn seasonal_rate(base_rate: f64, seasons: &[Season], check_in: NaiveDate) -> f64 {
    match seasons.iter().find(|season| season.contains(check_in)) {
        Some(season) => {
            tracing::debug!(season = %season.name, base_rate, "seasonal rate applied");
            season.apply(base_rate)
        }
        None => base_rate,
    }
}

/// Room id -> base nightly rate, plus the seasons that adjust it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    #[serde(default)]
    rooms: BTreeMap<String, f64>,
    #[serde(default)]
    seasons: Vec<Season>,
}

impl RateCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_room(mut self, room: impl Into<String>, rate: f64) -> Self {
        self.rooms.insert(room.into(), rate);
        self
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.seasons.push(season);
        self
    }

    pub fn with_seasons(mut self, seasons: impl IntoIterator<Item = Season>) -> Self {
        self.seasons.extend(seasons);
        self
    }

    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    pub fn base_rate(&self, room: &str) -> Option<f64> {
        self.rooms.get(room).copied()
    }

    /// Seasonally adjusted rate; unknown rooms cost `0` so the summary can
    /// still render while the selection is incomplete.
    pub fn nightly_rate(&self, room: &str, check_in: Option<NaiveDate>) -> f64 {
        let Some(base) = self.base_rate(room) else {
            tracing::debug!(room, "no rate for room");
            return 0.0;
        };
        self.adjusted_rate(base, check_in)
    }

    /// Applies the card's seasons to a rate that did not come from a room
    pub fn adjusted_rate(&self, base_rate: f64, check_in: Option<NaiveDate>) -> f64 {
        match check_in {
            Some(date) => seasonal_rate(base_rate, &self.seasons, date),
            None => base_rate,
        }
    }
}

impl FromIterator<(String, f64)> for RateCard {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            rooms: iter.into_iter().collect(),
            seasons: Vec::new(),
        }
    }
}

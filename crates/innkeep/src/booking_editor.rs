// File: src/booking_editor.rs
// Purpose: Booking form with a live price summary

use innkeep_pricing::{DiscountTable, PricingResult, RateCard, Season};
use innkeep_validation::ValidationErrors;
use serde::Serialize;

use crate::config::PricingConfig;
use crate::form_state::FormState;
use crate::forms::{BookingField, BookingForm, FieldInput};
use crate::options::{find_guest, find_room, rate_card, GuestOption, RoomOption};

/// A validated booking together with the price it was quoted at
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub booking: BookingForm,
    pub pricing: PricingResult,
}

/// Booking form state plus the data its price summary depends on
///
/// The quote is recomputed only when a field that feeds it changes.
#[derive(Debug, Clone)]
pub struct BookingEditor {
    state: FormState<BookingForm>,
    rooms: Vec<RoomOption>,
    guests: Vec<GuestOption>,
    discounts: DiscountTable,
    seasons: Vec<Season>,
    rates: RateCard,
    quote: PricingResult,
}

impl BookingEditor {
    /// Start editing `form`; a blank tax rate is prefilled from config
    pub fn new(
        mut form: BookingForm,
        rooms: Vec<RoomOption>,
        guests: Vec<GuestOption>,
        pricing: &PricingConfig,
    ) -> Self {
        if form.tax_rate.trim().is_empty() {
            form.tax_rate = pricing.default_tax_rate.to_string();
        }

        let discounts = pricing.discount_codes.clone();
        let seasons = pricing.seasons.clone();
        let rates = rate_card(&rooms, &seasons);
        let quote = form.quote_request(&rates).quote(&discounts);

        Self {
            state: FormState::new(form),
            rooms,
            guests,
            discounts,
            seasons,
            rates,
            quote,
        }
    }

    pub fn state(&self) -> &FormState<BookingForm> {
        &self.state
    }

    pub fn form(&self) -> &BookingForm {
        self.state.data()
    }

    /// Write one field; the quote follows pricing fields
    pub fn set(&mut self, field: BookingField, input: impl Into<FieldInput>) {
        self.state.set(field, input);
        if field.affects_pricing() {
            self.recompute();
        }
    }

    pub fn blur(&mut self, field: BookingField) {
        self.state.blur(field);
    }

    /// Latest price summary, unrounded
    pub fn quote(&self) -> &PricingResult {
        &self.quote
    }

    pub fn selected_room(&self) -> Option<&RoomOption> {
        let id = self.form().room_id.as_deref()?;
        find_room(&self.rooms, id)
    }

    pub fn selected_guest(&self) -> Option<&GuestOption> {
        let id = self.form().guest_id.as_deref()?;
        find_guest(&self.guests, id)
    }

    /// Rooms that can take a new booking
    pub fn available_rooms(&self) -> impl Iterator<Item = &RoomOption> + '_ {
        self.rooms.iter().filter(|room| room.status.is_bookable())
    }

    pub fn guests(&self) -> &[GuestOption] {
        &self.guests
    }

    /// Swap in a freshly fetched room list
    pub fn replace_rooms(&mut self, rooms: Vec<RoomOption>) {
        self.rates = rate_card(&rooms, &self.seasons);
        self.rooms = rooms;
        self.recompute();
    }

    /// Validate and hand out the booking with its final quote
    pub fn submit(&mut self) -> Result<BookingSubmission, ValidationErrors<BookingField>> {
        let booking = self.state.submit()?.clone();
        self.recompute();
        Ok(BookingSubmission {
            booking,
            pricing: self.quote,
        })
    }

    fn recompute(&mut self) {
        let request = self.form().quote_request(&self.rates);
        self.quote = request.quote(&self.discounts);
        tracing::debug!(
            nights = self.quote.nights,
            subtotal = self.quote.subtotal,
            total = self.quote.total,
            "booking quote recomputed"
        );
    }
}

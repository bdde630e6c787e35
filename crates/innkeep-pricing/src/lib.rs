//! # innkeep-pricing
//!
//! Live booking summary arithmetic: how many nights, what the room costs per
//! night (room rate, seasonal adjustment or a manual override), and the
//! discount, tax and total derived from it.
//!
//! The calculator never fails. Malformed numbers are treated as `0` because
//! it feeds a summary that is recomputed on every keystroke; the amounts that
//! are finally committed go through form validation first.
//!
//! ```rust
//! use innkeep_pricing::{compute_pricing, PricingInput};
//!
//! let result = compute_pricing(&PricingInput {
//!     base_rate: 2000.0,
//!     nights: 3,
//!     tax_rate_percent: 18.0,
//!     discount_percent: 0.0,
//!     override_price: None,
//! });
//!
//! assert_eq!(result.subtotal, 6000.0);
//! assert_eq!(result.tax, 1080.0);
//! assert_eq!(result.total, 7080.0);
//! ```

pub mod calculator;
pub mod coerce;
pub mod discount;
pub mod money;
pub mod quote;
pub mod rates;
pub mod stay;

pub use calculator::{compute_pricing, PricingInput, PricingResult};
pub use coerce::{coerce_amount, coerce_percent};
pub use discount::{DiscountPercent, DiscountTable};
pub use money::{round2, Money};
pub use quote::QuoteRequest;
pub use rates::{RateCard, Season};
pub use stay::{nights_between, parse_date, Stay};

// File: src/forms/patterns.rs
// Purpose: Regular expressions shared by the form rule sets

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(expr: &str) -> Regex {
    Regex::new(expr).unwrap_or_else(|e| panic!("invalid built-in pattern {expr}: {e}"))
}

/// 10-digit mobile number
pub static PHONE: Lazy<Regex> = Lazy::new(|| compile(r"^\d{10}$"));

/// 6-digit PIN code
pub static POSTAL_CODE: Lazy<Regex> = Lazy::new(|| compile(r"^\d{6}$"));

/// Registration plate, e.g. `MH12AB1234` or `KA 05 MN 4321`
pub static VEHICLE_NUMBER: Lazy<Regex> =
    Lazy::new(|| compile(r"^[A-Z]{2}[ -]?\d{1,2}[ -]?[A-Z]{1,3}[ -]?\d{4}$"));

/// 12-digit Aadhaar number
pub static AADHAAR: Lazy<Regex> = Lazy::new(|| compile(r"^\d{12}$"));

pub static PASSPORT: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Z][0-9]{7}$"));

pub static PAN: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Z]{5}\d{4}[A-Z]$"));

/// 15-character GSTIN: state code, PAN, entity number, `Z`, checksum
pub static GSTIN: Lazy<Regex> =
    Lazy::new(|| compile(r"^\d{2}[A-Z]{5}\d{4}[A-Z][1-9A-Z]Z[0-9A-Z]$"));

/// Positive amount with at most two decimals
pub static AMOUNT: Lazy<Regex> = Lazy::new(|| compile(r"^\d+(\.\d{1,2})?$"));

pub static ROOM_NUMBER: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z0-9-]{1,6}$"));

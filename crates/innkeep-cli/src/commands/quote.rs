use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;
use innkeep::config::PricingConfig;
use innkeep::options::rate_card;
use innkeep::RoomOption;
use innkeep_pricing::{parse_date, Money, PricingResult, QuoteRequest, RateCard, Stay};
use thiserror::Error;

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Nightly base rate
    #[arg(long, conflicts_with = "room")]
    pub rate: Option<f64>,

    /// Room id to look up in the rooms file
    #[arg(long, requires = "rooms")]
    pub room: Option<String>,

    /// JSON file with the room list
    #[arg(long)]
    pub rooms: Option<PathBuf>,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long)]
    pub check_in: Option<String>,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long)]
    pub check_out: Option<String>,

    /// Tax rate in percent; defaults to the configured rate
    #[arg(long)]
    pub tax: Option<String>,

    /// Discount code
    #[arg(long, default_value = "")]
    pub code: String,

    /// Manual nightly rate replacing the room rate
    #[arg(long = "override")]
    pub override_price: Option<String>,

    /// Print the breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("invalid {field} date {value:?}, expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("check-out {check_out} is not after check-in {check_in}")]
    Unordered {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("room {0:?} is not in the rooms file")]
    UnknownRoom(String),
}

fn date_arg(field: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>, QuoteError> {
    match value {
        None => Ok(None),
        Some(raw) => parse_date(raw).map(Some).ok_or_else(|| QuoteError::InvalidDate {
            field,
            value: raw.to_string(),
        }),
    }
}

fn stay_from(check_in: Option<&str>, check_out: Option<&str>) -> Result<Option<Stay>, QuoteError> {
    let check_in = date_arg("check-in", check_in)?;
    let check_out = date_arg("check-out", check_out)?;
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => {
            let stay = Stay::new(check_in, check_out);
            if stay.check_out < stay.check_in {
                return Err(QuoteError::Unordered {
                    check_in,
                    check_out,
                });
            }
            Ok(Some(stay))
        }
        _ => Ok(None),
    }
}

fn load_rooms(path: &Path) -> Result<Vec<RoomOption>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rooms file: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse rooms file: {:?}", path))
}

/// Seasonally adjusted nightly rate of `--room`, or of `--rate` without one
fn nightly_rate(args: &QuoteArgs, rates: &RateCard, check_in: Option<NaiveDate>) -> Result<f64> {
    match &args.room {
        Some(room) => {
            if rates.base_rate(room).is_none() {
                return Err(QuoteError::UnknownRoom(room.clone()).into());
            }
            Ok(rates.nightly_rate(room, check_in))
        }
        None => Ok(rates.adjusted_rate(args.rate.unwrap_or(0.0), check_in)),
    }
}

fn build_request(args: &QuoteArgs, pricing: &PricingConfig) -> Result<QuoteRequest> {
    let stay = stay_from(args.check_in.as_deref(), args.check_out.as_deref())?;
    let rooms = match &args.rooms {
        Some(path) => load_rooms(path)?,
        None => Vec::new(),
    };
    let rates = rate_card(&rooms, &pricing.seasons);
    let base_rate = nightly_rate(args, &rates, stay.map(|s| s.check_in))?;

    Ok(QuoteRequest {
        base_rate,
        stay,
        tax_rate: args
            .tax
            .clone()
            .unwrap_or_else(|| pricing.default_tax_rate.to_string()),
        discount_code: args.code.clone(),
        override_enabled: args.override_price.is_some(),
        override_price: args.override_price.clone().unwrap_or_default(),
    })
}

fn print_breakdown(result: &PricingResult, symbol: &str) {
    let line = |label: &str, amount: f64| {
        println!("  {:<10} {:>14}", label, Money::new(amount).with_symbol(symbol));
    };

    println!("{}", "Booking summary".green().bold());
    println!();
    println!("  {:<10} {:>14}", "Nights", result.nights);
    line("Subtotal", result.subtotal);
    if result.discount > 0.0 {
        line("Discount", -result.discount);
    }
    line("Tax", result.tax);
    println!("  {}", "-".repeat(25).dimmed());
    println!(
        "  {:<10} {:>14}",
        "Total".bold(),
        Money::new(result.total).with_symbol(symbol).cyan().bold()
    );
}

pub fn execute(args: &QuoteArgs, pricing: &PricingConfig) -> Result<()> {
    let request = build_request(args, pricing)?;
    tracing::debug!(?request, "quote request");

    let result = request.quote(&pricing.discount_codes).rounded();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_breakdown(&result, &pricing.currency_symbol);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args() -> QuoteArgs {
        QuoteArgs {
            rate: Some(2000.0),
            room: None,
            rooms: None,
            check_in: Some("2024-05-10".into()),
            check_out: Some("2024-05-13".into()),
            tax: None,
            code: String::new(),
            override_price: None,
            json: true,
        }
    }

    #[test]
    fn test_request_uses_configured_tax() {
        let request = build_request(&args(), &PricingConfig::default()).unwrap();
        assert_eq!(request.tax_rate, "18");
        let result = request.quote(&PricingConfig::default().discount_codes);
        assert_eq!(result.total, 7080.0);
    }

    #[test]
    fn test_override_flag_enables_override() {
        let args = QuoteArgs {
            override_price: Some("1500".into()),
            ..args()
        };
        let request = build_request(&args, &PricingConfig::default()).unwrap();
        assert!(request.override_enabled);
        assert_eq!(request.quote(&PricingConfig::default().discount_codes).subtotal, 4500.0);
    }

    #[test]
    fn test_blank_override_uses_rate() {
        let args = QuoteArgs {
            override_price: Some(String::new()),
            ..args()
        };
        let request = build_request(&args, &PricingConfig::default()).unwrap();
        assert!(request.override_enabled);
        assert_eq!(request.quote(&PricingConfig::default().discount_codes).subtotal, 6000.0);
    }

    #[test]
    fn test_room_rate_from_card() {
        let rates = RateCard::new().with_room("r101", 2000.0);
        let args = QuoteArgs {
            rate: None,
            room: Some("r101".into()),
            ..args()
        };
        assert_eq!(nightly_rate(&args, &rates, None).unwrap(), 2000.0);

        let missing = QuoteArgs {
            room: Some("r999".into()),
            ..args
        };
        let err = nightly_rate(&missing, &rates, None).unwrap_err();
        assert_eq!(
            err.downcast_ref::<QuoteError>(),
            Some(&QuoteError::UnknownRoom("r999".into()))
        );
    }

    #[test]
    fn test_bad_dates() {
        assert_eq!(
            stay_from(Some("10/05/2024"), None),
            Err(QuoteError::InvalidDate {
                field: "check-in",
                value: "10/05/2024".into()
            })
        );
        assert!(matches!(
            stay_from(Some("2024-05-13"), Some("2024-05-10")),
            Err(QuoteError::Unordered { .. })
        ));
        assert_eq!(stay_from(Some("2024-05-10"), None), Ok(None));
    }
}

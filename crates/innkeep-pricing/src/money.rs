//! Display rounding

use std::fmt;

use serde::{Deserialize, Serialize};

/// Round to 2 decimal places, halves away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// An amount formatted with two decimals and an optional currency symbol
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn amount(self) -> f64 {
        self.0
    }

    pub fn with_symbol(self, symbol: &str) -> String {
        format!("{}{}", symbol, self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", round2(self.0))
    }
}

impl From<f64> for Money {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(370.368), 370.37);
        assert_eq!(round2(6372.0), 6372.0);
        assert_eq!(round2(0.004), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(7080.0).to_string(), "7080.00");
        assert_eq!(Money::new(972.456).to_string(), "972.46");
        assert_eq!(Money::new(1080.0).with_symbol("₹"), "₹1080.00");
    }
}

//! Discount codes

use std::collections::BTreeMap;

use nutype::nutype;
use serde::{Deserialize, Serialize};

/// A discount percentage between 0 and 100
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 100.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Serialize, Deserialize)
)]
pub struct DiscountPercent(f64);

/// Code -> percentage lookup
///
/// Codes are matched case-insensitively after trimming. Unknown codes are not
/// an error; they simply give no discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, DiscountPercent>",
    into = "BTreeMap<String, DiscountPercent>"
)]
pub struct DiscountTable {
    codes: BTreeMap<String, f64>,
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

impl DiscountTable {
    /// A table with no codes
    pub fn empty() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    pub fn with_code(mut self, code: &str, percent: DiscountPercent) -> Self {
        self.insert(code, percent);
        self
    }

    pub fn insert(&mut self, code: &str, percent: DiscountPercent) {
        self.codes.insert(normalize(code), percent.into_inner());
    }

    /// Percentage for a code; blank and unknown codes give `0`
    pub fn percent_for(&self, code: &str) -> f64 {
        let code = normalize(code);
        if code.is_empty() {
            return 0.0;
        }
        match self.codes.get(&code) {
            Some(percent) => *percent,
            None => {
                tracing::warn!(code = %code, "unknown discount code");
                0.0
            }
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains_key(&normalize(code))
    }

    pub fn codes(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.codes.iter().map(|(code, percent)| (code.as_str(), *percent))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// The two promotional codes the front desk has always offered
impl Default for DiscountTable {
    fn default() -> Self {
        let mut codes = BTreeMap::new();
        codes.insert("WELCOME10".to_string(), 10.0);
        codes.insert("SAVE20".to_string(), 20.0);
        Self { codes }
    }
}

impl From<BTreeMap<String, DiscountPercent>> for DiscountTable {
    fn from(map: BTreeMap<String, DiscountPercent>) -> Self {
        map.into_iter()
            .fold(Self::empty(), |table, (code, percent)| table.with_code(&code, percent))
    }
}

impl From<DiscountTable> for BTreeMap<String, DiscountPercent> {
    fn from(table: DiscountTable) -> Self {
        table
            .codes
            .into_iter()
            .filter_map(|(code, percent)| {
                DiscountPercent::try_new(percent).ok().map(|p| (code, p))
            })
            .collect()
    }
}

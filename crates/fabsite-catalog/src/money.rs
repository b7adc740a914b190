//! Money type for representing prices.
//!
//! Amounts are integers in the smallest unit of the currency. Catalog
//! markup carries whole-unit prices, so the catalog uses [`Currency::RUB`]
//! with zero decimal places by default.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    RUB,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "RUB").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RUB => "\u{20bd}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Number of decimal places in the stored amount.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::RUB => 0,
            _ => 2,
        }
    }

    /// Whether the symbol follows the amount ("1 000 ₽").
    fn symbol_after(&self) -> bool {
        matches!(self, Currency::RUB)
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "RUB" => Some(Currency::RUB),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from the smallest unit.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Amount formatted with space-grouped thousands, no symbol
    /// (e.g., "1 250 000" or "49.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_i64.pow(places);
        let whole = (self.amount_cents / divisor).unsigned_abs();
        let frac = (self.amount_cents % divisor).unsigned_abs();

        let mut out = String::new();
        if self.amount_cents < 0 {
            out.push('-');
        }
        out.push_str(&group_thousands(whole));
        if places > 0 {
            out.push_str(&format!(".{:0width$}", frac, width = places as usize));
        }
        out
    }

    /// Format as a display string (e.g., "1 250 000 ₽", "$49.99").
    pub fn display(&self) -> String {
        if self.currency.symbol_after() {
            format!("{} {}", self.display_amount(), self.currency.symbol())
        } else {
            format!("{}{}", self.currency.symbol(), self.display_amount())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

//! Currency codes and pair selection

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The closed set of currencies the rate table knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Aud,
    Chf,
    Cny,
    Inr,
    Krw,
}

impl Currency {
    pub const ALL: [Currency; 10] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Cad,
        Currency::Aud,
        Currency::Chf,
        Currency::Cny,
        Currency::Inr,
        Currency::Krw,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Chf => "CHF",
            Currency::Cny => "CNY",
            Currency::Inr => "INR",
            Currency::Krw => "KRW",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "JPY" => Ok(Currency::Jpy),
            "CAD" => Ok(Currency::Cad),
            "AUD" => Ok(Currency::Aud),
            "CHF" => Ok(Currency::Chf),
            "CNY" => Ok(Currency::Cny),
            "INR" => Ok(Currency::Inr),
            "KRW" => Ok(Currency::Krw),
            _ => Err(anyhow::anyhow!(
                "Unknown currency code: {s} (expected one of USD, EUR, GBP, JPY, CAD, AUD, CHF, CNY, INR, KRW)"
            )),
        }
    }
}

/// An ordered source/target selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyPair {
    pub from: Currency,
    pub to: Currency,
}

impl CurrencyPair {
    pub fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }

    /// Exchanges source and target.
    pub fn swapped(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

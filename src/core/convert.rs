//! Conversion validation, computation, and the history-recording service

use crate::core::currency::Currency;
use crate::core::history::{ConversionRecord, HistoryLog};
use crate::core::rates::RateProvider;
use thiserror::Error;

/// Why a conversion request was rejected. All variants are user-correctable;
/// none of them is fatal to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("enter a valid amount greater than zero")]
    InvalidAmount,
    #[error("select two different currencies")]
    SameCurrency,
    #[error("conversion rate not available for {from} to {to}")]
    RateUnavailable { from: Currency, to: Currency },
}

/// A successful conversion, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub from: Currency,
    pub to: Currency,
    pub rate: f64,
    /// `amount * rate`, rounded to 2 decimal places.
    pub result: f64,
}

impl Conversion {
    /// "73.00 GBP"
    pub fn result_line(&self) -> String {
        format!("{:.2} {}", self.result, self.to)
    }

    /// "1 USD = 0.7300 GBP"
    pub fn rate_line(&self) -> String {
        format!("1 {} = {:.4} {}", self.from, self.rate, self.to)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Validates a request and computes the converted amount.
///
/// Validation order is fixed: amount first, then pair distinctness, then
/// rate availability.
pub fn convert(
    amount: f64,
    from: Currency,
    to: Currency,
    rates: &dyn RateProvider,
) -> Result<Conversion, ConvertError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ConvertError::InvalidAmount);
    }
    if from == to {
        return Err(ConvertError::SameCurrency);
    }
    let rate = rates
        .rate(from, to)
        .ok_or(ConvertError::RateUnavailable { from, to })?;

    Ok(Conversion {
        amount,
        from,
        to,
        rate,
        result: round2(amount * rate),
    })
}

/// Conversion entry point that owns the history log: every successful
/// conversion is appended and persisted, failed ones leave it untouched.
pub struct ConversionService {
    rates: Box<dyn RateProvider>,
    history: HistoryLog,
}

impl ConversionService {
    pub fn new(rates: Box<dyn RateProvider>, history: HistoryLog) -> Self {
        Self { rates, history }
    }

    pub fn convert(&mut self, amount: f64, from: Currency, to: Currency) -> Result<Conversion, ConvertError> {
        let conversion = convert(amount, from, to, self.rates.as_ref())?;
        self.history.append(ConversionRecord::of(&conversion));
        Ok(conversion)
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }
}

//! The built-in exchange rate table

use crate::core::currency::Currency;
use crate::core::rates::RateProvider;
use std::collections::HashMap;

use crate::core::currency::Currency::*;

// Hand-authored snapshot data. The table is intentionally not symmetric:
// rate(A, B) * rate(B, A) need not equal 1. Values must be kept exactly as
// authored, not corrected for consistency.
#[rustfmt::skip]
const RATES: [(Currency, Currency, f64); 90] = [
    (Usd, Eur, 0.85), (Usd, Gbp, 0.73), (Usd, Jpy, 110.0), (Usd, Cad, 1.25), (Usd, Aud, 1.35), (Usd, Chf, 0.92), (Usd, Cny, 6.45), (Usd, Inr, 74.5), (Usd, Krw, 1180.0),
    (Eur, Usd, 1.18), (Eur, Gbp, 0.86), (Eur, Jpy, 129.5), (Eur, Cad, 1.47), (Eur, Aud, 1.59), (Eur, Chf, 1.08), (Eur, Cny, 7.59), (Eur, Inr, 87.8), (Eur, Krw, 1391.0),
    (Gbp, Usd, 1.37), (Gbp, Eur, 1.16), (Gbp, Jpy, 150.5), (Gbp, Cad, 1.71), (Gbp, Aud, 1.85), (Gbp, Chf, 1.26), (Gbp, Cny, 8.83), (Gbp, Inr, 102.1), (Gbp, Krw, 1616.0),
    (Jpy, Usd, 0.009), (Jpy, Eur, 0.0077), (Jpy, Gbp, 0.0066), (Jpy, Cad, 0.011), (Jpy, Aud, 0.012), (Jpy, Chf, 0.008), (Jpy, Cny, 0.059), (Jpy, Inr, 0.68), (Jpy, Krw, 10.7),
    (Cad, Usd, 0.80), (Cad, Eur, 0.68), (Cad, Gbp, 0.58), (Cad, Jpy, 88.0), (Cad, Aud, 1.08), (Cad, Chf, 0.74), (Cad, Cny, 5.16), (Cad, Inr, 59.6), (Cad, Krw, 944.0),
    (Aud, Usd, 0.74), (Aud, Eur, 0.63), (Aud, Gbp, 0.54), (Aud, Jpy, 81.5), (Aud, Cad, 0.93), (Aud, Chf, 0.68), (Aud, Cny, 4.78), (Aud, Inr, 55.2), (Aud, Krw, 874.0),
    (Chf, Usd, 1.09), (Chf, Eur, 0.93), (Chf, Gbp, 0.79), (Chf, Jpy, 119.5), (Chf, Cad, 1.36), (Chf, Aud, 1.47), (Chf, Cny, 7.03), (Chf, Inr, 81.2), (Chf, Krw, 1283.0),
    (Cny, Usd, 0.15), (Cny, Eur, 0.13), (Cny, Gbp, 0.11), (Cny, Jpy, 17.0), (Cny, Cad, 0.19), (Cny, Aud, 0.21), (Cny, Chf, 0.14), (Cny, Inr, 11.6), (Cny, Krw, 182.5),
    (Inr, Usd, 0.013), (Inr, Eur, 0.011), (Inr, Gbp, 0.0098), (Inr, Jpy, 1.47), (Inr, Cad, 0.017), (Inr, Aud, 0.018), (Inr, Chf, 0.012), (Inr, Cny, 0.086), (Inr, Krw, 15.8),
    (Krw, Usd, 0.00085), (Krw, Eur, 0.00072), (Krw, Gbp, 0.00062), (Krw, Jpy, 0.093), (Krw, Cad, 0.0011), (Krw, Aud, 0.0011), (Krw, Chf, 0.00078), (Krw, Cny, 0.0055), (Krw, Inr, 0.063),
];

pub struct StaticRateProvider {
    rates: HashMap<(Currency, Currency), f64>,
}

impl StaticRateProvider {
    pub fn new() -> Self {
        Self {
            rates: RATES.iter().map(|&(from, to, rate)| ((from, to), rate)).collect(),
        }
    }
}

impl Default for StaticRateProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RateProvider for StaticRateProvider {
    fn rate(&self, from: Currency, to: Currency) -> Option<f64> {
        self.rates.get(&(from, to)).copied()
    }
}

//! Exchange rate lookup abstractions

use crate::core::currency::Currency;

/// Source of multiplicative conversion factors between currency pairs.
///
/// Returns `None` when no direct entry exists for the pair. There is no
/// inversion fallback: a populated B->A entry does not make A->B available.
pub trait RateProvider: Send + Sync {
    fn rate(&self, from: Currency, to: Currency) -> Option<f64>;
}

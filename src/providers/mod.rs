pub mod static_rates;

pub use static_rates::StaticRateProvider;

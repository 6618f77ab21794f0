use super::ui;
use crate::core::convert::ConversionService;
use crate::core::currency::CurrencyPair;
use anyhow::Result;

/// Runs one conversion and prints the result or a transient error.
///
/// A rejected conversion is a user-correctable outcome, not a process
/// failure; the command still exits cleanly.
pub fn run(service: &mut ConversionService, amount: f64, pair: CurrencyPair) -> Result<()> {
    match service.convert(amount, pair.from, pair.to) {
        Ok(conversion) => {
            println!(
                "{}",
                ui::style_text(&conversion.result_line(), ui::StyleType::ResultValue)
            );
            println!(
                "{}",
                ui::style_text(&conversion.rate_line(), ui::StyleType::Subtle)
            );
        }
        Err(e) => ui::show_transient_error(&e.to_string()),
    }

    Ok(())
}

pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::convert::ConversionService;
use crate::core::currency::{Currency, CurrencyPair};
use crate::core::history::HistoryLog;
use crate::core::theme::Theme;
use crate::providers::StaticRateProvider;
use crate::store::{StateStore, disk::DiskStore, memory::MemoryStore};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A discrete user action, decoupled from the clap surface.
pub enum AppCommand {
    Convert {
        amount: Option<f64>,
        from: Option<Currency>,
        to: Option<Currency>,
        swap: bool,
    },
    History,
    ClearHistory,
    Theme(Option<Theme>),
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let store = open_store(&config);

    match command {
        AppCommand::Convert {
            amount,
            from,
            to,
            swap,
        } => {
            let amount = amount.unwrap_or(config.defaults.amount);
            let from = match from {
                Some(currency) => currency,
                None => config
                    .defaults
                    .from
                    .parse()
                    .context("Invalid default source currency in config")?,
            };
            let to = match to {
                Some(currency) => currency,
                None => config
                    .defaults
                    .to
                    .parse()
                    .context("Invalid default target currency in config")?,
            };

            let mut pair = CurrencyPair::new(from, to);
            if swap {
                pair = pair.swapped();
            }

            let history = HistoryLog::load(Arc::clone(&store));
            let mut service = ConversionService::new(Box::new(StaticRateProvider::new()), history);
            cli::convert::run(&mut service, amount, pair)
        }
        AppCommand::History => {
            let theme = Theme::load(store.as_ref());
            let history = HistoryLog::load(store);
            cli::history::run(&history, theme)
        }
        AppCommand::ClearHistory => {
            let mut history = HistoryLog::load(store);
            cli::history::clear(&mut history)
        }
        AppCommand::Theme(requested) => cli::theme::run(store.as_ref(), requested),
    }
}

/// Opens the on-disk state store, falling back to an in-memory one when
/// that fails. The tool stays usable either way; history just does not
/// outlive the process without a disk store.
fn open_store(config: &AppConfig) -> Arc<dyn StateStore> {
    let disk = config
        .default_data_path()
        .and_then(|path| DiskStore::open(&path.join("state")));

    match disk {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!(error = %e, "Falling back to in-memory state store");
            Arc::new(MemoryStore::new())
        }
    }
}

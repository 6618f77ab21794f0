use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxc::core::currency::Currency;
use fxc::core::log::init_logging;
use fxc::core::theme::Theme;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxc::AppCommand {
    fn from(cmd: Commands) -> fxc::AppCommand {
        match cmd {
            Commands::Convert {
                amount,
                from,
                to,
                swap,
            } => fxc::AppCommand::Convert {
                amount,
                from,
                to,
                swap,
            },
            Commands::History => fxc::AppCommand::History,
            Commands::Clear => fxc::AppCommand::ClearHistory,
            Commands::Theme { theme } => fxc::AppCommand::Theme(theme),
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert (config default when omitted)
        amount: Option<f64>,
        /// Source currency code, e.g. USD
        #[arg(value_parser = parse_currency)]
        from: Option<Currency>,
        /// Target currency code, e.g. EUR
        #[arg(value_parser = parse_currency)]
        to: Option<Currency>,
        /// Exchange the selected currencies before converting
        #[arg(short, long)]
        swap: bool,
    },
    /// Show recent conversions
    History,
    /// Clear the conversion history
    Clear,
    /// Set the display theme, or toggle it when no value is given
    Theme {
        #[arg(value_parser = parse_theme)]
        theme: Option<Theme>,
    },
    /// Create default configuration
    Setup,
}

fn parse_currency(s: &str) -> Result<Currency, String> {
    s.parse().map_err(|e: anyhow::Error| e.to_string())
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    s.parse().map_err(|e: anyhow::Error| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxc::cli::setup::setup(),
        Some(cmd) => fxc::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

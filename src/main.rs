//! mealfinder CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use mealfinder::cli::{Cli, CommandDispatcher};
use mealfinder::config::load_config;
use mealfinder::ui::MenuTheme;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("mealfinder=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mealfinder=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("mealfinder starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", MenuTheme::auto().format_error(&format!("Error: {}", e)));
            return ExitCode::from(2);
        }
    };

    let dispatcher = CommandDispatcher::new(config, cli.quiet);

    match dispatcher.dispatch(&cli) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("{}", MenuTheme::auto().format_error(&format!("Error: {}", e)));
            ExitCode::from(1)
        }
    }
}

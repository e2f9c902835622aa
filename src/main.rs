//! funcsync CLI - redeploy Cloud Functions whose source moved ahead
//!
//! Usage: funcsync [COMMAND]
//!
//! Commands:
//!   run        Reconcile and redeploy stale instances (default)
//!   plan       Show decisions without dispatching
//!   inventory  List deployed functions and regions

mod commands;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use funcsync::presentation::{Cli, Commands};

use crate::commands::run::PollFlags;
use crate::ui::context::UiContext;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ui = UiContext::new(cli.json, cli.color);
    let config = commands::load_config(&cli, &ui)?;

    let code = match cli.subcommand() {
        Commands::Run {
            poll_interval,
            poll_timeout,
        } => commands::run::cmd_run(
            &config,
            &ui,
            false,
            PollFlags {
                interval: poll_interval,
                timeout: poll_timeout,
            },
        )?,
        Commands::Plan => commands::run::cmd_run(&config, &ui, true, PollFlags::default())?,
        Commands::Inventory => commands::inventory::cmd_inventory(&config, &ui)?,
    };

    Ok(ExitCode::from(code))
}

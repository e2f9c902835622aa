//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose, --project, ...) are inherited by
//! all subcommands. Running without a subcommand is the same as `run`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// funcsync - redeploy source-repository Cloud Functions that fell behind their branch
#[derive(Parser, Debug)]
#[command(name = "funcsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./funcsync.toml, then ~/.config/funcsync/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Platform project (overrides branch-based selection)
    #[arg(long, global = true)]
    pub project: Option<String>,

    /// Branch used to select the project from [environments]
    #[arg(long, global = true)]
    pub branch: Option<String>,

    /// Current revision (default: git HEAD)
    #[arg(long, global = true)]
    pub revision: Option<String>,

    /// Directory holding one sub-directory per managed function
    #[arg(long, global = true, value_name = "DIR")]
    pub functions_dir: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Reconcile every managed function and redeploy stale instances
    Run {
        /// Seconds between operation status checks
        #[arg(long, value_name = "SECS")]
        poll_interval: Option<u64>,

        /// Give up on an operation after this many seconds (0 = wait forever)
        #[arg(long, value_name = "SECS")]
        poll_timeout: Option<u64>,
    },

    /// Show what a run would redeploy, without dispatching anything
    Plan,

    /// List deployed functions and their regions
    Inventory,
}

impl Cli {
    /// Subcommand to execute, `run` when none was given
    pub fn subcommand(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run {
            poll_interval: None,
            poll_timeout: None,
        })
    }
}

//! Subcommand implementations and the setup they share

pub mod inventory;
pub mod run;

use std::path::Path;

use anyhow::{bail, Context, Result};

use funcsync::application::select_project;
use funcsync::config::{self, Config};
use funcsync::domain::ports::ReconcileEventSink;
use funcsync::infrastructure::gcloud::GcloudPlatform;
use funcsync::infrastructure::{ConsoleEventSink, GitHistory, JsonEventSink};
use funcsync::presentation::theme::Icon;
use funcsync::presentation::Cli;

use crate::ui::context::UiContext;

/// Load layered config and fold CLI flags on top
pub fn load_config(cli: &Cli, ui: &UiContext) -> Result<Config> {
    let working_dir = std::env::current_dir().context("cannot read working directory")?;
    let loaded = config::load_layered(cli.config.as_deref(), &working_dir)?;

    let style = ui.style();
    for warning in &loaded.warnings {
        eprintln!("{} {}", style.icon(Icon::Warning), warning);
    }

    let mut config = loaded.config;
    if let Some(project) = &cli.project {
        config.project = Some(project.clone());
    }
    if let Some(branch) = &cli.branch {
        config.branch = Some(branch.clone());
    }
    if let Some(revision) = &cli.revision {
        config.revision = Some(revision.clone());
    }
    if let Some(dir) = &cli.functions_dir {
        config.functions_dir = dir.clone();
    }
    Ok(config)
}

/// Project for this run: explicit, then branch mapping, then default
pub fn resolve_project(config: &Config) -> Result<String> {
    let branch = match &config.branch {
        Some(branch) => Some(branch.clone()),
        None => GitHistory::new(&config.repository_root)
            .current_branch()
            .unwrap_or_else(|e| {
                tracing::debug!(error = %e, "cannot determine current branch");
                None
            }),
    };

    let project = select_project(
        config.project.as_deref(),
        branch.as_deref(),
        &config.environments,
        config.default_project.as_deref(),
    )?;
    tracing::info!(project = %project, branch = ?branch, "selected project");
    Ok(project)
}

/// Check gcloud is runnable and activate the configured service-account key
pub fn prepare_platform(platform: &GcloudPlatform, key_file: Option<&Path>) -> Result<()> {
    if !platform.cli().check_available() {
        bail!("gcloud CLI not found or not runnable; install the Google Cloud SDK");
    }
    if let Some(key_file) = key_file {
        platform
            .cli()
            .activate_service_account(key_file)
            .with_context(|| format!("cannot activate {}", key_file.display()))?;
    }
    Ok(())
}

pub fn event_sink(ui: &UiContext) -> Box<dyn ReconcileEventSink> {
    if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(ui.style()))
    }
}

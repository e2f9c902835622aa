use std::time::Duration;

use anyhow::{bail, Result};

use funcsync::application::{PollOptions, RefreshOptions};
use funcsync::config::Config;
use funcsync::presentation::factory;
use funcsync::presentation::output::{render_plan, render_verdict, verdict_json};

use crate::commands::{prepare_platform, event_sink, resolve_project};
use crate::ui::context::UiContext;

/// Polling flags given on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct PollFlags {
    pub interval: Option<u64>,
    pub timeout: Option<u64>,
}

fn poll_options(config: &Config, flags: PollFlags) -> Result<PollOptions> {
    let mut polling = config.polling.clone();
    if let Some(secs) = flags.interval {
        if secs == 0 {
            bail!("--poll-interval must be at least 1 second");
        }
        polling.interval_secs = secs;
    }
    if let Some(secs) = flags.timeout {
        polling.timeout_secs = secs;
    }
    Ok(PollOptions::default()
        .with_interval(polling.interval())
        .with_timeout(polling.timeout()))
}

/// Full run (or a plan when `dry_run`); returns the process exit code
pub fn cmd_run(config: &Config, ui: &UiContext, dry_run: bool, flags: PollFlags) -> Result<u8> {
    let project = resolve_project(config)?;
    let use_case = factory::create_refresh_use_case(config, &project);
    prepare_platform(use_case.platform(), config.key_file.as_deref())?;

    let mut options = RefreshOptions::new(&project)
        .with_dry_run(dry_run)
        .with_poll(poll_options(config, flags)?);
    if let Some(revision) = &config.revision {
        options = options.with_revision(revision.as_str());
    }

    let sink = event_sink(ui);
    let report = use_case.execute(&options, sink.as_ref())?;

    if ui.json {
        println!("{}", verdict_json(&report.verdict));
    } else if dry_run {
        println!("{}", render_plan(&report, ui.style()));
    } else {
        println!("{}", render_verdict(&report.verdict, ui.style()));
    }

    Ok(report.exit_code())
}

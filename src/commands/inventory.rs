use anyhow::Result;

use funcsync::application::collect_inventory;
use funcsync::config::Config;
use funcsync::presentation::factory;
use funcsync::presentation::output::{inventory_json, render_inventory};

use crate::commands::{prepare_platform, resolve_project};
use crate::ui::context::UiContext;

pub fn cmd_inventory(config: &Config, ui: &UiContext) -> Result<u8> {
    let project = resolve_project(config)?;
    let platform = factory::create_platform(config, &project);
    prepare_platform(&platform, config.key_file.as_deref())?;

    let inventory = collect_inventory(&platform)?;
    if ui.json {
        println!("{}", inventory_json(&inventory));
    } else {
        println!("{}", render_inventory(&inventory, ui.style()));
    }
    Ok(0)
}

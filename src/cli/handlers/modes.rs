// src/cli/handlers/modes.rs

use anyhow::Result;
use clap::Parser;
use colored::*;

use super::commons;
use crate::{CancellationToken, core::catalogue::mode_display_name};

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true, about = "Lists the rac modes.")]
struct ModesArgs {}

pub fn handle(args: Vec<String>, _cancellation_token: &CancellationToken) -> Result<()> {
    let _modes_args = ModesArgs::try_parse_from(&args)?;
    let workspace = commons::load_workspace()?;

    println!("\n{}", t!("modes.header").yellow().bold());
    for (mode, commands) in workspace.catalogue.iter() {
        println!(
            "  {:<12} {:<20} {}",
            mode.cyan(),
            mode_display_name(mode),
            format!(t!("modes.label.command_count"), count = commands.len()).dimmed()
        );
    }
    Ok(())
}

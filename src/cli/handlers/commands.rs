// src/cli/handlers/commands.rs

use anyhow::{Result, anyhow};
use clap::Parser;
use colored::*;

use super::commons;
use crate::{CancellationToken, core::catalogue::mode_display_name};

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true, about = "Lists the commands of a mode.")]
struct CommandsArgs {
    /// The mode whose commands are listed (e.g. `cluster`).
    mode: String,
}

pub fn handle(args: Vec<String>, _cancellation_token: &CancellationToken) -> Result<()> {
    let commands_args = CommandsArgs::try_parse_from(&args)?;
    let workspace = commons::load_workspace()?;

    let mode = commands_args.mode.as_str();
    let commands = workspace
        .catalogue
        .commands(mode)
        .ok_or_else(|| anyhow!(t!("common.error.unknown_mode"), mode = mode))?;

    println!(
        "\n{} {}",
        mode_display_name(mode).yellow().bold(),
        format!("({})", mode).dimmed()
    );
    let width = commands
        .iter()
        .map(|c| c.command.len())
        .max()
        .unwrap_or(0);
    for spec in commands {
        println!(
            "  {:<width$}  {}",
            spec.command.cyan(),
            spec.description,
            width = width
        );
    }
    Ok(())
}

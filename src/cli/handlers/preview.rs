// src/cli/handlers/preview.rs

use anyhow::Result;
use clap::Parser;

use super::commons;
use crate::{
    CancellationToken,
    core::{
        arg_builder::{build_args, render_command_line},
        validation,
    },
};

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Prints the rac command line without running it."
)]
struct PreviewArgs {
    /// The mode of the command (e.g. `cluster`).
    mode: String,

    /// Command words followed by `key=value` or bare `key` inputs.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

/// Renders the command even when required parameters are still missing;
/// those are only reported as a hint.
pub fn handle(args: Vec<String>, _cancellation_token: &CancellationToken) -> Result<()> {
    let preview_args = PreviewArgs::try_parse_from(&args)?;
    let workspace = commons::load_workspace()?;
    let selected =
        commons::select_command(&workspace.catalogue, &preview_args.mode, &preview_args.rest)?;

    let tokens = build_args(
        &selected.spec.mode,
        &selected.spec.command,
        &selected.values,
        &workspace.store,
    );
    println!(
        "{}",
        render_command_line(&workspace.settings.executor.program_name, &tokens)
    );

    let missing = validation::missing_required(selected.spec, &selected.values);
    if !missing.is_empty() {
        eprintln!(
            "{}",
            format!(t!("preview.warning.missing_required"), names = missing.join(", "))
        );
    }
    Ok(())
}

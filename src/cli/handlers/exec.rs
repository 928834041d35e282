// src/cli/handlers/exec.rs

use anyhow::Result;
use clap::Parser;
use colored::*;
use dialoguer::{Confirm, theme::ColorfulTheme};

use super::commons;
use crate::{
    CancellationToken,
    core::invocation::Invocation,
    system::executor::RacExecutor,
};

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Runs a rac command after checking its required parameters."
)]
struct ExecArgs {
    /// Run without asking for confirmation.
    #[arg(long, short)]
    yes: bool,

    /// The mode of the command (e.g. `cluster`).
    mode: String,

    /// Command words followed by `key=value` or bare `key` inputs.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

pub fn handle(args: Vec<String>, cancellation_token: &CancellationToken) -> Result<()> {
    let mut exec_args = ExecArgs::try_parse_from(&args)?;
    let skip_confirmation = commons::take_switch(&mut exec_args.rest, &["--yes", "-y"]) || exec_args.yes;

    let workspace = commons::load_workspace()?;
    let selected =
        commons::select_command(&workspace.catalogue, &exec_args.mode, &exec_args.rest)?;

    // Refused before anything is shown or run when a required parameter is missing.
    let invocation = Invocation::prepare(selected.spec, &selected.values, &workspace.store)?;

    println!("\n{}", t!("exec.info.header").yellow().bold());
    println!("  {}", invocation.command_line().cyan());

    if !skip_confirmation
        && !Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("exec.prompt.execute"))
            .default(false)
            .interact()?
    {
        println!("\n{}", t!("common.info.operation_cancelled"));
        return Ok(());
    }

    commons::check_for_cancellation(cancellation_token)?;
    let executor =
        RacExecutor::from_settings(&workspace.settings.executor, cancellation_token.clone());
    let output = invocation.run(&executor)?;

    println!("\n{}", t!("common.success"));
    if output.trim().is_empty() {
        println!("{}", t!("exec.info.no_output").dimmed());
    } else {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

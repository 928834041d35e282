// src/bin/rac_admin.rs

use anyhow::Result;
use clap::Parser;
use colored::*;
use rac_admin::{
    CancellationToken,
    cli::{Cli, handlers},
    system::executor,
};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

// --- Command Definition and Registry ---

/// An action, its aliases and its handler.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: fn(Vec<String>, &CancellationToken) -> Result<()>,
}

/// Every action of the CLI. Handlers parse their own arguments.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "commands",
        aliases: &["ls"],
        handler: handlers::commands::handle,
    },
    CommandDefinition {
        name: "describe",
        aliases: &["show"],
        handler: handlers::describe::handle,
    },
    CommandDefinition {
        name: "exec",
        aliases: &["run"],
        handler: handlers::exec::handle,
    },
    CommandDefinition {
        name: "modes",
        aliases: &[],
        handler: handlers::modes::handle,
    },
    CommandDefinition {
        name: "preview",
        aliases: &[],
        handler: handlers::preview::handle,
    },
    CommandDefinition {
        name: "var",
        aliases: &["vars"],
        handler: handlers::var::handle,
    },
];

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

fn main() {
    let cancellation_token = Arc::new(AtomicBool::new(false));
    env_logger::init();

    if let Err(e) = executor::install_interrupt_handler(&cancellation_token) {
        log::warn!("Could not install the Ctrl+C handler: {}", e);
    }

    if let Err(e) = run_cli(Cli::parse(), cancellation_token) {
        if let Some(executor::ExecutionError::Cancelled) = e.downcast_ref::<executor::ExecutionError>() {
            std::process::exit(130);
        }

        eprintln!("\n{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Routes `rac-admin <action> [args...]` to the action's handler.
fn run_cli(cli: Cli, cancellation_token: CancellationToken) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let mut args = cli.args.into_iter();
    let Some(action_name) = args.next() else {
        // No action: list the modes as a starting point.
        return handlers::modes::handle(Vec::new(), &cancellation_token);
    };

    match find_command(&action_name) {
        Some(command) => (command.handler)(args.collect(), &cancellation_token),
        None => Err(anyhow::anyhow!(
            rac_admin::t!("cli.error.unknown_action"),
            action = action_name
        )),
    }
}

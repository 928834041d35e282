// src/cli/handlers/var.rs

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::*;

use super::commons;
use crate::{CancellationToken, core::paths::display_path, models::Variable};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, about = "Manages `$(name)` variables.")]
struct VarArgs {
    #[command(subcommand)]
    action: VarAction,
}

#[derive(Subcommand, Debug)]
enum VarAction {
    /// Lists variables.
    #[command(alias = "ls")]
    List {
        /// Only the reserved variables.
        #[arg(long, conflicts_with = "user")]
        reserved: bool,
        /// Only the user variables.
        #[arg(long)]
        user: bool,
    },
    /// Prints the value of one variable.
    Get { name: String },
    /// Creates or updates a variable. Reserved variables only take a new value.
    Set {
        name: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(long, short, default_value = "")]
        comment: String,
    },
    /// Removes a user variable.
    #[command(alias = "rm")]
    Remove { name: String },
}

pub fn handle(args: Vec<String>, _cancellation_token: &CancellationToken) -> Result<()> {
    let var_args = VarArgs::try_parse_from(&args)?;
    let mut workspace = commons::load_workspace()?;
    let store = &mut workspace.store;

    match var_args.action {
        VarAction::List { reserved, user } => {
            let variables = if reserved {
                store.list_reserved()
            } else if user {
                store.list_user()
            } else {
                store.list_all()
            };
            print_variables(&variables);
            println!(
                "\n{}",
                format!(t!("var.info.file"), path = display_path(store.path())).dimmed()
            );
        }
        VarAction::Get { name } => {
            let value = store
                .get(&name)
                .ok_or_else(|| anyhow!(t!("var.error.not_found"), name = name))?;
            println!("{}", value);
        }
        VarAction::Set {
            name,
            value,
            comment,
        } => {
            if store.is_reserved(&name) {
                store
                    .set(&name, &value, &comment)
                    .with_context(|| format!(t!("var.error.save_failed"), path = display_path(store.path())))?;
                println!(
                    "{} {}",
                    t!("common.success"),
                    format_args!(t!("var.success.reserved_updated"), name = name.cyan())
                );
            } else {
                store.validate_name(&name)?;
                store
                    .set(&name, &value, &comment)
                    .with_context(|| format!(t!("var.error.save_failed"), path = display_path(store.path())))?;
                println!(
                    "{} {}",
                    t!("common.success"),
                    format_args!(t!("var.success.set"), name = name.cyan())
                );
            }
        }
        VarAction::Remove { name } => {
            if store.is_reserved(&name) {
                return Err(anyhow!(t!("var.error.reserved_remove"), name = name));
            }
            let removed = store
                .remove(&name)
                .with_context(|| format!(t!("var.error.save_failed"), path = display_path(store.path())))?;
            if !removed {
                return Err(anyhow!(t!("var.error.not_found"), name = name));
            }
            println!(
                "{} {}",
                t!("common.success"),
                format_args!(t!("var.success.removed"), name = name.cyan())
            );
        }
    }
    Ok(())
}

fn print_variables(variables: &[Variable]) {
    if variables.is_empty() {
        println!("\n{}", t!("var.info.none").dimmed());
        return;
    }

    let width = variables.iter().map(|v| v.name().len()).max().unwrap_or(0);
    println!("\n{}", t!("var.header").yellow().bold());
    for variable in variables {
        let marker = if variable.is_reserved() { "R" } else { " " };
        println!(
            "  {} {:<width$}  {}",
            marker.blue(),
            variable.name().cyan(),
            variable.value(),
            width = width
        );
        if !variable.comment().is_empty() {
            println!("    {:<width$}  {}", "", variable.comment().dimmed(), width = width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_accepts_values_starting_with_hyphen() {
        let var_args = VarArgs::try_parse_from(["set", "offset", "-5"]).unwrap();
        match var_args.action {
            VarAction::Set { name, value, comment } => {
                assert_eq!(name, "offset");
                assert_eq!(value, "-5");
                assert_eq!(comment, "");
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_set_with_comment_after_negative_value() {
        let var_args =
            VarArgs::try_parse_from(["set", "offset", "-5", "--comment", "date shift"]).unwrap();
        assert!(matches!(
            var_args.action,
            VarAction::Set { ref value, ref comment, .. } if value == "-5" && comment == "date shift"
        ));
    }

    #[test]
    fn test_remove_alias() {
        let var_args = VarArgs::try_parse_from(["rm", "cluster_id"]).unwrap();
        assert!(matches!(var_args.action, VarAction::Remove { ref name } if name == "cluster_id"));
    }
}

// src/cli/handlers/describe.rs

use anyhow::Result;
use clap::Parser;
use colored::*;

use super::commons;
use crate::{CancellationToken, models::ParameterSpec};

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Shows the parameters of a command."
)]
struct DescribeArgs {
    /// The mode of the command (e.g. `cluster`).
    mode: String,

    /// The command words (e.g. `admin register`).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    command: Vec<String>,
}

pub fn handle(args: Vec<String>, _cancellation_token: &CancellationToken) -> Result<()> {
    let describe_args = DescribeArgs::try_parse_from(&args)?;
    let workspace = commons::load_workspace()?;
    let selected =
        commons::select_command(&workspace.catalogue, &describe_args.mode, &describe_args.command)?;
    let spec = selected.spec;

    println!(
        "\n--- {} '{} {}' ---",
        t!("describe.header"),
        spec.mode.yellow(),
        spec.command.yellow()
    );
    println!("  {}", spec.description);

    if spec.parameters.is_empty() {
        println!("\n  {}", t!("describe.info.no_parameters").dimmed());
        return Ok(());
    }

    println!("\n  {}", t!("describe.label.parameters").blue());
    for param in &spec.parameters {
        println!("    {}", describe_parameter(param));
        if !param.description.is_empty() {
            println!("        {}", param.description.dimmed());
        }
    }
    println!("\n  {}", t!("describe.info.required_legend").dimmed());
    Ok(())
}

/// One summary line: `--name <type> *  [a|b]  (default: x)  -v`.
fn describe_parameter(param: &ParameterSpec) -> String {
    let mut line = format!("--{} <{}>", param.name, param.param_type);
    if param.required {
        line.push_str(" *");
    }
    if !param.allowed_values.is_empty() {
        line.push_str(&format!("  [{}]", param.allowed_values.join("|")));
    }
    if let Some(default) = &param.default_value {
        line.push_str(&format!("  ({}: {})", t!("describe.label.default"), default));
    }
    if let Some(short) = param.short_name {
        line.push_str(&format!("  -{}", short));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParameterType;

    #[test]
    fn test_describe_parameter_line() {
        let param = ParameterSpec::new("auth", ParameterType::Enum, "Authentication methods")
            .with_values(&["pwd", "os"])
            .required();
        assert_eq!(describe_parameter(&param), "--auth <enum> *  [pwd|os]");

        let param = ParameterSpec::new("version", ParameterType::Boolean, "")
            .with_short('v');
        assert_eq!(describe_parameter(&param), "--version <boolean>  -v");
    }
}

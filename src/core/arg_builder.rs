// src/core/arg_builder.rs

//! Turns a command and its parameter values into the token list handed to
//! `rac`:
//!
//! ```text
//! <mode> <command words...> [--flag | --key=value ...] <host[:port]>
//! ```
//!
//! The token order and shape are what `rac` parses; they must not change.
//! Building never checks required parameters so it can render a preview of a
//! half-filled command.

use crate::{
    constants::{DEFAULT_HOST_VAR, DEFAULT_PORT_VAR, FALLBACK_HOST, FALLBACK_PORT, HOST_PARAM, PORT_PARAM},
    core::{
        commons::quote_if_needed,
        substitution::{VariableLookup, substitute},
    },
    models::{ParameterValue, ParameterValues},
};

/// Builds the argument tokens for `mode` / `command` (which may be several
/// space-separated words). Values are substituted fresh on every call.
pub fn build_args(
    mode: &str,
    command: &str,
    values: &ParameterValues,
    variables: &impl VariableLookup,
) -> Vec<String> {
    let mut args = vec![mode.to_string()];
    args.extend(
        command
            .split(' ')
            .filter(|w| !w.is_empty())
            .map(str::to_string),
    );

    for (key, value) in values.iter() {
        if key == HOST_PARAM || key == PORT_PARAM {
            continue;
        }
        match value {
            ParameterValue::Flag(true) => args.push(format!("--{}", key)),
            ParameterValue::Flag(false) => {}
            ParameterValue::Text(text) if text.is_empty() => {}
            ParameterValue::Text(text) => {
                let resolved = quote_if_needed(&substitute(text, variables));
                args.push(format!("--{}={}", key, resolved));
            }
        }
    }

    args.push(connection_target(values, variables));
    args
}

/// The trailing `host:port` token.
///
/// Supplied `host` and `port` win; a lone port is paired with `localhost`;
/// when neither is supplied the store's `default_host` / `default_port` are
/// used, falling back to `localhost:1545`.
pub fn connection_target(values: &ParameterValues, variables: &impl VariableLookup) -> String {
    let host = values.text(HOST_PARAM).map(|h| substitute(h, variables));
    let port = values.text(PORT_PARAM).map(|p| substitute(p, variables));

    match (host, port) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host,
        (None, Some(port)) => format!("{}:{}", FALLBACK_HOST, port),
        (None, None) => {
            let host = non_empty(variables.lookup(DEFAULT_HOST_VAR)).unwrap_or(FALLBACK_HOST);
            let port = non_empty(variables.lookup(DEFAULT_PORT_VAR)).unwrap_or(FALLBACK_PORT);
            format!("{}:{}", host, port)
        }
    }
}

/// Renders tokens as a single display line: `program token token ...`.
pub fn render_command_line<S: AsRef<str>>(program: &str, args: &[S]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg.as_ref());
    }
    line
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

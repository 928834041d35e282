// src/core/validation.rs

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::{
    constants::RESERVED_VARIABLE_NAMES,
    models::{CommandSpec, ParameterValues},
};

lazy_static! {
    static ref IDENTIFIER_RE: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").expect("valid regex");
}

/// Input rejected before anything is stored or executed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Variable name cannot be empty.")]
    EmptyName,
    #[error("Variable name '{0}' may only contain letters, digits and underscores, and cannot start with a digit.")]
    InvalidName(String),
    #[error("Variable name '{0}' is reserved by the system.")]
    ReservedName(String),
    #[error("Unknown mode '{0}'.")]
    UnknownMode(String),
    #[error("Unknown command '{command}' in mode '{mode}'.")]
    UnknownCommand { mode: String, command: String },
    #[error("Command '{command}' has no parameter '{name}'.")]
    UnknownParameter { command: String, name: String },
    #[error("Parameter '{name}' expects a boolean value, got '{value}'.")]
    InvalidFlagValue { name: String, value: String },
    #[error("Missing required parameters: {}", .0.join(", "))]
    MissingRequired(Vec<String>),
}

/// Checks a variable name against the identifier grammar and the reserved namespace.
///
/// `is_reserved` reports names reserved by the store; the built-in reserved names
/// are always rejected, even before they are seeded.
pub fn validate_variable_name(
    name: &str,
    is_reserved: impl Fn(&str) -> bool,
) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !IDENTIFIER_RE.is_match(name) {
        return Err(ValidationError::InvalidName(name.to_string()));
    }
    if RESERVED_VARIABLE_NAMES.contains(&name) || is_reserved(name) {
        return Err(ValidationError::ReservedName(name.to_string()));
    }
    Ok(())
}

/// Names of the required parameters of `spec` that were not supplied, in
/// declaration order.
pub fn missing_required(spec: &CommandSpec, values: &ParameterValues) -> Vec<String> {
    spec.required_parameters()
        .filter(|p| !values.is_supplied(&p.name))
        .map(|p| p.name.clone())
        .collect()
}

/// Refuses execution when any required parameter is missing.
pub fn check_required(spec: &CommandSpec, values: &ParameterValues) -> Result<(), ValidationError> {
    let missing = missing_required(spec, values);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingRequired(missing))
    }
}

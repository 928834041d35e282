// src/models.rs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_PROGRAM_NAME, DEFAULT_TIMEOUT_SECS};

// --- COMMAND SCHEMA MODELS ---
// Static description of every command the external `rac` executable accepts.

/// The declared shape of a parameter. Only presence is checked at runtime;
/// the type drives how input is read (flag vs. text) and how it is listed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Integer,
    Boolean,
    Enum,
    /// A UUID identifying a cluster object.
    Identifier,
    Port,
    Host,
    Secret,
}

impl ParameterType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Enum => "enum",
            Self::Identifier => "uuid",
            Self::Port => "port",
            Self::Host => "host",
            Self::Secret => "secret",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared parameter of a command. `name` is also the flag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: String,
    pub param_type: ParameterType,
    pub required: bool,
    pub description: String,
    pub default_value: Option<String>,
    /// Non-empty only for `ParameterType::Enum`.
    pub allowed_values: Vec<String>,
    /// Informational single-letter alias (e.g. `-v`).
    pub short_name: Option<char>,
}

impl ParameterSpec {
    pub fn new(name: &str, param_type: ParameterType, description: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type,
            required: false,
            description: description.to_string(),
            default_value: None,
            allowed_values: Vec::new(),
            short_name: None,
        }
    }

    /// Marks the parameter as mandatory for execution.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_values(mut self, values: &[&str]) -> Self {
        self.allowed_values = values.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn with_default(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn with_short(mut self, short: char) -> Self {
        self.short_name = Some(short);
        self
    }

    pub fn is_flag(&self) -> bool {
        self.param_type == ParameterType::Boolean
    }
}

/// One invocable command: `rac <mode> <command words...> [--params] host:port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub mode: String,
    /// Possibly multi-word sub-path, e.g. "admin register".
    pub command: String,
    pub description: String,
    pub parameters: Vec<ParameterSpec>,
}

impl CommandSpec {
    pub fn new(
        mode: &str,
        command: &str,
        description: &str,
        parameters: Vec<ParameterSpec>,
    ) -> Self {
        Self {
            mode: mode.to_string(),
            command: command.to_string(),
            description: description.to_string(),
            parameters,
        }
    }

    /// The positional words of the command ("admin register" -> ["admin", "register"]).
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.command.split(' ').filter(|w| !w.is_empty())
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters.iter().filter(|p| p.required)
    }
}

/// Every known command, grouped by mode in declaration order.
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct CommandCatalogue {
    modes: IndexMap<String, Vec<CommandSpec>>,
}

impl CommandCatalogue {
    pub fn from_modes(modes: IndexMap<String, Vec<CommandSpec>>) -> Self {
        Self { modes }
    }

    pub fn modes(&self) -> impl Iterator<Item = &str> {
        self.modes.keys().map(String::as_str)
    }

    pub fn commands(&self, mode: &str) -> Option<&[CommandSpec]> {
        self.modes.get(mode).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CommandSpec])> {
        self.modes.iter().map(|(m, c)| (m.as_str(), c.as_slice()))
    }

    /// Finds a command by its exact (space separated) name.
    pub fn find(&self, mode: &str, command: &str) -> Option<&CommandSpec> {
        self.commands(mode)?.iter().find(|c| c.command == command)
    }

    /// Matches the longest command whose words are a prefix of `words`.
    /// Returns the command and how many words it consumed.
    pub fn resolve<'a>(&'a self, mode: &str, words: &[String]) -> Option<(&'a CommandSpec, usize)> {
        self.commands(mode)?
            .iter()
            .filter_map(|spec| {
                let spec_words: Vec<&str> = spec.words().collect();
                let matches = spec_words.len() <= words.len()
                    && spec_words.iter().zip(words).all(|(a, b)| *a == b.as_str());
                matches.then_some((spec, spec_words.len()))
            })
            .max_by_key(|(_, consumed)| *consumed)
    }

    pub fn len(&self) -> usize {
        self.modes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// --- PARAMETER VALUES ---

/// A value supplied for a parameter. Booleans are kept apart from text so
/// that `false` is never confused with the string "false".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    Text(String),
    Flag(bool),
}

impl ParameterValue {
    /// Reads raw input according to the declared type of the parameter.
    /// Returns `None` for boolean input that is not a recognizable truth value.
    pub fn parse_for(param_type: ParameterType, raw: &str) -> Option<Self> {
        if param_type != ParameterType::Boolean {
            return Some(Self::Text(raw.to_string()));
        }
        match raw.trim().to_lowercase().as_str() {
            "" | "true" | "yes" | "1" | "on" => Some(Self::Flag(true)),
            "false" | "no" | "0" | "off" => Some(Self::Flag(false)),
            _ => None,
        }
    }

    /// An empty text value is treated as "not supplied".
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Parameter values keyed by name, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterValues {
    values: IndexMap<String, ParameterValue>,
}

impl ParameterValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a value. A replaced key keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParameterValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.values.get(name)
    }

    /// Returns the text of a non-blank text value.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ParameterValue::Text(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Whether a value was supplied for `name` (blank text does not count).
    pub fn is_supplied(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(|v| !v.is_blank())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<ParameterValue>> FromIterator<(K, V)> for ParameterValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (k, v) in iter {
            values.insert(k, v);
        }
        values
    }
}

// --- VARIABLES ---

/// A named value usable as `$(name)` in any parameter.
///
/// Reserved variables are seeded by the application: their name is permanent
/// and only their value can change. User-defined variables can be replaced
/// or removed freely.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "VariableRecord", into = "VariableRecord")]
pub enum Variable {
    Reserved {
        name: String,
        value: String,
        purpose: String,
    },
    UserDefined {
        name: String,
        value: String,
        comment: String,
    },
}

impl Variable {
    pub fn reserved(name: &str, value: &str, purpose: &str) -> Self {
        Self::Reserved {
            name: name.to_string(),
            value: value.to_string(),
            purpose: purpose.to_string(),
        }
    }

    pub fn user(name: &str, value: &str, comment: &str) -> Self {
        Self::UserDefined {
            name: name.to_string(),
            value: value.to_string(),
            comment: comment.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Reserved { name, .. } | Self::UserDefined { name, .. } => name,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Reserved { value, .. } | Self::UserDefined { value, .. } => value,
        }
    }

    /// The purpose of a reserved variable, or the user's comment.
    pub fn comment(&self) -> &str {
        match self {
            Self::Reserved { purpose, .. } => purpose,
            Self::UserDefined { comment, .. } => comment,
        }
    }

    pub fn is_reserved(&self) -> bool {
        matches!(self, Self::Reserved { .. })
    }

    /// The only mutation allowed on a reserved variable.
    pub fn set_value(&mut self, new_value: &str) {
        match self {
            Self::Reserved { value, .. } | Self::UserDefined { value, .. } => {
                *value = new_value.to_string();
            }
        }
    }
}

/// On-disk shape of a variable: `{name, value, comment, reserved}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VariableRecord {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub reserved: bool,
}

impl From<VariableRecord> for Variable {
    fn from(record: VariableRecord) -> Self {
        if record.reserved {
            Self::Reserved {
                name: record.name,
                value: record.value,
                purpose: record.comment,
            }
        } else {
            Self::UserDefined {
                name: record.name,
                value: record.value,
                comment: record.comment,
            }
        }
    }
}

impl From<Variable> for VariableRecord {
    fn from(variable: Variable) -> Self {
        match variable {
            Variable::Reserved {
                name,
                value,
                purpose,
            } => Self {
                name,
                value,
                comment: purpose,
                reserved: true,
            },
            Variable::UserDefined {
                name,
                value,
                comment,
            } => Self {
                name,
                value,
                comment,
                reserved: false,
            },
        }
    }
}

// --- `settings.toml` MODELS ---

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExecutorSettings {
    /// Seconds before the external executable is killed.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Name shown in command previews.
    #[serde(default = "default_program_name")]
    pub program_name: String,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_program_name() -> String {
    DEFAULT_PROGRAM_NAME.to_string()
}

impl Default for ExecutorSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            program_name: default_program_name(),
        }
    }
}

/// Represents the deserialized structure of `settings.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Optional path template for the variables file (`~` and `$VAR` are expanded).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables_file: Option<String>,
    #[serde(default)]
    pub executor: ExecutorSettings,
}

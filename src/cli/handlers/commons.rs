// src/cli/handlers/commons.rs

// Shared functions used by multiple handlers.

use anyhow::{Context, Result};
use std::sync::atomic::Ordering;

use crate::{
    CancellationToken,
    core::{
        catalogue::get_all_commands,
        parameters,
        paths::{self, display_path},
        settings,
        validation::ValidationError,
        variable_store::VariableStore,
    },
    models::{CommandCatalogue, CommandSpec, ParameterValues, Settings},
    system::executor::ExecutionError,
};

/// Everything a handler needs: settings, the variable store and the catalogue.
#[derive(Debug)]
pub struct Workspace {
    pub settings: Settings,
    pub store: VariableStore,
    pub catalogue: CommandCatalogue,
}

/// Loads the settings, opens (and seeds) the variable store and builds the catalogue.
pub fn load_workspace() -> Result<Workspace> {
    let settings = settings::load_settings().context(t!("common.error.settings_load"))?;
    let variables_path = paths::get_variables_path(&settings)?;
    log::debug!("Using variables file '{}'.", display_path(&variables_path));

    Ok(Workspace {
        settings,
        store: VariableStore::open(variables_path),
        catalogue: get_all_commands(),
    })
}

/// A command selected from the catalogue together with its parsed values.
#[derive(Debug)]
pub struct SelectedCommand<'a> {
    pub spec: &'a CommandSpec,
    pub values: ParameterValues,
}

/// Resolves `<mode> <command words...> [key=value | key ...]`.
///
/// The longest catalogue command matching the leading words wins; every
/// remaining token is a parameter input.
pub fn select_command<'a>(
    catalogue: &'a CommandCatalogue,
    mode: &str,
    rest: &[String],
) -> Result<SelectedCommand<'a>, ValidationError> {
    if catalogue.commands(mode).is_none() {
        return Err(ValidationError::UnknownMode(mode.to_string()));
    }

    let word_count = rest
        .iter()
        .take_while(|t| !t.contains('=') && !t.starts_with('-'))
        .count();
    let words = rest.get(..word_count).unwrap_or_default();

    let (spec, consumed) =
        catalogue
            .resolve(mode, words)
            .ok_or_else(|| ValidationError::UnknownCommand {
                mode: mode.to_string(),
                command: words.join(" "),
            })?;

    let inputs = rest.get(consumed..).unwrap_or_default();
    let values = parameters::parse_inputs(spec, inputs)?;
    Ok(SelectedCommand { spec, values })
}

/// Removes every occurrence of the given switches from `args`, reporting
/// whether any was present.
pub fn take_switch(args: &mut Vec<String>, switches: &[&str]) -> bool {
    let before = args.len();
    args.retain(|a| !switches.contains(&a.as_str()));
    args.len() != before
}

pub fn check_for_cancellation(cancellation_token: &CancellationToken) -> Result<()> {
    if cancellation_token.load(Ordering::SeqCst) {
        return Err(ExecutionError::Cancelled.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParameterValue;

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_select_multi_word_command_with_inputs() {
        let catalogue = get_all_commands();
        let rest = strings(&["admin", "register", "name=Admin1", "auth=pwd"]);

        let selected = select_command(&catalogue, "cluster", &rest).unwrap();
        assert_eq!(selected.spec.command, "admin register");
        assert_eq!(selected.values.text("name"), Some("Admin1"));
        assert_eq!(selected.values.text("auth"), Some("pwd"));
    }

    #[test]
    fn test_select_command_keeps_bare_flags_after_words() {
        let catalogue = get_all_commands();
        let rest = strings(&["create", "create-database", "name=base"]);

        let selected = select_command(&catalogue, "infobase", &rest).unwrap();
        assert_eq!(selected.spec.command, "create");
        assert_eq!(
            selected.values.get("create-database"),
            Some(&ParameterValue::Flag(true))
        );
    }

    #[test]
    fn test_select_command_errors() {
        let catalogue = get_all_commands();

        assert_eq!(
            select_command(&catalogue, "nope", &strings(&["list"])).unwrap_err(),
            ValidationError::UnknownMode("nope".to_string())
        );
        assert_eq!(
            select_command(&catalogue, "cluster", &strings(&["frobnicate"])).unwrap_err(),
            ValidationError::UnknownCommand {
                mode: "cluster".to_string(),
                command: "frobnicate".to_string(),
            }
        );
        assert!(matches!(
            select_command(&catalogue, "cluster", &strings(&["list", "bogus=1"])),
            Err(ValidationError::UnknownParameter { .. })
        ));
    }

    #[test]
    fn test_cancellation_maps_to_execution_error() {
        use std::sync::Arc;
        use std::sync::atomic::AtomicBool;

        let token = Arc::new(AtomicBool::new(false));
        assert!(check_for_cancellation(&token).is_ok());

        token.store(true, Ordering::SeqCst);
        let err = check_for_cancellation(&token).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExecutionError>(),
            Some(ExecutionError::Cancelled)
        ));
    }

    #[test]
    fn test_take_switch() {
        let mut args = strings(&["cluster", "--yes", "list", "-y"]);
        assert!(take_switch(&mut args, &["--yes", "-y"]));
        assert_eq!(args, strings(&["cluster", "list"]));
        assert!(!take_switch(&mut args, &["--yes", "-y"]));
    }
}

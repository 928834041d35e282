// src/core/paths.rs

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV, SETTINGS_FILENAME, VARIABLES_FILENAME};
use crate::models::Settings;
use lazy_static::lazy_static;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

lazy_static! {
    static ref CONFIG_DIR: Mutex<Option<PathBuf>> = Mutex::new(None);
}

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    #[error("Could not create config directory at '{path}': {source}")]
    ConfigDirCreation {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to expand path template '{template}': {message}")]
    TemplateExpansion { template: String, message: String },
}

/// Returns the rac-admin configuration directory (`~/.config/rac-admin`),
/// creating it if needed.
///
/// `RAC_ADMIN_CONFIG_DIR` takes precedence and is read on every call. The
/// system location is computed once and memoized.
pub fn get_config_dir() -> Result<PathBuf, PathError> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        let dir = PathBuf::from(dir);
        ensure_dir(&dir)?;
        return Ok(dir);
    }

    let mut cached = CONFIG_DIR.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(path) = &*cached {
        return Ok(path.clone());
    }

    let config_path = dirs::config_dir()
        .ok_or(PathError::ConfigDirNotFound)?
        .join(APP_DIR_NAME);
    ensure_dir(&config_path)?;

    *cached = Some(config_path.clone());
    Ok(config_path)
}

fn ensure_dir(dir: &Path) -> Result<(), PathError> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| PathError::ConfigDirCreation {
            path: dir.display().to_string(),
            source: e,
        })?;
    }
    Ok(())
}

/// Path of `settings.toml`.
pub fn get_settings_path() -> Result<PathBuf, PathError> {
    get_config_dir().map(|dir| dir.join(SETTINGS_FILENAME))
}

/// Path of the variables file: the template from the settings when present,
/// `<config dir>/variables.json` otherwise.
pub fn get_variables_path(settings: &Settings) -> Result<PathBuf, PathError> {
    match &settings.variables_file {
        Some(template) => expand_path_template(template),
        None => get_config_dir().map(|dir| dir.join(VARIABLES_FILENAME)),
    }
}

/// Expands `~` and environment variables (`$VAR`, `${VAR}`) in a path template.
pub fn expand_path_template(template: &str) -> Result<PathBuf, PathError> {
    let expanded = shellexpand::full(template).map_err(|e| PathError::TemplateExpansion {
        template: template.to_string(),
        message: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// Renders a path for display without Windows verbatim prefixes.
pub fn display_path(path: &Path) -> String {
    dunce::simplified(path).display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_plain_template_is_unchanged() {
        let path = expand_path_template("/var/lib/rac-admin/vars.json").unwrap();
        assert_eq!(path, PathBuf::from("/var/lib/rac-admin/vars.json"));
    }

    #[test]
    fn test_expand_unknown_env_var_fails() {
        let result = expand_path_template("$RAC_ADMIN_SURELY_UNDEFINED_VAR/vars.json");
        assert!(matches!(result, Err(PathError::TemplateExpansion { .. })));
    }

    #[test]
    fn test_explicit_variables_file_wins() {
        let settings = Settings {
            variables_file: Some("/tmp/custom-vars.json".to_string()),
            ..Default::default()
        };
        assert_eq!(
            get_variables_path(&settings).unwrap(),
            PathBuf::from("/tmp/custom-vars.json")
        );
    }
}

// src/core/settings.rs

use std::{fs, path::Path};
use thiserror::Error;

use crate::{core::paths, models::Settings};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Path error: {0}")]
    Path(#[from] paths::PathError),
    #[error("Failed to parse settings.toml: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Failed to serialize settings to TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Loads `settings.toml` from the config directory, writing the defaults
/// first if the file does not exist yet.
pub fn load_settings() -> Result<Settings, SettingsError> {
    let settings_path = paths::get_settings_path()?;
    load_settings_from(&settings_path)
}

pub fn load_settings_from(settings_path: &Path) -> Result<Settings, SettingsError> {
    if !settings_path.exists() {
        let default_settings = Settings::default();
        let toml_string = toml::to_string_pretty(&default_settings)?;
        fs::write(settings_path, toml_string)?;
        log::info!("Default settings written to '{}'.", settings_path.display());
        Ok(default_settings)
    } else {
        let content = fs::read_to_string(settings_path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_settings_are_created_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.executor.timeout_secs, 30);
        assert!(path.exists());

        // Reading the generated file back gives the same settings.
        assert_eq!(load_settings_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "variables_file = \"~/vars.json\"\n[executor]\ntimeout_secs = 5\n").unwrap();

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.variables_file.as_deref(), Some("~/vars.json"));
        assert_eq!(settings.executor.timeout_secs, 5);
        assert_eq!(settings.executor.program_name, "rac");
    }

    #[test]
    fn test_malformed_settings_are_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[executor\n").unwrap();

        assert!(matches!(
            load_settings_from(&path),
            Err(SettingsError::TomlParse(_))
        ));
    }
}

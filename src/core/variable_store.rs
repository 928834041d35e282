//! # Variable store
//!
//! Owns every `$(name)` variable of the process and is the only writer of the
//! variables file. The file is a JSON object keyed by name whose values are
//! `{name, value, comment, reserved}` records; it is rewritten completely after
//! every mutation (temp file in the same directory, then rename).
//!
//! ## Failure policy
//!
//! - A missing file is an empty store.
//! - An unreadable or corrupt file is logged and the store starts empty; the
//!   reserved defaults are then seeded again so the tool stays usable.
//! - A failed write during `set`/`remove` is returned to the caller. Seeding
//!   the reserved defaults only logs it.
//!
//! ## Reserved variables
//!
//! `rac_path`, `ras_service`, `default_host` and `default_port` are seeded on
//! first use. Their names are permanent: `remove` refuses them and `set` only
//! updates their value.

use indexmap::IndexMap;
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::{
    constants::{
        DEFAULT_HOST_VAR, DEFAULT_PORT_VAR, DEFAULT_RAS_SERVICE, FALLBACK_HOST, FALLBACK_PORT,
        RAC_PATH_VAR, RAS_SERVICE_VAR,
    },
    core::{
        paths::display_path,
        substitution::VariableLookup,
        validation::{self, ValidationError},
    },
    models::Variable,
};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Variables file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not replace the variables file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Default value of the `rac_path` reserved variable.
pub fn default_rac_path() -> &'static str {
    if cfg!(target_os = "windows") {
        "rac.exe"
    } else {
        "rac"
    }
}

/// The reserved variables with their default values, in seeding order.
pub fn reserved_defaults() -> [Variable; 4] {
    [
        Variable::reserved(
            RAC_PATH_VAR,
            default_rac_path(),
            "Path to the rac executable",
        ),
        Variable::reserved(
            RAS_SERVICE_VAR,
            DEFAULT_RAS_SERVICE,
            "Name of the remote administration server service",
        ),
        Variable::reserved(DEFAULT_HOST_VAR, FALLBACK_HOST, "Default cluster host"),
        Variable::reserved(DEFAULT_PORT_VAR, FALLBACK_PORT, "Default cluster port"),
    ]
}

#[derive(Debug)]
pub struct VariableStore {
    path: PathBuf,
    variables: IndexMap<String, Variable>,
}

impl VariableStore {
    /// Creates an empty store bound to `path` without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            variables: IndexMap::new(),
        }
    }

    /// Loads the store from `path` and seeds the reserved defaults.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::new(path);
        store.load();
        store.ensure_reserved_defaults();
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the in-memory state with the file contents. Never fails: a
    /// decode error is logged and leaves the store empty.
    pub fn load(&mut self) {
        match read_variables(&self.path) {
            Ok(variables) => {
                log::debug!(
                    "Loaded {} variables from '{}'.",
                    variables.len(),
                    display_path(&self.path)
                );
                self.variables = variables;
            }
            Err(e) => {
                log::error!(
                    "Failed to load variables from '{}': {}. Starting with an empty set.",
                    display_path(&self.path),
                    e
                );
                self.variables = IndexMap::new();
            }
        }
    }

    /// Inserts each missing reserved variable with its default value and
    /// persists if anything changed. A user variable squatting a reserved name
    /// is promoted to reserved, keeping its value. Calling it again is a no-op.
    pub fn ensure_reserved_defaults(&mut self) {
        let mut changed = false;
        for default in reserved_defaults() {
            let promoted = match self.variables.get(default.name()) {
                Some(existing) if existing.is_reserved() => continue,
                Some(existing) => {
                    let mut promoted = default.clone();
                    promoted.set_value(existing.value());
                    promoted
                }
                None => default,
            };
            log::info!("Seeding reserved variable '{}'.", promoted.name());
            self.variables.insert(promoted.name().to_string(), promoted);
            changed = true;
        }
        if changed {
            self.persist();
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(Variable::value)
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.variables.get(name).is_some_and(Variable::is_reserved)
    }

    /// Creates or replaces a user variable. When `name` is reserved, only the
    /// value changes and the comment is ignored. Always persists.
    pub fn set(&mut self, name: &str, value: &str, comment: &str) -> Result<(), StoreError> {
        self.set_variable(Variable::user(name, value, comment))
    }

    /// Stores `variable` and writes the file. An existing reserved variable
    /// only takes the new value.
    pub fn set_variable(&mut self, variable: Variable) -> Result<(), StoreError> {
        if self.is_reserved(variable.name()) {
            if let Some(existing) = self.variables.get_mut(variable.name()) {
                existing.set_value(variable.value());
            }
        } else {
            self.variables.insert(variable.name().to_string(), variable);
        }
        self.save()
    }

    /// Deletes a user variable and writes the file. Reserved or absent names
    /// are refused with `Ok(false)`.
    pub fn remove(&mut self, name: &str) -> Result<bool, StoreError> {
        if self.is_reserved(name) {
            log::warn!("Refusing to remove reserved variable '{}'.", name);
            return Ok(false);
        }
        if self.variables.shift_remove(name).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    pub fn list_all(&self) -> Vec<Variable> {
        self.variables.values().cloned().collect()
    }

    pub fn list_reserved(&self) -> Vec<Variable> {
        self.variables
            .values()
            .filter(|v| v.is_reserved())
            .cloned()
            .collect()
    }

    pub fn list_user(&self) -> Vec<Variable> {
        self.variables
            .values()
            .filter(|v| !v.is_reserved())
            .cloned()
            .collect()
    }

    /// Validates a name for a new user variable.
    pub fn validate_name(&self, name: &str) -> Result<(), ValidationError> {
        validation::validate_variable_name(name, |n| self.is_reserved(n))
    }

    /// Writes the whole mapping to disk atomically.
    pub fn save(&self) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut temp_file = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut temp_file, &self.variables)?;
        temp_file.write_all(b"\n")?;
        temp_file.flush()?;
        temp_file.persist(&self.path)?;
        Ok(())
    }

    /// Seeding failures are logged only.
    fn persist(&self) {
        if let Err(e) = self.save() {
            log::error!(
                "Failed to save variables to '{}': {}",
                display_path(&self.path),
                e
            );
        }
    }
}

impl VariableLookup for VariableStore {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

fn read_variables(path: &Path) -> Result<IndexMap<String, Variable>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(IndexMap::new()),
        Err(e) => return Err(e.into()),
    };
    let by_key: IndexMap<String, Variable> = serde_json::from_str(&content)?;
    // The record's own name is authoritative.
    Ok(by_key
        .into_values()
        .map(|v| (v.name().to_string(), v))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::{TempDir, tempdir};

    fn store_in(dir: &TempDir) -> VariableStore {
        VariableStore::open(dir.path().join("variables.json"))
    }

    fn tuples(store: &VariableStore) -> HashSet<(String, String, String, bool)> {
        store
            .list_all()
            .into_iter()
            .map(|v| {
                (
                    v.name().to_string(),
                    v.value().to_string(),
                    v.comment().to_string(),
                    v.is_reserved(),
                )
            })
            .collect()
    }

    #[test]
    fn test_open_seeds_reserved_defaults() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.list_reserved().len(), 4);
        assert!(store.list_user().is_empty());
        assert_eq!(store.get("default_host"), Some("localhost"));
        assert_eq!(store.get("default_port"), Some("1545"));
        assert_eq!(store.get("ras_service"), Some("1C:Enterprise 8.3 Remote Server"));
        assert_eq!(store.get("rac_path"), Some(default_rac_path()));
        assert!(store.path().exists());
    }

    #[test]
    fn test_ensure_reserved_defaults_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set("default_host", "srv1", "").unwrap();

        store.ensure_reserved_defaults();
        let first = store.list_all();
        let first_file = fs::read_to_string(store.path()).unwrap();

        store.ensure_reserved_defaults();
        assert_eq!(store.list_all(), first);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), first_file);
        assert_eq!(store.get("default_host"), Some("srv1"));
    }

    #[test]
    fn test_reserved_variable_cannot_be_removed() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        let before = store.list_all();

        for name in ["rac_path", "ras_service", "default_host", "default_port"] {
            assert!(!store.remove(name).unwrap());
        }
        assert_eq!(store.list_all(), before);
    }

    #[test]
    fn test_remove_absent_variable_reports_false() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        assert!(!store.remove("nothing_here").unwrap());
    }

    #[test]
    fn test_set_on_reserved_only_updates_value() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        let purpose = store.variable("default_port").unwrap().comment().to_string();

        store.set("default_port", "1645", "user comment").unwrap();

        let var = store.variable("default_port").unwrap();
        assert!(var.is_reserved());
        assert_eq!(var.value(), "1645");
        assert_eq!(var.comment(), purpose);
    }

    #[test]
    fn test_set_user_variable_replaces_wholesale() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);

        store.set("cluster_id", "a", "first").unwrap();
        store.set("cluster_id", "b", "").unwrap();

        let var = store.variable("cluster_id").unwrap();
        assert!(!var.is_reserved());
        assert_eq!(var.value(), "b");
        assert_eq!(var.comment(), "");
    }

    #[test]
    fn test_set_variable_creates_reserved_when_asked() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set_variable(Variable::reserved("site_key", "k", "purpose")).unwrap();
        assert!(store.is_reserved("site_key"));
        assert!(!store.remove("site_key").unwrap());
    }

    #[test]
    fn test_user_variable_remove_is_persisted() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set("tmp", "1", "").unwrap();
        assert!(store.remove("tmp").unwrap());

        let reloaded = store_in(&dir);
        assert!(reloaded.get("tmp").is_none());
    }

    #[test]
    fn test_round_trip_through_fresh_instance() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set("cluster_id", "0e8c-11", "main cluster").unwrap();
        store.set("admin", "Администратор", "").unwrap();
        store.set("default_host", "srv-1c", "ignored").unwrap();

        let reloaded = store_in(&dir);
        assert_eq!(tuples(&reloaded), tuples(&store));
    }

    #[test]
    fn test_file_format_is_keyed_records() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set("x", "1", "c").unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(json["x"]["name"], "x");
        assert_eq!(json["x"]["value"], "1");
        assert_eq!(json["x"]["comment"], "c");
        assert_eq!(json["x"]["reserved"], false);
        assert_eq!(json["default_host"]["reserved"], true);
    }

    #[test]
    fn test_corrupt_file_resets_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("variables.json");
        fs::write(&path, "{ not json").unwrap();

        let store = VariableStore::open(&path);
        assert_eq!(store.list_all().len(), 4);
        assert!(store.list_user().is_empty());
    }

    #[test]
    fn test_user_variable_with_reserved_name_is_promoted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("variables.json");
        fs::write(
            &path,
            r#"{"default_host": {"name": "default_host", "value": "srv9", "comment": "", "reserved": false}}"#,
        )
        .unwrap();

        let store = VariableStore::open(&path);
        assert!(store.is_reserved("default_host"));
        assert_eq!(store.get("default_host"), Some("srv9"));
    }

    #[test]
    fn test_records_without_optional_fields_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("variables.json");
        fs::write(&path, r#"{"a": {"name": "a", "value": "1"}}"#).unwrap();

        let store = VariableStore::open(&path);
        assert_eq!(store.get("a"), Some("1"));
        assert!(!store.is_reserved("a"));
    }

    #[test]
    fn test_failed_write_is_reported_to_caller() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("variables.json");

        let mut store = VariableStore::open(&path);
        assert_eq!(store.list_reserved().len(), 4);

        assert!(matches!(
            store.set("cluster_id", "abc", ""),
            Err(StoreError::Io(_))
        ));
        assert!(store.set_variable(Variable::user("other", "1", "")).is_err());
        assert!(!path.exists());

        let reloaded = VariableStore::open(&path);
        assert!(reloaded.get("cluster_id").is_none());
    }

    #[test]
    fn test_failed_remove_is_reported_to_caller() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vars").join("variables.json");
        let mut store = VariableStore::open(&path);
        store.set("tmp", "1", "").unwrap();

        fs::remove_dir_all(dir.path().join("vars")).unwrap();
        fs::write(dir.path().join("vars"), "").unwrap();

        assert!(store.remove("tmp").is_err());
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set("a", "1", "").unwrap();
        store.set("b", "2", "").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_validate_name_uses_store_reservations() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set_variable(Variable::reserved("locked", "v", "")).unwrap();

        assert!(store.validate_name("fresh_name").is_ok());
        assert!(matches!(
            store.validate_name("locked"),
            Err(ValidationError::ReservedName(_))
        ));
        assert!(matches!(
            store.validate_name("rac_path"),
            Err(ValidationError::ReservedName(_))
        ));
        assert_eq!(store.validate_name(""), Err(ValidationError::EmptyName));
    }
}

// src/core/parameters.rs

use crate::{
    core::validation::ValidationError,
    models::{CommandSpec, ParameterType, ParameterValue, ParameterValues},
};

/// Splits one raw input into its key and optional value.
///
/// `key=value` and `--key=value` give `(key, Some(value))`; a bare `key` or
/// `--key` gives `(key, None)`. Only the first `=` separates.
pub fn split_input(raw: &str) -> (&str, Option<&str>) {
    let trimmed = raw.strip_prefix("--").unwrap_or(raw);
    match trimmed.split_once('=') {
        Some((key, value)) => (key.trim(), Some(value)),
        None => (trimmed.trim(), None),
    }
}

/// Reads `key=value` / `key` inputs for `spec` into values in declaration order.
///
/// A bare key is a true flag on boolean parameters and an empty (unsupplied)
/// value otherwise. Later inputs for the same key win.
pub fn parse_inputs<S: AsRef<str>>(
    spec: &CommandSpec,
    inputs: &[S],
) -> Result<ParameterValues, ValidationError> {
    let mut supplied = ParameterValues::new();
    for raw in inputs {
        let (key, raw_value) = split_input(raw.as_ref());
        let param = spec
            .parameter(key)
            .ok_or_else(|| ValidationError::UnknownParameter {
                command: format!("{} {}", spec.mode, spec.command),
                name: key.to_string(),
            })?;

        let value = ParameterValue::parse_for(param.param_type, raw_value.unwrap_or(""))
            .ok_or_else(|| ValidationError::InvalidFlagValue {
                name: key.to_string(),
                value: raw_value.unwrap_or("").to_string(),
            })?;

        if let ParameterValue::Text(text) = &value
            && param.param_type == ParameterType::Enum
            && !text.is_empty()
            && !text.contains("$(")
            && !param.allowed_values.iter().any(|v| v == text)
        {
            log::warn!(
                "Value '{}' for '{}' is not one of: {}",
                text,
                key,
                param.allowed_values.join(", ")
            );
        }

        log::debug!("Parameter '{}' = {:?}", key, value);
        supplied.insert(key, value);
    }

    // Re-key in declaration order so the built arguments are deterministic.
    Ok(spec
        .parameters
        .iter()
        .filter_map(|p| supplied.get(&p.name).map(|v| (p.name.clone(), v.clone())))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalogue::get_all_commands;

    #[test]
    fn test_split_input_forms() {
        assert_eq!(split_input("name=Admin1"), ("name", Some("Admin1")));
        assert_eq!(split_input("--name=Admin1"), ("name", Some("Admin1")));
        assert_eq!(split_input("descr=a=b"), ("descr", Some("a=b")));
        assert_eq!(split_input("create-database"), ("create-database", None));
        assert_eq!(split_input("--force"), ("force", None));
        assert_eq!(split_input("name="), ("name", Some("")));
    }

    #[test]
    fn test_parse_inputs_orders_by_declaration() {
        let catalogue = get_all_commands();
        let spec = catalogue.find("cluster", "admin register").unwrap();

        let values = parse_inputs(spec, &["auth=pwd", "name=Admin1"]).unwrap();
        let keys: Vec<&str> = values.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "auth"]);
        assert_eq!(values.text("name"), Some("Admin1"));
    }

    #[test]
    fn test_boolean_inputs() {
        let catalogue = get_all_commands();
        let spec = catalogue.find("infobase", "create").unwrap();

        let values = parse_inputs(spec, &["create-database"]).unwrap();
        assert_eq!(values.get("create-database"), Some(&ParameterValue::Flag(true)));

        let values = parse_inputs(spec, &["create-database=off"]).unwrap();
        assert_eq!(values.get("create-database"), Some(&ParameterValue::Flag(false)));

        assert_eq!(
            parse_inputs(spec, &["create-database=maybe"]),
            Err(ValidationError::InvalidFlagValue {
                name: "create-database".to_string(),
                value: "maybe".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_parameter_is_rejected() {
        let catalogue = get_all_commands();
        let spec = catalogue.find("cluster", "list").unwrap();

        assert!(matches!(
            parse_inputs(spec, &["bogus=1"]),
            Err(ValidationError::UnknownParameter { name, .. }) if name == "bogus"
        ));
    }

    #[test]
    fn test_enum_value_outside_list_is_kept() {
        let catalogue = get_all_commands();
        let spec = catalogue.find("cluster", "admin register").unwrap();

        let values = parse_inputs(spec, &["auth=ldap"]).unwrap();
        assert_eq!(values.text("auth"), Some("ldap"));
    }

    #[test]
    fn test_bare_text_key_is_not_supplied() {
        let catalogue = get_all_commands();
        let spec = catalogue.find("cluster", "admin register").unwrap();

        let values = parse_inputs(spec, &["name"]).unwrap();
        assert!(!values.is_supplied("name"));
    }

    #[test]
    fn test_later_input_wins() {
        let catalogue = get_all_commands();
        let spec = catalogue.find("cluster", "admin register").unwrap();

        let values = parse_inputs(spec, &["name=a", "name=b"]).unwrap();
        assert_eq!(values.text("name"), Some("b"));
        assert_eq!(values.len(), 1);
    }
}

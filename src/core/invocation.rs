// src/core/invocation.rs

use crate::{
    constants::RAC_PATH_VAR,
    core::{
        arg_builder,
        commons::is_quoted,
        substitution::VariableLookup,
        validation::{self, ValidationError},
        variable_store::default_rac_path,
    },
    models::{CommandSpec, ParameterValues},
    system::executor::ExecutionError,
};

/// Runs the external program with the given tokens and returns its stdout.
pub trait CommandRunner {
    fn execute(&self, program: &str, args: &[String]) -> Result<String, ExecutionError>;
}

/// A validated, ready-to-run command: the program and its argument tokens.
/// Only [`Invocation::prepare`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    /// Refuses the command when a required parameter is missing, otherwise
    /// builds its tokens. The program is the current value of `rac_path`.
    pub fn prepare(
        spec: &CommandSpec,
        values: &ParameterValues,
        variables: &impl VariableLookup,
    ) -> Result<Self, ValidationError> {
        validation::check_required(spec, values)?;

        let program = variables
            .lookup(RAC_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(unquote)
            .unwrap_or_else(|| default_rac_path().to_string());

        Ok(Self {
            program,
            args: arg_builder::build_args(&spec.mode, &spec.command, values, variables),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The full command line as logged and shown to the user.
    pub fn command_line(&self) -> String {
        arg_builder::render_command_line(&self.program, &self.args)
    }

    pub fn run(&self, runner: &impl CommandRunner) -> Result<String, ExecutionError> {
        log::info!("[RAC_EXECUTOR] {}", self.command_line());
        runner.execute(&self.program, &self.args).inspect_err(|e| {
            log::error!("[RAC_EXECUTOR] {}", e);
        })
    }
}

fn unquote(value: &str) -> String {
    let trimmed = value.trim();
    if is_quoted(trimmed) {
        trimmed.trim_matches('"').to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalogue::get_all_commands;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct RecordingRunner {
        calls: RefCell<Vec<(String, Vec<String>)>>,
    }

    impl CommandRunner for RecordingRunner {
        fn execute(&self, program: &str, args: &[String]) -> Result<String, ExecutionError> {
            self.calls
                .borrow_mut()
                .push((program.to_string(), args.to_vec()));
            Ok("ok".to_string())
        }
    }

    struct FailingRunner;

    impl CommandRunner for FailingRunner {
        fn execute(&self, _program: &str, _args: &[String]) -> Result<String, ExecutionError> {
            Err(ExecutionError::TimedOut { secs: 30 })
        }
    }

    fn vars() -> HashMap<String, String> {
        HashMap::from([
            ("rac_path".to_string(), "/opt/1cv8/rac".to_string()),
            ("default_host".to_string(), "localhost".to_string()),
            ("default_port".to_string(), "1545".to_string()),
        ])
    }

    #[test]
    fn test_missing_required_never_reaches_runner() {
        let catalogue = get_all_commands();
        let spec = catalogue.find("cluster", "admin register").unwrap();
        let runner = RecordingRunner::default();

        let values = ParameterValues::new().with("auth", "pwd");
        let outcome = Invocation::prepare(spec, &values, &vars()).map(|inv| inv.run(&runner));

        assert!(matches!(
            outcome,
            Err(ValidationError::MissingRequired(ref names)) if names == &vec!["name".to_string()]
        ));
        assert!(runner.calls.borrow().is_empty());

        let values = values.with("name", "Admin1");
        let outcome = Invocation::prepare(spec, &values, &vars()).map(|inv| inv.run(&runner));
        assert!(matches!(outcome, Ok(Ok(_))));
        assert_eq!(runner.calls.borrow().len(), 1);
    }

    #[test]
    fn test_prepared_invocation_runs_with_rac_path() {
        let catalogue = get_all_commands();
        let spec = catalogue.find("cluster", "admin register").unwrap();
        let values = ParameterValues::new().with("name", "Admin1").with("auth", "pwd");
        let runner = RecordingRunner::default();

        let invocation = Invocation::prepare(spec, &values, &vars()).unwrap();
        assert_eq!(invocation.run(&runner).unwrap(), "ok");

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "/opt/1cv8/rac");
        assert_eq!(
            calls[0].1,
            vec!["cluster", "admin", "register", "--name=Admin1", "--auth=pwd", "localhost:1545"]
        );
        assert_eq!(
            invocation.command_line(),
            "/opt/1cv8/rac cluster admin register --name=Admin1 --auth=pwd localhost:1545"
        );
    }

    #[test]
    fn test_quoted_rac_path_is_unquoted() {
        let catalogue = get_all_commands();
        let spec = catalogue.find("cluster", "list").unwrap();
        let mut variables = vars();
        variables.insert(
            "rac_path".to_string(),
            r#""C:\Program Files\1cv8\bin\rac.exe""#.to_string(),
        );

        let invocation = Invocation::prepare(spec, &ParameterValues::new(), &variables).unwrap();
        assert_eq!(invocation.program(), r"C:\Program Files\1cv8\bin\rac.exe");
    }

    #[test]
    fn test_missing_rac_path_falls_back_to_default_program() {
        let catalogue = get_all_commands();
        let spec = catalogue.find("cluster", "list").unwrap();
        let variables: HashMap<String, String> = HashMap::new();

        let invocation = Invocation::prepare(spec, &ParameterValues::new(), &variables).unwrap();
        assert_eq!(invocation.program(), default_rac_path());
        assert_eq!(invocation.args(), ["cluster", "list", "localhost:1545"]);
    }

    #[test]
    fn test_runner_errors_are_returned() {
        let catalogue = get_all_commands();
        let spec = catalogue.find("cluster", "list").unwrap();
        let invocation = Invocation::prepare(spec, &ParameterValues::new(), &vars()).unwrap();

        assert!(matches!(
            invocation.run(&FailingRunner),
            Err(ExecutionError::TimedOut { secs: 30 })
        ));
    }
}

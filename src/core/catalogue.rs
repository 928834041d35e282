//! # Command catalogue
//!
//! The hand-authored table of every `rac` mode, command and parameter. It is the
//! single source of truth for which parameters exist, their types and which are
//! mandatory. It is not derived from `rac help` output; it mirrors the documented
//! grammar of the 8.3 utility and is checked by inspection.
//!
//! The catalogue is built once by [`get_all_commands`] and then passed around by
//! reference. [`validate`] reports structural mistakes in the table itself.

use indexmap::IndexMap;
use std::collections::HashSet;
use thiserror::Error;

use crate::models::{
    CommandCatalogue, CommandSpec,
    ParameterSpec as P,
    ParameterType::{Boolean, Enum, Host, Identifier, Integer, Port, Secret, String as Text},
};

/// A structural problem found in a catalogue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogueIssue {
    #[error("'{mode} {command}' declares parameter '{name}' more than once")]
    DuplicateParameter {
        mode: String,
        command: String,
        name: String,
    },
    #[error("'{mode} {command}' has enum parameter '{name}' without allowed values")]
    EnumWithoutValues {
        mode: String,
        command: String,
        name: String,
    },
    #[error("'{mode} {command}' lists allowed values for non-enum parameter '{name}'")]
    ValuesOnNonEnum {
        mode: String,
        command: String,
        name: String,
    },
    #[error("command '{command}' is filed under mode '{mode}' but declares mode '{declared}'")]
    ModeMismatch {
        mode: String,
        command: String,
        declared: String,
    },
}

/// Builds the full catalogue, grouped by mode in display order.
pub fn get_all_commands() -> CommandCatalogue {
    let mut modes = IndexMap::new();
    modes.insert("help".to_string(), help_commands());
    modes.insert("agent".to_string(), agent_commands());
    modes.insert("cluster".to_string(), cluster_commands());
    modes.insert("manager".to_string(), manager_commands());
    modes.insert("server".to_string(), server_commands());
    modes.insert("process".to_string(), process_commands());
    modes.insert("service".to_string(), service_commands());
    modes.insert("infobase".to_string(), infobase_commands());
    modes.insert("connection".to_string(), connection_commands());
    modes.insert("session".to_string(), session_commands());
    modes.insert("lock".to_string(), lock_commands());
    modes.insert("rule".to_string(), rule_commands());
    modes.insert("profile".to_string(), profile_commands());
    modes.insert("counter".to_string(), counter_commands());
    modes.insert("limit".to_string(), limit_commands());
    CommandCatalogue::from_modes(modes)
}

/// Human readable name of a mode, for listings.
pub fn mode_display_name(mode: &str) -> &str {
    match mode {
        "help" => "Help",
        "agent" => "Cluster agent",
        "cluster" => "Server cluster",
        "manager" => "Cluster manager",
        "server" => "Working server",
        "process" => "Working process",
        "service" => "Manager service",
        "infobase" => "Infobase",
        "connection" => "Connections",
        "session" => "Sessions",
        "lock" => "Locks",
        "rule" => "Assignment rules",
        "profile" => "Security profiles",
        "counter" => "Resource counters",
        "limit" => "Resource limits",
        other => other,
    }
}

/// Checks the table for duplicate parameters, enum/value mismatches and
/// commands filed under the wrong mode. An empty result means the table is sound.
pub fn validate(catalogue: &CommandCatalogue) -> Vec<CatalogueIssue> {
    let mut issues = Vec::new();
    for (mode, commands) in catalogue.iter() {
        for spec in commands {
            if spec.mode != mode {
                issues.push(CatalogueIssue::ModeMismatch {
                    mode: mode.to_string(),
                    command: spec.command.clone(),
                    declared: spec.mode.clone(),
                });
            }
            let mut seen = HashSet::new();
            for param in &spec.parameters {
                if !seen.insert(param.name.as_str()) {
                    issues.push(CatalogueIssue::DuplicateParameter {
                        mode: mode.to_string(),
                        command: spec.command.clone(),
                        name: param.name.clone(),
                    });
                }
                let is_enum = param.param_type == Enum;
                if is_enum && param.allowed_values.is_empty() {
                    issues.push(CatalogueIssue::EnumWithoutValues {
                        mode: mode.to_string(),
                        command: spec.command.clone(),
                        name: param.name.clone(),
                    });
                }
                if !is_enum && !param.allowed_values.is_empty() {
                    issues.push(CatalogueIssue::ValuesOnNonEnum {
                        mode: mode.to_string(),
                        command: spec.command.clone(),
                        name: param.name.clone(),
                    });
                }
            }
        }
    }
    issues
}

// --- Shared parameters ---

fn host() -> P {
    P::new("host", Host, "Server address (default: localhost)")
}

fn port() -> P {
    P::new("port", Port, "Server port (default: 1545)")
}

fn cluster() -> P {
    P::new("cluster", Identifier, "Cluster identifier").required()
}

fn cluster_user() -> P {
    P::new("cluster-user", Text, "Cluster administrator")
}

fn cluster_pwd() -> P {
    P::new("cluster-pwd", Secret, "Cluster administrator password")
}

fn agent_user() -> P {
    P::new("agent-user", Text, "Cluster agent administrator")
}

fn agent_pwd() -> P {
    P::new("agent-pwd", Secret, "Cluster agent administrator password")
}

fn infobase_user() -> P {
    P::new("infobase-user", Text, "Infobase administrator")
}

fn infobase_pwd() -> P {
    P::new("infobase-pwd", Secret, "Infobase administrator password")
}

fn yes_no(name: &str, description: &str) -> P {
    P::new(name, Enum, description).with_values(&["yes", "no"])
}

fn on_off(name: &str, description: &str) -> P {
    P::new(name, Enum, description).with_values(&["on", "off"])
}

fn analyze(name: &str, description: &str) -> P {
    P::new(name, Enum, description).with_values(&["analyze", "not-analyze"])
}

/// `host`, `port`, then the agent credentials, then `extra`.
fn agent_scoped(extra: Vec<P>) -> Vec<P> {
    let mut params = vec![host(), port(), agent_user(), agent_pwd()];
    params.extend(extra);
    params
}

/// `host`, `port`, the cluster id and its credentials, then `extra`.
fn cluster_scoped(extra: Vec<P>) -> Vec<P> {
    let mut params = vec![host(), port(), cluster(), cluster_user(), cluster_pwd()];
    params.extend(extra);
    params
}

// --- Modes ---

fn help_commands() -> Vec<CommandSpec> {
    vec![CommandSpec::new(
        "help",
        "help",
        "Show help for the given mode",
        vec![
            host(),
            port(),
            P::new("mode", Text, "Mode to show help for"),
            P::new("version", Boolean, "Print the utility version").with_short('v'),
            P::new("help", Boolean, "Short information about the utility").with_short('?'),
        ],
    )]
}

fn agent_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new(
            "agent",
            "admin list",
            "List the cluster agent administrators",
            agent_scoped(vec![]),
        ),
        CommandSpec::new(
            "agent",
            "admin register",
            "Add a new cluster agent administrator",
            agent_scoped(vec![
                P::new("name", Text, "Administrator name").required(),
                P::new("pwd", Secret, "Administrator password"),
                P::new("descr", Text, "Administrator description"),
                P::new("auth", Enum, "Authentication methods").with_values(&["pwd", "os"]),
                P::new("os-user", Text, "Operating system user name"),
            ]),
        ),
        CommandSpec::new(
            "agent",
            "admin remove",
            "Remove a cluster agent administrator",
            agent_scoped(vec![
                P::new("name", Text, "Agent administrator name").required(),
            ]),
        ),
        CommandSpec::new(
            "agent",
            "version",
            "Get the cluster agent version",
            agent_scoped(vec![]),
        ),
    ]
}

/// Parameters shared by `cluster insert` and `cluster update`.
fn cluster_settings() -> Vec<P> {
    vec![
        P::new("name", Text, "Cluster name"),
        P::new("expiration-timeout", Integer, "Forced termination period (s)"),
        P::new("lifetime-limit", Integer, "Working process restart period (s)"),
        P::new("max-memory-size", Integer, "Maximum working process memory (KB)"),
        P::new("max-memory-time-limit", Integer, "Memory overrun period (s)"),
        P::new("security-level", Integer, "Connection security level"),
        P::new("session-fault-tolerance-level", Integer, "Fault tolerance level"),
        P::new("load-balancing-mode", Enum, "Load balancing mode")
            .with_values(&["performance", "memory"]),
        P::new("errors-count-threshold", Integer, "Allowed server error deviation (%)"),
        yes_no("kill-problem-processes", "Terminate problem processes"),
        yes_no("kill-by-memory-with-dump", "Write a dump when memory is exceeded"),
        agent_user(),
        agent_pwd(),
    ]
}

fn cluster_commands() -> Vec<CommandSpec> {
    let mut insert_params = vec![host(), port()];
    insert_params.extend(cluster_settings());

    let mut update_params = vec![host(), port(), cluster()];
    update_params.extend(cluster_settings());

    vec![
        CommandSpec::new(
            "cluster",
            "admin list",
            "List the cluster administrators",
            vec![host(), port()],
        ),
        CommandSpec::new(
            "cluster",
            "admin register",
            "Add a new cluster administrator",
            vec![
                host(),
                port(),
                P::new("name", Text, "Administrator name").required(),
                P::new("pwd", Secret, "Administrator password"),
                P::new("descr", Text, "Administrator description"),
                P::new("auth", Enum, "Authentication methods").with_values(&["pwd", "os"]),
                P::new("os-user", Text, "Operating system user name"),
                agent_user(),
                agent_pwd(),
            ],
        ),
        CommandSpec::new(
            "cluster",
            "admin remove",
            "Remove a cluster administrator",
            vec![
                host(),
                port(),
                P::new("name", Text, "Cluster administrator name").required(),
                cluster(),
                cluster_user(),
                cluster_pwd(),
            ],
        ),
        CommandSpec::new(
            "cluster",
            "info",
            "Get information about a cluster",
            vec![host(), port(), cluster()],
        ),
        CommandSpec::new(
            "cluster",
            "list",
            "List the clusters",
            vec![host(), port()],
        ),
        CommandSpec::new("cluster", "insert", "Register a new cluster", insert_params),
        CommandSpec::new("cluster", "update", "Update cluster settings", update_params),
        CommandSpec::new(
            "cluster",
            "remove",
            "Remove a cluster",
            vec![host(), port(), cluster(), cluster_user(), cluster_pwd()],
        ),
    ]
}

fn manager_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new(
            "manager",
            "info",
            "Get information about a cluster manager",
            cluster_scoped(vec![
                P::new("manager", Identifier, "Manager identifier").required(),
            ]),
        ),
        CommandSpec::new(
            "manager",
            "list",
            "List the cluster managers",
            cluster_scoped(vec![]),
        ),
    ]
}

/// Limits shared by `server insert` and `server update`.
fn server_limits() -> Vec<P> {
    vec![
        P::new("infobases-limit", Integer, "Infobases per working process"),
        P::new("memory-limit", Integer, "Working process memory limit (KB)"),
        P::new("connections-limit", Integer, "Connections per working process"),
    ]
}

/// Memory and placement settings shared by `server insert` and `server update`.
fn server_memory_settings() -> Vec<P> {
    vec![
        P::new("dedicate-managers", Enum, "Cluster manager placement")
            .with_values(&["all", "none"]),
        P::new(
            "safe-working-processes-memory-limit",
            Integer,
            "Safe working processes memory",
        ),
        P::new("safe-call-memory-limit", Integer, "Safe server call memory"),
        P::new("critical-total-memory", Integer, "Critical total memory"),
        P::new(
            "temporary-allowed-total-memory",
            Integer,
            "Temporarily allowed total memory",
        ),
        P::new(
            "temporary-allowed-total-memory-time-limit",
            Integer,
            "Temporarily allowed memory time limit",
        ),
        P::new("service-principal-name", Text, "Server service principal name"),
        P::new(
            "speech-to-text-model-directory",
            Text,
            "Speech recognition model directory",
        ),
    ]
}

fn server_commands() -> Vec<CommandSpec> {
    let mut insert_extra = vec![
        P::new("agent-host", Host, "Server agent host").required(),
        P::new("agent-port", Port, "Server agent port").required(),
        P::new("port-range", Text, "Port range (min:max)").required(),
        P::new("name", Text, "Server name"),
        P::new("using", Enum, "Server usage").with_values(&["main", "normal"]),
    ];
    insert_extra.extend(server_limits());
    insert_extra.push(P::new("cluster-port", Port, "Cluster manager port"));
    insert_extra.extend(server_memory_settings());
    insert_extra.push(
        P::new(
            "add-prohibiting-assignment-rule",
            Enum,
            "Add a prohibiting assignment rule",
        )
        .with_values(&["yes"]),
    );

    let mut update_extra = vec![
        P::new("server", Identifier, "Server identifier").required(),
        P::new("port-range", Text, "Port range (min:max)"),
        P::new("using", Enum, "Server usage").with_values(&["main", "normal"]),
    ];
    update_extra.extend(server_limits());
    update_extra.extend(server_memory_settings());

    vec![
        CommandSpec::new(
            "server",
            "info",
            "Get information about a working server",
            cluster_scoped(vec![
                P::new("server", Identifier, "Server identifier").required(),
            ]),
        ),
        CommandSpec::new(
            "server",
            "list",
            "List the working servers",
            cluster_scoped(vec![]),
        ),
        CommandSpec::new(
            "server",
            "insert",
            "Register a working server",
            cluster_scoped(insert_extra),
        ),
        CommandSpec::new(
            "server",
            "update",
            "Update working server settings",
            cluster_scoped(update_extra),
        ),
        CommandSpec::new(
            "server",
            "remove",
            "Remove a working server",
            cluster_scoped(vec![
                P::new("server", Identifier, "Server identifier").required(),
            ]),
        ),
    ]
}

fn process_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new(
            "process",
            "info",
            "Get information about a working process",
            cluster_scoped(vec![
                P::new("process", Identifier, "Process identifier").required(),
                P::new("licenses", Boolean, "Include license information"),
            ]),
        ),
        CommandSpec::new(
            "process",
            "list",
            "List the working processes",
            cluster_scoped(vec![
                P::new("server", Identifier, "Server identifier"),
                P::new("licenses", Boolean, "Include license information"),
            ]),
        ),
    ]
}

fn service_commands() -> Vec<CommandSpec> {
    vec![CommandSpec::new(
        "service",
        "list",
        "List the manager services",
        cluster_scoped(vec![]),
    )]
}

fn dbms() -> P {
    P::new("dbms", Enum, "Database management system").with_values(&[
        "MSSQLServer",
        "PostgreSQL",
        "IBMDB2",
        "OracleDatabase",
    ])
}

fn license_distribution() -> P {
    P::new("license-distribution", Enum, "Client license distribution")
        .with_values(&["deny", "allow"])
}

fn infobase_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new(
            "infobase",
            "info",
            "Get information about an infobase",
            cluster_scoped(vec![
                P::new("infobase", Identifier, "Infobase identifier").required(),
                infobase_user(),
                infobase_pwd(),
            ]),
        ),
        CommandSpec::new(
            "infobase",
            "summary info",
            "Get summary information about an infobase",
            cluster_scoped(vec![
                P::new("infobase", Identifier, "Infobase identifier").required(),
            ]),
        ),
        CommandSpec::new(
            "infobase",
            "summary list",
            "List summary information about the infobases",
            cluster_scoped(vec![]),
        ),
        CommandSpec::new(
            "infobase",
            "summary update",
            "Update summary information about an infobase",
            cluster_scoped(vec![
                P::new("infobase", Identifier, "Infobase identifier").required(),
                P::new("descr", Text, "Infobase description"),
            ]),
        ),
        CommandSpec::new(
            "infobase",
            "create",
            "Create an infobase",
            cluster_scoped(vec![
                P::new("create-database", Boolean, "Create the database if it does not exist"),
                P::new("name", Text, "Infobase name").required(),
                dbms().required(),
                P::new("db-server", Host, "Database server").required(),
                P::new("db-name", Text, "Database name").required(),
                P::new("locale", Text, "Infobase locale").required(),
                P::new("db-user", Text, "Database administrator"),
                P::new("db-pwd", Secret, "Database administrator password"),
                P::new("descr", Text, "Infobase description"),
                P::new("date-offset", Integer, "Date offset"),
                P::new("security-level", Integer, "Connection security level"),
                on_off("scheduled-jobs-deny", "Deny scheduled jobs"),
                license_distribution(),
            ]),
        ),
        CommandSpec::new(
            "infobase",
            "update",
            "Update infobase information",
            cluster_scoped(vec![
                P::new("infobase", Identifier, "Infobase identifier").required(),
                infobase_user(),
                infobase_pwd(),
                dbms(),
                P::new("db-server", Host, "Database server"),
                P::new("db-name", Text, "Database name"),
                P::new("db-user", Text, "Database administrator"),
                P::new("db-pwd", Secret, "Database administrator password"),
                P::new("descr", Text, "Infobase description"),
                P::new("denied-from", Text, "Session lock start"),
                P::new("denied-to", Text, "Session lock end"),
                P::new("denied-message", Text, "Session lock message"),
                P::new("denied-parameter", Text, "Session lock parameter"),
                P::new("permission-code", Text, "Permission code"),
                on_off("sessions-deny", "Deny sessions"),
                on_off("scheduled-jobs-deny", "Deny scheduled jobs"),
                license_distribution(),
                P::new(
                    "external-session-manager-connection-string",
                    Text,
                    "External session manager connection string",
                ),
                yes_no(
                    "external-session-manager-required",
                    "External session manager is required",
                ),
                yes_no("reserve-working-processes", "Reserve working processes"),
                P::new("security-profile-name", Text, "Security profile"),
                P::new(
                    "safe-mode-security-profile-name",
                    Text,
                    "Safe mode security profile",
                ),
                yes_no("disable-local-speech-to-text", "Disable local speech recognition"),
                P::new(
                    "configuration-unload-delay-by-working-process-without-active-users",
                    Integer,
                    "Configuration unload delay without active users",
                ),
                P::new(
                    "minimum-scheduled-jobs-start-period-without-active-users",
                    Integer,
                    "Minimum scheduled jobs start period without active users",
                ),
                P::new(
                    "maximum-scheduled-jobs-start-shift-without-active-users",
                    Integer,
                    "Maximum scheduled jobs start shift without active users",
                ),
            ]),
        ),
        CommandSpec::new(
            "infobase",
            "drop",
            "Remove an infobase",
            cluster_scoped(vec![
                P::new("infobase", Identifier, "Infobase identifier").required(),
                infobase_user(),
                infobase_pwd(),
                P::new("drop-database", Boolean, "Drop the database"),
                P::new("clear-database", Boolean, "Clear the database"),
            ]),
        ),
    ]
}

fn connection_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new(
            "connection",
            "info",
            "Get information about a connection",
            cluster_scoped(vec![
                P::new("connection", Identifier, "Connection identifier").required(),
            ]),
        ),
        CommandSpec::new(
            "connection",
            "list",
            "List the connections",
            cluster_scoped(vec![
                P::new("process", Identifier, "Process identifier"),
                P::new("infobase", Identifier, "Infobase identifier"),
                infobase_user(),
                infobase_pwd(),
            ]),
        ),
        CommandSpec::new(
            "connection",
            "disconnect",
            "Close a connection",
            cluster_scoped(vec![
                P::new("process", Identifier, "Process identifier").required(),
                P::new("connection", Identifier, "Connection identifier").required(),
                infobase_user(),
                infobase_pwd(),
            ]),
        ),
    ]
}

fn session_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new(
            "session",
            "info",
            "Get information about a session",
            cluster_scoped(vec![
                P::new("session", Identifier, "Session identifier").required(),
                P::new("licenses", Boolean, "Include license information"),
            ]),
        ),
        CommandSpec::new(
            "session",
            "list",
            "List the sessions",
            cluster_scoped(vec![
                P::new("infobase", Identifier, "Infobase identifier"),
                P::new("licenses", Boolean, "Include license information"),
            ]),
        ),
        CommandSpec::new(
            "session",
            "terminate",
            "Terminate a session",
            cluster_scoped(vec![
                P::new("session", Identifier, "Session identifier").required(),
                P::new("error-message", Text, "Message shown to the user"),
            ]),
        ),
        CommandSpec::new(
            "session",
            "interrupt-current-server-call",
            "Interrupt the current server call",
            cluster_scoped(vec![
                P::new("session", Identifier, "Session identifier").required(),
                P::new("error-message", Text, "Message shown to the user"),
            ]),
        ),
    ]
}

fn lock_commands() -> Vec<CommandSpec> {
    vec![CommandSpec::new(
        "lock",
        "list",
        "List the locks",
        cluster_scoped(vec![
            P::new("infobase", Identifier, "Infobase identifier"),
            P::new("connection", Identifier, "Connection identifier"),
            P::new("session", Identifier, "Session identifier"),
        ]),
    )]
}

/// Rule settings shared by `rule insert` and `rule update`.
fn rule_settings() -> Vec<P> {
    vec![
        P::new("position", Integer, "Position in the rule list").required(),
        P::new("object-type", Text, "Object type"),
        P::new("infobase-name", Text, "Infobase name"),
        P::new("rule-type", Enum, "Rule type").with_values(&["auto", "always", "never"]),
        P::new("application-ext", Text, "Application extension"),
        P::new("priority", Integer, "Rule priority"),
    ]
}

fn rule_commands() -> Vec<CommandSpec> {
    let server = || P::new("server", Identifier, "Server identifier").required();
    let rule = || P::new("rule", Identifier, "Rule identifier").required();

    let mut insert_extra = vec![server()];
    insert_extra.extend(rule_settings());

    let mut update_extra = vec![server(), rule()];
    update_extra.extend(rule_settings());

    vec![
        CommandSpec::new(
            "rule",
            "apply",
            "Apply assignment rules",
            cluster_scoped(vec![
                P::new("full", Boolean, "Full application"),
                P::new("partial", Boolean, "Partial application"),
            ]),
        ),
        CommandSpec::new(
            "rule",
            "info",
            "Get information about an assignment rule",
            cluster_scoped(vec![server(), rule()]),
        ),
        CommandSpec::new(
            "rule",
            "list",
            "List the assignment rules",
            cluster_scoped(vec![server()]),
        ),
        CommandSpec::new(
            "rule",
            "insert",
            "Insert a new assignment rule into the list",
            cluster_scoped(insert_extra),
        ),
        CommandSpec::new(
            "rule",
            "update",
            "Update an existing assignment rule",
            cluster_scoped(update_extra),
        ),
        CommandSpec::new(
            "rule",
            "remove",
            "Remove an assignment rule",
            cluster_scoped(vec![server(), rule()]),
        ),
    ]
}

fn profile_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new(
            "profile",
            "list",
            "List the security profiles",
            cluster_scoped(vec![]),
        ),
        CommandSpec::new(
            "profile",
            "update",
            "Create a security profile or update an existing one",
            cluster_scoped(vec![
                P::new("name", Text, "Profile name").required(),
                P::new("descr", Text, "Profile description"),
                yes_no("config", "Use in the configuration"),
                yes_no("priv", "Privileged mode allowed"),
                yes_no("full-privileged-mode", "Full privileged mode"),
                P::new("privileged-mode-roles", Text, "Privileged mode roles"),
                yes_no("crypto", "Cryptography allowed"),
                yes_no("right-extension", "Rights extension allowed"),
                P::new(
                    "right-extension-definition-roles",
                    Text,
                    "Rights extension definition roles",
                ),
                yes_no("all-modules-extension", "All modules may be extended"),
                P::new(
                    "modules-available-for-extension",
                    Text,
                    "Modules available for extension",
                ),
                P::new(
                    "modules-not-available-for-extension",
                    Text,
                    "Modules not available for extension",
                ),
            ]),
        ),
        CommandSpec::new(
            "profile",
            "remove",
            "Remove a security profile",
            cluster_scoped(vec![P::new("name", Text, "Profile name").required()]),
        ),
    ]
}

fn counter_commands() -> Vec<CommandSpec> {
    let counter = || P::new("counter", Text, "Counter name").required();
    let object = || P::new("object", Text, "Counter object");

    vec![
        CommandSpec::new(
            "counter",
            "list",
            "List the resource counters",
            cluster_scoped(vec![]),
        ),
        CommandSpec::new(
            "counter",
            "info",
            "Get information about a counter",
            cluster_scoped(vec![counter()]),
        ),
        CommandSpec::new(
            "counter",
            "update",
            "Create a counter or update an existing one",
            cluster_scoped(vec![
                P::new("name", Text, "Counter name").required(),
                P::new("collection-time", Text, "Collection time").required(),
                P::new("group", Enum, "Grouping")
                    .with_values(&["users", "data-separation"])
                    .required(),
                P::new("filter-type", Enum, "Filter type")
                    .with_values(&["all-selected", "all-but-selected", "all"])
                    .required(),
                P::new("filter", Text, "Filter").required(),
                analyze("duration", "Call duration"),
                analyze("cpu-time", "CPU time"),
                analyze("memory", "Memory"),
                analyze("read", "Bytes read"),
                analyze("write", "Bytes written"),
                analyze("duration-dbms", "DBMS call duration"),
                analyze("dbms-bytes", "DBMS bytes"),
                analyze("service", "Service call duration"),
                analyze("call", "Number of calls"),
                analyze("number-of-active-sessions", "Active sessions"),
                analyze("number-of-sessions", "Sessions"),
                P::new("descr", Text, "Counter description"),
            ]),
        ),
        CommandSpec::new(
            "counter",
            "values",
            "Show the current values of a resource counter",
            cluster_scoped(vec![counter(), object()]),
        ),
        CommandSpec::new(
            "counter",
            "remove",
            "Remove a resource counter",
            cluster_scoped(vec![P::new("name", Text, "Counter name").required()]),
        ),
        CommandSpec::new(
            "counter",
            "clear",
            "Clear the values of a counter",
            cluster_scoped(vec![counter(), object()]),
        ),
        CommandSpec::new(
            "counter",
            "accumulated-values",
            "List the accumulated values of a counter",
            cluster_scoped(vec![counter(), object()]),
        ),
    ]
}

fn limit_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new(
            "limit",
            "list",
            "List the resource limits",
            cluster_scoped(vec![]),
        ),
        CommandSpec::new(
            "limit",
            "info",
            "Get information about a limit",
            cluster_scoped(vec![P::new("limit", Text, "Limit name").required()]),
        ),
        CommandSpec::new(
            "limit",
            "update",
            "Create a limit or update an existing one",
            cluster_scoped(vec![
                P::new("name", Text, "Limit name").required(),
                P::new("action", Enum, "Action when the limit is exceeded")
                    .with_values(&[
                        "none",
                        "set-low-priority-thread",
                        "interrupt-current-call",
                        "interrupt-session",
                    ])
                    .required(),
                P::new("counter", Text, "Counter name"),
                P::new("duration", Integer, "Call duration"),
                P::new("cpu-time", Integer, "CPU time"),
                P::new("memory", Integer, "Memory"),
                P::new("read", Integer, "Bytes read"),
                P::new("write", Integer, "Bytes written"),
                P::new("duration-dbms", Integer, "DBMS call duration"),
                P::new("dbms-bytes", Integer, "DBMS bytes"),
                P::new("service", Integer, "Service call duration"),
                P::new("call", Integer, "Number of calls"),
                P::new("number-of-active-sessions", Integer, "Active sessions"),
                P::new("number-of-sessions", Integer, "Sessions"),
                P::new("error-message", Text, "Message shown to the user"),
                P::new("descr", Text, "Limit description"),
            ]),
        ),
        CommandSpec::new(
            "limit",
            "remove",
            "Remove a resource consumption limit",
            cluster_scoped(vec![P::new("name", Text, "Limit name").required()]),
        ),
    ]
}

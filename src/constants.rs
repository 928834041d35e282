// src/constants.rs

/// The name of the directory (inside the system config dir) holding rac-admin state.
pub const APP_DIR_NAME: &str = "rac-admin";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "RAC_ADMIN_CONFIG_DIR";

/// The name of the settings file (inside the config dir).
pub const SETTINGS_FILENAME: &str = "settings.toml";

/// The name of the persisted variables file (inside the config dir).
pub const VARIABLES_FILENAME: &str = "variables.json";

/// Name used for the external executable in previews.
pub const DEFAULT_PROGRAM_NAME: &str = "rac";

/// Seconds the external executable may run before it is killed.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// --- Reserved variables ---

pub const RAC_PATH_VAR: &str = "rac_path";
pub const RAS_SERVICE_VAR: &str = "ras_service";
pub const DEFAULT_HOST_VAR: &str = "default_host";
pub const DEFAULT_PORT_VAR: &str = "default_port";

/// Every reserved variable name, in seeding order.
pub const RESERVED_VARIABLE_NAMES: [&str; 4] = [
    RAC_PATH_VAR,
    RAS_SERVICE_VAR,
    DEFAULT_HOST_VAR,
    DEFAULT_PORT_VAR,
];

/// Host used when neither the parameters nor the store provide one.
pub const FALLBACK_HOST: &str = "localhost";

/// Port used when neither the parameters nor the store provide one.
pub const FALLBACK_PORT: &str = "1545";

/// Default Windows service name of the 1C remote administration server.
pub const DEFAULT_RAS_SERVICE: &str = "1C:Enterprise 8.3 Remote Server";

/// Parameter names that are folded into the trailing `host:port` token.
pub const HOST_PARAM: &str = "host";
pub const PORT_PARAM: &str = "port";

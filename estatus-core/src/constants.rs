/// entities-status version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Response header carrying the next-page cursor.
pub const CONTINUE_HEADER: &str = "Sensu-Continue";

/// Query parameter the cursor is echoed back in.
pub const CONTINUE_PARAM: &str = "continue";

/// Query parameter bounding the page size.
pub const LIMIT_PARAM: &str = "limit";

/// Path of the login endpoint, relative to the API URL.
pub const AUTH_PATH: &str = "/auth";

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "ESTATUS_LOG";

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILENAME: &str = "entities-status.toml";

/// Process exit code for a successful run (Sensu OK).
pub const EXIT_OK: i32 = 0;

/// Process exit code for a failed run (Sensu CRITICAL).
pub const EXIT_CRITICAL: i32 = 2;


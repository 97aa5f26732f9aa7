//! # Constants
//!
//! Response bodies, environment variable names and defaults shared by the
//! probes and the web layer.

/// Environment variables consumed by the database probe
pub mod database_env {
    pub const HOST: &str = "DB_HOST";
    pub const PORT: &str = "DB_PORT";
    pub const NAME: &str = "DB_NAME";
    pub const USER: &str = "DB_USER";
    pub const PASSWORD: &str = "DB_PASSWORD";
}

/// Environment variable holding the instance identity
pub const INSTANCE_IDENTITY_ENV: &str = "HOSTNAME";

/// Written in place of the identity when `HOSTNAME` is unset
pub const UNKNOWN_INSTANCE_IDENTITY: &str = "unknown";

/// Query executed by the database probe
pub const PROBE_QUERY: &str = "SELECT 1";

/// Fixed response bodies
pub mod responses {
    pub const INDEX_HTML: &str = "<a href=\"db\">Test DB</a><br /><a href=\"fs\">Test FS</a><br />";
    pub const DB_CONNECTED: &str = "Connected to DB";
    pub const DB_FAILED: &str = "Failed connection to DB";
    pub const FS_SUCCESS_PREFIX: &str = "Success writing file<br />";
    pub const FS_FAILED: &str = "Failed to write/read file.";
}

/// Startup defaults
pub mod defaults {
    pub const ENVIRONMENT: &str = "development";
    pub const BIND_ADDRESS: &str = "0.0.0.0:8080";
    pub const SCRATCH_PATH: &str = "/staging/scratch.txt";
}

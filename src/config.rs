/// Configuration constants for the Traffic Manager REST API
pub mod api {
    /// Base path of the active configuration tree
    pub const BASE_PATH: &str = "/api/tm/6.0/config/active";

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Environment variable names for settings
pub mod env {
    /// Appliance base URL, e.g. `https://vtm.example.com:9070`
    pub const URL: &str = "vtm_url";

    /// Basic auth username
    pub const USER: &str = "vtm_user";

    /// Basic auth password
    pub const PASSWORD: &str = "vtm_pswd";

    /// Disable TLS certificate verification when set
    pub const INSECURE: &str = "vtm_insecure";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Maximum number of detail requests in flight
    pub const CONCURRENCY: usize = 8;

    /// Instance name that selects the table listing
    pub const ALL: &str = "all";
}

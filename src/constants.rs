//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default base URL of the NHL api-web service, including the version segment
pub const DEFAULT_API_DOMAIN: &str = "https://api-web.nhle.com/v1";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool.
/// Schedule pagination is fully sequential, one request in flight at a time.
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Season boundary constants
pub mod season {
    /// Month of the lookup date used to resolve a season's boundary dates (September)
    pub const LOOKUP_MONTH: u32 = 9;

    /// Day-of-month of the lookup date used to resolve a season's boundary dates
    pub const LOOKUP_DAY: u32 = 1;

    /// Earliest season end year the NHL schedule API covers (1917-1918 season)
    pub const MIN_END_YEAR: i32 = 1918;

    /// Latest season end year accepted before assuming a typo
    pub const MAX_END_YEAR: i32 = 2100;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "NHL_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "NHL_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds (default: 30)
    pub const HTTP_TIMEOUT: &str = "NHL_HTTP_TIMEOUT";
}

//! Client-wide constants.

/// Production API root of the Quip platform.
pub const DEFAULT_BASE_URL: &str = "https://platform.quip.com/1";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Number of threads returned by the recent-threads listing when no count is given.
pub const DEFAULT_RECENT_THREADS_COUNT: u32 = 10;

/// Separator used when a list of ids is sent as a single parameter.
pub const ID_SEPARATOR: &str = ",";

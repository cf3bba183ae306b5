//! Crate-wide configuration defaults.

/// Fixed page capacity for host enumeration responses.
///
/// Host pages are not client-sizable, unlike the page-number pagination
/// used by record list endpoints.
pub const HOSTS_PAGE_LIMIT: u128 = 256;

/// Query parameter carrying the host-enumeration cursor.
pub const CURSOR_PARAM: &str = "start";

/// Environment variable naming the allocation snapshot file.
pub const CACHE_FILE_ENV: &str = "IPAM_CACHE_FILE";

/// Fallback snapshot file when the environment does not name one.
pub const DEFAULT_CACHE_FILE: &str = "allocation_cache.json";

//! Cursor pagination for host enumeration.
//!
//! - [`HostsPaginator`] - bounds a hosts sequence into fixed-size pages
//! - [`HostsPage`] - the response shape with next/previous links

mod paginator;

// Re-export public types
pub use paginator::{remove_query_param, replace_query_param, HostsPage, HostsPaginator};

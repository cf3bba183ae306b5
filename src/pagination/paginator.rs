//! Address-keyed cursor pagination over a hosts sequence.
//!
//! The cursor is the address at the page boundary, carried in a query
//! parameter, not a numeric offset. Decoding re-derives the page window
//! from scratch, so repeated or out-of-order requests are idempotent.

use serde::Serialize;
use url::Url;

use crate::addressing::{HostEntry, HostsSequence};
use crate::config;

/// One page of host enumeration results with navigation links.
///
/// Serializes to the wire shape
/// `{ "next": URL|null, "previous": URL|null, "results": [...] }`.
#[derive(Debug, Clone, Serialize)]
pub struct HostsPage {
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<HostEntry>,
}

/// Bounds a [`HostsSequence`] into fixed-size pages keyed by address.
#[derive(Debug, Clone)]
pub struct HostsPaginator {
    limit: u128,
    cursor_param: &'static str,
}

impl Default for HostsPaginator {
    fn default() -> Self {
        HostsPaginator {
            limit: config::HOSTS_PAGE_LIMIT,
            cursor_param: config::CURSOR_PARAM,
        }
    }
}

impl HostsPaginator {
    pub fn new(limit: u128, cursor_param: &'static str) -> HostsPaginator {
        HostsPaginator {
            limit,
            cursor_param,
        }
    }

    /// Produce the page addressed by `request_url`'s cursor parameter.
    ///
    /// A missing, unparsable, or out-of-range cursor restarts enumeration
    /// at the first page; a bad cursor is never an error to the caller.
    /// Materializing the page costs at most `limit` store point queries;
    /// the navigation links are pure arithmetic.
    pub fn paginate(&self, hosts: &HostsSequence, request_url: &Url) -> HostsPage {
        let offset = self.request_offset(hosts, request_url);
        let page_end = offset.saturating_add(self.limit);

        let results: Vec<HostEntry> = hosts.slice(offset, Some(page_end)).iter().collect();

        let next = if page_end < hosts.len() {
            let boundary = hosts.address_at(page_end);
            Some(replace_query_param(request_url, self.cursor_param, &boundary.to_string()).into())
        } else {
            None
        };

        let previous = if offset == 0 {
            None
        } else if offset <= self.limit {
            // back to the first page: the cursor parameter is stripped,
            // not set to the first address
            Some(remove_query_param(request_url, self.cursor_param).into())
        } else {
            let boundary = hosts.address_at(offset - self.limit);
            Some(replace_query_param(request_url, self.cursor_param, &boundary.to_string()).into())
        };

        HostsPage {
            next,
            previous,
            results,
        }
    }

    /// Decode the request's cursor into a window offset, 0 when absent or
    /// not resumable.
    fn request_offset(&self, hosts: &HostsSequence, request_url: &Url) -> u128 {
        let cursor = request_url
            .query_pairs()
            .find(|(key, _)| key == self.cursor_param)
            .map(|(_, value)| value.into_owned());
        let Some(cursor) = cursor else {
            return 0;
        };
        match hosts.index_of(&cursor) {
            Ok(offset) => offset,
            Err(e) => {
                log::debug!("cursor '{cursor}' not resumable ({e}), restarting at first page");
                0
            }
        }
    }
}

/// Return `url` with the `key` query parameter set to `value`, replacing
/// any existing occurrence.
pub fn replace_query_param(url: &Url, key: &str, value: &str) -> Url {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let mut out = url.clone();
    out.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(key, value)
        .finish();
    out
}

/// Return `url` with the `key` query parameter removed.
pub fn remove_query_param(url: &Url, key: &str) -> Url {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let mut out = url.clone();
    if kept.is_empty() {
        out.set_query(None);
    } else {
        out.query_pairs_mut().clear().extend_pairs(kept).finish();
    }
    out
}

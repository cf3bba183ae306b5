//! Lazy host enumeration over an address space.
//!
//! [`HostsSequence`] presents a subnet's candidate host addresses as a
//! read-only, randomly-indexable, sliceable sequence of (address, used)
//! pairs. Elements are computed on demand from O(1) arithmetic plus one
//! point query against the allocation store, so the full range is never
//! materialized regardless of subnet size.

use std::net::IpAddr;

use super::space::{AddressSpace, AddressingError};

/// Point-query capability over the sparse allocation record set,
/// pre-filtered to one subnet.
pub trait UsedAddressLookup {
    fn is_used(&self, address: &IpAddr) -> bool;
}

/// One enumerated host candidate.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct HostEntry {
    pub address: IpAddr,
    pub used: bool,
}

/// A `[start, stop)` window of host offsets over an [`AddressSpace`].
///
/// Slicing produces a narrower window over the same space and lookup;
/// it never copies or computes host data eagerly.
#[derive(Clone)]
pub struct HostsSequence<'a> {
    space: AddressSpace,
    used: &'a dyn UsedAddressLookup,
    start: u128,
    stop: u128,
}

impl<'a> HostsSequence<'a> {
    /// Full-range sequence over every enumerable host of `space`.
    pub fn new(space: AddressSpace, used: &'a dyn UsedAddressLookup) -> HostsSequence<'a> {
        HostsSequence {
            space,
            used,
            start: 0,
            stop: space.host_count(),
        }
    }

    /// Number of hosts in this window. O(1).
    pub fn len(&self) -> u128 {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.stop == self.start
    }

    /// Host at window index `i`, with its used flag.
    ///
    /// Costs exactly one store point query. `i` must be below
    /// [`len`](Self::len); violating that is a caller bug.
    pub fn get(&self, i: u128) -> HostEntry {
        assert!(
            i < self.len(),
            "host index {i} out of range for window of {len}",
            len = self.len()
        );
        let address = self.space.address_at(self.start + i);
        HostEntry {
            used: self.used.is_used(&address),
            address,
        }
    }

    /// Address at window index `i`, without querying the used flag.
    ///
    /// Pagination links are built from this so a page of size k costs
    /// exactly k store queries.
    pub fn address_at(&self, i: u128) -> IpAddr {
        assert!(
            i < self.len(),
            "host index {i} out of range for window of {len}",
            len = self.len()
        );
        self.space.address_at(self.start + i)
    }

    /// Narrow the window to `[start, stop)`, relative to this window.
    ///
    /// `stop` defaults to [`len`](Self::len) and is clamped so the result
    /// never exceeds the current window. Offsets accumulate against the
    /// original address space, so repeated slicing composes:
    /// `s.slice(5, Some(20)).slice(3, Some(10))` equals
    /// `s.slice(8, Some(15))`.
    pub fn slice(&self, start: u128, stop: Option<u128>) -> HostsSequence<'a> {
        let stop = stop.unwrap_or_else(|| self.len()).min(self.len());
        let start = start.min(stop);
        HostsSequence {
            space: self.space,
            used: self.used,
            start: self.start + start,
            stop: self.start + stop,
        }
    }

    /// Decode an address into its index within this window.
    ///
    /// Delegates to [`AddressSpace::index_of`] and then requires the
    /// absolute offset to fall inside the window. The returned index is
    /// window-relative, so it can feed [`slice`](Self::slice) directly.
    /// Used to decode incoming pagination cursors.
    pub fn index_of(&self, text: &str) -> Result<u128, AddressingError> {
        let absolute = self.space.index_of(text)?;
        if absolute < self.start || absolute >= self.stop {
            return Err(AddressingError::IndexOutOfRange {
                text: text.to_string(),
            });
        }
        Ok(absolute - self.start)
    }

    /// Lazy iteration in window order; each step is one [`get`](Self::get).
    pub fn iter(&self) -> impl Iterator<Item = HostEntry> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }
}

/// First host in the window whose address is not allocated, scanning
/// lazily from the window start with one point query per step.
pub fn first_available(hosts: &HostsSequence) -> Option<IpAddr> {
    hosts
        .iter()
        .find(|entry| !entry.used)
        .map(|entry| entry.address)
}

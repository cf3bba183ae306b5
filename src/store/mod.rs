//! Allocation store boundary.
//!
//! The enumeration core never depends on a storage technology; it sees
//! the store only through [`AllocationStore`] point queries and the
//! per-subnet [`SubnetAllocations`] view.

mod cache;

use std::collections::HashSet;
use std::net::IpAddr;

use uuid::Uuid;

use crate::addressing::UsedAddressLookup;
use crate::models::{IpAddress, Subnet};

// Re-export public types
pub use cache::{read_allocation_cache, Snapshot};

/// Read-only query surface of the persistence collaborator.
///
/// Implementations are externally synchronized; the core issues point
/// queries only and never holds a transaction across a pagination call.
pub trait AllocationStore {
    /// Look up a subnet record by id.
    fn find_subnet(&self, id: &Uuid) -> Option<&Subnet>;

    /// Whether `address` is allocated within the given subnet.
    fn address_is_used(&self, subnet_id: &Uuid, address: &IpAddr) -> bool;
}

/// One subnet's allocation set, viewed as a used-address predicate.
pub struct SubnetAllocations<'a> {
    store: &'a dyn AllocationStore,
    subnet_id: Uuid,
}

impl<'a> SubnetAllocations<'a> {
    pub fn new(store: &'a dyn AllocationStore, subnet_id: Uuid) -> SubnetAllocations<'a> {
        SubnetAllocations { store, subnet_id }
    }
}

impl UsedAddressLookup for SubnetAllocations<'_> {
    fn is_used(&self, address: &IpAddr) -> bool {
        self.store.address_is_used(&self.subnet_id, address)
    }
}

/// Hash-indexed store over a loaded snapshot.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    subnets: Vec<Subnet>,
    used: HashSet<(Uuid, String)>,
}

impl InMemoryStore {
    /// Build the store, indexing allocation records by (subnet, address).
    ///
    /// Address text is canonicalized through [`IpAddr`] so lookups are
    /// insensitive to the snapshot's formatting; records that do not parse
    /// are kept verbatim and logged.
    pub fn new(subnets: Vec<Subnet>, allocations: &[IpAddress]) -> InMemoryStore {
        let used = allocations
            .iter()
            .map(|record| {
                let text = match record.ip_address.parse::<IpAddr>() {
                    Ok(addr) => addr.to_string(),
                    Err(_) => {
                        log::warn!(
                            "Allocation record {id} has unparsable address '{addr}'",
                            id = record.id,
                            addr = record.ip_address
                        );
                        record.ip_address.clone()
                    }
                };
                (record.subnet_id, text)
            })
            .collect();
        InMemoryStore { subnets, used }
    }

    /// Subnets known to this store, in load order.
    pub fn subnets(&self) -> &[Subnet] {
        &self.subnets
    }
}

impl AllocationStore for InMemoryStore {
    fn find_subnet(&self, id: &Uuid) -> Option<&Subnet> {
        self.subnets.iter().find(|s| s.id == *id)
    }

    fn address_is_used(&self, subnet_id: &Uuid, address: &IpAddr) -> bool {
        self.used.contains(&(*subnet_id, address.to_string()))
    }
}

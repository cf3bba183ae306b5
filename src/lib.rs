pub mod addressing;
pub mod config;
pub mod models;
pub mod output;
pub mod pagination;
pub mod store;

use std::error::Error;
use std::net::IpAddr;

use url::Url;
use uuid::Uuid;

pub use addressing::{
    first_available, AddressFamily, AddressSpace, AddressingError, HostEntry, HostsSequence,
    UsedAddressLookup,
};
pub use pagination::{HostsPage, HostsPaginator};
pub use store::{read_allocation_cache, AllocationStore, InMemoryStore, SubnetAllocations};

/// Enumerate one page of a subnet's hosts.
///
/// Resolves the subnet, derives its address space, and paginates with the
/// cursor carried on `request_url`. The sequence is rebuilt per call;
/// nothing is cached across requests.
pub fn subnet_hosts_page(
    store: &dyn AllocationStore,
    subnet_id: &Uuid,
    request_url: &Url,
    paginator: &HostsPaginator,
) -> Result<HostsPage, Box<dyn Error>> {
    let subnet = store
        .find_subnet(subnet_id)
        .ok_or_else(|| format!("Subnet not found: {subnet_id}"))?;
    let space = subnet.address_space()?;
    let allocations = SubnetAllocations::new(store, *subnet_id);
    let hosts = HostsSequence::new(space, &allocations);
    Ok(paginator.paginate(&hosts, request_url))
}

/// First unallocated host address of a subnet, if any.
pub fn subnet_first_available(
    store: &dyn AllocationStore,
    subnet_id: &Uuid,
) -> Result<Option<IpAddr>, Box<dyn Error>> {
    let subnet = store
        .find_subnet(subnet_id)
        .ok_or_else(|| format!("Subnet not found: {subnet_id}"))?;
    let space = subnet.address_space()?;
    let allocations = SubnetAllocations::new(store, *subnet_id);
    let hosts = HostsSequence::new(space, &allocations);
    Ok(first_available(&hosts))
}

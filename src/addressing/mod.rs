//! Virtual host enumeration primitives.
//!
//! This module contains the addressing core:
//! - [`AddressSpace`] - integer view of a subnet's boundaries
//! - [`HostsSequence`] - lazy, sliceable (address, used) sequence
//! - [`UsedAddressLookup`] - injected allocation point query

mod hosts;
mod space;

// Re-export public types
pub use hosts::{first_available, HostEntry, HostsSequence, UsedAddressLookup};
pub use space::{addr_to_int, AddressFamily, AddressSpace, AddressingError};

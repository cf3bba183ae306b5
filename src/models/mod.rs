//! Domain models for the IPAM service.
//!
//! This module contains the stored records the host-enumeration core
//! collaborates with:
//! - [`Subnet`] - a tracked subnet and its CIDR value
//! - [`IpAddress`] - a per-subnet allocation record

mod ip_address;
mod subnet;

// Re-export public types
pub use ip_address::IpAddress;
pub use subnet::Subnet;

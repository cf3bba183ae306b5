//! Address-space arithmetic for a single subnet.
//!
//! Provides [`AddressSpace`] for converting between textual and integer
//! address forms and for computing the enumerable host-index domain,
//! without ever walking the address range itself.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use ipnet::IpNet;
use thiserror::Error;

/// Addressing scheme of a subnet. Fixes the integer width (32 or 128 bits)
/// and the broadcast-exclusion rule for the lifetime of an [`AddressSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    V4,
    V6,
}

/// Errors from address conversions and cursor decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressingError {
    /// The text is not a valid address of the space's family.
    #[error("invalid {family:?} address: {text}")]
    ParseError {
        family: AddressFamily,
        text: String,
    },
    /// The address is valid but falls outside the enumerable host range.
    #[error("address {text} is outside the enumerable host range")]
    IndexOutOfRange { text: String },
    /// The subnet holds a single address and has no enumerable hosts.
    #[error("subnet {0} has no enumerable host range")]
    EmptyRange(String),
}

/// A subnet's network/broadcast boundaries in integer form.
///
/// Both families are normalized into `u128`; for V4 the upper 96 bits are
/// zero. Constructed once per subnet lookup from its stored CIDR, then
/// immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressSpace {
    network: u128,
    broadcast: u128,
    family: AddressFamily,
}

impl AddressSpace {
    /// Create an address space from raw integer boundaries.
    ///
    /// Returns [`AddressingError::EmptyRange`] unless `network < broadcast`.
    pub fn new(
        network: u128,
        broadcast: u128,
        family: AddressFamily,
    ) -> Result<AddressSpace, AddressingError> {
        if network >= broadcast {
            return Err(AddressingError::EmptyRange(
                int_to_addr(network, family).to_string(),
            ));
        }
        Ok(AddressSpace {
            network,
            broadcast,
            family,
        })
    }

    /// Derive the address space from a subnet's stored CIDR value.
    ///
    /// Single-address nets (/32, /128) are rejected: their network and
    /// broadcast boundaries coincide, leaving no host range.
    pub fn from_net(net: &IpNet) -> Result<AddressSpace, AddressingError> {
        let family = match net {
            IpNet::V4(_) => AddressFamily::V4,
            IpNet::V6(_) => AddressFamily::V6,
        };
        let network = addr_to_int(net.network());
        let broadcast = addr_to_int(net.broadcast());
        if network >= broadcast {
            return Err(AddressingError::EmptyRange(net.to_string()));
        }
        AddressSpace::new(network, broadcast, family)
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// Number of enumerable host addresses.
    ///
    /// The network address is always excluded. The broadcast address is
    /// excluded only for V4; V6 has no distinct broadcast semantics. This
    /// is the one place the family branch happens.
    pub fn host_count(&self) -> u128 {
        match self.family {
            AddressFamily::V4 => self.broadcast - self.network - 1,
            AddressFamily::V6 => self.broadcast - self.network,
        }
    }

    /// Address whose integer value is `network + 1 + offset`.
    ///
    /// `offset` must be below [`host_count`](Self::host_count); violating
    /// that is a caller bug, not a recoverable condition.
    pub fn address_at(&self, offset: u128) -> IpAddr {
        assert!(
            offset < self.host_count(),
            "host offset {offset} out of range for {count} hosts",
            count = self.host_count()
        );
        int_to_addr(self.network + 1 + offset, self.family)
    }

    /// Inverse of [`address_at`](Self::address_at): map address text back
    /// to its host offset.
    ///
    /// Fails with [`AddressingError::ParseError`] if `text` is not an
    /// address of this space's family, and
    /// [`AddressingError::IndexOutOfRange`] if the offset falls outside
    /// `[0, host_count())`.
    pub fn index_of(&self, text: &str) -> Result<u128, AddressingError> {
        let value = self.parse_address(text)?;
        let index = value
            .checked_sub(self.network + 1)
            .ok_or_else(|| AddressingError::IndexOutOfRange {
                text: text.to_string(),
            })?;
        if index >= self.host_count() {
            return Err(AddressingError::IndexOutOfRange {
                text: text.to_string(),
            });
        }
        Ok(index)
    }

    /// Parse `text` as an address of this space's family.
    fn parse_address(&self, text: &str) -> Result<u128, AddressingError> {
        let parse_error = || AddressingError::ParseError {
            family: self.family,
            text: text.to_string(),
        };
        match self.family {
            AddressFamily::V4 => text
                .parse::<Ipv4Addr>()
                .map(|a| u32::from(a) as u128)
                .map_err(|_| parse_error()),
            AddressFamily::V6 => text
                .parse::<Ipv6Addr>()
                .map(u128::from)
                .map_err(|_| parse_error()),
        }
    }
}

/// Normalize an address into its `u128` integer value.
pub fn addr_to_int(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(a) => u32::from(a) as u128,
        IpAddr::V6(a) => u128::from(a),
    }
}

/// Render an integer value as an address of the given family.
fn int_to_addr(value: u128, family: AddressFamily) -> IpAddr {
    match family {
        AddressFamily::V4 => IpAddr::V4(Ipv4Addr::from(value as u32)),
        AddressFamily::V6 => IpAddr::V6(Ipv6Addr::from(value)),
    }
}

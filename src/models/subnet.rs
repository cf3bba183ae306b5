//! Subnet record model.

use chrono::{DateTime, Utc};
use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::addressing::{AddressSpace, AddressingError};

/// A tracked subnet, as stored by the persistence collaborator.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Subnet {
    /// Record identifier.
    pub id: Uuid,
    /// Human-readable subnet name.
    pub name: String,
    /// The subnet's CIDR value; source of truth for its boundaries.
    pub cidr: IpNet,
    /// Free-form description.
    pub description: Option<String>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Subnet {
    /// Create a fresh record with a generated id and current timestamps.
    pub fn new(name: &str, cidr: IpNet) -> Subnet {
        let now = Utc::now();
        Subnet {
            id: Uuid::new_v4(),
            name: name.to_string(),
            cidr,
            description: None,
            created: now,
            modified: now,
        }
    }

    /// Derive the enumerable address space from the stored CIDR.
    pub fn address_space(&self) -> Result<AddressSpace, AddressingError> {
        AddressSpace::from_net(&self.cidr)
    }
}

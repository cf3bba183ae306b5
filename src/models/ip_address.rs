//! Allocated IP address record model.

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An allocation record tying one address to its owning subnet.
///
/// The address is stored in textual form, matching how the persistence
/// collaborator keeps and compares it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IpAddress {
    /// Record identifier.
    pub id: Uuid,
    /// Owning subnet record.
    pub subnet_id: Uuid,
    /// The allocated address, canonical textual form.
    pub ip_address: String,
    /// Free-form description.
    pub description: Option<String>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl IpAddress {
    /// Create a fresh record with a generated id and current timestamps.
    pub fn new(subnet_id: Uuid, address: IpAddr) -> IpAddress {
        let now = Utc::now();
        IpAddress {
            id: Uuid::new_v4(),
            subnet_id,
            ip_address: address.to_string(),
            description: None,
            created: now,
            modified: now,
        }
    }
}

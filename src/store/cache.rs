//! Allocation snapshot loading.
//!
//! Reads a JSON snapshot of subnets and allocation records into an
//! [`InMemoryStore`], for the CLI and tests.

use std::error::Error;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::InMemoryStore;
use crate::models::{IpAddress, Subnet};

/// On-disk snapshot shape.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Snapshot {
    /// Tracked subnets.
    pub subnets: Vec<Subnet>,
    /// Allocation records across all subnets.
    pub ip_addresses: Vec<IpAddress>,
}

/// Read an allocation snapshot from a JSON file.
///
/// # Arguments
/// * `cache_file` - Path to the snapshot file.
///
/// # Returns
/// * `Ok(InMemoryStore)` - The loaded store
/// * `Err` - If the file is missing or does not parse
pub fn read_allocation_cache(cache_file: &str) -> Result<InMemoryStore, Box<dyn Error>> {
    if !Path::new(cache_file).exists() {
        return Err(format!("Snapshot file does not exist: {cache_file}").into());
    }
    log::info!("Reading allocation snapshot: {cache_file}");

    let json = std::fs::read_to_string(cache_file)
        .map_err(|e| format!("Error reading snapshot file {cache_file}: {e}"))?;

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let snapshot: Snapshot =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            format!(
                "Error parsing snapshot JSON: path={path} error={e}",
                path = e.path()
            )
        })?;

    log::info!(
        "Loaded {subnets} subnets and {records} allocation records",
        subnets = snapshot.subnets.len(),
        records = snapshot.ip_addresses.len()
    );

    Ok(InMemoryStore::new(snapshot.subnets, &snapshot.ip_addresses))
}

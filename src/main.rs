use std::error::Error;

use ipam_hosts::output::print_page;
use ipam_hosts::{config, read_allocation_cache, subnet_hosts_page, AllocationStore, HostsPaginator};
use url::Url;
use uuid::Uuid;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().collect();
    let cache_file = std::env::var(config::CACHE_FILE_ENV)
        .unwrap_or_else(|_| config::DEFAULT_CACHE_FILE.to_string());

    let store = read_allocation_cache(&cache_file)?;

    let Some(subnet_arg) = args.get(1) else {
        // No subnet requested: list what the snapshot holds.
        for subnet in store.subnets() {
            println!("{id}  {cidr:<24} {name}", id = subnet.id, cidr = subnet.cidr.to_string(), name = subnet.name);
        }
        return Ok(());
    };

    let subnet_id: Uuid = subnet_arg
        .parse()
        .map_err(|e| format!("Invalid subnet id '{subnet_arg}': {e}"))?;
    let subnet = store
        .find_subnet(&subnet_id)
        .ok_or_else(|| format!("Subnet not found in snapshot: {subnet_id}"))?
        .clone();

    let mut request_url = Url::parse(&format!(
        "http://localhost/api/v1/subnet/{subnet_id}/hosts/"
    ))?;
    if let Some(cursor) = args.get(2) {
        request_url
            .query_pairs_mut()
            .append_pair(config::CURSOR_PARAM, cursor);
    }

    let page = subnet_hosts_page(
        &store,
        &subnet_id,
        &request_url,
        &HostsPaginator::default(),
    )?;
    print_page(&subnet, &page);

    Ok(())
}

//! Integration tests for ipam-hosts
//!
//! These tests verify the complete workflow from reading a snapshot to
//! paginating a subnet's hosts through cursor links.

use ipam_hosts::{
    read_allocation_cache, subnet_first_available, subnet_hosts_page, HostsPaginator,
};
use url::Url;
use uuid::Uuid;

const FIXTURE: &str = "src/tests/test_data/allocation_cache_01.json";
const LAB_V4: &str = "9f0f1d5e-3a50-4a6e-9c28-0f2d6d04a3b1";
const OFFICE_V6: &str = "4c1f2a77-88f0-4e9e-b3a7-5b4d1f0e9c22";

fn subnet_url(id: &Uuid) -> Url {
    Url::parse(&format!("http://ipam.local/api/v1/subnet/{id}/hosts/")).unwrap()
}

/// Decoded cursor value from a navigation link.
fn cursor_of(link: &str) -> Option<String> {
    Url::parse(link)
        .unwrap()
        .query_pairs()
        .find(|(k, _)| k == "start")
        .map(|(_, v)| v.into_owned())
}

#[test]
fn test_forward_walk_through_v4_subnet() {
    let store = read_allocation_cache(FIXTURE).expect("Failed to read snapshot");
    let id: Uuid = LAB_V4.parse().unwrap();
    let paginator = HostsPaginator::new(10, "start");

    // First page: no cursor
    let page = subnet_hosts_page(&store, &id, &subnet_url(&id), &paginator)
        .expect("Failed to paginate");
    assert_eq!(page.results.len(), 10);
    assert_eq!(page.results[0].address.to_string(), "10.10.0.1");
    assert_eq!(page.results[9].address.to_string(), "10.10.0.10");
    assert!(page.previous.is_none());

    let used: Vec<String> = page
        .results
        .iter()
        .filter(|e| e.used)
        .map(|e| e.address.to_string())
        .collect();
    assert_eq!(used, vec!["10.10.0.1", "10.10.0.2", "10.10.0.5"]);

    // Second page via the next link
    let next = page.next.expect("253 hosts need more than one page");
    assert_eq!(cursor_of(&next).as_deref(), Some("10.10.0.11"));
    let page = subnet_hosts_page(&store, &id, &Url::parse(&next).unwrap(), &paginator)
        .expect("Failed to paginate");
    assert_eq!(page.results[0].address.to_string(), "10.10.0.11");
    assert_eq!(page.results[9].address.to_string(), "10.10.0.20");

    // One page back from page two strips the cursor entirely
    let previous = page.previous.expect("page two has a previous link");
    assert_eq!(cursor_of(&previous), None);
    assert_eq!(previous, subnet_url(&id).to_string());
}

#[test]
fn test_last_page_of_v4_subnet() {
    let store = read_allocation_cache(FIXTURE).expect("Failed to read snapshot");
    let id: Uuid = LAB_V4.parse().unwrap();
    let paginator = HostsPaginator::new(10, "start");

    // /24 has 253 hosts; offset 250 starts the final short page
    let request = Url::parse(&format!(
        "http://ipam.local/api/v1/subnet/{id}/hosts/?start=10.10.0.251"
    ))
    .unwrap();
    let page = subnet_hosts_page(&store, &id, &request, &paginator).expect("Failed to paginate");

    let addrs: Vec<String> = page.results.iter().map(|e| e.address.to_string()).collect();
    assert_eq!(addrs, vec!["10.10.0.251", "10.10.0.252", "10.10.0.253"]);
    assert!(page.next.is_none());
    assert_eq!(
        cursor_of(&page.previous.expect("previous link")).as_deref(),
        Some("10.10.0.241")
    );
}

#[test]
fn test_default_limit_fits_v4_24_in_one_page() {
    let store = read_allocation_cache(FIXTURE).expect("Failed to read snapshot");
    let id: Uuid = LAB_V4.parse().unwrap();

    let page = subnet_hosts_page(&store, &id, &subnet_url(&id), &HostsPaginator::default())
        .expect("Failed to paginate");
    assert_eq!(page.results.len(), 253);
    assert!(page.next.is_none());
    assert!(page.previous.is_none());
}

#[test]
fn test_v6_subnet_pagination() {
    let store = read_allocation_cache(FIXTURE).expect("Failed to read snapshot");
    let id: Uuid = OFFICE_V6.parse().unwrap();
    let paginator = HostsPaginator::new(200, "start");

    // /120 has 255 hosts (no broadcast exclusion for V6)
    let page = subnet_hosts_page(&store, &id, &subnet_url(&id), &paginator)
        .expect("Failed to paginate");
    assert_eq!(page.results.len(), 200);
    assert_eq!(page.results[0].address.to_string(), "fd00:10::1");
    assert!(page.results[0].used, "fd00:10::1 is allocated in the fixture");
    assert!(!page.results[1].used);

    // index 200 -> network + 201 = ::c9
    let next = page.next.expect("255 hosts, limit 200");
    assert_eq!(cursor_of(&next).as_deref(), Some("fd00:10::c9"));

    let page = subnet_hosts_page(&store, &id, &Url::parse(&next).unwrap(), &paginator)
        .expect("Failed to paginate");
    assert_eq!(page.results.len(), 55);
    assert_eq!(
        page.results.last().unwrap().address.to_string(),
        "fd00:10::ff"
    );
    assert!(page.next.is_none());
}

#[test]
fn test_bad_cursor_restarts_at_first_page() {
    let store = read_allocation_cache(FIXTURE).expect("Failed to read snapshot");
    let id: Uuid = LAB_V4.parse().unwrap();
    let paginator = HostsPaginator::new(10, "start");

    let clean = subnet_hosts_page(&store, &id, &subnet_url(&id), &paginator).unwrap();
    for bad in ["bogus", "10.99.0.1", "fd00:10::5", "10.10.0.0"] {
        let request = Url::parse(&format!(
            "http://ipam.local/api/v1/subnet/{id}/hosts/?start={bad}"
        ))
        .unwrap();
        let page = subnet_hosts_page(&store, &id, &request, &paginator).unwrap();
        assert_eq!(page.results, clean.results, "cursor '{bad}'");
        assert!(page.previous.is_none(), "cursor '{bad}'");
    }
}

#[test]
fn test_first_available_skips_allocated() {
    let store = read_allocation_cache(FIXTURE).expect("Failed to read snapshot");

    let lab: Uuid = LAB_V4.parse().unwrap();
    let addr = subnet_first_available(&store, &lab).expect("lookup");
    assert_eq!(addr.unwrap().to_string(), "10.10.0.3");

    let office: Uuid = OFFICE_V6.parse().unwrap();
    let addr = subnet_first_available(&store, &office).expect("lookup");
    assert_eq!(addr.unwrap().to_string(), "fd00:10::2");
}

#[test]
fn test_unknown_subnet_is_an_error() {
    let store = read_allocation_cache(FIXTURE).expect("Failed to read snapshot");
    let missing = Uuid::new_v4();
    let err = subnet_hosts_page(
        &store,
        &missing,
        &subnet_url(&missing),
        &HostsPaginator::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("Subnet not found"));
}

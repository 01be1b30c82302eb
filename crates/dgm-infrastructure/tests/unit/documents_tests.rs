//! Workspace Document Tests

extern crate dgm_providers;

use dgm_domain::error::Error;
use dgm_infrastructure::di::{ServicesContext, create_packet_services};
use dgm_infrastructure::workspace::InMemoryFileSystem;
use std::sync::Arc;

const TCP: &str = "packet\n0-15: \"Source Port\"\n16-31: \"Destination Port\"\n";

#[test]
fn test_parse_and_index() {
    let services = create_packet_services(ServicesContext::default()).unwrap();
    let documents = services.shared.documents().unwrap();

    let document = documents.parse("tcp.mmd", TCP).unwrap();
    assert_eq!(document.language_id, "packet");
    assert!(!document.parse_result.has_errors());
    assert!(Arc::ptr_eq(&document, &documents.get("tcp.mmd").unwrap()));
    assert_eq!(documents.uris(), vec!["tcp.mmd"]);

    assert!(documents.remove("tcp.mmd").is_some());
    assert!(documents.get("tcp.mmd").is_none());
}

#[test]
fn test_unknown_extension() {
    let services = create_packet_services(ServicesContext::default()).unwrap();
    let documents = services.shared.documents().unwrap();
    assert!(matches!(documents.parse("tcp.txt", TCP), Err(Error::NotFound { .. })));
}

#[test]
fn test_load_through_file_system() {
    let file_system = Arc::new(InMemoryFileSystem::new().with_file("mem://tcp.mmd", TCP));
    let context = ServicesContext::with_file_system(file_system);
    let services = create_packet_services(context).unwrap();
    let documents = services.shared.documents().unwrap();

    let document = documents.load("mem://tcp.mmd").unwrap();
    assert_eq!(document.parse_result.value.children("blocks").len(), 2);
    assert!(documents.load("mem://missing.mmd").is_err());
}

#[test]
fn test_empty_file_system_cannot_load() {
    let services = create_packet_services(ServicesContext::default()).unwrap();
    let documents = services.shared.documents().unwrap();
    assert!(matches!(documents.load("tcp.mmd"), Err(Error::NotFound { .. })));
    assert_eq!(services.shared.file_system().unwrap().provider_name(), "empty");
}

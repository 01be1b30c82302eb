//! Deferred Handle Tests

use dgm_application::di::{Container, Deferred, Module};
use dgm_domain::error::Error;
use std::sync::Arc;

struct Left {
    right: Deferred<Arc<Right>>,
}

struct Right {
    left: Deferred<Arc<Left>>,
}

fn mutual_module() -> Module {
    Module::new()
        .service("left", |c| {
            Ok(Arc::new(Left {
                right: c.deferred("right")?,
            }))
        })
        .service("right", |c| {
            Ok(Arc::new(Right {
                left: c.deferred("left")?,
            }))
        })
}

#[test]
fn test_mutual_references_through_deferred_handles() {
    let container = Container::build("test", mutual_module()).unwrap();

    let left: Arc<Left> = container.get("left").unwrap();
    assert!(!container.is_resolved("right"));

    let right = left.right.get().unwrap();
    let back = right.left.get().unwrap();
    assert!(Arc::ptr_eq(&left, &back));
    assert!(Arc::ptr_eq(&right, &container.get::<Arc<Right>>("right").unwrap()));
}

#[test]
fn test_deferred_to_unknown_path_fails_early() {
    let container = Container::build("test", Module::new()).unwrap();
    let err = container.deferred::<u32>("missing").unwrap_err();
    assert!(matches!(err, Error::ServiceNotFound { .. }));
}

#[test]
fn test_deferred_after_container_dropped() {
    let container = Container::build("test", Module::new().value("Grammar", 1_u32)).unwrap();
    let handle = container.deferred::<u32>("Grammar").unwrap();
    assert_eq!(handle.path(), "Grammar");
    drop(container);

    let err = handle.get().unwrap_err();
    assert!(matches!(err, Error::ContainerDropped { ref path } if path == "Grammar"));
}

//! Lazy Injector Tests

use dgm_application::di::{Container, Module, inject};
use dgm_domain::error::Error;
use std::sync::mpsc;
use std::sync::{Arc, Barrier};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn counting_module(path: &str, calls: &Arc<AtomicUsize>) -> Module {
    let calls = Arc::clone(calls);
    Module::new().service(path, move |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(String::from("instance")))
    })
}

#[test]
fn test_inject_is_lazy() {
    let calls = Arc::new(AtomicUsize::new(0));
    let container = inject("test", [counting_module("Grammar", &calls)]).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(container.contains("Grammar"));
    assert!(!container.is_resolved("Grammar"));
}

#[test]
fn test_service_is_memoized() {
    let calls = Arc::new(AtomicUsize::new(0));
    let container = inject("test", [counting_module("Grammar", &calls)]).unwrap();

    let first: Arc<String> = container.get("Grammar").unwrap();
    let second: Arc<String> = container.get("Grammar").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(container.is_resolved("Grammar"));
}

#[test]
fn test_dependency_shared_between_factories_is_built_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let dependents = Module::new()
        .service("parser.Lexer", |c| c.get::<Arc<String>>("Grammar"))
        .service("parser.Parser", |c| c.get::<Arc<String>>("Grammar"));
    let container = inject("test", [counting_module("Grammar", &calls), dependents]).unwrap();

    let lexer: Arc<String> = container.get("parser.Lexer").unwrap();
    let parser: Arc<String> = container.get("parser.Parser").unwrap();
    let direct: Arc<String> = container.get("Grammar").unwrap();
    assert!(Arc::ptr_eq(&lexer, &parser));
    assert!(Arc::ptr_eq(&lexer, &direct));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_override_replaces_default() {
    let defaults = Module::new().value("parser.TokenBuilder", "default");
    let overrides = Module::new().value("parser.TokenBuilder", "custom");
    let container = inject("test", [defaults, overrides]).unwrap();
    assert_eq!(container.get::<&str>("parser.TokenBuilder").unwrap(), "custom");
}

#[test]
fn test_missing_service() {
    let container = Container::build("test", Module::new()).unwrap();
    let err = container.get::<u32>("parser.Lexer").unwrap_err();
    assert!(matches!(err, Error::ServiceNotFound { ref path } if path == "parser.Lexer"));
}

#[test]
fn test_wrong_type_is_reported() {
    let container = Container::build("test", Module::new().value("Grammar", 1_u32)).unwrap();
    let err = container.get::<String>("Grammar").unwrap_err();
    assert!(matches!(err, Error::ServiceType { ref path, .. } if path == "Grammar"));
}

#[test]
fn test_self_dependency_is_circular() {
    let module = Module::new().service("a", |c| c.get::<u32>("a"));
    let container = Container::build("test", module).unwrap();
    let err = container.get::<u32>("a").unwrap_err();
    match err {
        Error::CircularDependency { path, chain } => {
            assert_eq!(path, "a");
            assert_eq!(chain, vec!["a", "a"]);
        }
        other => panic!("expected CircularDependency, got {other:?}"),
    }
}

#[test]
fn test_mutual_eager_dependency_is_circular() {
    let module = Module::new()
        .service("a", |c| c.get::<u32>("b").map(|b| b + 1))
        .service("b", |c| c.get::<u32>("a").map(|a| a + 1));
    let container = Container::build("test", module).unwrap();

    let err = container.get::<u32>("a").unwrap_err();
    assert!(err.is_circular_dependency());
    match err {
        Error::CircularDependency { chain, .. } => assert_eq!(chain, vec!["a", "b", "a"]),
        other => panic!("expected CircularDependency, got {other:?}"),
    }
    assert!(!container.is_resolved("a"));
    assert!(!container.is_resolved("b"));
}

#[test]
fn test_mutual_eager_dependency_across_threads_is_circular() {
    // Both factories start before either asks for the other, so each thread
    // owns one slot and waits on the other's.
    let barrier = Arc::new(Barrier::new(2));
    let entries = Arc::new(AtomicUsize::new(0));
    let rendezvous = move || {
        if entries.fetch_add(1, Ordering::SeqCst) < 2 {
            barrier.wait();
        }
    };
    let meet_a = rendezvous.clone();
    let meet_b = rendezvous;
    let module = Module::new()
        .service("a", move |c| {
            meet_a();
            c.get::<u32>("b").map(|b| b + 1)
        })
        .service("b", move |c| {
            meet_b();
            c.get::<u32>("a").map(|a| a + 1)
        });
    let container = Container::build("test", module).unwrap();

    let (tx, rx) = mpsc::channel();
    for path in ["a", "b"] {
        let container = container.clone();
        let tx = tx.clone();
        std::thread::spawn(move || {
            let _ = tx.send((path, container.get::<u32>(path)));
        });
    }

    for _ in 0..2 {
        let (path, result) = rx
            .recv_timeout(Duration::from_secs(10))
            .expect("cross-thread cycle must fail instead of blocking");
        let err = result.unwrap_err();
        assert!(err.is_circular_dependency(), "{path}: {err:?}");
    }
    assert!(!container.is_resolved("a"));
    assert!(!container.is_resolved("b"));
}

#[test]
fn test_failed_factory_is_wrapped_and_retried() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let module = Module::new().service("flaky", move |_| {
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(Error::internal("first attempt fails"))
        } else {
            Ok(7_u32)
        }
    });
    let container = Container::build("test", module).unwrap();

    let err = container.get::<u32>("flaky").unwrap_err();
    assert!(matches!(err, Error::ServiceConstruction { ref path, .. } if path == "flaky"));
    assert_eq!(container.get::<u32>("flaky").unwrap(), 7);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_concurrent_first_access_builds_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let module = Module::new().service("slow", move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(50));
        Ok(Arc::new(42_u64))
    });
    let container = Container::build("test", module).unwrap();

    let instances: Vec<Arc<u64>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| container.get::<Arc<u64>>("slow").unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(instances.iter().all(|i| Arc::ptr_eq(i, &instances[0])));
}

#[test]
fn test_separate_injections_are_independent() {
    let calls = Arc::new(AtomicUsize::new(0));
    let first = inject("first", [counting_module("Grammar", &calls)]).unwrap();
    let second = inject("second", [counting_module("Grammar", &calls)]).unwrap();

    let a: Arc<String> = first.get("Grammar").unwrap();
    let b: Arc<String> = second.get("Grammar").unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
    assert!(!first.ptr_eq(&second));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

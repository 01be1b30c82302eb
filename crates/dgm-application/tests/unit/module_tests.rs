//! Module Merger Tests

use dgm_application::di::{Module, ModuleEntry, merge_modules};
use dgm_domain::error::Error;

#[test]
fn test_merge_of_nothing_is_empty() {
    let merged = merge_modules(Vec::new()).unwrap();
    assert!(merged.is_empty());
}

#[test]
fn test_merge_single_module_is_identity() {
    let module = Module::new().value("Grammar", 1_u32).value("parser.Lexer", 2_u32);
    let merged = merge_modules([module.clone()]).unwrap();
    assert_eq!(merged, module);
}

#[test]
fn test_empty_module_is_identity_on_both_sides() {
    let module = Module::new().value("Grammar", 1_u32).value("parser.Lexer", 2_u32);
    assert_eq!(merge_modules([module.clone(), Module::new()]).unwrap(), module);
    assert_eq!(merge_modules([Module::new(), module.clone()]).unwrap(), module);
}

#[test]
fn test_merge_result_depends_on_order() {
    let first = Module::new().value("parser.TokenBuilder", "first");
    let second = Module::new().value("parser.TokenBuilder", "second");
    let first_factory = first.factory_at("parser.TokenBuilder").cloned().unwrap();
    let second_factory = second.factory_at("parser.TokenBuilder").cloned().unwrap();

    let forward = merge_modules([first.clone(), second.clone()]).unwrap();
    let reversed = merge_modules([second, first]).unwrap();
    assert!(forward.factory_at("parser.TokenBuilder").unwrap().ptr_eq(&second_factory));
    assert!(reversed.factory_at("parser.TokenBuilder").unwrap().ptr_eq(&first_factory));
}

#[test]
fn test_later_module_wins_leaf_conflict() {
    let defaults = Module::new().value("parser.TokenBuilder", "default");
    let overrides = Module::new().value("parser.TokenBuilder", "custom");
    let expected = overrides.factory_at("parser.TokenBuilder").cloned().unwrap();

    let merged = merge_modules([defaults, overrides]).unwrap();
    assert!(merged.factory_at("parser.TokenBuilder").unwrap().ptr_eq(&expected));
}

#[test]
fn test_groups_merge_recursively() {
    let first = Module::new()
        .value("parser.Lexer", 1_u32)
        .value("parser.TokenBuilder", 2_u32);
    let second = Module::new().value("parser.ValueConverter", 3_u32);
    let third = Module::new().value("Grammar", 4_u32);

    let merged = merge_modules([first, second, third]).unwrap();
    assert_eq!(
        merged.service_paths(),
        vec![
            "Grammar",
            "parser.Lexer",
            "parser.TokenBuilder",
            "parser.ValueConverter"
        ]
    );
}

#[test]
fn test_group_helper_nests_module() {
    let parser = Module::new().value("Lexer", 1_u32).value("Parser", 2_u32);
    let module = Module::new().group("parser", parser);
    assert!(matches!(module.entry("parser"), Some(ModuleEntry::Group(_))));
    assert!(module.factory_at("parser.Parser").is_some());
    assert!(module.factory_at("parser").is_none());
}

#[test]
fn test_factory_meeting_group_is_malformed() {
    let leaf = Module::new().value("parser", 1_u32);
    let group = Module::new().value("parser.Lexer", 2_u32);

    let err = merge_modules([leaf, group]).unwrap_err();
    match err {
        Error::MalformedDefinition { path, message } => {
            assert_eq!(path, "parser");
            assert!(message.contains("cannot merge"));
        }
        other => panic!("expected MalformedDefinition, got {other:?}"),
    }
}

#[test]
fn test_conflict_within_one_module_is_reported_at_merge() {
    let module = Module::new()
        .value("parser.Lexer", 1_u32)
        .value("parser.Lexer.Inner", 2_u32);
    let err = merge_modules([module]).unwrap_err();
    assert!(matches!(err, Error::MalformedDefinition { ref path, .. } if path == "parser.Lexer.Inner"));
}

#[test]
fn test_empty_path_segment_is_malformed() {
    let module = Module::new().value("parser..Lexer", 1_u32);
    let err = merge_modules([Module::new(), module]).unwrap_err();
    assert!(matches!(err, Error::MalformedDefinition { ref path, .. } if path == "parser..Lexer"));
}

#[test]
fn test_defect_in_nested_group_keeps_full_path() {
    let inner = Module::new().value("", 1_u32);
    let module = Module::new().group("parser", inner);
    let err = module.merge(Module::new()).unwrap_err();
    assert!(matches!(err, Error::MalformedDefinition { ref path, .. } if path == "parser."));
}

#[test]
fn test_merge_does_not_invoke_factories() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let module = Module::new().service("Grammar", move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(1_u32)
    });
    let _ = merge_modules([module.clone(), module]).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

use std::sync::Arc;
use std::thread;
use text_mask::{FormatError, MaskRegistry, Notation};

#[test]
fn test_get_or_create_is_idempotent() {
    let registry = MaskRegistry::new();

    let first = registry.get_or_create("[00].[00]", &[]).unwrap();
    let second = registry.get_or_create("[00].[00]", &[]).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_distinct_formats() {
    let registry = MaskRegistry::new();

    let a = registry.get_or_create("[00]", &[]).unwrap();
    let b = registry.get_or_create("[000]", &[]).unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn test_notations_are_part_of_the_key() {
    let registry = MaskRegistry::new();

    let plain = registry.get_or_create("[00]", &[]).unwrap();
    let with_notation = registry
        .get_or_create("[00]", &[Notation::new('x', "xX", false)])
        .unwrap();
    assert!(!Arc::ptr_eq(&plain, &with_notation));
}

#[test]
fn test_rtl_cached_separately() {
    let registry = MaskRegistry::new();

    let ltr = registry.get_or_create("+[00]", &[]).unwrap();
    let rtl = registry.get_or_create_rtl("+[00]", &[]).unwrap();
    assert!(!Arc::ptr_eq(&ltr, &rtl));
    assert_eq!(ltr.format(), "+[00]");
    assert_eq!(rtl.format(), "[00]+");

    let rtl2 = registry.get_or_create_rtl("+[00]", &[]).unwrap();
    assert!(Arc::ptr_eq(&rtl, &rtl2));
}

#[test]
fn test_errors_are_not_cached() {
    let registry = MaskRegistry::new();

    assert_eq!(
        registry.get_or_create("[x]", &[]).unwrap_err(),
        FormatError::UnknownSlot('x')
    );
    // the same format compiles once the notation is known
    let mask = registry
        .get_or_create("[x]", &[Notation::new('x', "xX", false)])
        .unwrap();
    assert_eq!(mask.placeholder(), "x");
}

#[test]
fn test_shared_across_threads() {
    let registry = Arc::new(MaskRegistry::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            thread::spawn(move || registry.get_or_create("[00]-[00]", &[]).unwrap())
        })
        .collect();

    let masks: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for mask in &masks[1..] {
        assert!(Arc::ptr_eq(&masks[0], mask));
    }
}

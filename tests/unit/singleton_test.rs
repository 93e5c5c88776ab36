//! Tests for the process-wide API instance and its defaults

use flagrt::{CommonApi, FlagApi, NOOP_PROVIDER_NAME};
use std::sync::Arc;
use std::thread;
use test_support::common::{FixedProvider, lock_global_api};

#[test]
fn test_instance_is_identical_across_calls() {
    let first = FlagApi::instance() as *const FlagApi;
    let second = FlagApi::instance() as *const FlagApi;
    assert_eq!(first, second);
}

#[test]
fn test_instance_is_identical_across_threads() {
    let here = FlagApi::instance() as *const FlagApi as usize;
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| FlagApi::instance() as *const FlagApi as usize))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread should complete"), here);
    }
}

#[test]
fn test_defaults_are_safe() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();

    assert!(api.context().is_empty());
    assert!(api.hooks().is_empty());
    assert_eq!(api.provider_metadata().name, NOOP_PROVIDER_NAME);
    assert!(api.transaction_context().is_empty());
}

#[test]
fn test_mutations_are_visible_through_every_access() {
    let _guard = lock_global_api();

    FlagApi::instance().set_provider(Arc::new(FixedProvider::new("shared")));

    let seen = thread::spawn(|| FlagApi::instance().provider_metadata().name)
        .join()
        .expect("thread should complete");
    assert_eq!(seen, "shared");
}

#[test]
fn test_setters_chain() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();

    let returned = api
        .set_provider(Arc::new(FixedProvider::new("chained")))
        .clear_hooks()
        .set_context(flagrt::EvaluationContext::new().with_field("env", "test"));

    assert!(std::ptr::eq(returned, api));
    assert_eq!(api.provider_metadata().name, "chained");
}

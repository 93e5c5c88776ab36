//! Tests for transaction context propagator installation and failure handling

use flagrt::{
    CommonApi, DynamicPropagator, EvaluationContext, FlagApi, PropagatorError, TransactionContext,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use test_support::common::{
    DroppingPropagator, FailingPropagator, PanickingPropagator, StaticPropagator,
    lock_global_api, record_global_logs,
};

fn tagged(tag: &str) -> TransactionContext {
    EvaluationContext::new().with_field("tag", tag)
}

fn tag_of(context: &TransactionContext) -> Option<String> {
    context.get("tag").and_then(|v| v.as_str()).map(str::to_string)
}

#[test]
fn test_missing_get_is_rejected_and_previous_kept() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();
    let logs = record_global_logs();

    api.set_transaction_context_propagator(Arc::new(StaticPropagator::new(tagged("previous"))));
    api.set_transaction_context_propagator(
        DynamicPropagator::new().with_set(|_context, callback| callback),
    );

    assert_eq!(tag_of(&api.transaction_context()).as_deref(), Some("previous"));
    assert_eq!(
        logs.errors(),
        vec![
            "Invalid TransactionContextPropagator, will not be set: get_transaction_context is not a function."
                .to_string()
        ]
    );
}

#[test]
fn test_missing_set_is_rejected_and_previous_kept() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();
    let logs = record_global_logs();

    api.set_transaction_context_propagator(Arc::new(StaticPropagator::new(tagged("previous"))));
    api.set_transaction_context_propagator(
        DynamicPropagator::new().with_get(|| Ok(tagged("replacement"))),
    );

    assert_eq!(tag_of(&api.transaction_context()).as_deref(), Some("previous"));
    let errors = logs.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].ends_with("set_transaction_context is not a function."));
}

#[test]
fn test_valid_assignment_after_rejection_succeeds() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();
    let logs = record_global_logs();

    api.set_transaction_context_propagator(DynamicPropagator::new());
    api.set_transaction_context_propagator(
        DynamicPropagator::new()
            .with_get(|| Ok(tagged("dynamic")))
            .with_set(|_context, callback| callback),
    );

    assert_eq!(tag_of(&api.transaction_context()).as_deref(), Some("dynamic"));
    assert_eq!(logs.errors().len(), 1);
}

#[test]
fn test_failing_get_returns_empty_context() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();
    let logs = record_global_logs();

    api.set_transaction_context_propagator(Arc::new(FailingPropagator));

    assert!(api.transaction_context().is_empty());
    let errors = logs.errors();
    assert_eq!(
        errors[0],
        "Error getting transaction context: context store unavailable, returning empty context."
    );
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_dynamic_get_error_is_contained() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();
    let _logs = record_global_logs();

    api.set_transaction_context_propagator(
        DynamicPropagator::new()
            .with_get(|| Err(PropagatorError::Read("no scope".into())))
            .with_set(|_context, callback| callback),
    );

    assert_eq!(api.transaction_context(), TransactionContext::default());
}

#[test]
fn test_panicking_get_returns_empty_context() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();
    let logs = record_global_logs();

    api.set_transaction_context_propagator(Arc::new(PanickingPropagator));

    assert!(api.transaction_context().is_empty());
    let errors = logs.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("propagator state corrupted"));
}

#[tokio::test]
async fn test_set_transaction_context_delegates_to_active_propagator() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();
    let propagator = Arc::new(StaticPropagator::new(tagged("static")));
    api.set_transaction_context_propagator(propagator.clone());

    let ran = Arc::new(AtomicBool::new(false));
    let ran_clone = ran.clone();
    api.set_transaction_context(tagged("ignored"), async move {
        ran_clone.store(true, Ordering::SeqCst);
    })
    .await;

    assert!(ran.load(Ordering::SeqCst));
    assert_eq!(propagator.set_calls(), 1);
}

#[tokio::test]
async fn test_callback_execution_is_owned_by_propagator() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();
    api.set_transaction_context_propagator(Arc::new(DroppingPropagator));

    let ran = Arc::new(AtomicBool::new(false));
    let ran_clone = ran.clone();
    api.set_transaction_context(tagged("t"), async move {
        ran_clone.store(true, Ordering::SeqCst);
    })
    .await;

    assert!(!ran.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_default_propagator_runs_callback_without_scope() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();

    let (tx, rx) = tokio::sync::oneshot::channel();
    api.set_transaction_context(tagged("scoped"), async move {
        let _ = tx.send(FlagApi::instance().transaction_context());
    })
    .await;

    assert!(rx.await.expect("callback should run").is_empty());
}

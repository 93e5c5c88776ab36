//! Integration tests for configuration loading and application

use flagrt::{
    ApiConfig, CommonApi, ConfigError, DynamicPropagator, EvaluationContext, EvaluationValue,
    FlagApi, PropagatorRegistry,
};
use std::sync::Arc;
use test_support::common::{StaticPropagator, lock_global_api, record_global_logs};

#[test]
fn test_from_vars_reads_known_variables() {
    let config = ApiConfig::from_vars([
        ("FLAGRT_PROPAGATOR", "task_local"),
        ("FLAGRT_LOG", "flagrt=debug"),
        ("FLAGRT_TARGETING_KEY", "svc-7"),
        ("FLAGRT_CONTEXT_ENV", "prod"),
        ("FLAGRT_CONTEXT_REPLICAS", "3"),
        ("FLAGRT_CONTEXT_CANARY", "true"),
        ("FLAGRT_CONTEXT_RATIO", "0.5"),
        ("UNRELATED", "ignored"),
    ])
    .expect("config should parse");

    assert_eq!(config.propagator.as_deref(), Some("task_local"));
    assert_eq!(config.log_filter.as_deref(), Some("flagrt=debug"));
    assert_eq!(config.context.targeting_key(), Some("svc-7"));
    assert_eq!(config.context.get("env"), Some(&EvaluationValue::from("prod")));
    assert_eq!(config.context.get("replicas"), Some(&EvaluationValue::Int(3)));
    assert_eq!(config.context.get("canary"), Some(&EvaluationValue::Bool(true)));
    assert_eq!(config.context.get("ratio"), Some(&EvaluationValue::Float(0.5)));
    assert_eq!(config.context.len(), 4);
}

#[test]
fn test_from_vars_rejects_empty_context_key() {
    let err = ApiConfig::from_vars([("FLAGRT_CONTEXT_", "x")]).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyContextKey(ref key) if key == "FLAGRT_CONTEXT_"));
}

#[test]
fn test_empty_config_changes_nothing() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();
    let propagator = Arc::new(StaticPropagator::new(
        EvaluationContext::new().with_field("tag", "kept"),
    ));
    api.set_transaction_context_propagator(propagator);
    api.set_context(EvaluationContext::new().with_field("env", "prod"));

    api.configure(&ApiConfig::new(), &PropagatorRegistry::with_builtins());

    assert_eq!(api.context().get("env"), Some(&EvaluationValue::from("prod")));
    assert_eq!(
        api.transaction_context().get("tag"),
        Some(&EvaluationValue::from("kept"))
    );
}

#[test]
fn test_configure_applies_context_and_registered_propagator() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();
    let mut registry = PropagatorRegistry::with_builtins();
    registry.register(
        "fixed",
        DynamicPropagator::new()
            .with_get(|| Ok(EvaluationContext::new().with_field("trace", "abc")))
            .with_set(|_context, callback| callback),
    );

    let config = ApiConfig::new()
        .with_propagator("fixed")
        .with_context_field("env", "staging");
    api.configure(&config, &registry);

    assert_eq!(api.context().get("env"), Some(&EvaluationValue::from("staging")));
    assert_eq!(
        api.transaction_context().get("trace"),
        Some(&EvaluationValue::from("abc"))
    );
}

#[test]
fn test_unknown_propagator_is_rejected_and_logged() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();
    let logs = record_global_logs();
    api.set_transaction_context_propagator(Arc::new(StaticPropagator::new(
        EvaluationContext::new().with_field("tag", "previous"),
    )));

    api.configure(
        &ApiConfig::new().with_propagator("zipkin"),
        &PropagatorRegistry::with_builtins(),
    );

    assert_eq!(
        api.transaction_context().get("tag"),
        Some(&EvaluationValue::from("previous"))
    );
    let errors = logs.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Invalid TransactionContextPropagator, will not be set:"));
}

#[test]
fn test_registry_lists_builtins() {
    let registry = PropagatorRegistry::with_builtins();
    assert_eq!(registry.names(), vec!["noop".to_string(), "task_local".to_string()]);
    assert!(!registry.contains("zipkin"));
}

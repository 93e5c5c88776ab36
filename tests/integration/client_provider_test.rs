//! Integration tests for clients evaluating against the global provider

use flagrt::{
    CommonApi, ErrorCode, EvaluationContext, EvaluationValue, FlagApi, FlagError, Reason,
};
use serde_json::json;
use std::sync::Arc;
use test_support::common::{FailingProvider, FixedProvider, lock_global_api, record_global_logs};

#[tokio::test]
async fn test_default_provider_echoes_defaults() {
    let _guard = lock_global_api();
    let client = FlagApi::instance().default_client();

    assert!(client.bool_value("flag", true, None).await);
    assert_eq!(client.int_value("flag", 7, None).await, 7);
    assert_eq!(client.string_value("flag", "fallback".into(), None).await, "fallback");

    let details = client.float_details("flag", 1.5, None).await;
    assert_eq!(details.value, 1.5);
    assert_eq!(details.reason, Some(Reason::Default));
    assert!(!details.is_error());
}

#[tokio::test]
async fn test_client_created_before_provider_swap_sees_new_provider() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();
    let client = api.client(Some("checkout"), Some("2.0.1"), None);

    assert!(!client.bool_value("new-checkout", false, None).await);

    api.set_provider(Arc::new(FixedProvider::new("fixed")));
    assert!(client.bool_value("new-checkout", false, None).await);
    assert_eq!(client.string_value("banner", String::new(), None).await, "fixed");
}

#[tokio::test]
async fn test_client_metadata_and_context() {
    let _guard = lock_global_api();
    let context = EvaluationContext::new().with_field("region", "eu");
    let client = FlagApi::instance().client(Some("billing"), Some("3"), Some(context.clone()));

    assert_eq!(client.metadata().name.as_deref(), Some("billing"));
    assert_eq!(client.metadata().version.as_deref(), Some("3"));
    assert_eq!(client.context(), &context);

    let anonymous = FlagApi::instance().default_client();
    assert_eq!(anonymous.metadata().name, None);
    assert!(anonymous.context().is_empty());
}

#[tokio::test]
async fn test_every_value_type_resolves() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();
    api.set_provider(Arc::new(
        FixedProvider::new("typed").with_struct_value(json!({"limit": 3})),
    ));
    let client = api.default_client();

    let details = client.bool_details("b", false, None).await;
    assert!(details.value);
    assert_eq!(details.flag_key, "b");
    assert_eq!(details.variant.as_deref(), Some("fixed"));
    assert_eq!(details.reason, Some(Reason::Static));

    assert_eq!(client.string_value("s", String::new(), None).await, "typed");
    assert_eq!(client.int_value("i", 0, None).await, 42);
    assert_eq!(client.float_value("f", 0.0, None).await, 0.25);
    assert_eq!(client.struct_value("o", json!(null), None).await, json!({"limit": 3}));
}

#[tokio::test]
async fn test_context_layers_merge_in_order() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();
    let provider = Arc::new(FixedProvider::new("recording"));
    api.set_provider(provider.clone());
    api.set_context(
        EvaluationContext::new()
            .with_targeting_key("global-user")
            .with_field("env", "prod")
            .with_field("tier", "global")
            .with_field("source", "global"),
    );

    let client = api.client(
        None,
        None,
        Some(
            EvaluationContext::new()
                .with_field("tier", "client")
                .with_field("source", "client"),
        ),
    );
    let invocation = EvaluationContext::new()
        .with_targeting_key("invocation-user")
        .with_field("source", "invocation");

    client.bool_value("flag", false, Some(&invocation)).await;

    let seen = provider.seen_contexts();
    assert_eq!(seen.len(), 1);
    let merged = &seen[0];
    assert_eq!(merged.targeting_key(), Some("invocation-user"));
    assert_eq!(merged.get("env"), Some(&EvaluationValue::from("prod")));
    assert_eq!(merged.get("tier"), Some(&EvaluationValue::from("client")));
    assert_eq!(merged.get("source"), Some(&EvaluationValue::from("invocation")));
}

#[tokio::test]
async fn test_global_context_change_reaches_existing_client() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();
    let provider = Arc::new(FixedProvider::new("recording"));
    api.set_provider(provider.clone());
    let client = api.default_client();

    api.set_context(EvaluationContext::new().with_field("env", "staging"));
    client.int_value("flag", 0, None).await;
    api.set_context(EvaluationContext::new().with_field("env", "prod"));
    client.int_value("flag", 0, None).await;

    let seen = provider.seen_contexts();
    assert_eq!(seen[0].get("env"), Some(&EvaluationValue::from("staging")));
    assert_eq!(seen[1].get("env"), Some(&EvaluationValue::from("prod")));
}

#[tokio::test]
async fn test_provider_error_returns_default_and_logs() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();
    let logs = record_global_logs();
    api.set_provider(Arc::new(FailingProvider::new(FlagError::FlagNotFound(
        "dark-mode".into(),
    ))));
    let client = api.client(Some("ui"), None, None);

    let details = client.bool_details("dark-mode", true, None).await;

    assert!(details.value);
    assert_eq!(details.reason, Some(Reason::Error));
    assert_eq!(details.error_code, Some(ErrorCode::FlagNotFound));
    assert_eq!(details.error_message.as_deref(), Some("flag not found: dark-mode"));
    assert_eq!(
        logs.errors(),
        vec!["Error during boolean evaluation of flag 'dark-mode': flag not found: dark-mode"
            .to_string()]
    );
}

#[tokio::test]
async fn test_logger_swap_reaches_existing_client() {
    let _guard = lock_global_api();
    let api = FlagApi::instance();
    api.set_provider(Arc::new(FailingProvider::new(FlagError::General("down".into()))));
    let client = api.default_client();

    let first = record_global_logs();
    client.string_value("a", "x".into(), None).await;
    let second = record_global_logs();
    client.string_value("b", "y".into(), None).await;

    assert_eq!(first.errors().len(), 1);
    assert_eq!(second.errors().len(), 1);
    assert!(second.errors()[0].contains("flag 'b'"));
}

use async_trait::async_trait;
use flagrt_core::{EvaluationContext, ProviderMetadata, ResolutionDetails, Result};
use serde_json::Value;

/// Backend that performs flag evaluation.
///
/// Exactly one provider is active per registry. Resolution errors are
/// reported through [`flagrt_core::FlagError`]; clients turn them into
/// default values with error details.
#[async_trait]
pub trait Provider: Send + Sync {
    fn metadata(&self) -> &ProviderMetadata;

    async fn resolve_bool(
        &self,
        flag_key: &str,
        default_value: bool,
        context: &EvaluationContext,
    ) -> Result<ResolutionDetails<bool>>;

    async fn resolve_string(
        &self,
        flag_key: &str,
        default_value: String,
        context: &EvaluationContext,
    ) -> Result<ResolutionDetails<String>>;

    async fn resolve_int(
        &self,
        flag_key: &str,
        default_value: i64,
        context: &EvaluationContext,
    ) -> Result<ResolutionDetails<i64>>;

    async fn resolve_float(
        &self,
        flag_key: &str,
        default_value: f64,
        context: &EvaluationContext,
    ) -> Result<ResolutionDetails<f64>>;

    async fn resolve_struct(
        &self,
        flag_key: &str,
        default_value: Value,
        context: &EvaluationContext,
    ) -> Result<ResolutionDetails<Value>>;
}

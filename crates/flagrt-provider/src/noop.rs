use crate::provider::Provider;
use async_trait::async_trait;
use flagrt_core::{EvaluationContext, ProviderMetadata, Reason, ResolutionDetails, Result};
use serde_json::Value;

pub const NOOP_PROVIDER_NAME: &str = "No-op Provider";

/// Provider active before any other is installed.
///
/// Every resolution echoes the caller's default with reason `Default`.
#[derive(Debug, Clone)]
pub struct NoopProvider {
    metadata: ProviderMetadata,
}

impl NoopProvider {
    pub fn new() -> Self {
        Self {
            metadata: ProviderMetadata::new(NOOP_PROVIDER_NAME),
        }
    }

    fn echo<T>(default_value: T) -> Result<ResolutionDetails<T>> {
        Ok(ResolutionDetails::new(default_value).with_reason(Reason::Default))
    }
}

impl Default for NoopProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for NoopProvider {
    fn metadata(&self) -> &ProviderMetadata {
        &self.metadata
    }

    async fn resolve_bool(
        &self,
        _flag_key: &str,
        default_value: bool,
        _context: &EvaluationContext,
    ) -> Result<ResolutionDetails<bool>> {
        Self::echo(default_value)
    }

    async fn resolve_string(
        &self,
        _flag_key: &str,
        default_value: String,
        _context: &EvaluationContext,
    ) -> Result<ResolutionDetails<String>> {
        Self::echo(default_value)
    }

    async fn resolve_int(
        &self,
        _flag_key: &str,
        default_value: i64,
        _context: &EvaluationContext,
    ) -> Result<ResolutionDetails<i64>> {
        Self::echo(default_value)
    }

    async fn resolve_float(
        &self,
        _flag_key: &str,
        default_value: f64,
        _context: &EvaluationContext,
    ) -> Result<ResolutionDetails<f64>> {
        Self::echo(default_value)
    }

    async fn resolve_struct(
        &self,
        _flag_key: &str,
        default_value: Value,
        _context: &EvaluationContext,
    ) -> Result<ResolutionDetails<Value>> {
        Self::echo(default_value)
    }
}

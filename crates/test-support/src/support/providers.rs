//! Provider implementations for client tests.

use async_trait::async_trait;
use flagrt::{EvaluationContext, FlagError, Provider, ProviderMetadata, Reason, ResolutionDetails};
use flagrt_core::Result;
use parking_lot::Mutex;
use serde_json::Value;

/// Answers every flag with fixed values and records the contexts it saw.
#[derive(Debug)]
pub struct FixedProvider {
    metadata: ProviderMetadata,
    pub bool_value: bool,
    pub string_value: String,
    pub int_value: i64,
    pub float_value: f64,
    pub struct_value: Value,
    seen: Mutex<Vec<EvaluationContext>>,
}

impl FixedProvider {
    pub fn new(name: &str) -> Self {
        Self {
            metadata: ProviderMetadata::new(name),
            bool_value: true,
            string_value: name.to_string(),
            int_value: 42,
            float_value: 0.25,
            struct_value: Value::Null,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn with_struct_value(mut self, value: Value) -> Self {
        self.struct_value = value;
        self
    }

    /// Contexts passed to resolutions, in call order.
    pub fn seen_contexts(&self) -> Vec<EvaluationContext> {
        self.seen.lock().clone()
    }

    fn resolve<T>(&self, value: T, context: &EvaluationContext) -> Result<ResolutionDetails<T>> {
        self.seen.lock().push(context.clone());
        Ok(ResolutionDetails::new(value)
            .with_variant("fixed")
            .with_reason(Reason::Static))
    }
}

#[async_trait]
impl Provider for FixedProvider {
    fn metadata(&self) -> &ProviderMetadata {
        &self.metadata
    }

    async fn resolve_bool(
        &self,
        _flag_key: &str,
        _default_value: bool,
        context: &EvaluationContext,
    ) -> Result<ResolutionDetails<bool>> {
        self.resolve(self.bool_value, context)
    }

    async fn resolve_string(
        &self,
        _flag_key: &str,
        _default_value: String,
        context: &EvaluationContext,
    ) -> Result<ResolutionDetails<String>> {
        self.resolve(self.string_value.clone(), context)
    }

    async fn resolve_int(
        &self,
        _flag_key: &str,
        _default_value: i64,
        context: &EvaluationContext,
    ) -> Result<ResolutionDetails<i64>> {
        self.resolve(self.int_value, context)
    }

    async fn resolve_float(
        &self,
        _flag_key: &str,
        _default_value: f64,
        context: &EvaluationContext,
    ) -> Result<ResolutionDetails<f64>> {
        self.resolve(self.float_value, context)
    }

    async fn resolve_struct(
        &self,
        _flag_key: &str,
        _default_value: Value,
        context: &EvaluationContext,
    ) -> Result<ResolutionDetails<Value>> {
        self.resolve(self.struct_value.clone(), context)
    }
}

/// Fails every resolution with the configured error.
#[derive(Debug)]
pub struct FailingProvider {
    metadata: ProviderMetadata,
    error: FlagError,
}

impl FailingProvider {
    pub fn new(error: FlagError) -> Self {
        Self {
            metadata: ProviderMetadata::new("failing"),
            error,
        }
    }
}

#[async_trait]
impl Provider for FailingProvider {
    fn metadata(&self) -> &ProviderMetadata {
        &self.metadata
    }

    async fn resolve_bool(
        &self,
        _flag_key: &str,
        _default_value: bool,
        _context: &EvaluationContext,
    ) -> Result<ResolutionDetails<bool>> {
        Err(self.error.clone())
    }

    async fn resolve_string(
        &self,
        _flag_key: &str,
        _default_value: String,
        _context: &EvaluationContext,
    ) -> Result<ResolutionDetails<String>> {
        Err(self.error.clone())
    }

    async fn resolve_int(
        &self,
        _flag_key: &str,
        _default_value: i64,
        _context: &EvaluationContext,
    ) -> Result<ResolutionDetails<i64>> {
        Err(self.error.clone())
    }

    async fn resolve_float(
        &self,
        _flag_key: &str,
        _default_value: f64,
        _context: &EvaluationContext,
    ) -> Result<ResolutionDetails<f64>> {
        Err(self.error.clone())
    }

    async fn resolve_struct(
        &self,
        _flag_key: &str,
        _default_value: Value,
        _context: &EvaluationContext,
    ) -> Result<ResolutionDetails<Value>> {
        Err(self.error.clone())
    }
}

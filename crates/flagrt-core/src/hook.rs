//! Lifecycle hook contract.
//!
//! The registry stores hooks as an ordered list and never inspects them.
//! Executing the stages around an evaluation is left to downstream executors,
//! so every stage has a no-op default.

use crate::context::EvaluationContext;
use crate::error::{FlagError, Result};
use crate::types::EvaluationDetails;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait Hook: Send + Sync + 'static {
    /// Runs before resolution; may return context to layer onto the evaluation.
    async fn before(
        &self,
        _flag_key: &str,
        _context: &EvaluationContext,
    ) -> Result<Option<EvaluationContext>> {
        Ok(None)
    }

    async fn after(&self, _flag_key: &str, _details: &EvaluationDetails<Value>) -> Result<()> {
        Ok(())
    }

    async fn error(&self, _flag_key: &str, _error: &FlagError) {}

    async fn finally(&self, _flag_key: &str) {}
}

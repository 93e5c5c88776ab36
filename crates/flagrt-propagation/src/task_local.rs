//! Transaction context propagation for async call chains.
//!
//! This module provides a task-local transaction context so async boundaries
//! can retain request context without threading it through every call.

use crate::error::Result;
use crate::propagator::{TransactionCallback, TransactionContextPropagator};
use async_trait::async_trait;
use flagrt_core::TransactionContext;

tokio::task_local! {
    static TRANSACTION_CONTEXT: TransactionContext;
}

pub fn current_transaction_context() -> Option<TransactionContext> {
    TRANSACTION_CONTEXT.try_with(|context| context.clone()).ok()
}

pub async fn with_transaction_context<F, T>(context: TransactionContext, fut: F) -> T
where
    F: std::future::Future<Output = T>,
{
    TRANSACTION_CONTEXT.scope(context, fut).await
}

/// Propagator backed by a tokio task-local.
///
/// The context is visible to the callback future and anything it awaits, but
/// not to tasks it spawns.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskLocalTransactionContextPropagator;

impl TaskLocalTransactionContextPropagator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TransactionContextPropagator for TaskLocalTransactionContextPropagator {
    fn get_transaction_context(&self) -> Result<TransactionContext> {
        Ok(current_transaction_context().unwrap_or_default())
    }

    async fn set_transaction_context(
        &self,
        context: TransactionContext,
        callback: TransactionCallback,
    ) {
        with_transaction_context(context, callback).await;
    }
}

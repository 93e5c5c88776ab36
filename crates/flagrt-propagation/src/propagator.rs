use crate::error::Result;
use async_trait::async_trait;
use flagrt_core::TransactionContext;
use std::future::Future;
use std::pin::Pin;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Work to run while a transaction context is active.
pub type TransactionCallback = BoxFuture<'static, ()>;

/// Strategy for carrying transaction context across asynchronous boundaries.
#[async_trait]
pub trait TransactionContextPropagator: Send + Sync {
    /// Context active for the current call chain.
    fn get_transaction_context(&self) -> Result<TransactionContext>;

    /// Run `callback` in a scope where `context` is active.
    ///
    /// Whether the callback runs inline, later, or not at all is up to the
    /// implementation.
    async fn set_transaction_context(
        &self,
        context: TransactionContext,
        callback: TransactionCallback,
    );
}

/// Default propagator: never stores anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTransactionContextPropagator;

impl NoopTransactionContextPropagator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TransactionContextPropagator for NoopTransactionContextPropagator {
    fn get_transaction_context(&self) -> Result<TransactionContext> {
        Ok(TransactionContext::default())
    }

    async fn set_transaction_context(
        &self,
        _context: TransactionContext,
        callback: TransactionCallback,
    ) {
        callback.await;
    }
}

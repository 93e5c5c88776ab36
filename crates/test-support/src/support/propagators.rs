//! Propagator implementations for exercising failure paths.

use async_trait::async_trait;
use flagrt::{
    PropagatorError, TransactionCallback, TransactionContext, TransactionContextPropagator,
};
use flagrt_propagation::Result;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns a fixed context and counts how often `set` is called.
#[derive(Debug, Default)]
pub struct StaticPropagator {
    context: TransactionContext,
    set_calls: AtomicUsize,
}

impl StaticPropagator {
    pub fn new(context: TransactionContext) -> Self {
        Self {
            context,
            set_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionContextPropagator for StaticPropagator {
    fn get_transaction_context(&self) -> Result<TransactionContext> {
        Ok(self.context.clone())
    }

    async fn set_transaction_context(
        &self,
        _context: TransactionContext,
        callback: TransactionCallback,
    ) {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        callback.await;
    }
}

/// `get` always fails with a read error.
#[derive(Debug, Default)]
pub struct FailingPropagator;

#[async_trait]
impl TransactionContextPropagator for FailingPropagator {
    fn get_transaction_context(&self) -> Result<TransactionContext> {
        Err(PropagatorError::Read("context store unavailable".to_string()))
    }

    async fn set_transaction_context(
        &self,
        _context: TransactionContext,
        callback: TransactionCallback,
    ) {
        callback.await;
    }
}

/// `get` panics.
#[derive(Debug, Default)]
pub struct PanickingPropagator;

#[async_trait]
impl TransactionContextPropagator for PanickingPropagator {
    fn get_transaction_context(&self) -> Result<TransactionContext> {
        panic!("propagator state corrupted");
    }

    async fn set_transaction_context(
        &self,
        _context: TransactionContext,
        callback: TransactionCallback,
    ) {
        callback.await;
    }
}

/// `set` drops the callback without running it.
#[derive(Debug, Default)]
pub struct DroppingPropagator;

#[async_trait]
impl TransactionContextPropagator for DroppingPropagator {
    fn get_transaction_context(&self) -> Result<TransactionContext> {
        Ok(TransactionContext::default())
    }

    async fn set_transaction_context(
        &self,
        _context: TransactionContext,
        _callback: TransactionCallback,
    ) {
    }
}

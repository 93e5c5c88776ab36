//! Validation boundary for propagators assembled at runtime.
//!
//! Typed propagators satisfy the contract by construction. Plugins and
//! configuration loaders instead hand over loose function values, and those
//! are checked here before anything is installed.

use crate::error::{PropagatorError, Result};
use crate::propagator::{BoxFuture, TransactionCallback, TransactionContextPropagator};
use async_trait::async_trait;
use flagrt_core::TransactionContext;
use std::fmt;
use std::sync::Arc;

pub type GetFn = Arc<dyn Fn() -> Result<TransactionContext> + Send + Sync>;
pub type SetFn =
    Arc<dyn Fn(TransactionContext, TransactionCallback) -> BoxFuture<'static, ()> + Send + Sync>;

/// A propagator whose members may be missing.
#[derive(Clone, Default)]
pub struct DynamicPropagator {
    get: Option<GetFn>,
    set: Option<SetFn>,
}

impl DynamicPropagator {
    /// A candidate with no members at all.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_get<F>(mut self, get: F) -> Self
    where
        F: Fn() -> Result<TransactionContext> + Send + Sync + 'static,
    {
        self.get = Some(Arc::new(get));
        self
    }

    pub fn with_set<F>(mut self, set: F) -> Self
    where
        F: Fn(TransactionContext, TransactionCallback) -> BoxFuture<'static, ()>
            + Send
            + Sync
            + 'static,
    {
        self.set = Some(Arc::new(set));
        self
    }

    /// Expose a typed propagator through loose members.
    pub fn from_typed(propagator: Arc<dyn TransactionContextPropagator>) -> Self {
        let getter = propagator.clone();
        let setter = propagator;
        Self::new()
            .with_get(move || getter.get_transaction_context())
            .with_set(move |context, callback| {
                let setter = setter.clone();
                let scoped: BoxFuture<'static, ()> = Box::pin(async move {
                    setter.set_transaction_context(context, callback).await
                });
                scoped
            })
    }

    pub fn has_get(&self) -> bool {
        self.get.is_some()
    }

    pub fn has_set(&self) -> bool {
        self.set.is_some()
    }

    /// Check both members, `get_transaction_context` first.
    pub fn validate(self) -> Result<ValidatedPropagator> {
        let get = self.get.ok_or(PropagatorError::MissingMember {
            member: "get_transaction_context",
        })?;
        let set = self.set.ok_or(PropagatorError::MissingMember {
            member: "set_transaction_context",
        })?;
        Ok(ValidatedPropagator { get, set })
    }
}

impl fmt::Debug for DynamicPropagator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicPropagator")
            .field("get_transaction_context", &self.get.is_some())
            .field("set_transaction_context", &self.set.is_some())
            .finish()
    }
}

/// A [`DynamicPropagator`] that passed validation.
pub struct ValidatedPropagator {
    get: GetFn,
    set: SetFn,
}

#[async_trait]
impl TransactionContextPropagator for ValidatedPropagator {
    fn get_transaction_context(&self) -> Result<TransactionContext> {
        (self.get)()
    }

    async fn set_transaction_context(
        &self,
        context: TransactionContext,
        callback: TransactionCallback,
    ) {
        (self.set)(context, callback).await;
    }
}

/// Anything that can be offered as the active propagator.
pub trait IntoPropagator {
    fn into_propagator(self) -> Result<Arc<dyn TransactionContextPropagator>>;
}

impl<T> IntoPropagator for Arc<T>
where
    T: TransactionContextPropagator + 'static,
{
    fn into_propagator(self) -> Result<Arc<dyn TransactionContextPropagator>> {
        Ok(self)
    }
}

impl<T> IntoPropagator for Box<T>
where
    T: TransactionContextPropagator + 'static,
{
    fn into_propagator(self) -> Result<Arc<dyn TransactionContextPropagator>> {
        let propagator: Arc<T> = Arc::from(self);
        Ok(propagator)
    }
}

impl IntoPropagator for Arc<dyn TransactionContextPropagator> {
    fn into_propagator(self) -> Result<Arc<dyn TransactionContextPropagator>> {
        Ok(self)
    }
}

impl IntoPropagator for DynamicPropagator {
    fn into_propagator(self) -> Result<Arc<dyn TransactionContextPropagator>> {
        Ok(Arc::new(self.validate()?))
    }
}

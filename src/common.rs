//! State and behaviour shared by every API variant.
//!
//! [`ApiCommon`] owns the global evaluation context, the active transaction
//! context propagator and the active logger. Variant-specific APIs embed it
//! and pick up the shared operations through the [`CommonApi`] trait.

use crate::spans;
use flagrt_core::logger::panic_message;
use flagrt_core::{
    DefaultLogger, EvaluationContext, Logger, ProviderMetadata, SafeLogger, TransactionContext,
};
use flagrt_propagation::{
    BoxFuture, IntoPropagator, NoopTransactionContextPropagator, TransactionContextPropagator,
};
use parking_lot::RwLock;
use std::error::Error as StdError;
use std::fmt::Write as _;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::Instrument;

const INVALID_PROPAGATOR: &str = "Invalid TransactionContextPropagator, will not be set:";

pub struct ApiCommon {
    context: RwLock<Arc<EvaluationContext>>,
    propagator: RwLock<Arc<dyn TransactionContextPropagator>>,
    logger: RwLock<Arc<dyn Logger>>,
}

impl ApiCommon {
    pub fn new() -> Self {
        Self {
            context: RwLock::new(Arc::new(EvaluationContext::default())),
            propagator: RwLock::new(Arc::new(NoopTransactionContextPropagator::new())),
            logger: RwLock::new(Arc::new(DefaultLogger::new())),
        }
    }

    pub fn logger(&self) -> Arc<dyn Logger> {
        self.logger.read().clone()
    }

    /// Wrap `logger` in a [`SafeLogger`] and make it the active logger.
    pub fn install_logger(&self, logger: Arc<dyn Logger>) {
        let wrapped: Arc<dyn Logger> = Arc::new(SafeLogger::new(logger));
        *self.logger.write() = wrapped;
    }

    pub fn context(&self) -> EvaluationContext {
        self.context.read().as_ref().clone()
    }

    pub fn replace_context(&self, context: EvaluationContext) {
        *self.context.write() = Arc::new(context);
    }

    pub fn propagator(&self) -> Arc<dyn TransactionContextPropagator> {
        self.propagator.read().clone()
    }

    /// Validate `candidate` and install it, or log why it was rejected.
    ///
    /// Returns whether the candidate was installed.
    pub fn install_propagator(&self, candidate: impl IntoPropagator) -> bool {
        match candidate.into_propagator() {
            Ok(propagator) => {
                *self.propagator.write() = propagator;
                tracing::debug!("Installed transaction context propagator");
                true
            }
            Err(err) => {
                self.logger().error(&format!("{INVALID_PROPAGATOR} {err}"));
                false
            }
        }
    }

    pub async fn set_transaction_context(
        &self,
        context: TransactionContext,
        callback: BoxFuture<'static, ()>,
    ) {
        let propagator = self.propagator();
        propagator
            .set_transaction_context(context, callback)
            .instrument(spans::set_transaction_context())
            .await;
    }

    /// Current transaction context; never fails.
    ///
    /// Errors and panics from the propagator are logged and degrade to an
    /// empty context.
    pub fn transaction_context(&self) -> TransactionContext {
        let propagator = self.propagator();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| propagator.get_transaction_context()));
        let logger = self.logger();
        match outcome {
            Ok(Ok(context)) => context,
            Ok(Err(err)) => {
                logger.error(&format!(
                    "Error getting transaction context: {err}, returning empty context."
                ));
                logger.error(&error_trace(&err));
                TransactionContext::default()
            }
            Err(payload) => {
                logger.error(&format!(
                    "Error getting transaction context: {}, returning empty context.",
                    panic_message(payload.as_ref())
                ));
                TransactionContext::default()
            }
        }
    }
}

impl Default for ApiCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug form of an error followed by its source chain.
fn error_trace(err: &(dyn StdError + 'static)) -> String {
    let mut trace = format!("{err:?}");
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(trace, "\ncaused by: {cause}");
        source = cause.source();
    }
    trace
}

/// Operations every API variant exposes over its [`ApiCommon`].
///
/// Setters return `&Self` so configuration calls can be chained.
pub trait CommonApi {
    fn common(&self) -> &ApiCommon;

    /// Metadata of the provider currently backing this API.
    fn provider_metadata(&self) -> ProviderMetadata;

    fn set_logger(&self, logger: Arc<dyn Logger>) -> &Self {
        self.common().install_logger(logger);
        self
    }

    fn logger(&self) -> Arc<dyn Logger> {
        self.common().logger()
    }

    fn set_context(&self, context: EvaluationContext) -> &Self {
        self.common().replace_context(context);
        self
    }

    fn context(&self) -> EvaluationContext {
        self.common().context()
    }

    /// Install a propagator if it validates; otherwise keep the current one.
    fn set_transaction_context_propagator(&self, propagator: impl IntoPropagator) -> &Self {
        self.common().install_propagator(propagator);
        self
    }

    /// Run `callback` with `context` active, as the current propagator sees fit.
    fn set_transaction_context<F>(
        &self,
        context: TransactionContext,
        callback: F,
    ) -> BoxFuture<'_, ()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Box::pin(self.common().set_transaction_context(context, Box::pin(callback)))
    }

    fn transaction_context(&self) -> TransactionContext {
        self.common().transaction_context()
    }
}

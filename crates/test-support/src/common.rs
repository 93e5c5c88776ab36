//! Common test utilities for tests that touch the global API.

pub use crate::support::hooks::*;
pub use crate::support::loggers::*;
pub use crate::support::propagators::*;
pub use crate::support::providers::*;

use flagrt::{
    CommonApi, DefaultLogger, EvaluationContext, FlagApi, NoopProvider,
    NoopTransactionContextPropagator,
};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Serializes tests that mutate the process-wide API.
static GLOBAL_API_GUARD: Mutex<()> = parking_lot::const_mutex(());

/// Lock the global API and put every setting back to its default.
///
/// Hold the returned guard for the whole test.
pub fn lock_global_api() -> MutexGuard<'static, ()> {
    let guard = GLOBAL_API_GUARD.lock();
    reset_global_api();
    guard
}

pub fn reset_global_api() {
    let api = FlagApi::instance();
    api.set_provider(Arc::new(NoopProvider::new()))
        .clear_hooks()
        .set_context(EvaluationContext::default())
        .set_transaction_context_propagator(Arc::new(NoopTransactionContextPropagator::new()))
        .set_logger(Arc::new(DefaultLogger::new()));
}

/// Install a fresh [`RecordingLogger`] on the global API and return it.
pub fn record_global_logs() -> Arc<RecordingLogger> {
    let logger = Arc::new(RecordingLogger::new());
    FlagApi::instance().set_logger(logger.clone());
    logger
}

//! Transaction context propagation.
//!
//! A propagator stores and retrieves per-call-chain context across
//! asynchronous boundaries. This crate provides the contract, the no-op
//! default, a tokio task-local implementation, and the validation boundary
//! for propagators assembled at runtime.

pub mod dynamic;
pub mod error;
pub mod propagator;
pub mod registry;
pub mod task_local;

pub use dynamic::{DynamicPropagator, GetFn, IntoPropagator, SetFn};
pub use error::{PropagatorError, Result};
pub use propagator::{
    BoxFuture, NoopTransactionContextPropagator, TransactionCallback, TransactionContextPropagator,
};
pub use registry::PropagatorRegistry;
pub use task_local::TaskLocalTransactionContextPropagator;

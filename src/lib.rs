//! flagrt: process-wide feature flag registry
//!
//! This crate holds the single [`FlagApi`] of a process: the active provider,
//! the global evaluation context, the hook list, the transaction context
//! propagator and the logger. [`Client`] handles obtained from it always see
//! the current configuration.
//!
//! ```rust
//! use flagrt::{CommonApi, EvaluationContext, FlagApi};
//!
//! # tokio_test::block_on(async {
//! let api = FlagApi::instance();
//! api.set_context(EvaluationContext::new().with_field("env", "prod"));
//!
//! let client = api.client(Some("checkout"), None, None);
//! let enabled = client.bool_value("new-checkout", false, None).await;
//! assert!(!enabled);
//! # });
//! ```

pub mod api;
pub mod client;
pub mod common;
pub mod config;
pub mod error;
pub mod spans;
pub mod tracing_setup;

pub use api::{FlagApi, GLOBAL_API_KEY};
pub use client::{Client, ContextAccessor, LoggerAccessor, ProviderAccessor};
pub use common::{ApiCommon, CommonApi};
pub use config::ApiConfig;
pub use error::{ConfigError, Result};
pub use tracing_setup::{init_tracing, init_tracing_with};

pub use flagrt_core::{
    ClientMetadata, DefaultLogger, ErrorCode, EvaluationContext, EvaluationDetails,
    EvaluationValue, FlagError, FlagValueType, Hook, LogLevel, Logger,
    ProviderMetadata, Reason, ResolutionDetails, SafeLogger, TransactionContext,
};
pub use flagrt_propagation::{
    DynamicPropagator, IntoPropagator, NoopTransactionContextPropagator, PropagatorError,
    PropagatorRegistry, TaskLocalTransactionContextPropagator, TransactionCallback,
    TransactionContextPropagator,
};
pub use flagrt_provider::{NOOP_PROVIDER_NAME, NoopProvider, Provider};

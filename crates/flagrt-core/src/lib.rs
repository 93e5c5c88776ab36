//! flagrt core types and shared utilities.
//!
//! Everything the registry, the propagators and the providers agree on lives
//! here: evaluation contexts, resolution results, the logger contract and the
//! hook contract.

pub mod context;
pub mod error;
pub mod hook;
pub mod logger;
pub mod types;

pub use context::{EvaluationContext, EvaluationValue, TARGETING_KEY_FIELD, TransactionContext};
pub use error::{ErrorCode, FlagError, Result};
pub use hook::Hook;
pub use logger::{DefaultLogger, LogLevel, Logger, SafeLogger};
pub use types::{
    ClientMetadata, EvaluationDetails, FlagValueType, ProviderMetadata, Reason, ResolutionDetails,
};

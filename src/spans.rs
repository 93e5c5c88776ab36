//! Span helpers for flagrt
//!
//! All span names use the `flagrt.` namespace prefix for low cardinality.

use flagrt_core::FlagValueType;
use tracing::Span;

/// Create span for a single flag evaluation.
///
/// Parent: caller span
#[inline]
pub fn evaluate_flag(client: Option<&str>, flag_key: &str, flag_type: FlagValueType) -> Span {
    tracing::debug_span!(
        "flagrt.evaluate_flag",
        client = client.unwrap_or_default(),
        flag_key = flag_key,
        flag_type = %flag_type,
    )
}

/// Create span for running a callback inside a transaction context.
///
/// Parent: caller span
#[inline]
pub fn set_transaction_context() -> Span {
    tracing::debug_span!("flagrt.set_transaction_context")
}

/// Create span for applying an [`crate::ApiConfig`].
#[inline]
pub fn configure(propagator: Option<&str>) -> Span {
    tracing::info_span!(
        "flagrt.configure",
        propagator = propagator.unwrap_or_default(),
    )
}

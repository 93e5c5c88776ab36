//! Client handles.
//!
//! A [`Client`] is a lightweight view into the flag API bound to a name,
//! version and initial context. It never caches the provider or logger: each
//! evaluation goes through accessor closures that read the live registry.

use crate::spans;
use flagrt_core::{
    ClientMetadata, EvaluationContext, EvaluationDetails, FlagValueType, Logger,
    ResolutionDetails, Result,
};
use flagrt_provider::Provider;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::Instrument;

pub type ProviderAccessor = Arc<dyn Fn() -> Arc<dyn Provider> + Send + Sync>;
pub type LoggerAccessor = Arc<dyn Fn() -> Arc<dyn Logger> + Send + Sync>;
/// Returns the global context with the current transaction context layered on.
pub type ContextAccessor = Arc<dyn Fn() -> EvaluationContext + Send + Sync>;

#[derive(Clone)]
pub struct Client {
    metadata: ClientMetadata,
    context: EvaluationContext,
    provider: ProviderAccessor,
    logger: LoggerAccessor,
    api_context: ContextAccessor,
}

macro_rules! evaluation_methods {
    ($(
        $(#[$doc:meta])*
        $value_fn:ident, $details_fn:ident, $resolve:ident, $ty:ty, $flag_type:expr;
    )*) => {
        $(
            $(#[$doc])*
            pub async fn $value_fn(
                &self,
                flag_key: &str,
                default_value: $ty,
                context: Option<&EvaluationContext>,
            ) -> $ty {
                self.$details_fn(flag_key, default_value, context).await.value
            }

            $(#[$doc])*
            ///
            /// Failures are reported in the returned details, never as an error.
            pub async fn $details_fn(
                &self,
                flag_key: &str,
                default_value: $ty,
                context: Option<&EvaluationContext>,
            ) -> EvaluationDetails<$ty> {
                let span = spans::evaluate_flag(self.metadata.name.as_deref(), flag_key, $flag_type);
                let provider = (self.provider)();
                let merged = self.merged_context(context);
                let result = provider
                    .$resolve(flag_key, default_value.clone(), &merged)
                    .instrument(span)
                    .await;
                self.finish(flag_key, $flag_type, default_value, result)
            }
        )*
    };
}

impl Client {
    pub(crate) fn new(
        metadata: ClientMetadata,
        context: EvaluationContext,
        provider: ProviderAccessor,
        logger: LoggerAccessor,
        api_context: ContextAccessor,
    ) -> Self {
        Self {
            metadata,
            context,
            provider,
            logger,
            api_context,
        }
    }

    pub fn metadata(&self) -> &ClientMetadata {
        &self.metadata
    }

    /// Context this handle was created with.
    pub fn context(&self) -> &EvaluationContext {
        &self.context
    }

    evaluation_methods! {
        /// Evaluate a boolean flag.
        bool_value, bool_details, resolve_bool, bool, FlagValueType::Boolean;
        /// Evaluate a string flag.
        string_value, string_details, resolve_string, String, FlagValueType::String;
        /// Evaluate an integer flag.
        int_value, int_details, resolve_int, i64, FlagValueType::Integer;
        /// Evaluate a float flag.
        float_value, float_details, resolve_float, f64, FlagValueType::Float;
        /// Evaluate a structured flag.
        struct_value, struct_details, resolve_struct, Value, FlagValueType::Structure;
    }

    /// Global < transaction < client < invocation.
    fn merged_context(&self, invocation: Option<&EvaluationContext>) -> EvaluationContext {
        let merged = (self.api_context)().merge(&self.context);
        match invocation {
            Some(invocation) => merged.merge(invocation),
            None => merged,
        }
    }

    fn finish<T>(
        &self,
        flag_key: &str,
        flag_type: FlagValueType,
        default_value: T,
        result: Result<ResolutionDetails<T>>,
    ) -> EvaluationDetails<T> {
        match result {
            Ok(resolution) => EvaluationDetails::from_resolution(flag_key, resolution),
            Err(err) => {
                (self.logger)().error(&format!(
                    "Error during {flag_type} evaluation of flag '{flag_key}': {err}"
                ));
                EvaluationDetails::from_error(flag_key, default_value, &err)
            }
        }
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("metadata", &self.metadata)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

//! The process-wide flag API.
//!
//! One [`FlagApi`] exists per process, reachable from anywhere through
//! [`FlagApi::instance`]. It embeds the shared [`ApiCommon`] state and adds
//! the active provider and the global hook list.

use crate::client::{Client, ContextAccessor, LoggerAccessor, ProviderAccessor};
use crate::common::{ApiCommon, CommonApi};
use crate::config::ApiConfig;
use crate::spans;
use flagrt_core::{ClientMetadata, EvaluationContext, Hook, ProviderMetadata};
use flagrt_propagation::PropagatorRegistry;
use flagrt_provider::{NoopProvider, Provider};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

/// Well-known name of the global API slot.
pub const GLOBAL_API_KEY: &str = "@flagrt/rust.api";

// =============================================================================
// Global API slot
// =============================================================================
//
// Every caller in the process observes the same instance and its mutations.
// The slot is initialised on first access and never torn down.

static GLOBAL_API: Lazy<FlagApi> = Lazy::new(|| {
    tracing::debug!(key = GLOBAL_API_KEY, "Initializing global flag API");
    FlagApi::new()
});

pub struct FlagApi {
    common: Arc<ApiCommon>,
    provider: Arc<RwLock<Arc<dyn Provider>>>,
    hooks: RwLock<Vec<Arc<dyn Hook>>>,
}

impl FlagApi {
    /// The single process-wide instance.
    pub fn instance() -> &'static FlagApi {
        &GLOBAL_API
    }

    pub(crate) fn new() -> Self {
        Self {
            common: Arc::new(ApiCommon::new()),
            provider: Arc::new(RwLock::new(Arc::new(NoopProvider::new()))),
            hooks: RwLock::new(Vec::new()),
        }
    }

    /// Replace the active provider. No validation is performed.
    pub fn set_provider(&self, provider: Arc<dyn Provider>) -> &Self {
        let name = provider.metadata().name.clone();
        *self.provider.write() = provider;
        tracing::info!(provider = %name, "Provider set");
        self
    }

    pub fn provider(&self) -> Arc<dyn Provider> {
        self.provider.read().clone()
    }

    /// Create a client handle bound to `name`/`version` and an optional context.
    ///
    /// The handle reads the active provider, logger and global context at
    /// evaluation time, so later configuration changes reach it.
    pub fn client(
        &self,
        name: Option<&str>,
        version: Option<&str>,
        context: Option<EvaluationContext>,
    ) -> Client {
        let provider_slot = self.provider.clone();
        let provider: ProviderAccessor = Arc::new(move || provider_slot.read().clone());

        let logger_common = self.common.clone();
        let logger: LoggerAccessor = Arc::new(move || logger_common.logger());

        let context_common = self.common.clone();
        let api_context: ContextAccessor = Arc::new(move || {
            context_common
                .context()
                .merge(&context_common.transaction_context())
        });

        Client::new(
            ClientMetadata {
                name: name.map(str::to_string),
                version: version.map(str::to_string),
            },
            context.unwrap_or_default(),
            provider,
            logger,
            api_context,
        )
    }

    /// Client handle with neither name nor version.
    pub fn default_client(&self) -> Client {
        self.client(None, None, None)
    }

    /// Append `hooks` in order. Duplicates are kept.
    pub fn add_hooks<I>(&self, hooks: I) -> &Self
    where
        I: IntoIterator<Item = Arc<dyn Hook>>,
    {
        self.hooks.write().extend(hooks);
        self
    }

    /// Snapshot of the hook list.
    pub fn hooks(&self) -> Vec<Arc<dyn Hook>> {
        self.hooks.read().clone()
    }

    pub fn clear_hooks(&self) -> &Self {
        self.hooks.write().clear();
        self
    }

    /// Apply a configuration: propagator first, then the global context.
    ///
    /// An unknown or incomplete propagator is rejected through the usual
    /// validation path and leaves the current propagator active.
    pub fn configure(&self, config: &ApiConfig, registry: &PropagatorRegistry) -> &Self {
        let span = spans::configure(config.propagator.as_deref());
        let _guard = span.enter();

        if let Some(name) = &config.propagator {
            self.set_transaction_context_propagator(registry.load(name));
        }
        if !config.context.is_empty() {
            self.set_context(config.context.clone());
        }
        self
    }
}

impl CommonApi for FlagApi {
    fn common(&self) -> &ApiCommon {
        &self.common
    }

    fn provider_metadata(&self) -> ProviderMetadata {
        let provider = self.provider();
        provider.metadata().clone()
    }
}

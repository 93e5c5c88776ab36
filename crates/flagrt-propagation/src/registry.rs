//! Name-keyed loader for propagators selected through configuration.

use crate::dynamic::DynamicPropagator;
use crate::propagator::NoopTransactionContextPropagator;
use crate::task_local::TaskLocalTransactionContextPropagator;
use std::collections::HashMap;
use std::sync::Arc;

pub const NOOP_PROPAGATOR: &str = "noop";
pub const TASK_LOCAL_PROPAGATOR: &str = "task_local";

/// Registry of named propagator candidates.
///
/// Entries are stored as [`DynamicPropagator`]s so plugins may register
/// incomplete candidates; validation happens when a candidate is installed.
#[derive(Debug, Clone, Default)]
pub struct PropagatorRegistry {
    entries: HashMap<String, DynamicPropagator>,
}

impl PropagatorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with `noop` and `task_local` registered
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(
            NOOP_PROPAGATOR,
            DynamicPropagator::from_typed(Arc::new(NoopTransactionContextPropagator::new())),
        );
        registry.register(
            TASK_LOCAL_PROPAGATOR,
            DynamicPropagator::from_typed(Arc::new(TaskLocalTransactionContextPropagator::new())),
        );
        registry
    }

    /// Register a candidate, replacing any previous entry with the same name
    pub fn register(&mut self, name: impl Into<String>, candidate: DynamicPropagator) {
        let name = name.into();
        tracing::debug!(name = %name, "Registered transaction context propagator");
        self.entries.insert(name, candidate);
    }

    /// Look up a candidate by name.
    ///
    /// Unknown names yield an empty candidate, which fails validation on install.
    pub fn load(&self, name: &str) -> DynamicPropagator {
        match self.entries.get(name) {
            Some(candidate) => candidate.clone(),
            None => {
                tracing::warn!(name = name, "Unknown transaction context propagator");
                DynamicPropagator::new()
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }
}

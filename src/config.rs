//! API configuration
//!
//! Provides a builder for configuring the flag API, plus loading from the
//! process environment (and a `.env` file when one is present).

use crate::error::{ConfigError, Result};
use flagrt_core::{EvaluationContext, EvaluationValue};
use std::ffi::OsString;

pub const PROPAGATOR_VAR: &str = "FLAGRT_PROPAGATOR";
pub const LOG_FILTER_VAR: &str = "FLAGRT_LOG";
pub const CONTEXT_VAR_PREFIX: &str = "FLAGRT_CONTEXT_";
pub const TARGETING_KEY_VAR: &str = "FLAGRT_TARGETING_KEY";

/// Configuration for the flag API
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiConfig {
    /// Name of the transaction context propagator to load (None = keep current)
    pub propagator: Option<String>,

    /// Global evaluation context (empty = keep current)
    pub context: EvaluationContext,

    /// Extra `tracing` filter directives, comma separated
    pub log_filter: Option<String>,
}

impl ApiConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a propagator by registry name
    pub fn with_propagator(mut self, name: impl Into<String>) -> Self {
        self.propagator = Some(name.into());
        self
    }

    /// Replace the global context
    pub fn with_context(mut self, context: EvaluationContext) -> Self {
        self.context = context;
        self
    }

    /// Add a single global context field
    pub fn with_context_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<EvaluationValue>,
    ) -> Self {
        self.context = self.context.with_field(key, value);
        self
    }

    /// Set extra log filter directives
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Load from the process environment.
    ///
    /// A `.env` file in the working directory (or a parent) is read first if
    /// present; variables already set in the environment win.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }

        let mut vars = Vec::new();
        for (key, value) in std::env::vars_os() {
            let Some(key) = key.to_str().map(str::to_string) else {
                continue;
            };
            if !key.starts_with("FLAGRT_") {
                continue;
            }
            vars.push((key.clone(), into_string(key, value)?));
        }
        Self::from_vars(vars)
    }

    /// Build from explicit `(name, value)` pairs.
    ///
    /// - `FLAGRT_PROPAGATOR=<name>`
    /// - `FLAGRT_LOG=<directives>`
    /// - `FLAGRT_TARGETING_KEY=<key>`
    /// - `FLAGRT_CONTEXT_<KEY>=<value>`: key is lower-cased, value parsed with
    ///   [`EvaluationValue::parse_lossy`]
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::new();
        for (key, value) in vars {
            let key = key.as_ref();
            let value = value.into();
            match key {
                PROPAGATOR_VAR => config.propagator = Some(value),
                LOG_FILTER_VAR => config.log_filter = Some(value),
                TARGETING_KEY_VAR => config.context = config.context.with_targeting_key(value),
                _ => {
                    let Some(field) = key.strip_prefix(CONTEXT_VAR_PREFIX) else {
                        continue;
                    };
                    if field.is_empty() {
                        return Err(ConfigError::EmptyContextKey(key.to_string()));
                    }
                    config.context = config
                        .context
                        .with_field(field.to_lowercase(), EvaluationValue::parse_lossy(&value));
                }
            }
        }
        Ok(config)
    }
}

fn into_string(key: String, value: OsString) -> Result<String> {
    value.into_string().map_err(|_| ConfigError::NotUnicode(key))
}

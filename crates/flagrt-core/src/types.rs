//! Descriptors and resolution results shared by providers and clients.

use crate::error::{ErrorCode, FlagError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Read-only descriptor of a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadata {
    pub name: String,
}

impl ProviderMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Identity a client handle was created with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientMetadata {
    pub name: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagValueType {
    Boolean,
    String,
    Integer,
    Float,
    Structure,
}

impl fmt::Display for FlagValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Structure => "structure",
        };
        f.write_str(name)
    }
}

/// Why a provider produced a particular value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    Static,
    Default,
    TargetingMatch,
    Split,
    Cached,
    Disabled,
    Unknown,
    Error,
    Other(String),
}

/// What a provider returns for a single flag resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionDetails<T> {
    pub value: T,
    pub variant: Option<String>,
    pub reason: Option<Reason>,
}

impl<T> ResolutionDetails<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            variant: None,
            reason: None,
        }
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn with_reason(mut self, reason: Reason) -> Self {
        self.reason = Some(reason);
        self
    }
}

/// What a client hands back to the caller after an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationDetails<T> {
    pub flag_key: String,
    pub value: T,
    pub variant: Option<String>,
    pub reason: Option<Reason>,
    pub error_code: Option<ErrorCode>,
    pub error_message: Option<String>,
}

impl<T> EvaluationDetails<T> {
    pub fn from_resolution(flag_key: impl Into<String>, resolution: ResolutionDetails<T>) -> Self {
        Self {
            flag_key: flag_key.into(),
            value: resolution.value,
            variant: resolution.variant,
            reason: resolution.reason,
            error_code: None,
            error_message: None,
        }
    }

    /// Details for a failed evaluation: the caller's default with the error attached.
    pub fn from_error(flag_key: impl Into<String>, default_value: T, error: &FlagError) -> Self {
        Self {
            flag_key: flag_key.into(),
            value: default_value,
            variant: None,
            reason: Some(Reason::Error),
            error_code: Some(error.code()),
            error_message: Some(error.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error_code.is_some()
    }
}

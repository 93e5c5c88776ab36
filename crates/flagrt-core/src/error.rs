use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable error codes reported in evaluation details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ProviderNotReady,
    FlagNotFound,
    ParseError,
    TypeMismatch,
    TargetingKeyMissing,
    InvalidContext,
    General,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::ProviderNotReady => "PROVIDER_NOT_READY",
            Self::FlagNotFound => "FLAG_NOT_FOUND",
            Self::ParseError => "PARSE_ERROR",
            Self::TypeMismatch => "TYPE_MISMATCH",
            Self::TargetingKeyMissing => "TARGETING_KEY_MISSING",
            Self::InvalidContext => "INVALID_CONTEXT",
            Self::General => "GENERAL",
        };
        f.write_str(code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    #[error("provider not ready: {0}")]
    ProviderNotReady(String),

    #[error("flag not found: {0}")]
    FlagNotFound(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("targeting key missing: {0}")]
    TargetingKeyMissing(String),

    #[error("invalid context: {0}")]
    InvalidContext(String),

    #[error("{0}")]
    General(String),
}

impl FlagError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ProviderNotReady(_) => ErrorCode::ProviderNotReady,
            Self::FlagNotFound(_) => ErrorCode::FlagNotFound,
            Self::Parse(_) => ErrorCode::ParseError,
            Self::TypeMismatch(_) => ErrorCode::TypeMismatch,
            Self::TargetingKeyMissing(_) => ErrorCode::TargetingKeyMissing,
            Self::InvalidContext(_) => ErrorCode::InvalidContext,
            Self::General(_) => ErrorCode::General,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlagError>;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not valid unicode")]
    NotUnicode(String),

    #[error("context variable {0} has an empty key")]
    EmptyContextKey(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

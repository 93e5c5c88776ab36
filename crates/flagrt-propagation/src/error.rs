use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropagatorError {
    /// A dynamically assembled propagator lacks a required operation.
    #[error("{member} is not a function.")]
    MissingMember { member: &'static str },

    /// The propagator could not produce the current transaction context.
    #[error("{0}")]
    Read(String),
}

pub type Result<T> = std::result::Result<T, PropagatorError>;

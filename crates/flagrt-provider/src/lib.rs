//! Provider contract and the built-in no-op provider.

pub mod noop;
pub mod provider;

pub use noop::{NOOP_PROVIDER_NAME, NoopProvider};
pub use provider::Provider;

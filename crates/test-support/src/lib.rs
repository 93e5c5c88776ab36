//! Shared fixtures for flagrt tests.

pub mod common;
pub mod support;

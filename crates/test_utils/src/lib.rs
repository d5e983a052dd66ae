//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! fiscal code test suite.
//!
//! # Modules
//!
//! - `fixtures`: Known people with their published fiscal codes
//! - `builders`: Builder for generation input with sensible defaults
//! - `assertions`: Custom assertion helpers for fiscal codes
//! - `generators`: Property-based test data generators
//! - `tracing`: One-time subscriber installation for test runs

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;
pub mod tracing;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
pub use crate::tracing::init_test_tracing;

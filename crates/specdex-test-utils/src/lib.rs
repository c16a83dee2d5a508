#![deny(unsafe_code)]

//! Shared test utilities for the Specdex workspace.
//!
//! Provides reusable fixtures, config builders, and tracing helpers so that
//! individual crate tests stay concise and consistent.
//!
//! Add this crate as a `[dev-dependency]` in any workspace member:
//!
//! ```toml
//! [dev-dependencies]
//! specdex-test-utils = { workspace = true }
//! ```

pub mod config;
pub mod store;
pub mod tracing_setup;

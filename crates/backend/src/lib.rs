//! Shared plumbing for Stratus remote-state backends.
//!
//! Backends take a loosely-typed configuration document plus the process
//! environment and turn them into whatever their remote service needs.
//! This crate holds the pieces common to all of them:
//!
//! - [`ConfigValues`] — typed field lookups over the configuration document
//! - [`Environment`] — injectable read-only env-var and file access, with
//!   the real [`OsEnvironment`] and an in-memory
//!   [`testing::MemoryEnvironment`]
//! - [`LogPolicy`] — injected gate for backend debug diagnostics

pub mod env;
pub mod log;
pub mod testing;
pub mod values;

pub use env::{Environment, OsEnvironment};
pub use log::LogPolicy;
pub use values::ConfigValues;

//! Scaffolder template example service.
//!
//! Answers `/`, `/health` and `/info` with JSON built from static
//! configuration and the current time.

pub mod config;
pub mod server;

pub use config::{ConfigError, ServiceConfig};
pub use server::{router, Service, ServerError};

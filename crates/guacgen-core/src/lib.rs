//! Core library for guacgen
//!
//! Environment-driven configuration rendering for Guacamole deployments:
//! a `{{NAME}}` template engine, variable resolution with defaults and
//! legacy aliases, and the builtin artifact catalog. Everything here is
//! pure and synchronous; the process environment is captured once into an
//! [`EnvSnapshot`] and injected.

pub mod artifact;
pub mod error;
pub mod preflight;
pub mod template;
pub mod vars;

// Re-export commonly used types
pub use error::{GuacgenError, Result};
pub use template::VarMap;
pub use vars::EnvSnapshot;

//! Project configuration model for makemold.
//!
//! This module defines the ProjectConfig struct that represents a project's
//! template configuration YAML. It supports forward-compatible parsing
//! (unknown fields are ignored), explicit defaults for optional fields, and
//! validation of required values.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{DeploymentSettings, ProjectConfig};
pub use types::{CicdRunner, DeploymentTarget};

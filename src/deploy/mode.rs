//! Deployment mode selection.

use crate::config::ProjectConfig;
use crate::deploy::bindings::BindingSet;
use crate::error::Result;

/// The deployment flow a generated Makefile delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    /// Delegate analyze/prepare/deploy to the factory deployment agent
    /// (the default).
    Factory,
    /// Invoke the project-local deployment module directly (opt-in via
    /// `use_original_deployment: true`).
    Standard,
}

impl DeploymentMode {
    /// Human-readable mode name for messages and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Factory => "factory",
            Self::Standard => "standard",
        }
    }
}

/// Select the deployment mode and derive its bindings for a config.
///
/// Pure: same config in, same mode and bindings out. A missing `settings`
/// block is a precondition violation and fails with a configuration error
/// rather than silently defaulting.
pub fn select_mode(config: &ProjectConfig) -> Result<(DeploymentMode, BindingSet)> {
    let settings = config.settings()?;

    let mode = if settings.use_original_deployment.unwrap_or(false) {
        DeploymentMode::Standard
    } else {
        DeploymentMode::Factory
    };

    Ok((mode, BindingSet::for_mode(mode, config)))
}

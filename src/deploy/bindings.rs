//! Per-mode binding sets for the deployment section of the Makefile.
//!
//! A [`BindingSet`] is a tagged variant: only one mode's command strings can
//! exist for a given render pass, so the mutual-exclusivity contract between
//! factory and standard content is structural rather than checked by string
//! search after the fact.

use crate::config::ProjectConfig;
use crate::deploy::DeploymentMode;
use crate::template::vars;
use std::collections::HashMap;

/// Invocation prefix that delegates a target to the factory deployment agent.
pub const FACTORY_AGENT_PREFIX: &str = "uv run factory_deployment_agent";

/// Notice echoed by every delegated factory target.
pub const FACTORY_DELEGATION_NOTICE: &str = "Delegated to Factory Deployment Agent";

/// Resolved bindings for one deployment mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingSet {
    /// Factory mode: delegate to the factory deployment agent.
    Factory(FactoryBindings),
    /// Standard mode: invoke the project-local deployment module.
    Standard(StandardBindings),
}

/// Command strings for factory (delegated) deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryBindings {
    /// `uv run factory_deployment_agent analyze <project_name>`
    pub analyze_command: String,
    /// `uv run factory_deployment_agent prepare <project_name>`
    pub prepare_command: String,
    /// `uv run factory_deployment_agent deploy <project_name> --yes`
    /// (the `--yes` suffix is fixed, not configurable)
    pub deploy_command: String,
}

impl FactoryBindings {
    fn derive(config: &ProjectConfig) -> Self {
        let project = &config.project_name;
        Self {
            analyze_command: format!("{} analyze {}", FACTORY_AGENT_PREFIX, project),
            prepare_command: format!("{} prepare {}", FACTORY_AGENT_PREFIX, project),
            deploy_command: format!("{} deploy {} --yes", FACTORY_AGENT_PREFIX, project),
        }
    }
}

/// Command strings and flags for standard (project-local) deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardBindings {
    /// Dependency export command (`uv export --no-hashes ...`).
    pub export_command: String,
    /// Module invocation (`uv run -m <agent_directory>.app_utils.deploy`).
    pub deploy_module_command: String,
    /// `--source-packages=./<agent_directory>`
    pub source_packages_flag: String,
    /// `--entrypoint-module=<agent_directory>.agent_engine_app`
    pub entrypoint_module_flag: String,
}

impl StandardBindings {
    fn derive(config: &ProjectConfig) -> Self {
        let dir = config.effective_agent_directory();
        Self {
            export_command: "uv export --no-hashes --output-file .requirements.txt".to_string(),
            deploy_module_command: format!("uv run -m {}.app_utils.deploy", dir),
            source_packages_flag: format!("--source-packages=./{}", dir),
            entrypoint_module_flag: format!("--entrypoint-module={}.agent_engine_app", dir),
        }
    }
}

impl BindingSet {
    /// Derive the binding set for a mode from a validated config.
    pub fn for_mode(mode: DeploymentMode, config: &ProjectConfig) -> Self {
        match mode {
            DeploymentMode::Factory => Self::Factory(FactoryBindings::derive(config)),
            DeploymentMode::Standard => Self::Standard(StandardBindings::derive(config)),
        }
    }

    /// The mode this binding set belongs to.
    pub fn mode(&self) -> DeploymentMode {
        match self {
            Self::Factory(_) => DeploymentMode::Factory,
            Self::Standard(_) => DeploymentMode::Standard,
        }
    }

    /// Placeholder bindings consumed by the mode's deployment block template.
    pub fn variables(&self) -> HashMap<String, String> {
        match self {
            Self::Factory(b) => vars([
                ("delegation_notice", FACTORY_DELEGATION_NOTICE),
                ("analyze_command", b.analyze_command.as_str()),
                ("prepare_command", b.prepare_command.as_str()),
                ("deploy_command", b.deploy_command.as_str()),
            ]),
            Self::Standard(b) => vars([
                ("export_command", b.export_command.as_str()),
                ("deploy_module_command", b.deploy_module_command.as_str()),
                ("source_packages_flag", b.source_packages_flag.as_str()),
                ("entrypoint_module_flag", b.entrypoint_module_flag.as_str()),
            ]),
        }
    }
}

//! ProjectConfig struct definition and default implementation.

use super::types::{CicdRunner, DeploymentTarget};
use serde::{Deserialize, Serialize};

/// Configuration for a generated agent project.
///
/// This struct represents the contents of the project's template config YAML.
/// Unknown fields in the YAML are ignored for forward compatibility.
///
/// `project_name`, `agent_directory`, and `settings` are required; parsing a
/// config without them succeeds but validation rejects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project name, used verbatim in generated deployment commands.
    pub project_name: String,

    /// Relative directory holding the agent package (a single path
    /// component, e.g. "app").
    pub agent_directory: String,

    /// Deployment target for the backend.
    pub deployment_target: DeploymentTarget,

    /// CI/CD runner the project is wired to.
    pub cicd_runner: CicdRunner,

    /// Whether the project is an ADK agent.
    pub is_adk: bool,

    /// Whether the project uses the ADK live (bidi-streaming) surface.
    pub is_adk_live: bool,

    /// Whether the project exposes an A2A endpoint.
    pub is_a2a: bool,

    /// Example question surfaced to the operator in the playground target.
    pub example_question: String,

    /// Deployment settings block. Required: a config without it fails
    /// validation rather than silently defaulting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<DeploymentSettings>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            agent_directory: String::new(),
            deployment_target: DeploymentTarget::default(),
            cicd_runner: CicdRunner::default(),
            is_adk: false,
            is_adk_live: false,
            is_a2a: false,
            example_question: String::new(),
            settings: None,
        }
    }
}

/// Deployment settings block of a project config.
///
/// `use_original_deployment` is the single switch controlling deployment
/// mode. An absent key means `false`: factory mode is the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentSettings {
    /// Opt-in switch for the original (standard) deployment flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_original_deployment: Option<bool>,

    /// Optional override of the top-level agent directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_directory: Option<String>,
}

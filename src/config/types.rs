//! Configuration enums for makemold.

use serde::{Deserialize, Serialize};

/// Where the generated project's backend is deployed.
///
/// This feeds the rendered Makefile's header only; it never participates in
/// deployment mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentTarget {
    /// Vertex AI Agent Engine (default).
    #[default]
    AgentEngine,
    /// Cloud Run.
    CloudRun,
}

impl DeploymentTarget {
    /// The snake_case form used in config files and rendered output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AgentEngine => "agent_engine",
            Self::CloudRun => "cloud_run",
        }
    }
}

/// CI/CD runner the generated project is wired to.
///
/// Like [`DeploymentTarget`], this is informational: it feeds the rendered
/// header, not mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CicdRunner {
    /// Google Cloud Build (default).
    #[default]
    GoogleCloudBuild,
    /// GitHub Actions.
    GithubActions,
}

impl CicdRunner {
    /// The snake_case form used in config files and rendered output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoogleCloudBuild => "google_cloud_build",
            Self::GithubActions => "github_actions",
        }
    }
}

//! Config loading, validation, and accessor operations.

use super::model::{DeploymentSettings, ProjectConfig};
use crate::error::{MoldError, Result};
use std::path::Path;

impl ProjectConfig {
    /// Load a project config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility. The parsed config is validated before it is returned.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MoldError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a project config from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ProjectConfig = serde_yaml::from_str(yaml)
            .map_err(|e| MoldError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| MoldError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return an error on invalid values.
    ///
    /// Validation rules:
    /// - `project_name` must be non-empty (it is embedded verbatim in
    ///   generated commands)
    /// - `agent_directory` must be a non-empty single path component
    /// - `settings` must be present
    /// - a settings-level `agent_directory` override, when present, must
    ///   also be a non-empty single path component
    pub fn validate(&self) -> Result<()> {
        if self.project_name.trim().is_empty() {
            return Err(MoldError::Config(
                "config validation failed: project_name must be non-empty".to_string(),
            ));
        }

        validate_agent_directory(&self.agent_directory, "agent_directory")?;

        let settings = self.settings.as_ref().ok_or_else(|| {
            MoldError::Config(
                "config validation failed: missing required 'settings' block".to_string(),
            )
        })?;

        if let Some(ref dir) = settings.agent_directory {
            validate_agent_directory(dir, "settings.agent_directory")?;
        }

        Ok(())
    }

    /// The settings block, or a configuration error when it is missing.
    ///
    /// Mode selection reads `use_original_deployment` through this accessor
    /// so that an absent block fails fast instead of silently defaulting.
    pub fn settings(&self) -> Result<&DeploymentSettings> {
        self.settings.as_ref().ok_or_else(|| {
            MoldError::Config("missing required 'settings' block in project config".to_string())
        })
    }

    /// Effective agent directory: the settings-level override wins when
    /// present and non-empty, otherwise the top-level value is used.
    pub fn effective_agent_directory(&self) -> &str {
        self.settings
            .as_ref()
            .and_then(|s| s.agent_directory.as_deref())
            .filter(|dir| !dir.is_empty())
            .unwrap_or(&self.agent_directory)
    }
}

/// Reject empty agent directories and anything that is not a single path
/// component. The value is spliced into Python module paths
/// (`<dir>.app_utils.deploy`), where separators or whitespace would produce
/// broken commands.
fn validate_agent_directory(dir: &str, field: &str) -> Result<()> {
    if dir.trim().is_empty() {
        return Err(MoldError::Config(format!(
            "config validation failed: {} must be non-empty",
            field
        )));
    }

    if dir.contains('/') || dir.contains('\\') {
        return Err(MoldError::Config(format!(
            "config validation failed: {} must be a single path component without separators (found '{}')",
            field, dir
        )));
    }

    if dir.chars().any(char::is_whitespace) {
        return Err(MoldError::Config(format!(
            "config validation failed: {} must not contain whitespace (found '{}')",
            field, dir
        )));
    }

    Ok(())
}

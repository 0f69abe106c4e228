//! Tests for config functionality.

use crate::config::{CicdRunner, DeploymentTarget, ProjectConfig};
use crate::error::MoldError;

const MINIMAL_YAML: &str = r#"
project_name: my-agent
agent_directory: app
settings: {}
"#;

#[test]
fn test_parse_minimal_yaml() {
    let config = ProjectConfig::from_yaml(MINIMAL_YAML).unwrap();

    assert_eq!(config.project_name, "my-agent");
    assert_eq!(config.agent_directory, "app");

    // Unspecified values should use defaults
    assert_eq!(config.deployment_target, DeploymentTarget::AgentEngine);
    assert_eq!(config.cicd_runner, CicdRunner::GoogleCloudBuild);
    assert!(!config.is_adk);
    assert!(!config.is_adk_live);
    assert!(!config.is_a2a);
    assert_eq!(config.example_question, "");

    // Empty settings block parses with the flag unset
    let settings = config.settings().unwrap();
    assert_eq!(settings.use_original_deployment, None);
    assert_eq!(settings.agent_directory, None);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
project_name: test-factory-agent
agent_directory: app
deployment_target: cloud_run
cicd_runner: github_actions
is_adk: true
is_adk_live: false
is_a2a: false
example_question: "What can you help me with?"
settings:
  use_original_deployment: true
  agent_directory: app
"#;
    let config = ProjectConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.project_name, "test-factory-agent");
    assert_eq!(config.deployment_target, DeploymentTarget::CloudRun);
    assert_eq!(config.cicd_runner, CicdRunner::GithubActions);
    assert!(config.is_adk);
    assert_eq!(config.example_question, "What can you help me with?");

    let settings = config.settings().unwrap();
    assert_eq!(settings.use_original_deployment, Some(true));
    assert_eq!(settings.agent_directory.as_deref(), Some("app"));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
project_name: my-agent
agent_directory: app
some_future_field: 42
settings:
  another_future_field: value
"#;
    let config = ProjectConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.project_name, "my-agent");
}

#[test]
fn test_missing_settings_is_a_config_error() {
    let yaml = r#"
project_name: my-agent
agent_directory: app
"#;
    let err = ProjectConfig::from_yaml(yaml).unwrap_err();

    match err {
        MoldError::Config(msg) => assert!(msg.contains("settings"), "message was: {}", msg),
        other => panic!("expected Config error, got: {:?}", other),
    }
}

#[test]
fn test_missing_project_name_is_a_config_error() {
    let yaml = r#"
agent_directory: app
settings: {}
"#;
    let err = ProjectConfig::from_yaml(yaml).unwrap_err();

    match err {
        MoldError::Config(msg) => assert!(msg.contains("project_name")),
        other => panic!("expected Config error, got: {:?}", other),
    }
}

#[test]
fn test_missing_agent_directory_is_a_config_error() {
    let yaml = r#"
project_name: my-agent
settings: {}
"#;
    let err = ProjectConfig::from_yaml(yaml).unwrap_err();

    match err {
        MoldError::Config(msg) => assert!(msg.contains("agent_directory")),
        other => panic!("expected Config error, got: {:?}", other),
    }
}

#[test]
fn test_agent_directory_rejects_path_separators() {
    let yaml = r#"
project_name: my-agent
agent_directory: src/app
settings: {}
"#;
    assert!(ProjectConfig::from_yaml(yaml).is_err());
}

#[test]
fn test_settings_override_rejects_path_separators() {
    let yaml = r#"
project_name: my-agent
agent_directory: app
settings:
  agent_directory: nested/app
"#;
    assert!(ProjectConfig::from_yaml(yaml).is_err());
}

#[test]
fn test_effective_agent_directory_prefers_settings_override() {
    let yaml = r#"
project_name: my-agent
agent_directory: app
settings:
  agent_directory: backend
"#;
    let config = ProjectConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.effective_agent_directory(), "backend");
}

#[test]
fn test_effective_agent_directory_falls_back_to_top_level() {
    let config = ProjectConfig::from_yaml(MINIMAL_YAML).unwrap();
    assert_eq!(config.effective_agent_directory(), "app");
}

#[test]
fn test_yaml_round_trip() {
    let config = ProjectConfig::from_yaml(MINIMAL_YAML).unwrap();
    let yaml = config.to_yaml().unwrap();
    let reparsed = ProjectConfig::from_yaml(&yaml).unwrap();

    assert_eq!(reparsed.project_name, config.project_name);
    assert_eq!(reparsed.agent_directory, config.agent_directory);
}

#[test]
fn test_load_missing_file_is_a_config_error() {
    let err = ProjectConfig::load("/nonexistent/templateconfig.yaml").unwrap_err();

    match err {
        MoldError::Config(msg) => assert!(msg.contains("failed to read config file")),
        other => panic!("expected Config error, got: {:?}", other),
    }
}

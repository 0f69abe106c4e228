//! Tests for render orchestration.
//!
//! These cover the rendered-artifact contracts: mode marker exclusivity,
//! target presence, interpolation of config values, and determinism.

use crate::config::ProjectConfig;
use crate::error::MoldError;
use crate::render::{FACTORY_MARKERS, REQUIRED_TARGETS, STANDARD_MARKERS};

fn factory_config() -> ProjectConfig {
    ProjectConfig::from_yaml(
        r#"
project_name: test-factory-agent
agent_directory: app
deployment_target: agent_engine
cicd_runner: google_cloud_build
is_adk: true
example_question: "What can you help me with?"
settings:
  agent_directory: app
"#,
    )
    .unwrap()
}

fn standard_config() -> ProjectConfig {
    ProjectConfig::from_yaml(
        r#"
project_name: test-standard-agent
agent_directory: app
deployment_target: agent_engine
cicd_runner: google_cloud_build
is_adk: true
example_question: "What's the weather in SF?"
settings:
  use_original_deployment: true
  agent_directory: app
"#,
    )
    .unwrap()
}

#[test]
fn factory_output_contains_factory_markers() {
    let makefile = super::generate(&factory_config()).unwrap();

    for marker in FACTORY_MARKERS {
        assert!(makefile.contains(marker), "missing marker: {}", marker);
    }
}

#[test]
fn factory_output_excludes_standard_commands() {
    let makefile = super::generate(&factory_config()).unwrap();

    for marker in STANDARD_MARKERS {
        assert!(!makefile.contains(marker), "leaked marker: {}", marker);
    }
    assert!(!makefile.contains("uv run -m app.app_utils.deploy"));
}

#[test]
fn explicit_false_flag_still_renders_factory_mode() {
    let mut config = factory_config();
    config.settings.as_mut().unwrap().use_original_deployment = Some(false);

    let makefile = super::generate(&config).unwrap();
    assert!(makefile.contains("factory_deployment_agent"));
}

#[test]
fn standard_output_contains_standard_commands() {
    let makefile = super::generate(&standard_config()).unwrap();

    assert!(makefile.contains("uv export --no-hashes"));
    assert!(makefile.contains("uv run -m app.app_utils.deploy"));
    assert!(makefile.contains("--source-packages=./app"));
    assert!(makefile.contains("--entrypoint-module=app.agent_engine_app"));
}

#[test]
fn standard_output_excludes_factory_markers() {
    let makefile = super::generate(&standard_config()).unwrap();

    for marker in FACTORY_MARKERS {
        assert!(!makefile.contains(marker), "leaked marker: {}", marker);
    }
}

#[test]
fn all_targets_present_exactly_once_in_both_modes() {
    for config in [factory_config(), standard_config()] {
        let (mode, makefile) = super::render_unverified(&config).unwrap();
        let report = super::inspect(&makefile, mode);

        for (target, count) in &report.target_counts {
            assert_eq!(
                *count, 1,
                "target '{}' defined {} times in {} mode",
                target,
                count,
                mode.as_str()
            );
        }
        assert_eq!(report.target_counts.len(), REQUIRED_TARGETS.len());
    }
}

#[test]
fn factory_commands_interpolate_project_name() {
    let makefile = super::generate(&factory_config()).unwrap();

    assert!(makefile.contains("analyze test-factory-agent"));
    assert!(makefile.contains("prepare test-factory-agent"));
    assert!(makefile.contains("deploy test-factory-agent --yes"));
}

#[test]
fn rendering_is_idempotent() {
    let config = factory_config();
    let first = super::generate(&config).unwrap();
    let second = super::generate(&config).unwrap();
    assert_eq!(first, second, "renders must be byte-identical");

    let config = standard_config();
    let first = super::generate(&config).unwrap();
    let second = super::generate(&config).unwrap();
    assert_eq!(first, second, "renders must be byte-identical");
}

#[test]
fn output_carries_shared_sections() {
    let makefile = super::generate(&factory_config()).unwrap();

    assert!(makefile.contains("# == Backend Deployment Targets =="));
    assert!(makefile.contains("# Makefile for test-factory-agent"));
    assert!(makefile.contains("install:"));
    assert!(makefile.contains("playground:"));
    assert!(makefile.contains("Try asking: What can you help me with?"));
    assert!(makefile.contains(".PHONY:"));
}

#[test]
fn playground_command_follows_flag_precedence() {
    let mut config = factory_config();

    config.is_a2a = true;
    config.is_adk_live = true;
    let makefile = super::generate(&config).unwrap();
    assert!(makefile.contains("a2a-inspector"));

    config.is_a2a = false;
    let makefile = super::generate(&config).unwrap();
    assert!(makefile.contains("adk web app --reload"));

    config.is_adk_live = false;
    let makefile = super::generate(&config).unwrap();
    assert!(makefile.contains("adk web app"));
    assert!(!makefile.contains("--reload"));

    config.is_adk = false;
    let makefile = super::generate(&config).unwrap();
    assert!(makefile.contains("streamlit run"));
}

#[test]
fn missing_settings_surfaces_config_error() {
    let config = ProjectConfig {
        project_name: "my-agent".to_string(),
        agent_directory: "app".to_string(),
        ..ProjectConfig::default()
    };

    let err = super::generate(&config).unwrap_err();
    assert!(matches!(err, MoldError::Config(_)));
}

#[test]
fn settings_directory_override_flows_into_standard_commands() {
    let mut config = standard_config();
    config.settings.as_mut().unwrap().agent_directory = Some("backend".to_string());

    let makefile = super::generate(&config).unwrap();
    assert!(makefile.contains("uv run -m backend.app_utils.deploy"));
    assert!(makefile.contains("--source-packages=./backend"));
    assert!(makefile.contains("--entrypoint-module=backend.agent_engine_app"));
}

#[test]
fn recipe_lines_are_tab_indented() {
    let makefile = super::generate(&factory_config()).unwrap();

    let mut saw_recipe = false;
    for line in makefile.lines() {
        if line.starts_with('\t') {
            saw_recipe = true;
        }
        assert!(
            !line.starts_with("    "),
            "recipe line indented with spaces: {:?}",
            line
        );
    }
    assert!(saw_recipe, "expected at least one tab-indented recipe line");
}

//! Render orchestration: compose mode selection with template substitution.
//!
//! `generate` is the single entry point: select the deployment mode, render
//! that mode's deployment block, splice it into the shared skeleton in one
//! substitution pass, and verify the result. Rendering is a pure function of
//! the config; the embedded template bodies are process-wide immutable.

mod templates;
mod verify;

#[cfg(test)]
mod tests;

pub use templates::{MAKEFILE_SKELETON, deployment_block};
pub use verify::{
    ArtifactReport, FACTORY_MARKERS, REQUIRED_TARGETS, STANDARD_MARKERS, inspect, verify_artifact,
};

use crate::config::ProjectConfig;
use crate::deploy::{self, DeploymentMode};
use crate::error::Result;
use crate::template::{self, vars};
use std::collections::HashMap;

/// Render the Makefile for a config and verify the result.
///
/// Post-conditions (hard contract): the output defines all required targets
/// exactly once, contains every marker of the selected mode, and contains no
/// marker of the other mode.
pub fn generate(config: &ProjectConfig) -> Result<String> {
    let (mode, text) = render_unverified(config)?;
    verify_artifact(&text, mode)?;
    Ok(text)
}

/// Render without the post-render verification pass.
///
/// Used by `check`, which wants to inspect a defective artifact and print a
/// report instead of failing before one can be produced.
pub fn render_unverified(config: &ProjectConfig) -> Result<(DeploymentMode, String)> {
    let (mode, bindings) = deploy::select_mode(config)?;

    // Render the mode's deployment block first, then splice it into the
    // skeleton as an ordinary binding. Substituted values are never
    // re-scanned, so block content cannot collide with skeleton placeholders.
    let block = template::render(templates::deployment_block(mode), &bindings.variables())?;

    let mut variables = base_variables(config);
    variables.insert("deployment_targets".to_string(), block);

    let text = template::render(templates::MAKEFILE_SKELETON, &variables)?;
    Ok((mode, text))
}

/// Mode-independent bindings derived from the config.
fn base_variables(config: &ProjectConfig) -> HashMap<String, String> {
    vars([
        ("project_name", config.project_name.clone()),
        (
            "agent_directory",
            config.effective_agent_directory().to_string(),
        ),
        (
            "deployment_target",
            config.deployment_target.as_str().to_string(),
        ),
        ("cicd_runner", config.cicd_runner.as_str().to_string()),
        ("example_question", config.example_question.clone()),
        ("playground_command", playground_command(config)),
    ])
}

/// Playground command derived from the agent-type flags.
///
/// The flags are independent booleans; when several are set, a fixed
/// precedence (a2a, then adk live, then adk) picks the command. They never
/// participate in deployment mode selection.
fn playground_command(config: &ProjectConfig) -> String {
    let dir = config.effective_agent_directory();
    if config.is_a2a {
        "uv run a2a-inspector --agent-url http://localhost:8000".to_string()
    } else if config.is_adk_live {
        format!("uv run adk web {} --reload", dir)
    } else if config.is_adk {
        format!("uv run adk web {}", dir)
    } else {
        "uv run streamlit run frontend/streamlit_app.py".to_string()
    }
}

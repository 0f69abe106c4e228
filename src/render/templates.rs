//! Embedded template bodies for the generated Makefile.
//!
//! The skeleton is shared by both deployment modes; the deployment section
//! comes from a per-mode block template rendered separately and spliced in
//! as a single binding. Placeholder names in the skeleton are a stable
//! contract: existing names keep resolving across versions.
//!
//! Recipe lines use real tab characters, as Make requires.

use crate::deploy::DeploymentMode;

/// Shared Makefile skeleton.
///
/// Placeholders: `project_name`, `deployment_target`, `cicd_runner`,
/// `example_question`, `playground_command`, `agent_directory`,
/// `deployment_targets`.
pub const MAKEFILE_SKELETON: &str = r#"# Makefile for {project_name}
# deployment_target: {deployment_target} | cicd_runner: {cicd_runner}
# Generated by makemold. Regenerate instead of editing by hand.

.PHONY: install playground test lint analyze prepare deploy deploy-verbose backend

install: ## Install project dependencies
	uv sync --dev

playground: ## Launch the local playground UI
	@echo "Try asking: {example_question}"
	{playground_command}

test: ## Run unit tests
	uv run pytest tests/unit

lint: ## Run linters
	uv run ruff check .
	uv run mypy {agent_directory}

# == Backend Deployment Targets ==

{deployment_targets}
"#;

/// Deployment block for factory mode: every target delegates to the factory
/// deployment agent.
///
/// Placeholders: `delegation_notice`, `analyze_command`, `prepare_command`,
/// `deploy_command`.
const FACTORY_DEPLOYMENT_BLOCK: &str = r#"analyze: ## Analyze the project before deployment (delegated)
	@echo "{delegation_notice}"
	{analyze_command}

prepare: ## Prepare deployment artifacts (delegated)
	@echo "{delegation_notice}"
	{prepare_command}

deploy: ## Deploy the backend (delegated)
	@echo "{delegation_notice}"
	{deploy_command}

deploy-verbose: ## Deploy with verbose agent output (delegated)
	@echo "{delegation_notice}"
	{deploy_command} --verbose

backend: deploy ## Alias kept for existing automation
"#;

/// Deployment block for standard mode: invoke the project-local deployment
/// module directly.
///
/// Placeholders: `export_command`, `deploy_module_command`,
/// `source_packages_flag`, `entrypoint_module_flag`.
const STANDARD_DEPLOYMENT_BLOCK: &str = r#"analyze: ## Static checks before deployment
	uv run ruff check .

prepare: ## Export pinned dependencies for the deploy module
	{export_command}

deploy: prepare ## Deploy the backend via the project deploy module
	{deploy_module_command} \
		{source_packages_flag} \
		{entrypoint_module_flag}

deploy-verbose: prepare ## Deploy with verbose logging
	{deploy_module_command} --verbose \
		{source_packages_flag} \
		{entrypoint_module_flag}

backend: deploy ## Alias kept for existing automation
"#;

/// The deployment block template for a mode.
pub fn deployment_block(mode: DeploymentMode) -> &'static str {
    match mode {
        DeploymentMode::Factory => FACTORY_DEPLOYMENT_BLOCK,
        DeploymentMode::Standard => STANDARD_DEPLOYMENT_BLOCK,
    }
}

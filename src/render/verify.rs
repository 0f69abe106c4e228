//! Post-render verification of the generated Makefile.
//!
//! Two hard contracts are checked after every render:
//!
//! - Mutual exclusivity: the output carries all of its own mode's markers
//!   and none of the other mode's.
//! - Target presence: `analyze`, `prepare`, `deploy`, `deploy-verbose`, and
//!   `backend` are each defined exactly once, in either mode.

use crate::deploy::DeploymentMode;
use crate::error::{MoldError, Result};
use regex::Regex;

/// Targets every rendered Makefile must define exactly once.
pub const REQUIRED_TARGETS: &[&str] =
    &["analyze", "prepare", "deploy", "deploy-verbose", "backend"];

/// Markers identifying factory delegation.
pub const FACTORY_MARKERS: &[&str] = &[
    "factory_deployment_agent",
    "Delegated to Factory Deployment Agent",
];

/// Markers identifying standard deployment commands.
pub const STANDARD_MARKERS: &[&str] = &[
    "export --no-hashes",
    ".app_utils.deploy",
    "--source-packages=./",
    "--entrypoint-module=",
];

/// Verification outcome for a rendered Makefile.
#[derive(Debug, Clone)]
pub struct ArtifactReport {
    /// The mode the artifact was rendered for.
    pub mode: DeploymentMode,
    /// Definition count per required target.
    pub target_counts: Vec<(&'static str, usize)>,
    /// Own-mode markers that were not found.
    pub missing_markers: Vec<&'static str>,
    /// Other-mode markers that leaked into the output.
    pub unexpected_markers: Vec<&'static str>,
}

impl ArtifactReport {
    /// True when every contract holds.
    pub fn is_clean(&self) -> bool {
        self.missing_markers.is_empty()
            && self.unexpected_markers.is_empty()
            && self.target_counts.iter().all(|(_, count)| *count == 1)
    }

    /// Human-readable problem lines; empty when the report is clean.
    pub fn problems(&self) -> Vec<String> {
        let other_mode = match self.mode {
            DeploymentMode::Factory => DeploymentMode::Standard,
            DeploymentMode::Standard => DeploymentMode::Factory,
        };

        let mut problems = Vec::new();
        for (target, count) in &self.target_counts {
            if *count != 1 {
                problems.push(format!(
                    "target '{}' defined {} times (want exactly 1)",
                    target, count
                ));
            }
        }
        for marker in &self.missing_markers {
            problems.push(format!(
                "missing {} marker '{}'",
                self.mode.as_str(),
                marker
            ));
        }
        for marker in &self.unexpected_markers {
            problems.push(format!(
                "unexpected {} marker '{}'",
                other_mode.as_str(),
                marker
            ));
        }
        problems
    }
}

/// Inspect a rendered Makefile against the contracts for its mode.
pub fn inspect(text: &str, mode: DeploymentMode) -> ArtifactReport {
    let (own_markers, other_markers) = match mode {
        DeploymentMode::Factory => (FACTORY_MARKERS, STANDARD_MARKERS),
        DeploymentMode::Standard => (STANDARD_MARKERS, FACTORY_MARKERS),
    };

    let target_counts = REQUIRED_TARGETS
        .iter()
        .map(|target| (*target, count_target_definitions(text, target)))
        .collect();

    let missing_markers = own_markers
        .iter()
        .filter(|marker| !text.contains(**marker))
        .copied()
        .collect();

    let unexpected_markers = other_markers
        .iter()
        .filter(|marker| text.contains(**marker))
        .copied()
        .collect();

    ArtifactReport {
        mode,
        target_counts,
        missing_markers,
        unexpected_markers,
    }
}

/// Verify a rendered Makefile, turning a defective report into an error.
pub fn verify_artifact(text: &str, mode: DeploymentMode) -> Result<()> {
    let report = inspect(text, mode);
    if report.is_clean() {
        return Ok(());
    }

    Err(MoldError::Invariant(report.problems().join("; ")))
}

/// Count target definition lines (`<target>:` at column zero).
fn count_target_definitions(text: &str, target: &str) -> usize {
    let pattern = format!(r"(?m)^{}:", regex::escape(target));
    // Patterns are built from the fixed target list; they always compile.
    Regex::new(&pattern)
        .map(|re| re.find_iter(text).count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAKE_FACTORY_OUTPUT: &str = "\
analyze:
	uv run factory_deployment_agent analyze demo
prepare:
	uv run factory_deployment_agent prepare demo
deploy:
	@echo \"Delegated to Factory Deployment Agent\"
	uv run factory_deployment_agent deploy demo --yes
deploy-verbose:
	uv run factory_deployment_agent deploy demo --yes --verbose
backend: deploy
";

    #[test]
    fn clean_factory_artifact_passes() {
        assert!(verify_artifact(FAKE_FACTORY_OUTPUT, DeploymentMode::Factory).is_ok());
    }

    #[test]
    fn missing_target_is_reported() {
        let text = FAKE_FACTORY_OUTPUT.replace("backend: deploy\n", "");
        let err = verify_artifact(&text, DeploymentMode::Factory).unwrap_err();
        assert!(err.to_string().contains("target 'backend' defined 0 times"));
    }

    #[test]
    fn duplicated_target_is_reported() {
        let text = format!("{}backend: deploy\n", FAKE_FACTORY_OUTPUT);
        let err = verify_artifact(&text, DeploymentMode::Factory).unwrap_err();
        assert!(err.to_string().contains("target 'backend' defined 2 times"));
    }

    #[test]
    fn leaked_other_mode_marker_is_reported() {
        let text = format!("{}\n\tuv export --no-hashes\n", FAKE_FACTORY_OUTPUT);
        let report = inspect(&text, DeploymentMode::Factory);
        assert!(!report.is_clean());
        assert!(report.unexpected_markers.contains(&"export --no-hashes"));
    }

    #[test]
    fn indented_target_names_are_not_definitions() {
        let text = format!("{}\n\t# deploy: notes about deploy\n", FAKE_FACTORY_OUTPUT);
        let report = inspect(&text, DeploymentMode::Factory);
        assert!(report.is_clean());
    }

    #[test]
    fn deploy_count_does_not_include_deploy_verbose() {
        let report = inspect(FAKE_FACTORY_OUTPUT, DeploymentMode::Factory);
        let deploy_count = report
            .target_counts
            .iter()
            .find(|(target, _)| *target == "deploy")
            .map(|(_, count)| *count)
            .unwrap();
        assert_eq!(deploy_count, 1);
    }
}

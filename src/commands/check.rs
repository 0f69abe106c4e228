//! Implementation of the `makemold check` command.
//!
//! Renders the Makefile in memory, inspects it against the contracts for its
//! mode, prints a report, and exits non-zero when any contract fails. With
//! `--json`, the report is emitted as a JSON object for tooling.

use crate::cli::CheckArgs;
use crate::config::ProjectConfig;
use crate::error::{MoldError, Result};
use crate::render::{self, ArtifactReport};
use serde_json::json;

/// Execute the `makemold check` command.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = ProjectConfig::load(&args.config)?;

    let (mode, makefile) = render::render_unverified(&config)?;
    let report = render::inspect(&makefile, mode);

    if args.json {
        print_json_report(&config, &report);
    } else {
        print_report(&config, &report);
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(MoldError::Invariant(report.problems().join("; ")))
    }
}

fn print_report(config: &ProjectConfig, report: &ArtifactReport) {
    println!(
        "Checked Makefile for '{}' ({} mode):",
        config.project_name,
        report.mode.as_str()
    );
    println!();

    for (target, count) in &report.target_counts {
        let status = if *count == 1 { "ok" } else { "FAIL" };
        println!("  target {:16} x{}  [{}]", target, count, status);
    }

    if report.missing_markers.is_empty() && report.unexpected_markers.is_empty() {
        println!("  markers               [ok]");
    } else {
        for marker in &report.missing_markers {
            println!("  missing marker: '{}'", marker);
        }
        for marker in &report.unexpected_markers {
            println!("  unexpected marker: '{}'", marker);
        }
    }

    println!();
    if report.is_clean() {
        println!("All contracts hold.");
    } else {
        println!("Verification failed.");
    }
}

fn print_json_report(config: &ProjectConfig, report: &ArtifactReport) {
    let targets: Vec<_> = report
        .target_counts
        .iter()
        .map(|(target, count)| json!({ "target": target, "count": count }))
        .collect();

    let output = json!({
        "project_name": config.project_name,
        "mode": report.mode.as_str(),
        "clean": report.is_clean(),
        "targets": targets,
        "missing_markers": report.missing_markers,
        "unexpected_markers": report.unexpected_markers,
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

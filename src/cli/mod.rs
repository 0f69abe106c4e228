//! CLI argument parsing for makemold.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Makemold: config-driven Makefile generator for agent project scaffolding.
///
/// Reads a project's template configuration YAML and renders the Makefile
/// for its deployment mode:
/// - Factory mode (default): targets delegate to the factory deployment agent
/// - Standard mode (opt-in): targets invoke the project-local deploy module
#[derive(Parser, Debug)]
#[command(name = "makemold")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for makemold.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the Makefile for a project configuration.
    ///
    /// Loads the config, renders the Makefile for its deployment mode,
    /// verifies the result, and writes the output file atomically.
    Generate(GenerateArgs),

    /// Render and verify without writing the output file.
    ///
    /// Prints a verification report (mode, target counts, markers) and
    /// exits non-zero when any contract fails.
    Check(CheckArgs),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the project configuration YAML.
    #[arg(short, long, default_value = "templateconfig.yaml")]
    pub config: PathBuf,

    /// Output path for the rendered Makefile.
    #[arg(short, long, default_value = "Makefile")]
    pub output: PathBuf,

    /// Print the rendered Makefile to stdout instead of writing a file.
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the project configuration YAML.
    #[arg(short, long, default_value = "templateconfig.yaml")]
    pub config: PathBuf,

    /// Emit the verification report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

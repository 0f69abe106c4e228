//! Implementation of the `makemold generate` command.
//!
//! Loads the project config, renders the Makefile for its deployment mode,
//! verifies the rendered artifact, and writes it atomically (or prints it
//! to stdout with `--stdout`).

use crate::cli::GenerateArgs;
use crate::config::ProjectConfig;
use crate::deploy::select_mode;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::render;

/// Execute the `makemold generate` command.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let config = ProjectConfig::load(&args.config)?;

    // Mode is re-derived for messaging; selection is pure and cheap.
    let (mode, _) = select_mode(&config)?;
    let makefile = render::generate(&config)?;

    if args.stdout {
        print!("{}", makefile);
        return Ok(());
    }

    atomic_write_file(&args.output, &makefile)?;

    println!(
        "Generated {} for '{}' ({} mode).",
        args.output.display(),
        config.project_name,
        mode.as_str()
    );

    Ok(())
}

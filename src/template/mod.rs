//! Template engine for variable substitution.
//!
//! This module provides a simple engine that performs `{placeholder}`
//! substitution in strings. It is used for:
//!
//! - The static Makefile skeleton (project-wide placeholders)
//! - Per-mode deployment block templates (command placeholders)
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value bound to `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! # Error Handling
//!
//! The engine is fail-safe: a placeholder with no binding is an error rather
//! than a silent empty substitution. This surfaces template/engine version
//! mismatches immediately instead of producing a subtly broken Makefile.

mod engine;

pub use engine::{TemplateError, render, vars};

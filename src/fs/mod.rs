//! Filesystem utilities for makemold.
//!
//! Provides atomic output writes so a generated Makefile is never observed
//! half-written.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;

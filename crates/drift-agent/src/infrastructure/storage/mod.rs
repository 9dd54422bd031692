//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module handles:
//!
//! - Reading the TOML configuration file from the platform-appropriate
//!   directory, or from an explicit path given on the command line.
//! - Writing the default file for `--init-config`.
//! - Falling back to built-in defaults when no file exists (first run).
//! - Rejecting values that would make the motion or schedule ranges empty.

pub mod config;

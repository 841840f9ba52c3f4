//! Core types and configuration for gantry.
//!
//! This crate defines the `gantry.toml` schema ([`GantryConfig`]), the
//! version/requirements manifest readers, parameter-default resolution
//! ([`or_default`]), and the command catalog rendered by a bare `gantry`
//! invocation.

pub mod catalog;
pub mod config;
pub mod error;
pub mod manifest;
pub mod params;

pub use catalog::{COMMANDS, CommandEntry};
pub use config::{GantryConfig, ImageConfig, ManifestsConfig, WorkflowsConfig};
pub use error::{Error, Result};
pub use params::or_default;

//! Core configuration types
//!
//! This module defines the data structures that represent a rinit.yml registry file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default environment file, resolved next to the registry file
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Application name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Application usage description (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Interpreter used to run commands (e.g., ["sh", "-c"])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<Vec<String>>,

    /// Environment file loaded before environment-dependent commands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_file: Option<String>,

    /// Commands keyed by their space-separated path (e.g. "scaffold underscores")
    #[serde(default)]
    pub commands: BTreeMap<String, CommandConfig>,
}

/// A registered command
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommandConfig {
    /// Usage description for listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Argument synopsis, e.g. `<slug> [--title=<title>]`
    #[serde(default)]
    pub synopsis: String,

    /// When the command runs relative to environment loading
    #[serde(default)]
    pub when: When,

    /// Shell template to execute
    pub run: String,
}

/// Lifecycle hook of a command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum When {
    /// Runs without the environment loaded first
    BeforeEnv,
    /// Needs the environment loaded first
    #[default]
    AfterEnv,
}

//! Configuration validation
//!
//! This module provides validation logic for registry files.

use crate::config::types::{CommandConfig, Config};
use crate::error::{ConfigError, ConfigResult};
use crate::synopsis::{self, ArgKind};
use std::collections::HashSet;

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if let Some(interpreter) = &config.interpreter {
        if interpreter.is_empty() {
            return Err(ConfigError::Invalid("interpreter must not be empty".to_string()));
        }
    }

    for (name, command) in &config.commands {
        validate_command(name, command)?;
    }

    Ok(())
}

/// Validate a single command
pub fn validate_command(name: &str, command: &CommandConfig) -> ConfigResult<()> {
    if name.split_whitespace().next().is_none() {
        return Err(ConfigError::Invalid("command name must not be empty".to_string()));
    }

    let descriptors =
        synopsis::parse(&command.synopsis).map_err(|error| ConfigError::InvalidSynopsis {
            command: name.to_string(),
            error,
        })?;

    // Placeholders double as template variables, so they must be unique
    let mut seen = HashSet::new();
    for placeholder in descriptors.iter().filter_map(|d| d.placeholder()) {
        if !seen.insert(placeholder) {
            return Err(ConfigError::DuplicatePlaceholder {
                command: name.to_string(),
                placeholder: placeholder.to_string(),
            });
        }
    }

    // Values bind to placeholders in order, so a required positional
    // cannot come after one that may be absent or swallow the rest
    let mut open_ended = false;
    for descriptor in descriptors.iter().filter(|d| d.kind == ArgKind::Positional) {
        if open_ended && !descriptor.optional {
            return Err(ConfigError::PositionalOrder {
                command: name.to_string(),
                placeholder: descriptor.placeholder().unwrap_or_default().to_string(),
            });
        }
        open_ended |= descriptor.optional || descriptor.repeating;
    }

    Ok(())
}

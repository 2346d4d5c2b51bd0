//! Command registry and resolution

use crate::config::{CommandConfig, Config, When};
use std::collections::BTreeMap;

/// Identifies a registered command by its path (e.g. "scaffold underscores")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandHandle {
    pub path: String,
}

/// Whether a command runs before or after the environment is loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    PreEnvironment,
    PostEnvironment,
}

impl From<When> for LifecyclePhase {
    fn from(when: When) -> Self {
        match when {
            When::BeforeEnv => LifecyclePhase::PreEnvironment,
            When::AfterEnv => LifecyclePhase::PostEnvironment,
        }
    }
}

/// A positional argument list matched to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub command: CommandHandle,
    pub synopsis: String,
    /// Positionals left after the command path
    pub remaining: Vec<String>,
}

/// Looks up commands from their positional arguments
pub trait CommandResolver {
    /// Match `args` to a command; `None` when nothing matches
    fn resolve(&self, args: &[String]) -> Option<Resolved>;

    fn lifecycle_phase(&self, command: &CommandHandle) -> LifecyclePhase;
}

/// Commands declared in the registry file
#[derive(Debug, Clone, Default)]
pub struct Registry {
    commands: BTreeMap<Vec<String>, CommandConfig>,
}

impl Registry {
    pub fn from_config(config: &Config) -> Self {
        let commands = config
            .commands
            .iter()
            .map(|(name, command)| (split_path(name), command.clone()))
            .collect();
        Registry { commands }
    }

    /// Look up a command by handle
    pub fn get(&self, command: &CommandHandle) -> Option<&CommandConfig> {
        self.commands.get(&split_path(&command.path))
    }

    /// All commands with their display paths, sorted by path
    pub fn iter(&self) -> impl Iterator<Item = (String, &CommandConfig)> {
        self.commands.iter().map(|(path, cmd)| (path.join(" "), cmd))
    }
}

impl CommandResolver for Registry {
    fn resolve(&self, args: &[String]) -> Option<Resolved> {
        // The longest registered path wins
        (1..=args.len()).rev().find_map(|len| {
            let path = &args[..len];
            self.commands.get(path).map(|command| Resolved {
                command: CommandHandle {
                    path: path.join(" "),
                },
                synopsis: command.synopsis.clone(),
                remaining: args[len..].to_vec(),
            })
        })
    }

    fn lifecycle_phase(&self, command: &CommandHandle) -> LifecyclePhase {
        self.get(command)
            .map(|c| LifecyclePhase::from(c.when))
            .unwrap_or(LifecyclePhase::PostEnvironment)
    }
}

fn split_path(name: &str) -> Vec<String> {
    name.split_whitespace().map(str::to_string).collect()
}

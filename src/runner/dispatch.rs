//! Command dispatch
//!
//! This module binds final arguments into a command's `run` template and
//! executes it through the configured interpreter.

use crate::args::{ArgumentSet, AssocArgs};
use crate::error::{ExecutionError, ExecutionResult, RinitError};
use crate::runner::{interpolate, shell_quote, CommandResolver, Context, Registry};
use crate::synopsis::{self, ArgKind, ArgumentDescriptor};
use std::collections::HashMap;
use std::process::{Command as StdCommand, Stdio};

/// Runs a command with its final arguments
pub trait CommandDispatcher {
    /// Returns the exit status of the command
    fn dispatch(&self, positionals: &[String], assoc: &AssocArgs) -> Result<i32, RinitError>;
}

/// Dispatches registry commands through a shell
pub struct ShellDispatcher<'a> {
    registry: &'a Registry,
    ctx: &'a Context,
}

impl<'a> ShellDispatcher<'a> {
    pub fn new(registry: &'a Registry, ctx: &'a Context) -> Self {
        ShellDispatcher { registry, ctx }
    }
}

impl CommandDispatcher for ShellDispatcher<'_> {
    fn dispatch(&self, positionals: &[String], assoc: &AssocArgs) -> Result<i32, RinitError> {
        let resolved = self
            .registry
            .resolve(positionals)
            .ok_or_else(|| ExecutionError::UnknownCommand(positionals.join(" ")))?;

        let command = self
            .registry
            .get(&resolved.command)
            .ok_or_else(|| ExecutionError::UnknownCommand(resolved.command.path.clone()))?;

        let descriptors = synopsis::parse(&resolved.synopsis)?;
        let vars = bind_vars(&descriptors, &resolved.remaining, assoc);
        let exec_str = interpolate(&command.run, &vars)?;

        self.ctx
            .print_debug(&format!("Dispatching '{}'", resolved.command.path));
        self.ctx.print_run(&exec_str);

        let exported = exported_vars(&descriptors, &vars);
        let status = run_shell(&exec_str, &exported, self.ctx)?;
        Ok(status)
    }
}

/// Build template variables from the final arguments.
///
/// Each positional placeholder is bound in declaration order, a repeating
/// one takes every value left. `${args}` and `${assoc}` hold the quoted
/// positionals and options; placeholders with the same name take precedence.
pub fn bind_vars(
    descriptors: &[ArgumentDescriptor],
    positionals: &[String],
    assoc: &AssocArgs,
) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    vars.insert(
        "args".to_string(),
        quote_all(positionals.iter().map(String::as_str)),
    );
    let options = ArgumentSet::assoc_to_cli(assoc);
    vars.insert(
        "assoc".to_string(),
        quote_all(options.iter().map(String::as_str)),
    );

    // Declared options that were not given expand to nothing
    for descriptor in descriptors
        .iter()
        .filter(|d| matches!(d.kind, ArgKind::Associative | ArgKind::Flag))
    {
        vars.insert(descriptor.name.clone(), String::new());
    }

    for (key, value) in assoc {
        vars.insert(key.clone(), value.to_string());
    }

    let mut values = positionals.iter();
    for descriptor in descriptors.iter().filter(|d| d.kind == ArgKind::Positional) {
        let Some(name) = descriptor.placeholder() else {
            continue;
        };
        let value = if descriptor.repeating {
            values.by_ref().cloned().collect::<Vec<_>>().join(" ")
        } else {
            values.next().cloned().unwrap_or_default()
        };
        vars.insert(name.to_string(), value);
    }

    vars
}

fn quote_all<'v>(values: impl Iterator<Item = &'v str>) -> String {
    values.map(shell_quote).collect::<Vec<_>>().join(" ")
}

/// Variables passed to the child environment.
///
/// Only names declared in the synopsis are exported; generic keys picked at
/// the prompt stay template-only so they cannot replace `PATH` and friends.
pub fn exported_vars<'v>(
    descriptors: &[ArgumentDescriptor],
    vars: &'v HashMap<String, String>,
) -> Vec<(&'v str, &'v str)> {
    let mut exported: Vec<(&str, &str)> = descriptors
        .iter()
        .filter_map(|d| match d.kind {
            ArgKind::Positional => d.placeholder(),
            ArgKind::Associative | ArgKind::Flag => Some(d.name.as_str()),
            ArgKind::Generic => None,
        })
        .filter(|name| is_env_name(name))
        .filter_map(|name| vars.get_key_value(name))
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    exported.sort_unstable();
    exported.dedup();
    exported
}

/// Whether a variable can be exported to a child environment
fn is_env_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Execute a command string through the context's interpreter
fn run_shell(exec_str: &str, env: &[(&str, &str)], ctx: &Context) -> ExecutionResult<i32> {
    let (program, interpreter_args) = ctx
        .interpreter
        .split_first()
        .ok_or(ExecutionError::EmptyInterpreter)?;

    let mut command = StdCommand::new(program);
    command.args(interpreter_args);
    command.arg(exec_str);
    command.current_dir(&ctx.working_dir);

    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    for (key, value) in env {
        command.env(key, value);
    }

    let status = command.status().map_err(|e| ExecutionError::Spawn {
        program: program.clone(),
        error: e.to_string(),
    })?;

    // Killed by a signal
    Ok(status.code().unwrap_or(1))
}

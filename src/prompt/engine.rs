//! Interactive completion of missing arguments
//!
//! The engine walks the required descriptors of a command's synopsis, asks
//! for each one the caller has not supplied yet and records the answers.

use crate::args::{ArgumentSet, AssocArgs};
use crate::error::RinitError;
use crate::prompt::reader::{InteractiveReader, Response};
use crate::runner::CommandResolver;
use crate::synopsis::{self, ArgKind, ArgumentDescriptor};
use std::io;

/// Result of one prompting pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillOutcome {
    /// Values recorded during the pass
    pub args: ArgumentSet,
    /// The user ended input before the pass was complete
    pub early_exit: bool,
}

/// Descriptors that still need an answer.
///
/// Positionals are matched by index against the number already supplied,
/// associatives and flags by name. Generic slots are always selected.
pub fn select<'d>(
    descriptors: &'d [ArgumentDescriptor],
    supplied_positionals: usize,
    supplied_assoc: &AssocArgs,
) -> Vec<&'d ArgumentDescriptor> {
    let mut cursor = 0;
    descriptors
        .iter()
        .filter(|descriptor| match descriptor.kind {
            ArgKind::Positional => {
                let index = cursor;
                cursor += 1;
                index >= supplied_positionals
            }
            ArgKind::Generic => true,
            ArgKind::Associative | ArgKind::Flag => {
                !supplied_assoc.contains_key(&descriptor.name)
            }
        })
        .collect()
}

/// State of a single pass
struct PromptSession<'d> {
    selected: Vec<&'d ArgumentDescriptor>,
    args: ArgumentSet,
}

impl PromptSession<'_> {
    fn finish(self, early_exit: bool) -> FillOutcome {
        FillOutcome {
            args: self.args,
            early_exit,
        }
    }
}

/// Marks a pass cut short by end of input
struct Cancelled;

/// Prompts for missing arguments of resolved commands
pub struct PromptEngine<'a, R> {
    resolver: &'a dyn CommandResolver,
    reader: R,
}

impl<'a, R: InteractiveReader> PromptEngine<'a, R> {
    pub fn new(resolver: &'a dyn CommandResolver, reader: R) -> Self {
        PromptEngine { resolver, reader }
    }

    pub fn into_reader(self) -> R {
        self.reader
    }

    /// Resolve `positionals` to a command and prompt for its missing
    /// required arguments.
    ///
    /// An unresolved command yields an empty outcome; dispatch reports it.
    pub fn complete(
        &mut self,
        positionals: &[String],
        assoc: &AssocArgs,
    ) -> Result<FillOutcome, RinitError> {
        let resolved = match self.resolver.resolve(positionals) {
            Some(resolved) => resolved,
            None => return Ok(FillOutcome::default()),
        };

        let required = synopsis::required_only(&resolved.synopsis);
        if required.is_empty() {
            return Ok(FillOutcome::default());
        }

        let descriptors = synopsis::parse(&required)?;
        let outcome = self.fill(&descriptors, &resolved.remaining, assoc)?;
        Ok(outcome)
    }

    /// Prompt for every selected descriptor, in declaration order
    pub fn fill(
        &mut self,
        descriptors: &[ArgumentDescriptor],
        supplied_positionals: &[String],
        supplied_assoc: &AssocArgs,
    ) -> io::Result<FillOutcome> {
        let mut session = PromptSession {
            selected: select(descriptors, supplied_positionals.len(), supplied_assoc),
            args: ArgumentSet::new(),
        };

        let total = session.selected.len();
        for index in 0..total {
            let descriptor = session.selected[index];
            let label = format!("{}/{} ", index + 1, total);

            let step = if descriptor.kind == ArgKind::Generic {
                self.prompt_generic(descriptor, &label, &mut session.args)?
            } else {
                self.prompt_single(descriptor, &label, &mut session.args)?
            };

            if step.is_err() {
                return Ok(session.finish(true));
            }
        }

        Ok(session.finish(false))
    }

    fn prompt_single(
        &mut self,
        descriptor: &ArgumentDescriptor,
        label: &str,
        args: &mut ArgumentSet,
    ) -> io::Result<Result<(), Cancelled>> {
        let mut question = format!("{}{}", label, descriptor.token);
        if descriptor.kind == ArgKind::Flag {
            question.push_str(" (Y/n)");
        }

        let response = match self.ask(&question)? {
            Response::Cancelled => return Ok(Err(Cancelled)),
            Response::Skip => return Ok(Ok(())),
            Response::Value(response) => response,
        };

        match descriptor.kind {
            ArgKind::Positional if descriptor.repeating => {
                for value in response.split(' ').filter(|v| !v.is_empty()) {
                    args.push_positional(value);
                }
            }
            ArgKind::Positional => args.push_positional(response),
            ArgKind::Associative => args.insert_assoc(descriptor.name.clone(), response),
            ArgKind::Flag => {
                if response.eq_ignore_ascii_case("y") {
                    args.insert_assoc(descriptor.name.clone(), true);
                }
            }
            ArgKind::Generic => {}
        }

        Ok(Ok(()))
    }

    /// Collect key/value pairs until an empty key is entered
    fn prompt_generic(
        &mut self,
        descriptor: &ArgumentDescriptor,
        label: &str,
        args: &mut ArgumentSet,
    ) -> io::Result<Result<(), Cancelled>> {
        let (key_token, value_token) = descriptor
            .generic_parts()
            .unwrap_or((descriptor.token.as_str(), ""));

        let mut key_prompt = format!("{}{}", label, key_token);
        loop {
            let key = match self.ask(&key_prompt)? {
                Response::Cancelled => return Ok(Err(Cancelled)),
                Response::Skip => return Ok(Ok(())),
                Response::Value(key) => key,
            };

            // Right-align "=<value>" with the end of the key prompt
            let padding = key_prompt.len().saturating_sub(value_token.len() + 1);
            let value_prompt = format!("{}={}", " ".repeat(padding), value_token);

            match self.ask(&value_prompt)? {
                Response::Cancelled => return Ok(Err(Cancelled)),
                Response::Skip => args.set_assoc(key, ""),
                Response::Value(value) => args.set_assoc(key, value),
            }

            key_prompt = format!("{}{}", " ".repeat(label.len()), key_token);
        }
    }

    fn ask(&mut self, question: &str) -> io::Result<Response> {
        self.reader.read_line(&format!("{}: ", question))
    }
}

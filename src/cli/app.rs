//! Main CLI application

use crate::args::AssocArgs;
use crate::config::{
    parse_config_auto, parse_config_file, validate_config, Config, DEFAULT_ENV_FILE,
};
use crate::error::RinitError;
use crate::merge::merge;
use crate::prompt::{InteractiveReader, LineReader, PromptEngine};
use crate::runner::{
    load_env_file, CommandDispatcher, CommandResolver, Context, LifecyclePhase, Registry,
    ShellDispatcher, Verbosity,
};
use anyhow::Context as _;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::io;
use std::path::{Path, PathBuf};

/// Top-level command under which scaffolds are registered
const SCAFFOLD_COMMAND: &str = "scaffold";

/// CLI application bound to a loaded registry
pub struct App {
    /// Parsed configuration
    config: Config,
    /// Config file path
    config_path: PathBuf,
    /// Commands from the configuration
    registry: Registry,
}

impl App {
    /// Load the registry, from `file` or by discovery
    pub fn load(file: Option<PathBuf>) -> Result<Self, RinitError> {
        let (config, config_path) = match file {
            Some(path) => (parse_config_file(&path)?, path),
            None => parse_config_auto()?,
        };
        Self::from_config(config, config_path)
    }

    /// Build an app from an already parsed configuration
    pub fn from_config(config: Config, config_path: PathBuf) -> Result<Self, RinitError> {
        validate_config(&config)?;
        let registry = Registry::from_config(&config);

        Ok(App {
            config,
            config_path,
            registry,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Apply configuration settings to a context
    pub fn configure(&self, ctx: Context) -> Context {
        match &self.config.interpreter {
            Some(interpreter) => ctx.with_interpreter(interpreter.clone()),
            None => ctx,
        }
    }

    /// Environment file, relative to the registry file
    pub fn env_file(&self) -> PathBuf {
        let name = self.config.env_file.as_deref().unwrap_or(DEFAULT_ENV_FILE);
        self.config_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(name)
    }

    /// Display name used when echoing command lines
    fn display_name(&self) -> &str {
        self.config.name.as_deref().unwrap_or("rinit")
    }

    /// Initialise from a scaffold, prompting for its missing arguments.
    ///
    /// With `load_env_first`, the environment is loaded before prompting
    /// even for commands that would normally run before it.
    pub fn init<R: InteractiveReader>(
        &self,
        scaffold: &str,
        load_env_first: bool,
        reader: R,
        ctx: &mut Context,
    ) -> Result<i32, RinitError> {
        let args = vec![SCAFFOLD_COMMAND.to_string(), scaffold.to_string()];
        let assoc = AssocArgs::new();

        let phase = self
            .registry
            .resolve(&args)
            .map(|resolved| self.registry.lifecycle_phase(&resolved.command));
        if load_env_first || phase == Some(LifecyclePhase::PostEnvironment) {
            self.load_env(ctx)?;
        }

        ctx.print_info(&format!("{} {}", self.display_name(), args.join(" ")));

        let mut engine = PromptEngine::new(&self.registry, reader);
        let outcome = engine.complete(&args, &assoc)?;
        if outcome.early_exit {
            ctx.print_debug("Input ended, continuing with the arguments collected so far");
        }

        let (positionals, assoc) = merge(&args, &assoc, outcome.args);
        self.load_env(ctx)?;

        ShellDispatcher::new(&self.registry, ctx).dispatch(&positionals, &assoc)
    }

    fn load_env(&self, ctx: &mut Context) -> Result<(), RinitError> {
        if ctx.env_loaded {
            return Ok(());
        }

        let path = self.env_file();
        if load_env_file(&path)? {
            ctx.print_debug(&format!("Loaded environment from {}", path.display()));
        }
        ctx.env_loaded = true;
        Ok(())
    }

    /// Render the registered commands, one per line, after the registry's
    /// own usage line when it has one
    pub fn list(&self) -> String {
        let mut out = String::new();
        if let Some(usage) = &self.config.usage {
            out.push_str(usage);
            out.push_str("\n\n");
        }
        for (path, command) in self.registry.iter() {
            out.push_str(&path);
            if !command.synopsis.is_empty() {
                out.push(' ');
                out.push_str(&command.synopsis);
            }
            if let Some(usage) = &command.usage {
                out.push_str("\n    ");
                out.push_str(usage);
            }
            out.push('\n');
        }
        out
    }
}

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("rinit")
        .version(crate::VERSION)
        .about("Initialise projects from scaffolds, prompting for missing arguments")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Path to rinit.yml config file")
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("init")
                .about("Init from scaffold")
                .arg(
                    Arg::new("scaffold")
                        .long("scaffold")
                        .value_name("SCAFFOLD")
                        .help("Scaffold to generate")
                        .required(true),
                )
                .arg(
                    Arg::new("prompt")
                        .long("prompt")
                        .help("Load the environment before prompting")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("list").about("List registered commands"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .value_parser(value_parser!(Shell))
                        .required(true),
                ),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Run the CLI application, returning the process exit status
pub fn run() -> anyhow::Result<i32> {
    run_from(std::env::args_os())
}

/// Run the CLI application with explicit arguments
pub fn run_from<I, T>(args: I) -> anyhow::Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_command().get_matches_from(args);
    let file = matches.get_one::<PathBuf>("file").cloned();
    let mut ctx = Context::new().with_verbosity(get_verbosity(&matches));

    match matches.subcommand() {
        Some(("init", sub)) => {
            let scaffold = sub
                .get_one::<String>("scaffold")
                .context("--scaffold is required")?;
            let app = App::load(file).context("Failed to load the command registry")?;
            ctx = app.configure(ctx);

            let status = app.init(scaffold, sub.get_flag("prompt"), LineReader::stdio(), &mut ctx)?;
            if status != 0 {
                ctx.print_error(&format!("Command exited with status {}", status));
            }
            Ok(status)
        }
        Some(("list", _)) => {
            let app = App::load(file).context("Failed to load the command registry")?;
            print!("{}", app.list());
            Ok(0)
        }
        Some(("completions", sub)) => {
            let shell = *sub
                .get_one::<Shell>("shell")
                .context("a shell is required")?;
            clap_complete::generate(shell, &mut build_command(), "rinit", &mut io::stdout());
            Ok(0)
        }
        _ => {
            build_command().print_help()?;
            Ok(0)
        }
    }
}

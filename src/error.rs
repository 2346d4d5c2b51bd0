//! Error types for rinit

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rinit operations
pub type Result<T> = std::result::Result<T, RinitError>;

/// Main error type for rinit
#[derive(Error, Debug)]
pub enum RinitError {
    /// Registry file errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A command declares a synopsis that cannot be understood
    #[error("Synopsis error: {0}")]
    Synopsis(#[from] SynopsisError),

    /// Command dispatch errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// Variable interpolation errors
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Registry parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find config file (searched: {0})")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Command '{command}' has an invalid synopsis: {error}")]
    InvalidSynopsis { command: String, error: SynopsisError },

    #[error("Placeholder '{placeholder}' is used twice in command '{command}'")]
    DuplicatePlaceholder { command: String, placeholder: String },

    #[error("Positional '{placeholder}' in command '{command}' follows an optional or repeating positional")]
    PositionalOrder { command: String, placeholder: String },

    #[error("Failed to load environment file '{path}': {error}")]
    EnvFile { path: PathBuf, error: String },
}

/// Synopsis parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynopsisError {
    #[error("unrecognized synopsis token '{0}'")]
    Malformed(String),
}

/// Command dispatch errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("'{0}' is not a registered command")]
    UnknownCommand(String),

    #[error("Failed to spawn '{program}': {error}")]
    Spawn { program: String, error: String },

    #[error("Interpreter is empty")]
    EmptyInterpreter,
}

/// Variable interpolation errors
#[derive(Error, Debug)]
pub enum InterpolationError {
    #[error("Variable '{0}' is not defined")]
    UndefinedVariable(String),
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for synopsis parsing
pub type SynopsisResult<T> = std::result::Result<T, SynopsisError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;

/// Specialized result type for interpolation operations
pub type InterpolationResult<T> = std::result::Result<T, InterpolationError>;

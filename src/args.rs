//! Argument values collected for a command

use std::collections::BTreeMap;
use std::fmt;

/// Associative arguments keyed by option name
pub type AssocArgs = BTreeMap<String, ArgValue>;

/// Value of an associative argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Str(String),
    Flag(bool),
}

impl ArgValue {
    /// Render as it would appear on a command line (`--key=value` or `--key`)
    pub fn to_cli(&self, key: &str) -> Option<String> {
        match self {
            ArgValue::Str(value) => Some(format!("--{}={}", key, value)),
            ArgValue::Flag(true) => Some(format!("--{}", key)),
            ArgValue::Flag(false) => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Str(value) => f.write_str(value),
            ArgValue::Flag(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Str(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Flag(value)
    }
}

/// Positional values in declaration order plus associative values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentSet {
    pub positionals: Vec<String>,
    pub assoc: AssocArgs,
}

impl ArgumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_positional(&mut self, value: impl Into<String>) {
        self.positionals.push(value.into());
    }

    /// Record an associative value; an existing key keeps its first value
    pub fn insert_assoc(&mut self, key: impl Into<String>, value: impl Into<ArgValue>) {
        self.assoc.entry(key.into()).or_insert_with(|| value.into());
    }

    /// Record an associative value, replacing any earlier one
    pub fn set_assoc(&mut self, key: impl Into<String>, value: impl Into<ArgValue>) {
        self.assoc.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.positionals.is_empty() && self.assoc.is_empty()
    }

    /// Render associative values as command-line options
    pub fn assoc_to_cli(assoc: &AssocArgs) -> Vec<String> {
        assoc
            .iter()
            .filter_map(|(key, value)| value.to_cli(key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_assoc_keeps_first_value() {
        let mut set = ArgumentSet::new();
        set.insert_assoc("title", "First");
        set.insert_assoc("title", "Second");
        assert_eq!(set.assoc.get("title"), Some(&ArgValue::from("First")));
        assert_eq!(set.assoc.len(), 1);
    }

    #[test]
    fn test_set_assoc_replaces_value() {
        let mut set = ArgumentSet::new();
        set.set_assoc("title", "First");
        set.set_assoc("title", "Second");
        assert_eq!(set.assoc.get("title"), Some(&ArgValue::from("Second")));
    }

    #[test]
    fn test_assoc_to_cli() {
        let mut assoc = AssocArgs::new();
        assoc.insert("activate".to_string(), ArgValue::Flag(true));
        assoc.insert("quiet".to_string(), ArgValue::Flag(false));
        assoc.insert("title".to_string(), "My Theme".into());

        assert_eq!(
            ArgumentSet::assoc_to_cli(&assoc),
            vec!["--activate".to_string(), "--title=My Theme".to_string()]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ArgValue::from("x").to_string(), "x");
        assert_eq!(ArgValue::Flag(true).to_string(), "true");
    }
}

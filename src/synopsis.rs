//! Synopsis parsing
//!
//! A synopsis is the declarative argument line of a command, e.g.
//! `<slug> [--title=<title>] [--activate] [--<field>=<value>]`. This module
//! turns it into an ordered list of typed descriptors.

use crate::error::{SynopsisError, SynopsisResult};
use regex::Regex;
use std::sync::OnceLock;

/// What shape of argument a synopsis token declares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// `<name>`
    Positional,
    /// `--name=<value>`
    Associative,
    /// `--name` or `--[no-]name`
    Flag,
    /// `--<field>=<value>`, an open set of key/value pairs
    Generic,
}

/// One parsed synopsis token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDescriptor {
    pub kind: ArgKind,

    /// Option name for associative and flag arguments, empty otherwise
    pub name: String,

    /// Display text, without enclosing brackets
    pub token: String,

    pub optional: bool,
    pub repeating: bool,
}

impl ArgumentDescriptor {
    /// Placeholder name of a positional argument (`slug` for `<slug>`)
    pub fn placeholder(&self) -> Option<&str> {
        if self.kind != ArgKind::Positional {
            return None;
        }
        self.token
            .trim_end_matches("...")
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
    }

    /// Key and value placeholders of a generic argument
    /// (`("--<field>", "<value>")`)
    pub fn generic_parts(&self) -> Option<(&str, &str)> {
        if self.kind != ArgKind::Generic {
            return None;
        }
        self.token.trim_end_matches("...").split_once('=')
    }
}

struct Patterns {
    positional: Regex,
    assoc: Regex,
    negatable_flag: Regex,
    flag: Regex,
    generic: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        positional: Regex::new(r"^<([A-Za-z0-9_][\w-]*)>$").unwrap(),
        assoc: Regex::new(r"^--([A-Za-z0-9_][\w-]*)(?:=|\[=)<[\w-]+>\]?$").unwrap(),
        negatable_flag: Regex::new(r"^--\[no-\]([A-Za-z0-9_][\w-]*)$").unwrap(),
        flag: Regex::new(r"^--([A-Za-z0-9_][\w-]*)$").unwrap(),
        generic: Regex::new(r"^--<[\w-]+>=<[\w-]+>$").unwrap(),
    })
}

/// Parse a synopsis into descriptors, one per whitespace-separated token
pub fn parse(synopsis: &str) -> SynopsisResult<Vec<ArgumentDescriptor>> {
    synopsis.split_whitespace().map(classify_token).collect()
}

/// Keep only the tokens that are not wrapped in brackets
pub fn required_only(synopsis: &str) -> String {
    synopsis
        .split_whitespace()
        .filter(|token| token.trim_matches(|c| c == '[' || c == ']') == *token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Classify a single synopsis token
pub fn classify_token(raw: &str) -> SynopsisResult<ArgumentDescriptor> {
    let malformed = || SynopsisError::Malformed(raw.to_string());

    let (token, optional) = match raw.strip_prefix('[') {
        Some(inner) => (inner.strip_suffix(']').ok_or_else(malformed)?, true),
        None => (raw, false),
    };

    let (bare, repeating) = match token.strip_suffix("...") {
        Some(bare) => (bare, true),
        None => (token, false),
    };

    let p = patterns();
    let (kind, name) = if p.positional.is_match(bare) {
        (ArgKind::Positional, String::new())
    } else if p.generic.is_match(bare) {
        (ArgKind::Generic, String::new())
    } else if let Some(caps) = p.assoc.captures(bare) {
        (ArgKind::Associative, caps[1].to_string())
    } else if let Some(caps) = p.negatable_flag.captures(bare) {
        (ArgKind::Flag, caps[1].to_string())
    } else if let Some(caps) = p.flag.captures(bare) {
        (ArgKind::Flag, caps[1].to_string())
    } else {
        return Err(malformed());
    };

    Ok(ArgumentDescriptor {
        kind,
        name,
        token: token.to_string(),
        optional,
        repeating,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_shape() {
        let spec = parse("<slug> <file>... --title=<title> --activate --[no-]color --<field>=<value>")
            .unwrap();

        let kinds: Vec<ArgKind> = spec.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ArgKind::Positional,
                ArgKind::Positional,
                ArgKind::Associative,
                ArgKind::Flag,
                ArgKind::Flag,
                ArgKind::Generic,
            ]
        );

        assert!(!spec[0].repeating);
        assert!(spec[1].repeating);
        assert_eq!(spec[1].token, "<file>...");
        assert_eq!(spec[2].name, "title");
        assert_eq!(spec[3].name, "activate");
        assert_eq!(spec[4].name, "color");
        assert!(spec.iter().all(|d| !d.optional));
    }

    #[test]
    fn test_required_only_drops_bracketed_tokens() {
        assert_eq!(required_only("<slug> [--title=<title>]"), "<slug>");
        assert_eq!(
            required_only("--[no-]color [<file>...] --name=<name>"),
            "--[no-]color --name=<name>"
        );
        assert_eq!(required_only("[--activate]"), "");
    }

    #[test]
    fn test_filtered_synopsis_yields_single_positional() {
        let spec = parse(&required_only("<slug> [--title=<title>]")).unwrap();
        assert_eq!(spec.len(), 1);
        assert_eq!(spec[0].kind, ArgKind::Positional);
        assert_eq!(spec[0].token, "<slug>");
        assert_eq!(spec[0].name, "");
        assert_eq!(spec[0].placeholder(), Some("slug"));
    }

    #[test]
    fn test_optional_tokens_are_marked() {
        let spec = parse("[--title=<title>] [<file>...] [--force]").unwrap();
        assert!(spec.iter().all(|d| d.optional));
        assert_eq!(spec[0].token, "--title=<title>");
        assert!(spec[1].repeating);
        assert_eq!(spec[2].kind, ArgKind::Flag);
    }

    #[test]
    fn test_assoc_with_optional_value() {
        let d = classify_token("--porcelain[=<format>]").unwrap();
        assert_eq!(d.kind, ArgKind::Associative);
        assert_eq!(d.name, "porcelain");
    }

    #[test]
    fn test_generic_parts() {
        let d = classify_token("[--<field>=<value>]").unwrap();
        assert_eq!(d.kind, ArgKind::Generic);
        assert_eq!(d.generic_parts(), Some(("--<field>", "<value>")));
    }

    #[test]
    fn test_malformed_tokens() {
        for token in ["slug", "<>", "--", "[<slug>", "-x", "--a=b", "<a b>"] {
            let result = classify_token(token);
            assert!(
                matches!(result, Err(SynopsisError::Malformed(_))),
                "expected '{}' to be rejected",
                token
            );
        }
    }

    #[test]
    fn test_parse_reports_malformed_token() {
        let result = parse("<slug> what");
        assert_eq!(result, Err(SynopsisError::Malformed("what".to_string())));
    }

    #[test]
    fn test_empty_synopsis() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   ").unwrap().is_empty());
    }
}

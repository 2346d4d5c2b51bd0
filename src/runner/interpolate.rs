//! Variable interpolation for command templates
//!
//! This module replaces `${var}` references in a `run` template.

use crate::error::{InterpolationError, InterpolationResult};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::env;
use std::sync::OnceLock;

fn var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap())
}

/// Interpolate variables in a template
///
/// Supports:
/// - `${var}` - variable from the provided map
/// - Environment variables (when not found in the map)
///
/// Substituted text is inserted verbatim and never scanned again, so
/// values may contain `${...}` themselves. An unknown variable is an error.
pub fn interpolate(s: &str, vars: &HashMap<String, String>) -> InterpolationResult<String> {
    let mut undefined = None;

    let result = var_pattern()
        .replace_all(s, |caps: &Captures| {
            let var_name = &caps[1];

            if let Some(value) = vars.get(var_name) {
                return value.clone();
            }

            if let Ok(value) = env::var(var_name) {
                return value;
            }

            undefined.get_or_insert_with(|| var_name.to_string());
            caps[0].to_string()
        })
        .into_owned();

    match undefined {
        Some(name) => Err(InterpolationError::UndefinedVariable(name)),
        None => Ok(result),
    }
}

/// Quote a value for inclusion in a `sh -c` command line
pub fn shell_quote(value: &str) -> String {
    let safe = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,@%+".contains(c));
    if safe {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_interpolation() {
        let mut vars = HashMap::new();
        vars.insert("slug".to_string(), "sample".to_string());

        let result = interpolate("theme ${slug}!", &vars).unwrap();
        assert_eq!(result, "theme sample!");
    }

    #[test]
    fn test_environment_variable() {
        env::set_var("TEST_VAR_RINIT", "test_value");

        let vars = HashMap::new();
        let result = interpolate("Value: ${TEST_VAR_RINIT}", &vars).unwrap();
        assert_eq!(result, "Value: test_value");

        env::remove_var("TEST_VAR_RINIT");
    }

    #[test]
    fn test_undefined_variable() {
        let vars = HashMap::new();
        let result = interpolate("Hello, ${rinit_undefined}!", &vars);
        assert!(matches!(
            result,
            Err(InterpolationError::UndefinedVariable(name)) if name == "rinit_undefined"
        ));
    }

    #[test]
    fn test_values_are_not_expanded_again() {
        env::set_var("TEST_VAR_RINIT_INNER", "leaked");

        let mut vars = HashMap::new();
        vars.insert("price".to_string(), "cost ${rinit_nope}".to_string());
        vars.insert("home".to_string(), "${TEST_VAR_RINIT_INNER}".to_string());

        let result = interpolate("${price} ${home}", &vars).unwrap();
        assert_eq!(result, "cost ${rinit_nope} ${TEST_VAR_RINIT_INNER}");

        env::remove_var("TEST_VAR_RINIT_INNER");
    }

    #[test]
    fn test_repeated_variable() {
        let mut vars = HashMap::new();
        vars.insert("slug".to_string(), "sample".to_string());

        let result = interpolate("${slug}/${slug}.css", &vars).unwrap();
        assert_eq!(result, "sample/sample.css");
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("sample"), "sample");
        assert_eq!(shell_quote("--title=Sample"), "--title=Sample");
        assert_eq!(shell_quote("My Theme"), "'My Theme'");
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
        assert_eq!(shell_quote(""), "''");
    }
}

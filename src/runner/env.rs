//! Environment loading for commands that need it

use crate::error::{ConfigError, ConfigResult};
use std::path::Path;

/// Export the variables of a dotenv file into the process environment.
///
/// Variables already set are kept. Returns `false` when the file does not
/// exist.
pub fn load_env_file(path: &Path) -> ConfigResult<bool> {
    if !path.is_file() {
        return Ok(false);
    }

    dotenvy::from_path(path).map_err(|e| ConfigError::EnvFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!load_env_file(&temp_dir.path().join(".env")).unwrap());
    }

    #[test]
    fn test_loads_variables() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, "RINIT_ENV_TEST_SITE=example.org\n").unwrap();

        assert!(load_env_file(&path).unwrap());
        assert_eq!(env::var("RINIT_ENV_TEST_SITE").unwrap(), "example.org");

        env::remove_var("RINIT_ENV_TEST_SITE");
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, "NOT VALID LINE ===\n").unwrap();

        assert!(matches!(
            load_env_file(&path),
            Err(ConfigError::EnvFile { .. })
        ));
    }
}

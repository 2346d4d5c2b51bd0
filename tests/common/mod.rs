//! Common test utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory with a rinit.yml file
pub fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("rinit.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

/// Registry used by most tests: a theme scaffold that writes its arguments
/// to `out.txt` in the working directory
#[allow(dead_code)]
pub const THEME_REGISTRY: &str = r#"
name: wp
commands:
  scaffold underscores:
    usage: Generate an underscores theme
    synopsis: "<slug> --theme_name=<title> [--author=<name>] --activate --<field>=<value>"
    when: before_env
    run: echo ${args} ${assoc} > out.txt
  scaffold plugin:
    synopsis: "<slug> [--plugin_name=<title>]"
    run: echo "${slug} ${SITE_URL}" > out.txt
  scaffold broken:
    synopsis: "<slug>"
    run: exit 4
"#;

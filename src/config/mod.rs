mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

impl Default for Config {
    fn default() -> Self {
        Self {
            diff_command: default_diff_command(),
            exclude_patterns: Vec::new(),
            linters: Vec::new(),
        }
    }
}

impl Config {
    /// Build the resolved config from the ordered overlay chain:
    /// programmatic defaults, then the project file, then the local
    /// override file. Later sources win key-by-key.
    pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        let sources: Vec<std::path::PathBuf> = match explicit {
            Some(path) => vec![path.to_path_buf()],
            None => vec![
                project_dir.join(default_config_file()),
                project_dir.join(default_local_config_file()),
            ],
        };

        for path in sources {
            // An explicitly named file must exist; the defaults are optional
            if !path.exists() {
                if explicit.is_some() {
                    return Err(ConfigError::ReadFile {
                        path,
                        source: std::io::Error::from(std::io::ErrorKind::NotFound),
                    });
                }
                continue;
            }
            debug!("Applying config overlay from {:?}", path);
            load_overlay(&path)?.apply(&mut config);
        }

        Ok(config)
    }

    /// Reject configs the scheduler cannot run: empty linter set or
    /// names that would collide in the report.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.linters.is_empty() {
            return Err(ConfigError::NoLintersConfigured);
        }

        let mut seen = HashSet::new();
        for linter in &self.linters {
            if !seen.insert(linter.name.as_str()) {
                return Err(ConfigError::DuplicateLinter(linter.name.clone()));
            }
        }

        Ok(())
    }
}

fn load_overlay(path: &Path) -> Result<ConfigOverlay, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn linter(name: &str) -> LinterConfig {
        LinterConfig {
            name: name.to_string(),
            command: format!("{} --check", name),
            extensions: vec!["js".to_string()],
        }
    }

    #[test]
    fn test_overlay_replaces_whole_keys() {
        let mut config = Config {
            diff_command: "git diff".to_string(),
            exclude_patterns: vec!["/vendor".to_string()],
            linters: vec![linter("eslint")],
        };

        let overlay = ConfigOverlay {
            diff_command: None,
            exclude_patterns: Some(vec!["/node_modules".to_string()]),
            linters: None,
        };
        overlay.apply(&mut config);

        assert_eq!(config.diff_command, "git diff");
        // Replaced, not merged
        assert_eq!(config.exclude_patterns, vec!["/node_modules".to_string()]);
        assert_eq!(config.linters.len(), 1);
    }

    #[test]
    fn test_resolve_missing_default_files_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::resolve(dir.path(), None).unwrap();
        assert_eq!(config.diff_command, defaults::default_diff_command());
        assert!(config.linters.is_empty());
    }

    #[test]
    fn test_resolve_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = Config::resolve(dir.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn test_resolve_local_file_overrides_project_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("lintgate.yaml"),
            "diff_command: git diff --cached --name-only\n\
             exclude_patterns: [\"/dist\"]\n\
             linters:\n  - name: eslint\n    command: eslint -f unix\n    extensions: [js]\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("lintgate.local.yaml"),
            "exclude_patterns: [\"/node_modules\"]\n",
        )
        .unwrap();

        let config = Config::resolve(dir.path(), None).unwrap();
        assert_eq!(config.diff_command, "git diff --cached --name-only");
        assert_eq!(config.exclude_patterns, vec!["/node_modules".to_string()]);
        assert_eq!(config.linters[0].name, "eslint");
    }

    #[test]
    fn test_validate_rejects_empty_linters() {
        let config = Config::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NoLintersConfigured)
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let config = Config {
            linters: vec![linter("eslint"), linter("eslint")],
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateLinter(name)) if name == "eslint"
        ));
    }
}

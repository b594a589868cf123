mod command;

pub use command::CommandLinter;

use crate::error::LinterError;
use crate::parser::Report;
use async_trait::async_trait;

/// Per-run settings handed to a linter alongside the file list.
#[derive(Debug, Clone)]
pub struct LintSettings {
    pub name: String,
    /// Extensions the linter should examine; empty means all files.
    pub extensions: Vec<String>,
}

impl LintSettings {
    /// Whether this linter should look at `path`. Filtering happens inside
    /// the plugin; the core hands every linter the same file list.
    pub fn matches(&self, path: &str) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.rsplit('.')
            .next()
            .map(|ext| self.extensions.iter().any(|e| e == ext))
            .unwrap_or(false)
    }
}

/// One unit of analysis. Implementations must resolve with exactly one
/// `Report`; raising instead of reporting is treated as a fatal task fault.
#[async_trait]
pub trait Linter: Send + Sync {
    fn name(&self) -> &str;

    async fn review(&self, files: &[String], settings: &LintSettings)
        -> Result<Report, LinterError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_by_extension() {
        let settings = LintSettings {
            name: "eslint".to_string(),
            extensions: vec!["js".to_string(), "jsx".to_string()],
        };
        assert!(settings.matches("src/app.js"));
        assert!(settings.matches("src/view.jsx"));
        assert!(!settings.matches("style/main.styl"));
        assert!(!settings.matches("Makefile"));
    }

    #[test]
    fn test_empty_extensions_match_everything() {
        let settings = LintSettings {
            name: "generic".to_string(),
            extensions: Vec::new(),
        };
        assert!(settings.matches("anything.txt"));
        assert!(settings.matches("Makefile"));
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Resolved, immutable configuration for one run.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    /// Shell command whose stdout lists changed files, one per line
    #[serde(default = "default_diff_command")]
    pub diff_command: String,

    /// A file whose path contains any of these substrings is skipped
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Linters to run, in report order
    #[serde(default)]
    pub linters: Vec<LinterConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct LinterConfig {
    /// Unique name, used in the report
    pub name: String,

    /// External lint command; matching files are appended as arguments
    pub command: String,

    /// File extensions this linter examines; empty means all files
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// One configuration source. Every key is optional; `apply` overwrites
/// whole keys on the target, never merging inside a value.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct ConfigOverlay {
    #[serde(default)]
    pub diff_command: Option<String>,

    #[serde(default)]
    pub exclude_patterns: Option<Vec<String>>,

    #[serde(default)]
    pub linters: Option<Vec<LinterConfig>>,
}

impl ConfigOverlay {
    pub fn apply(self, config: &mut Config) {
        if let Some(diff_command) = self.diff_command {
            config.diff_command = diff_command;
        }
        if let Some(exclude_patterns) = self.exclude_patterns {
            config.exclude_patterns = exclude_patterns;
        }
        if let Some(linters) = self.linters {
            config.linters = linters;
        }
    }
}

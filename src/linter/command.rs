use super::{LintSettings, Linter};
use crate::config::LinterConfig;
use crate::error::LinterError;
use crate::parser::{parse_unix_lines, Report};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

/// Built-in linter backed by an external command.
///
/// Filters the shared file list by extension, appends the matches as
/// arguments, and parses the tool's output as unix-format lint lines.
pub struct CommandLinter {
    name: String,
    command: String,
    working_dir: PathBuf,
}

impl CommandLinter {
    pub fn new(config: &LinterConfig, working_dir: PathBuf) -> Self {
        Self {
            name: config.name.clone(),
            command: config.command.clone(),
            working_dir,
        }
    }
}

#[async_trait]
impl Linter for CommandLinter {
    fn name(&self) -> &str {
        &self.name
    }

    async fn review(
        &self,
        files: &[String],
        settings: &LintSettings,
    ) -> Result<Report, LinterError> {
        let matching: Vec<&String> = files.iter().filter(|f| settings.matches(f)).collect();

        if matching.is_empty() {
            debug!("Linter {} has no matching files", self.name);
            return Ok(Report::clean());
        }

        // Quote each path into the shell line; the command itself may
        // carry its own flags
        let mut command_line = self.command.clone();
        for file in &matching {
            command_line.push_str(" '");
            command_line.push_str(&file.replace('\'', r"'\''"));
            command_line.push('\'');
        }

        debug!(
            "Linter {} reviewing {} files via '{}'",
            self.name,
            matching.len(),
            self.command
        );

        let output = Command::new("sh")
            .arg("-c")
            .arg(&command_line)
            .current_dir(&self.working_dir)
            .output()
            .await
            .map_err(|e| LinterError::Spawn {
                command: self.command.clone(),
                source: e,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        // Lint tools signal findings with a non-zero exit; parse both
        // streams since some emit to stderr
        let mut findings = parse_unix_lines(&stdout);
        if findings.is_empty() {
            findings = parse_unix_lines(&stderr);
        }

        if !output.status.success() && findings.is_empty() {
            // The tool died without reporting anything usable
            return Err(LinterError::NonZeroExit {
                command: self.command.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(Report::from_findings(findings))
    }
}

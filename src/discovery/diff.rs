use crate::error::DiscoveryError;
use std::path::Path;
use tokio::process::Command;

/// Run the configured diff command and return its stdout.
///
/// The command goes through the shell so configs can use pipes and flags
/// freely. A spawn failure or non-zero exit aborts the run before any
/// linter executes.
pub async fn run_diff_command(command: &str, project_dir: &Path) -> Result<String, DiscoveryError> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(project_dir)
        .output()
        .await
        .map_err(|e| DiscoveryError::Spawn {
            command: command.to_string(),
            source: e,
        })?;

    if !output.status.success() {
        return Err(DiscoveryError::NonZeroExit {
            command: command.to_string(),
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

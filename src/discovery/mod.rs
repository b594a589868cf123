mod diff;
mod select;

pub use diff::run_diff_command;
pub use select::select;

use crate::config::Config;
use crate::error::DiscoveryError;
use std::path::Path;
use tracing::debug;

/// Run the diff command and filter its output into the run's file list.
pub async fn discover_files(
    config: &Config,
    project_dir: &Path,
) -> Result<Vec<String>, DiscoveryError> {
    let raw = run_diff_command(&config.diff_command, project_dir).await?;
    let files = select(&raw, &config.exclude_patterns);
    debug!("Selected {} changed files", files.len());
    Ok(files)
}

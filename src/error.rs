use std::path::PathBuf;
use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum LintgateError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Linter error: {0}")]
    Linter(#[from] LinterError),

    #[error("Scheduler error: {0}")]
    Scheduler(#[from] SchedulerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Duplicate linter name '{0}'")]
    DuplicateLinter(String),

    #[error("No linters configured")]
    NoLintersConfigured,
}

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Failed to run diff command '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("Diff command '{command}' exited with code {code}: {stderr}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },
}

#[derive(Error, Debug)]
pub enum LinterError {
    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("'{command}' exited with code {code} and produced no findings: {stderr}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },
}

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Linter '{name}' failed: {source}")]
    TaskFailed {
        name: String,
        #[source]
        source: LinterError,
    },

    #[error("Linter '{name}' panicked: {message}")]
    TaskPanicked { name: String, message: String },
}

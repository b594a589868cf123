use crate::error::{LinterError, SchedulerError};
use crate::linter::{LintSettings, Linter};
use crate::parser::Report;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// One linter's outcome for one run.
#[derive(Debug, Clone)]
pub struct TaskResult {
    pub linter_name: String,
    pub report: Report,
    pub elapsed_millis: u64,
}

/// Explicit task value: everything one linter invocation needs, passed
/// into the spawn by value. The file list is shared read-only.
struct LintTask {
    linter: Arc<dyn Linter>,
    settings: LintSettings,
    files: Arc<[String]>,
}

impl LintTask {
    async fn run(self) -> Result<TaskResult, LinterError> {
        let start = Instant::now();
        let report = self.linter.review(&self.files, &self.settings).await?;
        Ok(TaskResult {
            linter_name: self.settings.name,
            report,
            elapsed_millis: start.elapsed().as_millis() as u64,
        })
    }
}

/// Run every linter concurrently over the shared file list.
///
/// Fan-out is unordered; fan-in awaits the join handles in descriptor
/// order, so the returned sequence always matches the input order no
/// matter which task finishes first. The reporter depends on that.
///
/// Every task runs to completion before this returns. Once they have all
/// finished, a task that errored or panicked fails the whole run; no
/// partial result set is handed downstream. There is no cancellation,
/// timeout, or retry of a launched task.
pub async fn run_all(
    linters: &[(Arc<dyn Linter>, LintSettings)],
    files: &[String],
) -> Result<Vec<TaskResult>, SchedulerError> {
    let shared: Arc<[String]> = files.into();

    info!(
        "Scheduling {} linters over {} files",
        linters.len(),
        shared.len()
    );

    let mut handles = Vec::with_capacity(linters.len());
    for (linter, settings) in linters {
        let task = LintTask {
            linter: linter.clone(),
            settings: settings.clone(),
            files: shared.clone(),
        };
        handles.push((settings.name.clone(), tokio::spawn(task.run())));
    }

    let (names, joins): (Vec<_>, Vec<_>) = handles.into_iter().unzip();
    let joined = join_all(joins).await;

    let mut results = Vec::with_capacity(joined.len());
    let mut fatal: Option<SchedulerError> = None;

    for (name, joined_result) in names.into_iter().zip(joined) {
        match joined_result {
            Ok(Ok(result)) => {
                debug!(
                    "Linter {} finished in {}ms ({} findings)",
                    result.linter_name,
                    result.elapsed_millis,
                    result.report.findings.len()
                );
                results.push(result);
            }
            Ok(Err(e)) if fatal.is_none() => {
                fatal = Some(SchedulerError::TaskFailed { name, source: e });
            }
            Err(join_error) if fatal.is_none() => {
                fatal = Some(SchedulerError::TaskPanicked {
                    name,
                    message: join_error.to_string(),
                });
            }
            _ => {}
        }
    }

    match fatal {
        Some(error) => Err(error),
        None => Ok(results),
    }
}

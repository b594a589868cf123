use crate::config::Config;
use crate::linter::{CommandLinter, LintSettings, Linter};
use std::path::Path;
use std::sync::Arc;

/// Explicit name-to-linter registry.
///
/// Built-ins come from the config's linter list in a fixed registration
/// step; callers may then register additional linters (or replace a
/// built-in by reusing its name). Iteration order is registration order,
/// which the scheduler and reporter both rely on.
pub struct LinterRegistry {
    entries: Vec<RegistryEntry>,
}

struct RegistryEntry {
    linter: Arc<dyn Linter>,
    settings: LintSettings,
}

impl LinterRegistry {
    /// Register one command linter per config entry.
    pub fn from_config(config: &Config, project_dir: &Path) -> Self {
        let mut registry = Self {
            entries: Vec::new(),
        };

        for linter_config in &config.linters {
            let settings = LintSettings {
                name: linter_config.name.clone(),
                extensions: linter_config.extensions.clone(),
            };
            registry.insert(
                Arc::new(CommandLinter::new(linter_config, project_dir.to_path_buf())),
                settings,
            );
        }

        registry
    }

    /// Add a caller-supplied linter. A name collision replaces the
    /// existing entry in place, keeping its position in the run order.
    #[allow(dead_code)]
    pub fn register(&mut self, linter: Arc<dyn Linter>, settings: LintSettings) {
        self.insert(linter, settings);
    }

    fn insert(&mut self, linter: Arc<dyn Linter>, settings: LintSettings) {
        let entry = RegistryEntry { linter, settings };
        match self
            .entries
            .iter_mut()
            .find(|e| e.linter.name() == entry.linter.name())
        {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Linters with their settings, in registration order.
    pub fn linters(&self) -> Vec<(Arc<dyn Linter>, LintSettings)> {
        self.entries
            .iter()
            .map(|e| (e.linter.clone(), e.settings.clone()))
            .collect()
    }
}

use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::{DomainError, DomainResult};
use crate::domains::path_planning::aggregate::types::Scenario;
use crate::domains::path_planning::loader::{parse_scenario_with, resolve_data_dir, ScenarioValidation};
use crate::domains::path_planning::ports::{ScenarioSource, ScenarioSourceAsync};

/// Reads scenario text files from disk.
pub struct FilesystemScenarioSource {
    base: PathBuf,
    validation: ScenarioValidation,
}

impl FilesystemScenarioSource {
    pub fn new(base: Option<PathBuf>) -> Self {
        Self {
            base: base.unwrap_or_else(resolve_data_dir),
            validation: ScenarioValidation::default(),
        }
    }

    pub fn with_validation(mut self, validation: ScenarioValidation) -> Self {
        self.validation = validation;
        self
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Absolute paths and paths that exist as given are used directly,
    /// anything else is looked up under the base directory.
    pub fn resolve(&self, name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() || p.exists() {
            p.to_path_buf()
        } else {
            self.base.join(name)
        }
    }

    fn parse(&self, path: &Path, text: &str) -> DomainResult<Scenario> {
        parse_scenario_with(text, self.validation).map_err(|e| {
            tracing::debug!(path = %path.display(), error = %e, "scenario rejected");
            DomainError::Scenario(e)
        })
    }
}

fn read_error(path: &Path, e: std::io::Error) -> DomainError {
    DomainError::InfrastructureError(format!("{}: {}", path.display(), e))
}

impl ScenarioSource for FilesystemScenarioSource {
    fn load_scenario(&self, name: &str) -> DomainResult<Scenario> {
        let path = self.resolve(name);
        let text = fs::read_to_string(&path).map_err(|e| read_error(&path, e))?;
        self.parse(&path, &text)
    }
}

#[async_trait]
impl ScenarioSourceAsync for FilesystemScenarioSource {
    async fn load_scenario(&self, name: &str) -> DomainResult<Scenario> {
        let path = self.resolve(name);
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| read_error(&path, e))?;
        self.parse(&path, &text)
    }
}

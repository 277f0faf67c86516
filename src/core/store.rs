use crate::errors::{AppError, AppResult};
use crate::models::scenario::Scenario;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::PathBuf;

/// Scenario file on disk, plus the journal written beside it.
pub struct ScenarioStore {
    pub path: PathBuf,
}

impl ScenarioStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: expand_tilde(path),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn journal_path(&self) -> PathBuf {
        self.path.with_extension("journal")
    }

    pub fn load(&self) -> AppResult<Scenario> {
        if !self.path.exists() {
            return Err(AppError::ScenarioNotFound(self.path.display().to_string()));
        }

        let text = fs::read_to_string(&self.path)?;
        Scenario::from_json(&text)
    }

    pub fn save(&self, scenario: &Scenario) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        fs::write(&self.path, scenario.to_json()?)?;
        Ok(())
    }
}

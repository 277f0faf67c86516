use crate::config::Config;
use crate::core::log::journal;
use crate::core::store::ScenarioStore;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::models::scenario::Scenario;
use crate::ui::messages::success;
use std::fs;
use std::path::Path;

/// Scenario manager: copy the full state out, or replace it with an
/// imported one.
pub struct ScenarioLogic;

impl ScenarioLogic {
    pub fn export(cfg: &Config, store: &ScenarioStore, file: &str, force: bool) -> AppResult<()> {
        let scenario = store.load()?;
        let path = Path::new(file);

        ensure_writable(path, force)?;
        fs::write(path, scenario.to_json()?)?;

        journal(cfg, store, "export", file, "scenario exported");
        success(format!("Scenario exported to {}", path.display()));
        Ok(())
    }

    /// Validation happens before anything is written: a rejected payload
    /// leaves the active scenario untouched.
    pub fn import(cfg: &Config, store: &ScenarioStore, file: &str) -> AppResult<Scenario> {
        let text = fs::read_to_string(file)?;
        let scenario = Scenario::from_json(&text)?;

        store.save(&scenario)?;

        let message = format!(
            "{} product(s), {} logged hour(s)",
            scenario.products.len(),
            scenario.log.len()
        );
        journal(cfg, store, "import", file, &message);
        success(format!("Scenario imported: {message}"));
        Ok(scenario)
    }
}

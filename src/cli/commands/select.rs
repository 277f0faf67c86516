use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::record;
use crate::core::store::ScenarioStore;
use crate::errors::AppResult;
use crate::models::production_log::HourSlot;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Select { slot } = cmd {
        let store = ScenarioStore::new(&cfg.scenario);
        record::select(&store, HourSlot::parse_label(slot)?)?;
    }
    Ok(())
}

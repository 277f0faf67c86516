use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::record::RecordLogic;
use crate::core::store::ScenarioStore;
use crate::errors::AppResult;
use crate::models::production_log::HourSlot;
use crate::models::shift::Shift;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Record {
        day,
        shift,
        hour,
        entries,
    } = cmd
    {
        let store = ScenarioStore::new(&cfg.scenario);
        let slot = HourSlot::new(*day, Shift::parse(shift)?, *hour);
        RecordLogic::apply(cfg, &store, slot, entries)?;
    }
    Ok(())
}

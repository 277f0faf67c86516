use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::setup::SetupLogic;
use crate::core::store::ScenarioStore;
use crate::errors::AppResult;
use crate::models::schedule::ScheduleConfig;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Setup {
        days_a,
        hours_a,
        days_b,
        hours_b,
        products,
        force,
    } = cmd
    {
        let store = ScenarioStore::new(&cfg.scenario);
        let schedule = ScheduleConfig::new(*days_a, *hours_a, *days_b, *hours_b);
        SetupLogic::apply(cfg, &store, schedule, products, *force)?;
    }
    Ok(())
}

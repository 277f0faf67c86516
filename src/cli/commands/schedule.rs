use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::adjust::AdjustLogic;
use crate::core::store::ScenarioStore;
use crate::errors::AppResult;
use crate::models::schedule::ScheduleDimension;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule {
        days_a,
        hours_a,
        days_b,
        hours_b,
    } = cmd
    {
        let changes: Vec<(ScheduleDimension, u32)> = [
            (ScheduleDimension::DaysA, *days_a),
            (ScheduleDimension::HoursA, *hours_a),
            (ScheduleDimension::DaysB, *days_b),
            (ScheduleDimension::HoursB, *hours_b),
        ]
        .into_iter()
        .filter_map(|(dim, v)| v.map(|v| (dim, v)))
        .collect();

        let store = ScenarioStore::new(&cfg.scenario);
        AdjustLogic::schedule(cfg, &store, &changes)?;
    }
    Ok(())
}

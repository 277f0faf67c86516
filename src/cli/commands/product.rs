use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::adjust::{AdjustLogic, ProductChanges};
use crate::core::store::ScenarioStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Product {
        product,
        target,
        demand,
        clear_demand,
        extra,
        clear_extra,
    } = cmd
    {
        let changes = ProductChanges {
            target: *target,
            demand: if *clear_demand { Some(None) } else { demand.map(Some) },
            extra: if *clear_extra { Some(None) } else { extra.map(Some) },
        };

        let store = ScenarioStore::new(&cfg.scenario);
        AdjustLogic::product(cfg, &store, product, changes)?;
    }
    Ok(())
}

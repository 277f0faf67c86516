use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::scenario_io::ScenarioLogic;
use crate::core::store::ScenarioStore;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scenario {
        export,
        import,
        force,
    } = cmd
    {
        let store = ScenarioStore::new(&cfg.scenario);

        match (export, import) {
            (Some(file), _) => ScenarioLogic::export(cfg, &store, file, *force)?,
            (None, Some(file)) => {
                ScenarioLogic::import(cfg, &store, file)?;
            }
            (None, None) => {
                // no flag: print the scenario as the scenario manager shows it
                let scenario = store.load()?;
                info(format!("Scenario: {}", store.path.display()));
                println!("{}", scenario.to_json()?);
            }
        }
    }
    Ok(())
}

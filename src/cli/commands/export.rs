use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::ScenarioStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        trend,
        force,
    } = cmd
    {
        let scenario = ScenarioStore::new(&cfg.scenario).load()?;
        ExportLogic::export(&scenario, *format, file, *trend, *force)?;
    }
    Ok(())
}

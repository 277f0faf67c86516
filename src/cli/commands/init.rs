use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// Creates the config directory and the configuration file pointing to
/// the scenario path (`--scenario` or the default one).
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.scenario.clone(), cli.test)?;

    println!("⚙️  Initializing IndusTrack…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🏭 Scenario    : {}", &cfg.scenario);

    println!("🎉 IndusTrack initialization completed! Next: `industrack setup`.");
    Ok(())
}

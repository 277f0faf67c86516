use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active scenario file (JSON).
    #[serde(default = "default_scenario")]
    pub scenario: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Append state changes to the journal beside the scenario.
    #[serde(default = "default_journal")]
    pub journal: bool,
    /// Decimals shown in the status table.
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

fn default_scenario() -> String {
    Config::scenario_file().to_string_lossy().to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_journal() -> bool {
    true
}
fn default_decimals() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scenario: default_scenario(),
            separator_char: default_separator_char(),
            journal: default_journal(),
            decimals: default_decimals(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("industrack")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".industrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("industrack.conf")
    }

    /// Default location of the active scenario
    pub fn scenario_file() -> PathBuf {
        Self::config_dir().join("scenario.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Initialize the configuration directory and file.
    /// In test mode the config file is left alone.
    pub fn init_all(custom_scenario: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let scenario = match custom_scenario {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::scenario_file(),
        };

        let config = Config {
            scenario: scenario.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }
}

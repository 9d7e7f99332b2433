use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

const CONFIG_FILE_PATH: &str = "config.json";
const FALLBACK_CONFIG_FILE_PATH: &str = "_config.json";

pub const DEFAULT_LOAD_THRESHOLD: f64 = 0.7;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("num_floors must be at least 1")]
    NoFloors,

    #[error("load_threshold must be in (0, 1], got {0}")]
    LoadThreshold(f64),

    #[error("tick_ms must be positive")]
    ZeroTick,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct FleetConfig {
    pub num_floors: u8,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct DispatchSettings {
    #[serde(default = "default_load_threshold")]
    pub load_threshold: f64,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        DispatchSettings {
            load_threshold: DEFAULT_LOAD_THRESHOLD,
            tick_ms: default_tick_ms(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct ReplayConfig {
    pub scenario: PathBuf,
    #[serde(default)]
    pub step_ms: u64,
    #[serde(default)]
    pub show_status: bool,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct DispatcherConfig {
    pub fleet: FleetConfig,
    #[serde(default)]
    pub dispatch: DispatchSettings,
    pub replay: ReplayConfig,
}

fn default_load_threshold() -> f64 {
    DEFAULT_LOAD_THRESHOLD
}

fn default_tick_ms() -> u64 {
    250
}

#[derive(Debug, Default, Clone, PartialEq)]
struct EnvArgs {
    config: Option<PathBuf>,
    scenario: Option<PathBuf>,
}

fn parse_env_args<I: IntoIterator<Item = String>>(args: I) -> EnvArgs {
    let mut env_args = EnvArgs::default();

    let args: Vec<String> = args.into_iter().skip(1).collect();
    for arg_pair in args.chunks(2) {
        match (arg_pair[0].as_str(), arg_pair.get(1)) {
            ("--config", Some(path)) => env_args.config = Some(PathBuf::from(path)),
            ("--scenario", Some(path)) => env_args.scenario = Some(PathBuf::from(path)),
            (flag, None) => tracing::warn!("argument {} has no value, skipping...", flag),
            (flag, Some(_)) => tracing::warn!("illegal argument {}, skipping...", flag),
        }
    }
    env_args
}

fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl DispatcherConfig {
    /// Loads the configuration named on the command line, else `config.json`,
    /// else the bundled `_config.json`.
    pub fn get() -> Result<Self, ConfigError> {
        let env_args = parse_env_args(env::args());
        let contents = match &env_args.config {
            Some(path) => read_config_file(path)?,
            None => match fs::read_to_string(CONFIG_FILE_PATH) {
                Ok(content) => content,
                Err(_) => {
                    tracing::info!("No configuration file provided, using default settings...");
                    read_config_file(Path::new(FALLBACK_CONFIG_FILE_PATH))?
                }
            },
        };
        let mut config = Self::from_json(&contents)?;
        if let Some(scenario) = env_args.scenario {
            config.replay.scenario = scenario;
        }
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: DispatcherConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.fleet.num_floors == 0 {
            return Err(ConfigError::NoFloors);
        }
        let threshold = self.dispatch.load_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::LoadThreshold(threshold));
        }
        if self.dispatch.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }
}

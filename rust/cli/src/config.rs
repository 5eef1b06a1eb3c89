//! Configuration resolution: defaults, then a TOML file, then environment.
//!
//! - `SIMPLE_POKER_CONFIG`: path to a TOML file with `seed` and/or `reveal_delay_ms`
//! - `SIMPLE_POKER_SEED`: RNG seed for dealing
//! - `SIMPLE_POKER_REVEAL_MS`: delay between player card reveals
//!
//! Command-line flags override whatever is resolved here.

use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "SIMPLE_POKER_CONFIG";
pub const SEED_ENV: &str = "SIMPLE_POKER_SEED";
pub const REVEAL_MS_ENV: &str = "SIMPLE_POKER_REVEAL_MS";

/// Delay between two player card reveals.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 500;
pub const MAX_REVEAL_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub reveal_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub reveal_delay_ms: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            reveal_delay_ms: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.reveal_delay_ms {
            cfg.reveal_delay_ms = v;
            sources.reveal_delay_ms = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(ms) = std::env::var(REVEAL_MS_ENV)
        && !ms.is_empty()
    {
        cfg.reveal_delay_ms = ms
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid reveal delay".into()))?;
        sources.reveal_delay_ms = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    reveal_delay_ms: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.reveal_delay_ms > MAX_REVEAL_DELAY_MS {
        return Err(ConfigError::Invalid(format!(
            "reveal_delay_ms must be <= {}",
            MAX_REVEAL_DELAY_MS
        )));
    }
    Ok(())
}

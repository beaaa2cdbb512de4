//! Layered configuration: defaults, then a TOML file named by
//! `HIGHCARD_CONFIG`, then `HIGHCARD_*` environment variables. Command-line
//! flags are applied on top by the command handlers.

use highcard_engine::engine::{DEFAULT_HAND_SIZE, MAX_HAND_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

pub const CONFIG_ENV: &str = "HIGHCARD_CONFIG";
pub const SEED_ENV: &str = "HIGHCARD_SEED";
pub const HAND_SIZE_ENV: &str = "HIGHCARD_HAND_SIZE";
pub const PACE_ENV: &str = "HIGHCARD_PACE";
pub const POLICY_ENV: &str = "HIGHCARD_POLICY";

/// Upper bound for the pacing multiplier.
pub const MAX_PACE: f64 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Cards dealt to each side
    pub hand_size: usize,
    pub seed: Option<u64>,
    /// Multiplier on the engine's step delays; 0 plays instantly
    pub pace: f64,
    /// Opponent policy name
    pub policy: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            seed: None,
            pace: 1.0,
            policy: "random".into(),
        }
    }
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
    pub hand_size: ValueSource,
    pub seed: ValueSource,
    pub pace: ValueSource,
    pub policy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            hand_size: ValueSource::Default,
            seed: ValueSource::Default,
            pace: ValueSource::Default,
            policy: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolve configuration with `lookup` standing in for the process
/// environment.
pub fn load_from<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(path) = var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.hand_size {
            cfg.hand_size = v;
            sources.hand_size = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.pace {
            cfg.pace = v;
            sources.pace = ValueSource::File;
        }
        if let Some(v) = f.policy {
            cfg.policy = v;
            sources.policy = ValueSource::File;
        }
    }

    if let Some(seed) = var(SEED_ENV) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {seed}")))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(size) = var(HAND_SIZE_ENV) {
        cfg.hand_size = size
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid hand size: {size}")))?;
        sources.hand_size = ValueSource::Env;
    }
    if let Some(pace) = var(PACE_ENV) {
        cfg.pace = pace
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid pace: {pace}")))?;
        sources.pace = ValueSource::Env;
    }
    if let Some(policy) = var(POLICY_ENV) {
        cfg.policy = policy;
        sources.policy = ValueSource::Env;
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
    hand_size: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    pace: Option<f64>,
    #[serde(default)]
    policy: Option<String>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.hand_size == 0 || cfg.hand_size > MAX_HAND_SIZE {
        return Err(ConfigError::Invalid(format!(
            "hand_size must be within 1..={}",
            MAX_HAND_SIZE
        )));
    }
    if !cfg.pace.is_finite() || cfg.pace < 0.0 || cfg.pace > MAX_PACE {
        return Err(ConfigError::Invalid(format!(
            "pace must be within 0..={}",
            MAX_PACE
        )));
    }
    if cfg.policy.trim().is_empty() {
        return Err(ConfigError::Invalid("policy must not be empty".into()));
    }
    Ok(())
}

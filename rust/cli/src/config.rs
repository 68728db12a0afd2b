//! Layered table configuration: defaults, then a TOML file named by `HOLDEM_CONFIG`,
//! then `HOLDEM_*` environment variables. Each value remembers where it came from.

use holdem_engine::hand::TieBreak;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

/// Most AI seats that still fit a full deal (2 * 23 + 5 = 51 cards) next to the human.
pub const MAX_AI_PLAYERS: usize = 22;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_balance: u32,
    pub ai_players: usize,
    pub seed: Option<u64>,
    pub think_delay_ms: u64,
    pub ai_strategy: String,
    pub tie_break: TieBreak,
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
    pub starting_balance: ValueSource,
    pub ai_players: ValueSource,
    pub seed: ValueSource,
    pub think_delay_ms: ValueSource,
    pub ai_strategy: ValueSource,
    pub tie_break: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_balance: ValueSource::Default,
            ai_players: ValueSource::Default,
            seed: ValueSource::Default,
            think_delay_ms: ValueSource::Default,
            ai_strategy: ValueSource::Default,
            tie_break: ValueSource::Default,
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
            starting_balance: 1_000,
            ai_players: 5,
            seed: None,
            think_delay_ms: 800,
            ai_strategy: "baseline".into(),
            tie_break: TieBreak::CategoryOnly,
        }
    }
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

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HOLDEM_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_balance {
            cfg.starting_balance = v;
            sources.starting_balance = ValueSource::File;
        }
        if let Some(v) = f.ai_players {
            cfg.ai_players = v;
            sources.ai_players = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.think_delay_ms {
            cfg.think_delay_ms = v;
            sources.think_delay_ms = ValueSource::File;
        }
        if let Some(v) = f.ai_strategy {
            cfg.ai_strategy = v;
            sources.ai_strategy = ValueSource::File;
        }
        if let Some(v) = f.tie_break {
            cfg.tie_break = v;
            sources.tie_break = ValueSource::File;
        }
    }

    if let Some(v) = env_value("HOLDEM_STARTING_BALANCE") {
        cfg.starting_balance = parse_env(&v, "starting balance")?;
        sources.starting_balance = ValueSource::Env;
    }
    if let Some(v) = env_value("HOLDEM_AI_PLAYERS") {
        cfg.ai_players = parse_env(&v, "AI player count")?;
        sources.ai_players = ValueSource::Env;
    }
    if let Some(v) = env_value("HOLDEM_SEED") {
        cfg.seed = Some(parse_env(&v, "seed")?);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value("HOLDEM_THINK_DELAY_MS") {
        cfg.think_delay_ms = parse_env(&v, "think delay")?;
        sources.think_delay_ms = ValueSource::Env;
    }
    if let Some(v) = env_value("HOLDEM_AI_STRATEGY") {
        cfg.ai_strategy = v;
        sources.ai_strategy = ValueSource::Env;
    }
    if let Some(v) = env_value("HOLDEM_TIE_BREAK") {
        cfg.tie_break = parse_tie_break(&v)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid tie break: {}", v)))?;
        sources.tie_break = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_balance: Option<u32>,
    #[serde(default)]
    ai_players: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    think_delay_ms: Option<u64>,
    #[serde(default)]
    ai_strategy: Option<String>,
    #[serde(default)]
    tie_break: Option<TieBreak>,
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(value: &str, what: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", what, value)))
}

pub fn parse_tie_break(s: &str) -> Option<TieBreak> {
    match s.trim().to_ascii_lowercase().as_str() {
        "category" | "categoryonly" | "category-only" => Some(TieBreak::CategoryOnly),
        "kickers" | "kicker" => Some(TieBreak::Kickers),
        _ => None,
    }
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_balance == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_balance must be >0".into(),
        ));
    }
    if !(1..=MAX_AI_PLAYERS).contains(&cfg.ai_players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: ai_players must be between 1 and {}",
            MAX_AI_PLAYERS
        )));
    }
    let seats = cfg.ai_players as u64 + 1;
    if seats * u64::from(cfg.starting_balance) > u64::from(u32::MAX) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: {} seats of {} chips exceed the table limit of {}",
            seats,
            cfg.starting_balance,
            u32::MAX
        )));
    }
    if !holdem_ai::AI_TYPES.contains(&cfg.ai_strategy.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai_strategy '{}'",
            cfg.ai_strategy
        )));
    }
    Ok(())
}

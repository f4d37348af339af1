//! Layered table configuration: defaults, then a TOML file named by
//! `HOLDEM_CONFIG`, then `HOLDEM_*` environment variables, then flags.

use std::fs;
use std::str::FromStr;

use holdem_ai::Difficulty;
use holdem_engine::config::{Blinds, TableConfig};
use holdem_engine::player::Seat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_CONFIG: &str = "HOLDEM_CONFIG";
pub const ENV_BOTS: &str = "HOLDEM_BOTS";
pub const ENV_CHIPS: &str = "HOLDEM_CHIPS";
pub const ENV_DIFFICULTY: &str = "HOLDEM_DIFFICULTY";
pub const ENV_SMALL_BLIND: &str = "HOLDEM_SMALL_BLIND";
pub const ENV_BIG_BLIND: &str = "HOLDEM_BIG_BLIND";
pub const ENV_SEED: &str = "HOLDEM_SEED";

pub const MIN_BOTS: u8 = 2;
pub const MAX_BOTS: u8 = 8;
pub const MIN_STARTING_CHIPS: u32 = 500;
pub const MIN_SMALL_BLIND: u32 = 5;
pub const MIN_BIG_BLIND: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub num_bots: u8,
    pub starting_chips: u32,
    pub difficulty: Difficulty,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
    pub hands: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_bots: 3,
            starting_chips: 1000,
            difficulty: Difficulty::Medium,
            small_blind: 10,
            big_blind: 20,
            seed: None,
            hands: 100,
        }
    }
}

impl Config {
    pub fn table_config(&self) -> TableConfig {
        TableConfig::new(Blinds::new(self.small_blind, self.big_blind))
    }

    /// One seat per bot, ids starting at 1.
    pub fn seats(&self) -> Vec<Seat> {
        (0..self.num_bots as usize)
            .map(|i| Seat::new(i as u32 + 1, format!("bot-{}", i + 1), self.starting_chips, i))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub num_bots: ValueSource,
    pub starting_chips: ValueSource,
    pub difficulty: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub seed: ValueSource,
    pub hands: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            num_bots: ValueSource::Default,
            starting_chips: ValueSource::Default,
            difficulty: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            seed: ValueSource::Default,
            hands: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

/// Values given on the command line; `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub num_bots: Option<u8>,
    pub starting_chips: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub small_blind: Option<u32>,
    pub big_blind: Option<u32>,
    pub seed: Option<u64>,
    pub hands: Option<u32>,
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

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    num_bots: Option<u8>,
    #[serde(default)]
    starting_chips: Option<u32>,
    #[serde(default)]
    difficulty: Option<Difficulty>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    hands: Option<u32>,
}

// Assigns each present value and records where it came from.
macro_rules! layer {
    ($cfg:ident, $sources:ident, $src:expr, { $($field:ident: $value:expr),* $(,)? }) => {
        $(
            if let Some(v) = $value {
                $cfg.$field = v;
                $sources.$field = $src;
            }
        )*
    };
}

pub fn load_with_sources(overrides: &Overrides) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        layer!(cfg, sources, ValueSource::File, {
            num_bots: f.num_bots,
            starting_chips: f.starting_chips,
            difficulty: f.difficulty,
            small_blind: f.small_blind,
            big_blind: f.big_blind,
            seed: f.seed.map(Some),
            hands: f.hands,
        });
    }

    layer!(cfg, sources, ValueSource::Env, {
        num_bots: env_value::<u8>(ENV_BOTS)?,
        starting_chips: env_value::<u32>(ENV_CHIPS)?,
        difficulty: env_value::<Difficulty>(ENV_DIFFICULTY)?,
        small_blind: env_value::<u32>(ENV_SMALL_BLIND)?,
        big_blind: env_value::<u32>(ENV_BIG_BLIND)?,
        seed: env_value::<u64>(ENV_SEED)?.map(Some),
    });

    layer!(cfg, sources, ValueSource::Cli, {
        num_bots: overrides.num_bots,
        starting_chips: overrides.starting_chips,
        difficulty: overrides.difficulty,
        small_blind: overrides.small_blind,
        big_blind: overrides.big_blind,
        seed: overrides.seed.map(Some),
        hands: overrides.hands,
    });

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {name}: '{raw}'"))),
        _ => Ok(None),
    }
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(MIN_BOTS..=MAX_BOTS).contains(&cfg.num_bots) {
        return Err(ConfigError::Invalid(format!(
            "num_bots must be between {MIN_BOTS} and {MAX_BOTS}, got {}",
            cfg.num_bots
        )));
    }
    if cfg.starting_chips < MIN_STARTING_CHIPS {
        return Err(ConfigError::Invalid(format!(
            "starting_chips must be at least {MIN_STARTING_CHIPS}, got {}",
            cfg.starting_chips
        )));
    }
    if u64::from(cfg.num_bots) * u64::from(cfg.starting_chips) > u64::from(u32::MAX) {
        return Err(ConfigError::Invalid(format!(
            "{} bots with {} chips each exceeds the table limit of {} chips",
            cfg.num_bots,
            cfg.starting_chips,
            u32::MAX
        )));
    }
    if cfg.small_blind < MIN_SMALL_BLIND {
        return Err(ConfigError::Invalid(format!(
            "small_blind must be at least {MIN_SMALL_BLIND}, got {}",
            cfg.small_blind
        )));
    }
    if cfg.big_blind < MIN_BIG_BLIND {
        return Err(ConfigError::Invalid(format!(
            "big_blind must be at least {MIN_BIG_BLIND}, got {}",
            cfg.big_blind
        )));
    }
    if cfg.big_blind < cfg.small_blind {
        return Err(ConfigError::Invalid(format!(
            "big_blind ({}) must not be below small_blind ({})",
            cfg.big_blind, cfg.small_blind
        )));
    }
    if cfg.hands == 0 {
        return Err(ConfigError::Invalid("hands must be >= 1".into()));
    }
    Ok(())
}

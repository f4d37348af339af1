//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value paired with its
//! source (`default`, `file`, `env` or `cli`).

use std::io::Write;

use crate::config::{self, ConfigResolved};
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = config::load_with_sources(&Default::default())?;
    let display = serde_json::json!({
        "num_bots": { "value": config.num_bots, "source": sources.num_bots },
        "starting_chips": { "value": config.starting_chips, "source": sources.starting_chips },
        "difficulty": { "value": config.difficulty, "source": sources.difficulty },
        "small_blind": { "value": config.small_blind, "source": sources.small_blind },
        "big_blind": { "value": config.big_blind, "source": sources.big_blind },
        "seed": { "value": config.seed, "source": sources.seed },
        "hands": { "value": config.hands, "source": sources.hands },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

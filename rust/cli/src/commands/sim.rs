//! Simulation command handler.
//!
//! Seats one policy bot per configured player and plays hands at the same
//! table until the hand count is reached or a single player holds every chip.
//! Hand `i` is shuffled with `seed + i`, so a run can be reproduced from its
//! base seed.

use std::io::Write;

use holdem_ai::driver::{play_out_hand, seat_bots};
use holdem_engine::config::DealerChoice;
use holdem_engine::deck::seeded_rng;
use holdem_engine::errors::GameError;
use holdem_engine::game::GameState;
use holdem_engine::logger::{HandLogger, HandRecord};
use rand_chacha::ChaCha20Rng;
use tracing::info;

use crate::config::Config;
use crate::error::CliError;

/// Runs `config.hands` hands and prints a chip summary.
///
/// When `output` is given every finished hand is appended to it as one JSONL
/// [`HandRecord`].
pub fn handle_sim_command(
    config: &Config,
    output: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = config.seed.unwrap_or_else(rand::random);
    let mut logger = output.map(HandLogger::create).transpose()?;

    let seats = config.seats();
    let expected_chips: u32 = seats.iter().map(|s| s.chips).sum();
    let mut table: Option<GameState> = None;
    let mut played = 0u32;

    for i in 0..config.hands {
        let hand_seed = base_seed.wrapping_add(u64::from(i));
        let mut rng: ChaCha20Rng = seeded_rng(hand_seed);
        let dealt = match &table {
            None => GameState::new_hand(&seats, &config.table_config(), DealerChoice::Random, &mut rng),
            Some(prev) => prev.next_hand(&mut rng),
        };
        let state = match dealt {
            Ok(state) => state,
            Err(GameError::NotEnoughPlayers { .. }) => break,
            Err(e) => return Err(e.into()),
        };

        let bots = seat_bots(&state, config.difficulty.as_str())?;
        let finished = play_out_hand(state, &bots, &mut rng)?;
        if finished.chips_in_play() != expected_chips {
            return Err(CliError::InvalidInput(format!(
                "chip total changed to {} in hand {}",
                finished.chips_in_play(),
                i + 1
            )));
        }

        if let Some(log) = logger.as_mut() {
            let record = HandRecord::from_state(log.next_id(), Some(hand_seed), &finished);
            log.write(&record)?;
        }
        played += 1;
        table = Some(finished);
    }

    info!(hands = played, seed = base_seed, "simulation finished");
    writeln!(
        out,
        "Simulated {} of {} hands (seed {}, difficulty {})",
        played, config.hands, base_seed, config.difficulty
    )?;
    if played < config.hands {
        writeln!(out, "Stopped early: only one player has chips left")?;
    }
    if let Some(last) = &table {
        for p in &last.players {
            writeln!(out, "  {:<8} {:>7}", p.name, p.chips)?;
        }
    }
    if let Some(path) = output {
        writeln!(out, "Hand history written to {}", path)?;
    }
    Ok(())
}

//! Deal command handler: one freshly dealt hand, shown before any action.

use std::io::Write;

use holdem_engine::config::DealerChoice;
use holdem_engine::deck::seeded_rng;
use holdem_engine::game::GameState;

use crate::config::Config;
use crate::error::CliError;
use crate::ui::format_cards;

/// Deals a hand for the configured table and prints the seat list, the
/// blinds and the five cards the board would show if nobody burns a card.
pub fn handle_deal_command(config: &Config, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = seeded_rng(seed);
    let state = GameState::new_hand(&config.seats(), &config.table_config(), DealerChoice::Random, &mut rng)?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(
        out,
        "Blinds: {}/{}  Pot: {}  To call: {}",
        state.blinds.small, state.blinds.big, state.pot, state.current_bet
    )?;
    for p in &state.players {
        let mut tags = Vec::new();
        if p.is_dealer {
            tags.push("D".to_string());
        }
        if p.bet > 0 {
            tags.push(format!("bet {}", p.bet));
        }
        if p.is_turn {
            tags.push("to act".to_string());
        }
        writeln!(
            out,
            "Seat {} {:<8} {:>6}  {}  {}",
            p.position,
            p.name,
            p.chips,
            format_cards(&p.cards),
            tags.join(", ")
        )?;
    }
    let upcoming: Vec<_> = state.deck.cards().iter().rev().take(5).copied().collect();
    writeln!(out, "Board: {}", format_cards(&upcoming))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64) -> Config {
        Config {
            seed: Some(seed),
            ..Config::default()
        }
    }

    #[test]
    fn same_seed_same_output() {
        let mut a: Vec<u8> = Vec::new();
        let mut b: Vec<u8> = Vec::new();
        handle_deal_command(&config(12345), &mut a).unwrap();
        handle_deal_command(&config(12345), &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn one_line_per_seat_plus_header_and_board() {
        let mut out: Vec<u8> = Vec::new();
        handle_deal_command(&config(999), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2 + 3 + 1);
        assert!(lines[0].starts_with("Seed: 999"));
        assert!(lines[1].contains("Pot: 30"));
        assert!(lines[5].starts_with("Board: "));
        assert_eq!(lines.iter().filter(|l| l.contains("to act")).count(), 1);
    }
}

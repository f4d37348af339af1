//! Hand evaluation command.

use std::io::Write;

use holdem_engine::cards::{parse_cards, Card};
use holdem_engine::hand::{evaluate_slice, find_best_hand, HandResult};

use crate::error::CliError;
use crate::ui::format_cards;

/// Scores the given cards.
///
/// With `--board`, `cards` are the hole cards. Without it, exactly five
/// cards are scored as they are, and six or seven are read as two hole
/// cards followed by the board.
pub fn handle_eval_command(
    cards: &[String],
    board: Option<&str>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let given = parse_cards(&cards.join(" "))?;
    let (hole, community): (Vec<Card>, Vec<Card>) = match board {
        Some(b) => (given, parse_cards(b)?),
        None if given.len() > 5 => (given[..2].to_vec(), given[2..].to_vec()),
        None => (given, Vec::new()),
    };

    let result = if community.is_empty() {
        evaluate_slice(&hole)?
    } else {
        find_best_hand(&hole, &community)?
    };

    if json {
        let value = serde_json::json!({
            "rank": result.rank.name(),
            "score": result.score,
            "cards": result.cards.iter().map(ToString::to_string).collect::<Vec<_>>(),
        });
        writeln!(out, "{}", value)?;
    } else {
        writeln!(out, "{}", describe(&result))?;
    }
    Ok(())
}

fn describe(result: &HandResult) -> String {
    format!(
        "{} ({}): {}",
        result.rank,
        result.score,
        format_cards(&result.cards)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(cards: &[&str], board: Option<&str>) -> Result<String, CliError> {
        let cards: Vec<String> = cards.iter().map(|s| s.to_string()).collect();
        let mut out: Vec<u8> = Vec::new();
        handle_eval_command(&cards, board, false, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn five_cards_are_scored_directly() {
        let out = run(&["As", "Ks", "Qs", "Js", "10s"], None).unwrap();
        assert_eq!(out.trim(), "Royal Flush (1000): A♠ K♠ Q♠ J♠ 10♠");
    }

    #[test]
    fn hole_and_board() {
        let out = run(&["2h 2c"], Some("2d 2s 5c 9h Kd")).unwrap();
        assert!(out.starts_with("Four of a Kind (802)"));
    }

    #[test]
    fn seven_cards_without_board() {
        let out = run(&["Ah,Kh,Qh,Jh,10h,2c,3d"], None).unwrap();
        assert!(out.starts_with("Royal Flush"));
    }

    #[test]
    fn too_few_cards_fail() {
        assert!(matches!(run(&["As", "Ks"], None), Err(CliError::Engine(_))));
        assert!(matches!(run(&["Zz"], None), Err(CliError::Engine(_))));
    }
}

//! Terminal play against the same rules engine the server uses.

use crate::reply::{outcome_message, rejection_message};
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_core::{GameState, Move, new_game, play};
use tracing::{debug, instrument};

const HELP: &str = "Enter `row col` (0-2), `reset` or `quit`";

/// Plays one shared game, reading commands from `input` until EOF or `quit`.
#[instrument(skip_all)]
pub fn run_local(input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut game = new_game();
    writeln!(output, "{}", HELP)?;
    print_game(&game, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        debug!(command, "Read command");

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "reset" => {
                game = new_game();
                writeln!(output, "New game")?;
            }
            _ => match parse_move(command) {
                Some(mv) => match play(&mv, &mut game) {
                    Ok(outcome) => writeln!(output, "{}", outcome_message(&mv, &outcome))?,
                    Err(err) => writeln!(output, "{}", rejection_message(&err))?,
                },
                None => {
                    writeln!(output, "{}", HELP)?;
                    continue;
                }
            },
        }
        print_game(&game, &mut output)?;
    }

    Ok(())
}

fn print_game(game: &GameState, output: &mut impl Write) -> Result<()> {
    writeln!(output, "{}", game.board())?;
    if !game.game_over() {
        writeln!(output, "{} to move", game.turn_owner())?;
    }
    Ok(())
}

/// Accepts `row col` or `row,col`.
fn parse_move(command: &str) -> Option<Move> {
    let mut parts = command
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::new(row, col))
}

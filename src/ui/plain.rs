//! Line-oriented frontend: reads commands from any reader, prints the board
//! as text to any writer.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::config::AppConfig;
use crate::game::{GameConfig, GameState};

const HELP: &str = "\
Commands:
  <column>    drop a piece into a column (numbered from 1)
  new [n]     start a new game, optionally with a new connect length
  help        show this help
  quit        leave the game";

/// Play games on `input`/`output` until `quit` or end of input.
pub fn run_plain<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &AppConfig,
) -> io::Result<()> {
    let mut game: Option<GameState> = None;
    match config.game_config() {
        Ok(game_config) => start(&mut game, game_config, output)?,
        Err(err) => writeln!(output, "{err}")?,
    }
    writeln!(output, "Type 'help' for commands.")?;
    prompt(game.as_ref(), output)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        debug!("plain input: {line:?}");

        let mut words = line.split_whitespace();
        match words.next() {
            None => {}
            Some("q" | "quit" | "exit") => break,
            Some("h" | "help" | "?") => writeln!(output, "{HELP}")?,
            Some("n" | "new") => {
                let requested = match words.next() {
                    Some(arg) => arg.parse::<GameConfig>(),
                    None => game
                        .as_ref()
                        .map_or_else(|| config.game_config(), |g| Ok(*g.config())),
                };
                match requested {
                    Ok(game_config) => start(&mut game, game_config, output)?,
                    // Previous game stays as it was
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
            Some(word) => match (word.parse::<usize>(), game.as_mut()) {
                (Ok(column), Some(state)) => play(state, column, output)?,
                (Ok(_), None) => writeln!(output, "No game yet. Type 'new <n>' to start one.")?,
                (Err(_), _) => writeln!(output, "Unknown command '{word}'. Type 'help'.")?,
            },
        }

        prompt(game.as_ref(), output)?;
    }

    output.flush()
}

fn start<W: Write>(
    game: &mut Option<GameState>,
    config: GameConfig,
    output: &mut W,
) -> io::Result<()> {
    let state = GameState::with_config(config);
    writeln!(
        output,
        "Connect {} on a {}x{} board.",
        config.connect_length(),
        config.rows(),
        config.columns()
    )?;
    write!(output, "{}", state.board())?;
    *game = Some(state);
    Ok(())
}

/// Apply a 1-based column choice and report the result.
fn play<W: Write>(state: &mut GameState, column: usize, output: &mut W) -> io::Result<()> {
    let result = match column.checked_sub(1) {
        Some(index) => state.apply_move(index),
        None => {
            writeln!(output, "Columns are numbered from 1.")?;
            return Ok(());
        }
    };

    if result.is_ok() {
        write!(output, "{}", state.board())?;
    }
    if let Some(message) = super::move_message(&result) {
        writeln!(output, "{message}")?;
    }
    Ok(())
}

fn prompt<W: Write>(game: Option<&GameState>, output: &mut W) -> io::Result<()> {
    match game {
        Some(state) if !state.is_terminal() => write!(
            output,
            "{} to move (1-{})> ",
            state.current_player().name(),
            state.board().columns()
        )?,
        _ => write!(output, "> ")?,
    }
    output.flush()
}

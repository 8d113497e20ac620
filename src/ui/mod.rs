//! Terminal frontends: a full-screen game view built on Ratatui, and a plain
//! line-oriented mode for scripting and non-interactive terminals.

mod app;
pub mod board_widget;
mod game_view;
pub mod plain;

pub use app::App;

use crate::error::MoveError;
use crate::game::{MoveOutcome, MoveResult};

/// Banner text for the result of a move, if it deserves one.
pub fn move_message(result: &MoveResult) -> Option<String> {
    match result {
        Ok(MoveOutcome::Placed { .. }) => None,
        Ok(MoveOutcome::Win { player, .. }) => Some(format!("{} wins!", player.name())),
        Ok(MoveOutcome::Draw { .. }) => Some("It's a draw!".to_string()),
        Err(MoveError::ColumnFull(_)) => Some("Column is full! Try another column.".to_string()),
        Err(MoveError::InvalidColumn { .. }) => Some("Invalid column!".to_string()),
        Err(MoveError::GameAlreadyOver) => Some("Game is over! Start a new game.".to_string()),
    }
}

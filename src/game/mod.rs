//! Core Connect N game logic: board representation, player types, board
//! geometry rules, and the game state machine.

mod board;
mod player;
mod rules;
mod state;

pub use board::{Board, Cell};
pub use player::Player;
pub use rules::{GameConfig, MAX_CONNECT_LENGTH, MIN_CONNECT_LENGTH};
pub use state::{GameState, GameStatus, MoveOutcome, MoveResult};

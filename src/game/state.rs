use log::{debug, info};

use super::{Board, GameConfig, Player};
use crate::error::{ConfigError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// What an accepted move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Piece placed, the turn passed to the other player.
    Placed { row: usize, column: usize },
    /// Piece placed and completed a line.
    Win {
        player: Player,
        row: usize,
        column: usize,
    },
    /// Piece placed and filled the board without completing a line.
    Draw { row: usize, column: usize },
}

impl MoveOutcome {
    /// Position of the piece that was placed
    pub fn position(&self) -> (usize, usize) {
        match *self {
            MoveOutcome::Placed { row, column }
            | MoveOutcome::Win { row, column, .. }
            | MoveOutcome::Draw { row, column } => (row, column),
        }
    }
}

pub type MoveResult = Result<MoveOutcome, MoveError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    current_player: Player,
    status: GameStatus,
    move_count: usize,
}

impl GameState {
    /// Start a fresh game for the given connect length.
    ///
    /// This is the only way to reset a game. On error nothing is created, so
    /// callers holding a previous game keep it unchanged.
    pub fn configure(connect_length: usize) -> Result<Self, ConfigError> {
        GameConfig::new(connect_length).map(Self::with_config)
    }

    /// Start a fresh game from an already validated configuration
    pub fn with_config(config: GameConfig) -> Self {
        info!(
            "new game: connect {} on {}x{} board",
            config.connect_length(),
            config.rows(),
            config.columns()
        );
        GameState {
            config,
            board: Board::new(config.rows(), config.columns()),
            current_player: Player::First, // First starts
            status: GameStatus::InProgress,
            move_count: 0,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of pieces placed so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Get list of columns that still accept a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.columns())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column` and adjudicate.
    ///
    /// Rejected moves leave the state untouched.
    pub fn apply_move(&mut self, column: usize) -> MoveResult {
        if self.is_terminal() {
            debug!("move in column {column} ignored: game is over");
            return Err(MoveError::GameAlreadyOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player).map_err(|e| {
            debug!("move rejected for {}: {e}", player.name());
            e
        })?;
        self.move_count += 1;
        debug!("{} placed at ({row}, {column})", player.name());

        // Win takes precedence over a full board
        if self.board.check_win(row, column, self.config.connect_length()) {
            self.status = GameStatus::Won(player);
            info!("{} wins after {} moves", player.name(), self.move_count);
            return Ok(MoveOutcome::Win {
                player,
                row,
                column,
            });
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!("draw after {} moves", self.move_count);
            return Ok(MoveOutcome::Draw { row, column });
        }

        self.current_player = player.other();
        Ok(MoveOutcome::Placed { row, column })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

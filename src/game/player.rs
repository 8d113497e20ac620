use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        Cell::Piece(self)
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::First => "Red",
            Player::Second => "Yellow",
        }
    }

    /// Single-character marker used by plain-text rendering
    pub fn symbol(self) -> char {
        match self {
            Player::First => 'R',
            Player::Second => 'Y',
        }
    }
}

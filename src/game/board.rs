use std::fmt;

use super::player::Player;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Piece(Player),
}

/// Line directions through a cell, each paired with its opposite.
/// Horizontal, vertical, `\` diagonal, `/` diagonal.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Grid of cells with gravity. Row 0 is the top, `rows - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, columns: usize) -> Self {
        Board {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if the position is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.columns,
            "({row}, {col}) out of bounds for {}x{} board",
            self.rows,
            self.columns
        );
        row * self.columns + col
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.columns {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        (0..self.rows)
            .rev()
            .take_while(|&row| self.get(row, col) != Cell::Empty)
            .count()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.columns {
            return Err(MoveError::InvalidColumn {
                column: col,
                columns: self.columns,
            });
        }

        // Find the lowest empty row in this column
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col))?;

        let index = self.index(row, col);
        self.cells[index] = player.to_cell();
        Ok(row)
    }

    /// Check if every cell on the board is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Check if the piece at (row, col) is part of a line of at least
    /// `connect_length` same-player pieces.
    pub fn check_win(&self, row: usize, col: usize, connect_length: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        let needed = connect_length.saturating_sub(1);
        AXES.iter().any(|&(dr, dc)| {
            self.count_direction(row, col, dr, dc, cell)
                + self.count_direction(row, col, -dr, -dc, cell)
                >= needed
        })
    }

    /// Count consecutive `cell`s starting one step away from (row, col) in
    /// direction (dr, dc). The anchor itself is not counted.
    fn count_direction(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row.checked_add_signed(dr);
        let mut c = col.checked_add_signed(dc);

        while let (Some(cr), Some(cc)) = (r, c) {
            if cr >= self.rows || cc >= self.columns || self.get(cr, cc) != cell {
                break;
            }
            count += 1;
            r = cr.checked_add_signed(dr);
            c = cc.checked_add_signed(dc);
        }

        count
    }
}

impl fmt::Display for Board {
    /// Plain-text grid with 1-based column numbers on top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = (1..=self.columns).map(|col| format!("{col:>3}")).collect();
        writeln!(f, "{}", header.concat())?;

        for row in 0..self.rows {
            for col in 0..self.columns {
                let symbol = match self.get(row, col) {
                    Cell::Empty => '.',
                    Cell::Piece(player) => player.symbol(),
                };
                write!(f, "{symbol:>3}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

use crate::game::{Board, Cell, Player};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// A piece still on its way down. Only affects drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallingPiece {
    pub column: usize,
    /// Row the piece will land in
    pub row: usize,
    /// Row the piece is drawn in this frame
    pub shown_row: usize,
}

impl FallingPiece {
    /// Position of a piece dropped into `row` after `progress` (0.0..=1.0) of
    /// the animation, with ease-out so it slows down near the bottom.
    pub fn at(row: usize, column: usize, progress: f64) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - progress).powi(2);
        let shown_row = ((row as f64) * eased).round() as usize;
        FallingPiece {
            column,
            row,
            shown_row: shown_row.min(row),
        }
    }
}

pub fn player_color(player: Player) -> Color {
    match player {
        Player::First => Color::Red,
        Player::Second => Color::Yellow,
    }
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Cell::Piece(player) => {
            Span::styled(" \u{25cf} ", Style::default().fg(player_color(player)))
        }
    }
}

/// Board rows as styled lines, one span per cell, without borders.
pub fn board_lines(board: &Board, falling: Option<FallingPiece>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(board.rows());

    for row in 0..board.rows() {
        let mut spans = Vec::with_capacity(board.columns());
        for col in 0..board.columns() {
            let cell = match falling {
                Some(piece) if piece.column == col && piece.row != piece.shown_row => {
                    if row == piece.shown_row {
                        board.get(piece.row, col)
                    } else if row == piece.row {
                        Cell::Empty
                    } else {
                        board.get(row, col)
                    }
                }
                _ => board.get(row, col),
            };

            let mut span = cell_span(cell);
            if let Some(piece) = falling {
                if piece.column == col && piece.shown_row == row {
                    span = span.patch_style(Style::default().add_modifier(Modifier::BOLD));
                }
            }
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    lines
}

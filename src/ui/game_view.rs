use super::board_widget::{board_lines, player_color, FallingPiece};
use crate::game::{Board, GameState, GameStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything the game screen needs for one frame.
pub struct View<'a> {
    pub game: Option<&'a GameState>,
    pub selected_column: usize,
    pub message: Option<&'a str>,
    /// Contents of the connect-length field while the setup prompt is open
    pub setup_input: Option<&'a str>,
    pub falling: Option<FallingPiece>,
}

pub fn render(frame: &mut Frame, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, view.game, chunks[0]);
    match (view.setup_input, view.game) {
        (Some(input), _) => render_setup(frame, input, chunks[1]),
        (None, Some(game)) => {
            render_board(frame, game.board(), view.selected_column, view.falling, chunks[1])
        }
        (None, None) => {}
    }
    render_message(frame, view.message, chunks[2]);
    render_controls(frame, view.setup_input.is_some(), chunks[3]);
}

fn render_header(frame: &mut Frame, game: Option<&GameState>, area: Rect) {
    let (status, color) = match game {
        None => ("Choose how many pieces in a row win".to_string(), Color::White),
        Some(game) => {
            let connect = game.config().connect_length();
            match game.status() {
                GameStatus::InProgress => {
                    let player = game.current_player();
                    (
                        format!("Current Player: {}  |  Connect {}", player.name(), connect),
                        player_color(player),
                    )
                }
                GameStatus::Won(player) => (
                    format!("Game Over: {} wins!  |  Connect {}", player.name(), connect),
                    player_color(player),
                ),
                GameStatus::Draw => (
                    format!("Game Over: draw  |  Connect {}", connect),
                    Color::White,
                ),
            }
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect N"));

    frame.render_widget(header, area);
}

fn render_setup(frame: &mut Frame, input: &str, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from("Connect how many? (minimum 4)"),
        Line::from(""),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(
                format!("{input}_"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let prompt = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("New Game"));
    frame.render_widget(prompt, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    falling: Option<FallingPiece>,
    area: Rect,
) {
    let columns = board.columns();
    let mut lines = Vec::with_capacity(board.rows() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..columns {
        let label = format!("{:^3}", (col + 1) % 100);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(3 * columns + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in board_lines(board, falling) {
        let mut row_spans = vec![Span::raw("  ║")];
        row_spans.extend(row.spans);
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")]; // Align with board (3 chars to match "  ║")
    for col in 0..columns {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, setup: bool, area: Rect) {
    let line = if setup {
        Line::from("0-9: Type  |  Backspace: Erase  |  Enter: Start  |  Esc: Cancel")
    } else {
        Line::from(
            "←/→ or 1-9: Column  |  Enter: Drop  |  R: Restart  |  N: New length  |  Q: Quit",
        )
    };

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

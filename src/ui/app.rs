use super::board_widget::FallingPiece;
use super::game_view::{self, View};
use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameConfig, GameState, MoveOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::{debug, warn};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Longest connect length the prompt accepts digits for
const MAX_INPUT_DIGITS: usize = 4;

/// Last placement, kept only to animate it.
struct LastDrop {
    row: usize,
    column: usize,
    at: Instant,
}

pub struct App {
    game: Option<GameState>,
    /// `Some` while the connect-length prompt is open
    setup_input: Option<String>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    last_drop: Option<LastDrop>,
    animation: Duration,
    poll_interval: Duration,
}

impl App {
    /// Start at the connect-length prompt, prefilled from the configuration.
    pub fn new(config: &AppConfig) -> Self {
        App {
            game: None,
            setup_input: Some(config.game.connect_length.to_string()),
            selected_column: 0,
            should_quit: false,
            message: None,
            last_drop: None,
            animation: Duration::from_millis(config.ui.drop_animation_ms),
            poll_interval: Duration::from_millis(config.ui.poll_interval_ms),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        if self.setup_input.is_some() {
            self.handle_setup_key(key);
        } else {
            self.handle_game_key(key);
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        let Some(input) = self.setup_input.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if input.len() < MAX_INPUT_DIGITS {
                    input.push(c);
                }
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Enter => self.submit_setup(),
            KeyCode::Esc => {
                // Back to the running game, or out if there is none
                self.setup_input = None;
                if self.game.is_none() {
                    self.should_quit = true;
                }
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        // Clear message on any key press, except on a finished game where
        // the result stays up until the next game
        if !self.game.as_ref().is_some_and(GameState::is_terminal) {
            self.message = None;
        }
        let columns = self.game.as_ref().map_or(0, |g| g.board().columns());

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < columns {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = (c as usize) - ('1' as usize);
                if col < columns {
                    self.selected_column = col;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // Same connect length, fresh board
                if let Some(config) = self.game.as_ref().map(|g| *g.config()) {
                    self.start_game(config);
                }
            }
            KeyCode::Char('n') => {
                let current = self
                    .game
                    .as_ref()
                    .map(|g| g.config().connect_length().to_string())
                    .unwrap_or_default();
                self.setup_input = Some(current);
            }
            _ => {}
        }
    }

    /// Try to start a game from the prompt. Invalid input keeps the prompt
    /// open and leaves any running game as it was.
    pub fn submit_setup(&mut self) {
        let Some(input) = self.setup_input.as_deref() else {
            return;
        };

        match input.parse::<GameConfig>() {
            Ok(config) => self.start_game(config),
            Err(err) => {
                warn!("rejected setup input: {err}");
                self.message = Some(err.to_string());
            }
        }
    }

    fn start_game(&mut self, config: GameConfig) {
        self.game = Some(GameState::with_config(config));
        self.setup_input = None;
        self.selected_column = config.columns() / 2; // Start in middle
        self.last_drop = None;
        self.message = Some(format!(
            "New game: connect {} on a {}x{} board",
            config.connect_length(),
            config.rows(),
            config.columns()
        ));
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        let result = game.apply_move(self.selected_column);
        debug!("column {} -> {:?}", self.selected_column, result);
        match result {
            Ok(outcome) => {
                let (row, column) = outcome.position();
                self.last_drop = Some(LastDrop {
                    row,
                    column,
                    at: Instant::now(),
                });
                if let MoveOutcome::Win { .. } | MoveOutcome::Draw { .. } = outcome {
                    self.message = super::move_message(&result).map(|m| {
                        format!("{m} Press 'r' to play again or 'n' for a new length.")
                    });
                }
            }
            // Finished board is frozen; keep showing the result
            Err(MoveError::GameAlreadyOver) => {}
            Err(_) => self.message = super::move_message(&result),
        }
    }

    /// The most recent piece while its drop animation is still running
    fn falling_piece(&self) -> Option<FallingPiece> {
        let last = self.last_drop.as_ref()?;
        let elapsed = last.at.elapsed();
        if elapsed >= self.animation {
            return None;
        }
        let progress = elapsed.as_secs_f64() / self.animation.as_secs_f64();
        Some(FallingPiece::at(last.row, last.column, progress))
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let view = View {
            game: self.game.as_ref(),
            selected_column: self.selected_column,
            message: self.message.as_deref(),
            setup_input: self.setup_input.as_deref(),
            falling: self.falling_piece(),
        };
        game_view::render(frame, &view);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameStatus, Player};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn started() -> App {
        let mut app = App::default();
        app.submit_setup();
        app
    }

    #[test]
    fn test_starts_at_prompt_with_default_length() {
        let app = App::default();
        assert!(app.game.is_none());
        assert_eq!(app.setup_input.as_deref(), Some("4"));
    }

    #[test]
    fn test_typed_length_starts_game() {
        let mut app = App::default();
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Enter);

        let game = app.game.as_ref().unwrap();
        assert_eq!(game.config().connect_length(), 5);
        assert_eq!(game.board().columns(), 9);
        assert!(app.setup_input.is_none());
        assert_eq!(app.selected_column, 4);
    }

    #[test]
    fn test_invalid_length_keeps_running_game() {
        let mut app = started();
        press(&mut app, KeyCode::Enter);
        let before = app.game.clone();

        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game, before);
        assert!(app.setup_input.is_some());
        assert!(app.message.as_deref().unwrap().contains("invalid connect length"));

        // Cancelling returns to the untouched game
        press(&mut app, KeyCode::Esc);
        assert!(app.setup_input.is_none());
        assert!(!app.should_quit);
        assert_eq!(app.game, before);
    }

    #[test]
    fn test_escape_at_first_prompt_quits() {
        let mut app = App::default();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_column_selection_stays_on_board() {
        let mut app = started();
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.selected_column, 6);
        press(&mut app, KeyCode::Char('8'));
        assert_eq!(app.selected_column, 6);
    }

    #[test]
    fn test_drop_and_full_column_message() {
        let mut app = started();
        press(&mut app, KeyCode::Char('1'));
        for _ in 0..6 {
            press(&mut app, KeyCode::Enter);
        }
        let game = app.game.as_ref().unwrap();
        assert_eq!(game.board().get(0, 0), Cell::Piece(Player::Second));
        assert!(app.last_drop.is_some());

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.message.as_deref(),
            Some("Column is full! Try another column.")
        );
        assert_eq!(app.game.as_ref().unwrap().current_player(), Player::First);
    }

    #[test]
    fn test_win_freezes_board_until_restart() {
        let mut app = started();
        for key in ['1', '2', '1', '2', '1', '2', '1'] {
            press(&mut app, KeyCode::Char(key));
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(
            app.game.as_ref().unwrap().status(),
            GameStatus::Won(Player::First)
        );
        assert!(app.message.as_deref().unwrap().starts_with("Red wins!"));

        let frozen = app.game.clone();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game, frozen);

        press(&mut app, KeyCode::Char('r'));
        let game = app.game.as_ref().unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_falling_piece_expires() {
        let mut config = AppConfig::default();
        config.ui.drop_animation_ms = 0;
        let mut app = App::new(&config);
        app.submit_setup();
        press(&mut app, KeyCode::Enter);
        assert!(app.falling_piece().is_none());

        let mut app = started();
        press(&mut app, KeyCode::Enter);
        let piece = app.falling_piece().unwrap();
        assert_eq!((piece.row, piece.column), (5, 3));
    }
}

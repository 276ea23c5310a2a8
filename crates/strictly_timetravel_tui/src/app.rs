//! Application state: the engine plus cursor and focus.
//!
//! The app is the presentation adapter. It translates keys into engine
//! operations and keeps the latest [`GameView`] for rendering.

use crate::input::{digit_cell, move_cursor, move_selection};
use crossterm::event::KeyCode;
use strictly_timetravel::{Game, GameView, PlayOutcome, Position, SortOrder};
use tracing::{debug, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys select a move-list entry.
    History,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    view: GameView,
    cursor: Position,
    focus: Focus,
    selected: usize,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given move-list order.
    #[instrument]
    pub fn new(sort: SortOrder) -> Self {
        let game = Game::with_sort(sort);
        let view = game.view();
        Self {
            game,
            view,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            notice: None,
            should_quit: false,
        }
    }

    /// Latest render model.
    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected entry in the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status bar text: the game status, plus the last notice if any.
    pub fn status_message(&self) -> String {
        match &self.notice {
            Some(notice) => format!("{} | {}", self.view.status_line(), notice),
            None => self.view.status_line(),
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::Char('s') => {
                self.game.toggle_sort();
                self.refresh();
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        if let Some(cell) = digit_cell(key) {
            self.cursor = cell;
            self.play(cell);
            return;
        }
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                if let Some(entry) = self.view.moves().get(self.selected) {
                    self.jump(*entry.move_number());
                }
            }
            _ => self.selected = move_selection(self.selected, self.view.moves().len(), key),
        }
    }

    fn play(&mut self, cell: Position) {
        self.notice = match self.game.play_move(cell) {
            PlayOutcome::Played(mov) => {
                debug!(%mov, "Move played");
                None
            }
            PlayOutcome::Ignored(rejection) => Some(rejection.to_string()),
        };
        self.refresh();
    }

    fn jump(&mut self, target: usize) {
        self.notice = self.game.jump_to(target).err().map(|e| e.to_string());
        self.refresh();
    }

    /// Rebuilds the view and moves the history selection to the current entry.
    fn refresh(&mut self) {
        self.view = self.game.view();
        self.selected = self
            .view
            .moves()
            .iter()
            .position(|entry| *entry.is_current())
            .unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_timetravel::{GameStatus, Player};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_digits_play_cells() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('1')]);

        assert_eq!(app.view().board().get(Position::Center).player(), Some(Player::X));
        assert_eq!(app.view().board().get(Position::TopLeft).player(), Some(Player::O));
        assert_eq!(app.status_message(), "Next player: X");
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_cursor_and_enter_play() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);

        assert_eq!(app.view().board().get(Position::TopLeft).player(), Some(Player::X));
        assert_eq!(*app.view().position(), 1);
    }

    #[test]
    fn test_occupied_cell_shows_notice() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);

        assert_eq!(*app.view().position(), 1);
        assert_eq!(
            app.status_message(),
            "Next player: O | Square Center is already occupied"
        );
    }

    #[test]
    fn test_history_jump_and_branch() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('1'), KeyCode::Char('9')]);
        assert_eq!(app.selected(), 3);

        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(*app.view().position(), 1);
        assert_eq!(app.view().moves().len(), 4);

        press(&mut app, &[KeyCode::Tab, KeyCode::Char('3')]);
        assert_eq!(app.view().moves().len(), 3);
        assert_eq!(*app.view().position(), 2);
    }

    #[test]
    fn test_sort_toggle_keeps_selection_on_current() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('1')]);
        assert_eq!(app.selected(), 2);

        press(&mut app, &[KeyCode::Char('s')]);
        assert_eq!(*app.view().sort(), SortOrder::Descending);
        assert_eq!(app.selected(), 0);
        assert_eq!(app.view().move_labels()[0], "You are at move #2");
    }

    #[test]
    fn test_win_blocks_further_moves() {
        let mut app = App::new(SortOrder::Ascending);
        // X: 1 2 3 across the top, O: 4 5
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('4'),
                KeyCode::Char('2'),
                KeyCode::Char('5'),
                KeyCode::Char('3'),
                KeyCode::Char('9'),
            ],
        );

        assert_eq!(app.view().evaluation().status(), GameStatus::Won(Player::X));
        assert_eq!(*app.view().position(), 5);
        assert!(app.status_message().ends_with("Game is already over (Winner: X)"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(SortOrder::Ascending);
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}

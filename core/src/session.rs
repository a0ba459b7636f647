use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
/// - any -> Quit
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Playing,
    Won,
    Lost,
    Quit,
}

impl SessionState {
    /// No more moves are accepted on the board.
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Playing
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What the player asked for, independent of which key produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    ToggleFlag,
    Reveal,
    Quit,
}

/// One game: the board, the cursor on it, and whether play is still going.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    board: Board,
    cursor: Coord2,
    state: SessionState,
}

impl Session {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            cursor: (0, 0),
            state: SessionState::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Coord2 {
        self.cursor
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Throws the current game away and starts over on `board`.
    pub fn restart(&mut self, board: Board) {
        log::info!("Starting new {:?} game", board.game_config());
        *self = Self::new(board);
    }

    pub fn apply(&mut self, action: Action) -> SessionState {
        log::trace!("Applying {:?} at {:?}", action, self.cursor);

        match action {
            Action::Quit => {
                self.state = SessionState::Quit;
            }
            Action::Move(direction) => self.move_cursor(direction),
            Action::ToggleFlag if !self.is_finished() => {
                if self.board.toggle_flag(self.cursor).has_update() {
                    log::debug!(
                        "Flag toggled at {:?}, {} left",
                        self.cursor,
                        self.board.flags_remaining()
                    );
                }
            }
            Action::Reveal if !self.is_finished() => {
                if !self.board.reveal(self.cursor) {
                    log::info!("Mine hit at {:?}, game lost", self.cursor);
                    self.state = SessionState::Lost;
                } else if self.board.is_cleared() {
                    log::info!("Board cleared, game won");
                    self.state = SessionState::Won;
                }
            }
            Action::ToggleFlag | Action::Reveal => {
                log::debug!("Ignoring {:?}, session is {:?}", action, self.state);
            }
        }

        self.state
    }

    fn move_cursor(&mut self, direction: Direction) {
        let (x, y) = self.cursor;
        let (width, height) = self.board.size();
        self.cursor = match direction {
            Direction::Up => (x, y.saturating_sub(1)),
            Direction::Down => (x, y.saturating_add(1).min(height.saturating_sub(1))),
            Direction::Left => (x.saturating_sub(1), y),
            Direction::Right => (x.saturating_add(1).min(width.saturating_sub(1)), y),
        };
    }
}

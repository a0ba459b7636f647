//! Application state and the input loop.

use crossterm::event::{self, Event};
use termsweep_core::{Board, GameConfig, RandomMineGenerator, Session, SessionState};

use crate::{
    input::{self, Command},
    terminal::Tui,
    ui,
};

pub struct App {
    config: GameConfig,
    next_seed: Option<u64>,
    session: Session,
}

impl App {
    /// With a `seed` the first board is reproducible and each new game uses the
    /// following seed.
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let mut next_seed = seed;
        let board = new_board(config, &mut next_seed);
        Self {
            config,
            next_seed,
            session: Session::new(board),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn handle(&mut self, command: Command) -> SessionState {
        match command {
            Command::Game(action) => self.session.apply(action),
            Command::NewGame => {
                let board = new_board(self.config, &mut self.next_seed);
                self.session.restart(board);
                self.session.state()
            }
        }
    }

    /// Draws, then blocks on the next key, until the player quits.
    pub fn run(&mut self, terminal: &mut Tui) -> anyhow::Result<SessionState> {
        loop {
            terminal.draw(|frame| ui::draw(frame, self.session()))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            let Some(command) = input::command_for(key) else {
                continue;
            };

            let before = self.session.state();
            let after = self.handle(command);
            if after != before {
                log::info!("Session {:?} -> {:?}", before, after);
            }
            if after == SessionState::Quit {
                return Ok(before);
            }
        }
    }
}

fn new_board(config: GameConfig, next_seed: &mut Option<u64>) -> Board {
    let generator = match next_seed {
        Some(seed) => {
            let generator = RandomMineGenerator::new(*seed);
            *seed = seed.wrapping_add(1);
            generator
        }
        None => RandomMineGenerator::from_entropy(),
    };
    log::info!("New {:?} board, seed {}", config, generator.seed());
    Board::generate(config, generator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use termsweep_core::{Action, Direction};

    fn config() -> GameConfig {
        GameConfig::new((9, 9), 10).unwrap()
    }

    #[test]
    fn seeded_app_is_reproducible() {
        let a = App::new(config(), Some(5));
        let b = App::new(config(), Some(5));
        assert_eq!(a.session().board(), b.session().board());
        assert_eq!(a.session().board().mine_count(), 10);
    }

    #[test]
    fn new_game_advances_the_seed() {
        let mut app = App::new(config(), Some(5));
        let first = app.session().board().clone();

        assert_eq!(app.handle(Command::NewGame), SessionState::Playing);
        let expected = Board::generate(config(), RandomMineGenerator::new(6));
        assert_eq!(app.session().board(), &expected);
        assert_ne!(app.session().board(), &first);
    }

    #[test]
    fn game_commands_reach_the_session() {
        let mut app = App::new(config(), Some(1));
        app.handle(Command::Game(Action::Move(Direction::Right)));
        app.handle(Command::Game(Action::ToggleFlag));

        assert_eq!(app.session().cursor(), (1, 0));
        assert_eq!(app.session().board().flags_remaining(), 9);
        assert_eq!(app.handle(Command::Game(Action::Quit)), SessionState::Quit);
    }

    #[test]
    fn new_game_after_loss_resumes_play() {
        let mut app = App::new(config(), Some(2));
        let mine = app
            .session()
            .board()
            .iter_coords()
            .find(|&coords| app.session().board().tile(coords).mine)
            .unwrap();
        for _ in 0..mine.0 {
            app.handle(Command::Game(Action::Move(Direction::Right)));
        }
        for _ in 0..mine.1 {
            app.handle(Command::Game(Action::Move(Direction::Down)));
        }

        assert_eq!(app.handle(Command::Game(Action::Reveal)), SessionState::Lost);
        assert_eq!(app.handle(Command::NewGame), SessionState::Playing);
        assert_eq!(app.session().cursor(), (0, 0));
    }
}

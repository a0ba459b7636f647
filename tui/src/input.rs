//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use termsweep_core::{Action, Direction};

/// What a key press asks the app to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Game(Action),
    NewGame,
}

/// Maps a key press to a command, `None` for unbound keys and key releases.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    use Action::*;
    use Direction::*;

    if key.kind == KeyEventKind::Release {
        return None;
    }

    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Quit,
        KeyCode::Char('q') | KeyCode::Esc => Quit,
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Move(Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Move(Down),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Move(Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Move(Right),
        KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::Char('o') => ToggleFlag,
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('i') => Reveal,
        KeyCode::Char('n') => return Some(Command::NewGame),
        _ => return None,
    };

    Some(Command::Game(action))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Option<Command> {
        command_for(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn game(action: Action) -> Option<Command> {
        Some(Command::Game(action))
    }

    #[test]
    fn movement_keys() {
        for code in [KeyCode::Up, KeyCode::Char('k'), KeyCode::Char('w')] {
            assert_eq!(press(code), game(Action::Move(Direction::Up)));
        }
        for code in [KeyCode::Down, KeyCode::Char('j'), KeyCode::Char('s')] {
            assert_eq!(press(code), game(Action::Move(Direction::Down)));
        }
        for code in [KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('a')] {
            assert_eq!(press(code), game(Action::Move(Direction::Left)));
        }
        for code in [KeyCode::Right, KeyCode::Char('l'), KeyCode::Char('d')] {
            assert_eq!(press(code), game(Action::Move(Direction::Right)));
        }
    }

    #[test]
    fn flag_and_reveal_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Char('f'), KeyCode::Char('o')] {
            assert_eq!(press(code), game(Action::ToggleFlag));
        }
        for code in [KeyCode::Enter, KeyCode::Char('e'), KeyCode::Char('i')] {
            assert_eq!(press(code), game(Action::Reveal));
        }
    }

    #[test]
    fn quit_keys() {
        assert_eq!(press(KeyCode::Char('q')), game(Action::Quit));
        assert_eq!(press(KeyCode::Esc), game(Action::Quit));
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            game(Action::Quit)
        );
    }

    #[test]
    fn new_game_key() {
        assert_eq!(press(KeyCode::Char('n')), Some(Command::NewGame));
    }

    #[test]
    fn unbound_keys_and_releases_are_ignored() {
        assert_eq!(press(KeyCode::Char('x')), None);
        assert_eq!(press(KeyCode::Tab), None);
        assert_eq!(press(KeyCode::Char('c')), None);

        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(command_for(release), None);
    }
}

//! Key mapping from terminal events to maze actions.

use crate::types::{Direction, MazeAction, Position};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to maze actions. Unmapped keys yield `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<MazeAction> {
    if should_quit(key) {
        return Some(MazeAction::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => {
            Some(MazeAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => {
            Some(MazeAction::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => {
            Some(MazeAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => {
            Some(MazeAction::Move(Direction::Right))
        }

        KeyCode::Char(' ') | KeyCode::Enter => Some(MazeAction::Solve),

        _ => None,
    }
}

/// Check if key should quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Orthogonal neighbor of `cursor` in `dir`, if it lies inside a
/// `rows x cols` grid.
pub fn move_target(
    cursor: Position,
    dir: Direction,
    (rows, cols): (usize, usize),
) -> Option<Position> {
    cursor
        .step(dir)
        .filter(|p| p.row < rows && p.col < cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(MazeAction::Move(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(MazeAction::Move(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(MazeAction::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(MazeAction::Move(Direction::Right))
        );
    }

    #[test]
    fn test_vim_and_wasd_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('K'))),
            Some(MazeAction::Move(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(MazeAction::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(MazeAction::Move(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('l'))),
            Some(MazeAction::Move(Direction::Right))
        );
    }

    #[test]
    fn test_solve_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(MazeAction::Solve)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(MazeAction::Solve)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('Q'))),
            Some(MazeAction::Quit)
        );
    }

    #[test]
    fn test_move_target_respects_bounds() {
        let dims = (3, 4);
        assert_eq!(move_target(Position::new(0, 0), Direction::Up, dims), None);
        assert_eq!(move_target(Position::new(0, 3), Direction::Right, dims), None);
        assert_eq!(move_target(Position::new(2, 1), Direction::Down, dims), None);
        assert_eq!(
            move_target(Position::new(1, 1), Direction::Right, dims),
            Some(Position::new(1, 2))
        );
    }
}

//! Input handling - convert key events to commands
//!
//! Arrow keys, vi keys (hjkl) and WASD all move; q or Esc quits.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use cq_core::{Command, Direction};

/// Convert a key event on the map screen to a game command.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Command::Move(Direction::North)),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Command::Move(Direction::South)),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Command::Move(Direction::West)),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Command::Move(Direction::East)),

        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),

        _ => None,
    }
}

/// What a key does to a prompt line being typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEdit {
    /// Line was edited, keep reading
    Editing,
    /// Enter pressed; the finished line
    Submit(String),
    /// Key ignored
    Ignored,
}

/// Longest line a prompt accepts
const MAX_LINE: usize = 16;

/// Apply a key to a prompt line buffer.
pub fn edit_line(line: &mut String, key: KeyEvent) -> LineEdit {
    if key.kind == KeyEventKind::Release {
        return LineEdit::Ignored;
    }
    match key.code {
        KeyCode::Enter => LineEdit::Submit(std::mem::take(line)),
        KeyCode::Backspace => {
            line.pop();
            LineEdit::Editing
        }
        KeyCode::Char(c) if !c.is_control() && line.chars().count() < MAX_LINE => {
            line.push(c);
            LineEdit::Editing
        }
        _ => LineEdit::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_move() {
        assert_eq!(key_to_command(key(KeyCode::Up)), Some(Command::Move(Direction::North)));
        assert_eq!(key_to_command(key(KeyCode::Down)), Some(Command::Move(Direction::South)));
        assert_eq!(key_to_command(key(KeyCode::Left)), Some(Command::Move(Direction::West)));
        assert_eq!(key_to_command(key(KeyCode::Right)), Some(Command::Move(Direction::East)));
    }

    #[test]
    fn test_vi_and_wasd() {
        assert_eq!(key_to_command(key(KeyCode::Char('h'))), Some(Command::Move(Direction::West)));
        assert_eq!(key_to_command(key(KeyCode::Char('s'))), Some(Command::Move(Direction::South)));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_to_command(key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(key_to_command(key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            key_to_command(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(key_to_command(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_edit_line() {
        let mut line = String::new();
        assert_eq!(edit_line(&mut line, key(KeyCode::Char('2'))), LineEdit::Editing);
        assert_eq!(edit_line(&mut line, key(KeyCode::Char('x'))), LineEdit::Editing);
        assert_eq!(edit_line(&mut line, key(KeyCode::Backspace)), LineEdit::Editing);
        assert_eq!(edit_line(&mut line, key(KeyCode::Tab)), LineEdit::Ignored);
        assert_eq!(edit_line(&mut line, key(KeyCode::Enter)), LineEdit::Submit("2".into()));
        assert!(line.is_empty());
    }

    #[test]
    fn test_edit_line_length_cap() {
        let mut line = "9".repeat(MAX_LINE);
        assert_eq!(edit_line(&mut line, key(KeyCode::Char('9'))), LineEdit::Ignored);
        assert_eq!(line.len(), MAX_LINE);
    }
}

//! Input handling: crossterm key events mapped to UI-agnostic actions.

use crossterm::event::{KeyCode, KeyEvent};

/// Actions available on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    StartRun,
    PrevDifficulty,
    NextDifficulty,
    SelectDifficulty(usize),
    Quit,
    None,
}

pub fn handle_home_key(key: KeyEvent) -> HomeAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => HomeAction::StartRun,
        KeyCode::Left | KeyCode::Char('h') => HomeAction::PrevDifficulty,
        KeyCode::Right | KeyCode::Char('l') => HomeAction::NextDifficulty,
        KeyCode::Char(c @ '1'..='3') => HomeAction::SelectDifficulty(c as usize - '1' as usize),
        KeyCode::Char('q') | KeyCode::Esc => HomeAction::Quit,
        _ => HomeAction::None,
    }
}

/// Actions available during a run. `Dismiss` only fires on the result overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAction {
    Jump,
    Restart,
    QuitToHome,
    Dismiss,
    None,
}

/// Map a key during a run. `finished` is whether the run has ended and the
/// result overlay is showing.
pub fn handle_run_key(key: KeyEvent, finished: bool) -> RunAction {
    if finished {
        return match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => RunAction::Restart,
            _ => RunAction::Dismiss,
        };
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => RunAction::Jump,
        KeyCode::Esc => RunAction::QuitToHome,
        _ => RunAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_home_start_keys() {
        assert_eq!(handle_home_key(key(KeyCode::Enter)), HomeAction::StartRun);
        assert_eq!(
            handle_home_key(key(KeyCode::Char(' '))),
            HomeAction::StartRun
        );
    }

    #[test]
    fn test_home_difficulty_keys() {
        assert_eq!(
            handle_home_key(key(KeyCode::Left)),
            HomeAction::PrevDifficulty
        );
        assert_eq!(
            handle_home_key(key(KeyCode::Right)),
            HomeAction::NextDifficulty
        );
        assert_eq!(
            handle_home_key(key(KeyCode::Char('2'))),
            HomeAction::SelectDifficulty(1)
        );
    }

    #[test]
    fn test_home_quit_keys() {
        assert_eq!(handle_home_key(key(KeyCode::Char('q'))), HomeAction::Quit);
        assert_eq!(handle_home_key(key(KeyCode::Esc)), HomeAction::Quit);
    }

    #[test]
    fn test_home_other_keys_ignored() {
        assert_eq!(handle_home_key(key(KeyCode::Char('x'))), HomeAction::None);
    }

    #[test]
    fn test_run_jump_keys() {
        assert_eq!(handle_run_key(key(KeyCode::Char(' ')), false), RunAction::Jump);
        assert_eq!(handle_run_key(key(KeyCode::Up), false), RunAction::Jump);
    }

    #[test]
    fn test_run_escape_quits_to_home() {
        assert_eq!(handle_run_key(key(KeyCode::Esc), false), RunAction::QuitToHome);
    }

    #[test]
    fn test_finished_run_restart_or_dismiss() {
        assert_eq!(
            handle_run_key(key(KeyCode::Char('r')), true),
            RunAction::Restart
        );
        assert_eq!(
            handle_run_key(key(KeyCode::Char('R')), true),
            RunAction::Restart
        );
        assert_eq!(
            handle_run_key(key(KeyCode::Char(' ')), true),
            RunAction::Dismiss
        );
        assert_eq!(handle_run_key(key(KeyCode::Esc), true), RunAction::Dismiss);
    }
}

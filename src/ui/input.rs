//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('a') | KeyCode::Tab => Some(Action::FocusForm),
            KeyCode::Char('e') => Some(Action::StartEdit),
            KeyCode::Char('d') => Some(Action::StartDelete),
            _ => None,
        },
        AppMode::Typing => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchField),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        AppMode::Confirm => match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::Submit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_action(app.mode(), key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_captures_command_letters() {
        assert_eq!(
            get_action(AppMode::Typing, KeyCode::Char('q')),
            Some(Action::Input('q'))
        );
        assert_eq!(
            get_action(AppMode::Normal, KeyCode::Char('q')),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_confirm_keys() {
        assert_eq!(
            get_action(AppMode::Confirm, KeyCode::Char('y')),
            Some(Action::Submit)
        );
        assert_eq!(
            get_action(AppMode::Confirm, KeyCode::Esc),
            Some(Action::Cancel)
        );
        assert_eq!(get_action(AppMode::Confirm, KeyCode::Char('d')), None);
    }
}

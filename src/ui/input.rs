use crate::ui::app::App;
use crate::ui::browser::{BrowserIntent, PaneFocus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Re-spawn the batch fetch.
    Retry,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) || is_ctrl_char(key, 'q') {
        app.request_quit();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            let intent = match app.browser().focus {
                PaneFocus::Countries => BrowserIntent::CursorUp,
                PaneFocus::Users => BrowserIntent::ScrollUp,
            };
            app.dispatch_browser(intent);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let intent = match app.browser().focus {
                PaneFocus::Countries => BrowserIntent::CursorDown,
                PaneFocus::Users => BrowserIntent::ScrollDown,
            };
            app.dispatch_browser(intent);
        }
        KeyCode::Enter => app.dispatch_browser(BrowserIntent::SelectCursor),
        KeyCode::Tab => app.dispatch_browser(BrowserIntent::FocusNext),
        KeyCode::Char('f') => {
            let filter = app.browser().filter.cycle();
            app.dispatch_browser(BrowserIntent::SetFilter { filter });
        }
        KeyCode::Char('r') if app.browser().is_failed() => {
            app.dispatch_browser(BrowserIntent::RetryRequested);
            return InputAction::Retry;
        }
        _ => {}
    }

    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

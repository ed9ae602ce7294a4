use ratatui::widgets::ListState;

use crate::ui::browser::{BrowserIntent, BrowserReducer, BrowserState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Browser state (MVI pattern).
    browser: BrowserState,
    /// Country list widget state (render resource, managed outside MVI).
    country_list: ListState,
    /// Tick counter driving the loading spinner.
    ticks: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            browser: BrowserState::default(),
            country_list: ListState::default(),
            ticks: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn browser(&self) -> &BrowserState {
        &self.browser
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    /// Dispatch an intent to the browser reducer.
    pub fn dispatch_browser(&mut self, intent: BrowserIntent) {
        dispatch_mvi!(self, browser, BrowserReducer, intent);
    }

    /// Browser state plus the country list widget state, the latter synced
    /// to the reducer's cursor. For the render pass.
    pub fn country_pane(&mut self) -> (&BrowserState, &mut ListState) {
        let selection = match self.browser.countries().len() {
            0 => None,
            len => Some(self.browser.cursor.min(len - 1)),
        };
        self.country_list.select(selection);
        (&self.browser, &mut self.country_list)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Gender, Location, Name, Registered, User};
    use chrono::{DateTime, Utc};

    fn user(country: &str) -> User {
        User {
            name: Name {
                first: "Test".to_string(),
                last: "User".to_string(),
            },
            gender: Gender::Female,
            location: Location {
                city: "City".to_string(),
                state: "State".to_string(),
                country: country.to_string(),
            },
            registered: Registered {
                date: DateTime::parse_from_rfc3339("2020-06-01T00:00:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
            },
        }
    }

    #[test]
    fn starts_loading_and_alive() {
        let app = App::new();
        assert!(!app.should_quit());
        assert!(app.browser().is_loading());
    }

    #[test]
    fn quit_latches() {
        let mut app = App::new();
        app.request_quit();
        assert!(app.should_quit());
    }

    #[test]
    fn ticks_advance_and_wrap() {
        let mut app = App::new();
        app.on_tick();
        app.on_tick();
        assert_eq!(app.ticks(), 2);

        app.ticks = usize::MAX;
        app.on_tick();
        assert_eq!(app.ticks(), 0);
    }

    #[test]
    fn country_list_selection_tracks_cursor() {
        let mut app = App::new();
        app.dispatch_browser(BrowserIntent::UsersLoaded {
            users: vec![user("Peru"), user("Ghana")],
        });
        app.dispatch_browser(BrowserIntent::CursorDown);

        let (browser, list) = app.country_pane();
        assert_eq!(browser.cursor, 1);
        assert_eq!(list.selected(), Some(1));
    }

    #[test]
    fn country_list_selection_empty_while_loading() {
        let mut app = App::new();
        let (_, list) = app.country_pane();
        assert_eq!(list.selected(), None);
    }
}

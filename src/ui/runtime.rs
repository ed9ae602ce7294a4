use crate::api::{ApiClient, Fetcher};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::browser::BrowserIntent;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

pub fn run(config: Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new();
    let events = EventHandler::new(tick_rate);

    let fetcher = Fetcher::new(ApiClient::new(&config.api), events.sender())?;
    fetcher.spawn_fetch();

    loop {
        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if handle_key(&mut app, key) == InputAction::Retry {
                    fetcher.spawn_fetch();
                }
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            // The terminal is re-measured on every draw
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::UsersLoaded(users)) => {
                app.dispatch_browser(BrowserIntent::UsersLoaded { users });
            }
            Ok(AppEvent::FetchFailed(message)) => {
                app.dispatch_browser(BrowserIntent::LoadFailed { message });
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

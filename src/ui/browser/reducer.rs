use crate::model::group_by_country;
use crate::ui::browser::intent::BrowserIntent;
use crate::ui::browser::state::{BrowserState, LoadPhase, PaneFocus};
use crate::ui::mvi::Reducer;

pub struct BrowserReducer;

impl Reducer for BrowserReducer {
    type State = BrowserState;
    type Intent = BrowserIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BrowserIntent::UsersLoaded { users } => BrowserState {
                load: LoadPhase::Loaded {
                    countries: group_by_country(users),
                },
                cursor: 0,
                selected: None,
                // The filter survives loads just as it survives selections.
                filter: state.filter,
                focus: PaneFocus::Countries,
                scroll: 0,
            },
            BrowserIntent::LoadFailed { message } => BrowserState {
                load: LoadPhase::Failed { message },
                cursor: 0,
                selected: None,
                filter: state.filter,
                focus: PaneFocus::Countries,
                scroll: 0,
            },
            BrowserIntent::RetryRequested => {
                if state.is_failed() {
                    BrowserState {
                        load: LoadPhase::Loading,
                        ..state
                    }
                } else {
                    state
                }
            }
            BrowserIntent::CursorUp => move_cursor(state, -1),
            BrowserIntent::CursorDown => move_cursor(state, 1),
            BrowserIntent::SelectCursor => {
                if state.countries().is_empty() {
                    return state;
                }
                BrowserState {
                    selected: Some(state.cursor),
                    scroll: 0,
                    ..state
                }
            }
            BrowserIntent::SetFilter { filter } => BrowserState {
                filter,
                scroll: 0,
                ..state
            },
            BrowserIntent::FocusNext => {
                let focus = match state.focus {
                    PaneFocus::Countries if state.selected.is_some() => PaneFocus::Users,
                    _ => PaneFocus::Countries,
                };
                BrowserState { focus, ..state }
            }
            BrowserIntent::ScrollUp => BrowserState {
                scroll: state.scroll.saturating_sub(1),
                ..state
            },
            BrowserIntent::ScrollDown => {
                let max = state.visible_users().len().saturating_sub(1);
                BrowserState {
                    scroll: (state.scroll + 1).min(max),
                    ..state
                }
            }
        }
    }
}

/// Wrap-around cursor movement over the country list.
fn move_cursor(state: BrowserState, direction: i32) -> BrowserState {
    let len = state.countries().len();
    if len == 0 {
        return state;
    }

    let current = state.cursor.min(len - 1);
    let next = if direction.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    };

    BrowserState {
        cursor: next,
        ..state
    }
}

use crate::model::User;
use crate::ui::browser::state::GenderFilter;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BrowserIntent {
    /// A batch arrived; group it and show the fresh country list.
    UsersLoaded { users: Vec<User> },
    /// The fetch failed; surface the message and wait for a retry.
    LoadFailed { message: String },
    /// User asked to retry. Only meaningful from the failed phase.
    RetryRequested,
    CursorUp,
    CursorDown,
    /// Select the country under the cursor.
    SelectCursor,
    SetFilter { filter: GenderFilter },
    /// Toggle focus between the country and user panes.
    FocusNext,
    ScrollUp,
    ScrollDown,
}

impl Intent for BrowserIntent {}

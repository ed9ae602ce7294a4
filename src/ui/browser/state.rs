use crate::model::{Country, Gender, User};
use crate::ui::mvi::UiState;

/// Progress of the batch fetch backing the browser.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Loaded {
        countries: Vec<Country>,
    },
    Failed {
        message: String,
    },
}

/// Which pane the cursor keys act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneFocus {
    #[default]
    Countries,
    Users,
}

/// Gender filter applied to the user pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderFilter {
    #[default]
    All,
    Male,
    Female,
}

impl GenderFilter {
    /// Successor in the cycling order All -> Male -> Female -> All.
    pub fn cycle(self) -> Self {
        match self {
            GenderFilter::All => GenderFilter::Male,
            GenderFilter::Male => GenderFilter::Female,
            GenderFilter::Female => GenderFilter::All,
        }
    }

    /// Whether a user passes this filter.
    pub fn admits(self, user: &User) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Male => user.gender == Gender::Male,
            GenderFilter::Female => user.gender == Gender::Female,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GenderFilter::All => "All",
            GenderFilter::Male => "Male",
            GenderFilter::Female => "Female",
        }
    }
}

/// Complete state of the country browser.
///
/// The visible user list is never stored; [`BrowserState::visible_users`]
/// derives it from the selection and the filter on demand.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowserState {
    pub load: LoadPhase,
    /// Cursor row in the country list.
    pub cursor: usize,
    /// Index of the country whose users fill the right pane, if any.
    pub selected: Option<usize>,
    pub filter: GenderFilter,
    pub focus: PaneFocus,
    /// Scroll offset of the user pane, in cards.
    pub scroll: usize,
}

impl UiState for BrowserState {}

impl BrowserState {
    /// Countries of the last successful fetch, or empty.
    pub fn countries(&self) -> &[Country] {
        match &self.load {
            LoadPhase::Loaded { countries } => countries,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadPhase::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.load, LoadPhase::Failed { .. })
    }

    pub fn failure_message(&self) -> Option<&str> {
        match &self.load {
            LoadPhase::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn selected_country(&self) -> Option<&Country> {
        self.selected.and_then(|index| self.countries().get(index))
    }

    /// Users shown in the right pane: the selected country's members that
    /// pass the filter, newest registration first. Empty while nothing is
    /// selected. The sort is stable, so equal timestamps keep member order.
    pub fn visible_users(&self) -> Vec<&User> {
        let Some(country) = self.selected_country() else {
            return Vec::new();
        };

        let mut users: Vec<&User> = country
            .users
            .iter()
            .filter(|user| self.filter.admits(user))
            .collect();
        users.sort_by(|a, b| b.registered.date.cmp(&a.registered.date));
        users
    }
}

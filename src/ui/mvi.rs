//! Model-View-Intent primitives for the UI layer.
//!
//! State flows one way: an [`Intent`] goes through a [`Reducer`], the reducer
//! produces the next [`UiState`], and the view renders from that state. All
//! transitions live in reducers; views never mutate state.

/// Marker trait for UI state objects.
///
/// A state is self-contained (everything the view needs), comparable
/// (`PartialEq` to detect changes), and rebuilt rather than mutated.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions and system events a reducer
/// consumes.
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`, no side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

//! Model-View-Intent primitives shared by every state slice.
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effects)
//!                 │            │
//!                 │            └──→ applied by the dispatcher
//!                 └──→ next State replaces the old one
//! ```
//!
//! Reducers never touch the outside world. Anything that has to leave the
//! returned state value (persisting a preference, for instance) is handed
//! back as an effect and carried out by whoever dispatched the intent.

/// Marker trait for actions dispatched to a slice.
pub trait Intent: Send + 'static {}

/// Marker trait for slice state.
///
/// States are replaced wholesale on every transition, so they must be
/// cheap to clone and comparable for change detection.
pub trait SliceState: Clone + PartialEq + Default + Send + 'static {}

/// Pure transition function for one slice.
pub trait Reducer {
    type State: SliceState;
    type Intent: Intent;
    /// Side effects requested by a transition.
    type Effect;

    /// Consume the current state and return the next one, plus any effects
    /// the caller must perform.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Vec<Self::Effect>);
}

//! River crossing puzzle model: world states and legal crossings

pub mod state;
pub mod transitions;

pub use state::{enumerate_valid_states, State};
pub use transitions::{can_connect, crossing, Cargo, Transition, TransitionTable};

//! Structural errors raised by builder operations.

use crate::core::{Label, StateId};
use thiserror::Error;

/// Errors that can occur when constructing or mutating an automaton.
///
/// Every check runs before the new value is assembled, so a returned error
/// means the receiver is unchanged and still usable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("State {0} does not exist")]
    UnknownState(StateId),

    #[error("Cannot remove the last state")]
    LastState,

    #[error("Symbol '{0}' is not in the alphabet")]
    UnknownSymbol(String),

    #[error("Transition must have at least one destination")]
    EmptyDestination,

    #[error("DFA transitions must have exactly one destination (got {count})")]
    MultipleDestinations { count: usize },

    #[error("DFA cannot have epsilon transitions")]
    EpsilonInDfa,

    #[error("Transition from state {from} on {label} already exists")]
    DuplicateTransition { from: StateId, label: Label },

    #[error("State {0} is already an accept state")]
    AlreadyAccepting(StateId),

    #[error("State {0} is not an accept state")]
    NotAccepting(StateId),
}

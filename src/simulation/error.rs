//! Simulation error types.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur while starting or stepping a simulation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("NFA simulation not yet supported")]
    NfaUnsupported,

    #[error("Automaton is not runnable: it must be a complete DFA with a valid start state")]
    NotRunnable,

    #[error("Simulation is already finished")]
    AlreadyFinished,

    #[error("Symbol '{0}' is not in the alphabet")]
    SymbolNotInAlphabet(char),

    /// Only reachable through a hand-built automaton whose transitions point
    /// outside its state set.
    #[error("No transition from state {state} on '{symbol}'")]
    NoTransition { state: StateId, symbol: char },
}

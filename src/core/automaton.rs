//! The automaton root value.

use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier of a state. Issued by [`Automaton::add_state`] and never reused.
pub type StateId = usize;

/// Which family of automaton a value belongs to. Fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AutomatonKind {
    Dfa,
    Nfa,
}

impl fmt::Display for AutomatonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dfa => write!(f, "DFA"),
            Self::Nfa => write!(f, "NFA"),
        }
    }
}

/// An immutable finite automaton.
///
/// Values are produced by [`Automaton::new`] and transformed by the builder
/// operations, each of which returns a new value and leaves the receiver
/// untouched. Fields are public so callers can inspect them freely; a value
/// assembled by hand (for example with struct update syntax) skips the
/// builder's checks, which is why [`crate::validation`] never assumes the
/// invariants below hold.
///
/// # Invariants (when built through the builder)
///
/// - `states` and `alphabet` are never empty
/// - `start_state` and every member of `accept_states` are in `states`
/// - every transition references known states and a known symbol
/// - at most one transition per `(from, label)` pair
/// - `next_state_id` is greater than every id ever issued
///
/// # Example
///
/// ```rust
/// use automaton_engine::core::{Automaton, AutomatonKind};
///
/// let dfa = Automaton::new(AutomatonKind::Dfa, ["0", "1"]).unwrap();
/// assert_eq!(dfa.start_state, 0);
/// assert_eq!(dfa.next_state_id, 1);
/// assert!(dfa.transitions.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton {
    pub kind: AutomatonKind,
    pub states: BTreeSet<StateId>,
    pub alphabet: BTreeSet<String>,
    /// Ordered as inserted
    pub transitions: Vec<Transition>,
    pub start_state: StateId,
    pub accept_states: BTreeSet<StateId>,
    pub next_state_id: StateId,
}

impl Automaton {
    pub fn is_dfa_kind(&self) -> bool {
        self.kind == AutomatonKind::Dfa
    }

    pub fn has_state(&self, id: StateId) -> bool {
        self.states.contains(&id)
    }

    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.alphabet.contains(symbol)
    }

    pub fn is_accepting(&self, id: StateId) -> bool {
        self.accept_states.contains(&id)
    }
}

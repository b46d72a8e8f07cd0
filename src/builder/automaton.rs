//! Invariant-preserving operations on [`Automaton`] values.
//!
//! Every operation is pure: it validates its arguments against the receiver
//! and, only if all checks pass, returns a new automaton. The receiver is
//! never modified.

use crate::builder::error::BuildError;
use crate::core::{Automaton, AutomatonKind, Label, StateId, Transition};
use std::collections::BTreeSet;

impl Automaton {
    /// Create an automaton with a single state `0`, which is also the start
    /// state.
    ///
    /// Duplicate symbols collapse into one. Fails with
    /// [`BuildError::EmptyAlphabet`] when no symbol is given.
    ///
    /// # Example
    ///
    /// ```rust
    /// use automaton_engine::builder::BuildError;
    /// use automaton_engine::core::{Automaton, AutomatonKind};
    ///
    /// let nfa = Automaton::new(AutomatonKind::Nfa, ["a", "b", "a"]).unwrap();
    /// assert_eq!(nfa.alphabet.len(), 2);
    ///
    /// let empty: [&str; 0] = [];
    /// assert_eq!(
    ///     Automaton::new(AutomatonKind::Dfa, empty),
    ///     Err(BuildError::EmptyAlphabet)
    /// );
    /// ```
    pub fn new<I, S>(kind: AutomatonKind, alphabet: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let alphabet: BTreeSet<String> = alphabet.into_iter().map(Into::into).collect();
        if alphabet.is_empty() {
            return Err(BuildError::EmptyAlphabet);
        }

        tracing::debug!(%kind, symbols = alphabet.len(), "created automaton");

        Ok(Self {
            kind,
            states: BTreeSet::from([0]),
            alphabet,
            transitions: Vec::new(),
            start_state: 0,
            accept_states: BTreeSet::new(),
            next_state_id: 1,
        })
    }

    /// Add a fresh state, returning the new automaton and the issued id.
    ///
    /// Ids come from `next_state_id` and are never reissued, even after the
    /// state is removed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use automaton_engine::core::{Automaton, AutomatonKind};
    ///
    /// let a = Automaton::new(AutomatonKind::Dfa, ["0"]).unwrap();
    /// let (a, q1) = a.add_state();
    /// let a = a.remove_state(q1).unwrap();
    /// let (_, q2) = a.add_state();
    /// assert_eq!((q1, q2), (1, 2));
    /// ```
    pub fn add_state(&self) -> (Self, StateId) {
        let id = self.next_state_id;
        let mut states = self.states.clone();
        states.insert(id);

        tracing::debug!(state = id, "added state");

        let automaton = Self {
            states,
            next_state_id: id + 1,
            ..self.clone()
        };
        (automaton, id)
    }

    /// Remove a state together with every transition touching it.
    ///
    /// If the removed state was the start state, the smallest remaining id
    /// becomes the new start state.
    pub fn remove_state(&self, id: StateId) -> Result<Self, BuildError> {
        if !self.has_state(id) {
            return Err(BuildError::UnknownState(id));
        }
        if self.states.len() == 1 {
            return Err(BuildError::LastState);
        }

        let mut states = self.states.clone();
        states.remove(&id);

        let mut accept_states = self.accept_states.clone();
        accept_states.remove(&id);

        let transitions: Vec<Transition> = self
            .transitions
            .iter()
            .filter(|t| t.from != id && !t.to.contains(&id))
            .cloned()
            .collect();

        let mut start_state = self.start_state;
        if start_state == id {
            if let Some(&smallest) = states.iter().next() {
                tracing::warn!(
                    removed = id,
                    start = smallest,
                    "start state removed, reassigning"
                );
                start_state = smallest;
            }
        }

        tracing::debug!(
            state = id,
            dropped_transitions = self.transitions.len() - transitions.len(),
            "removed state"
        );

        Ok(Self {
            states,
            accept_states,
            transitions,
            start_state,
            ..self.clone()
        })
    }

    /// Append a transition from `from` to every state in `to` on `label`.
    ///
    /// Rejects unknown states and symbols, and at most one transition may
    /// exist per `(from, label)` pair regardless of kind. A DFA additionally
    /// requires exactly one destination and forbids [`Label::Epsilon`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use automaton_engine::builder::BuildError;
    /// use automaton_engine::core::{Automaton, AutomatonKind, Label};
    ///
    /// let (a, q1) = Automaton::new(AutomatonKind::Dfa, ["0", "1"])
    ///     .unwrap()
    ///     .add_state();
    /// let a = a.add_transition(0, [q1], Label::symbol("0")).unwrap();
    /// assert!(a.transition(0, &Label::symbol("0")).is_some());
    ///
    /// assert_eq!(
    ///     a.add_transition(0, [0, q1], Label::symbol("1")),
    ///     Err(BuildError::MultipleDestinations { count: 2 })
    /// );
    /// ```
    pub fn add_transition<I>(&self, from: StateId, to: I, label: Label) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = StateId>,
    {
        let to: BTreeSet<StateId> = to.into_iter().collect();

        if !self.has_state(from) {
            return Err(BuildError::UnknownState(from));
        }
        if to.is_empty() {
            return Err(BuildError::EmptyDestination);
        }
        if let Some(&missing) = to.iter().find(|id| !self.has_state(**id)) {
            return Err(BuildError::UnknownState(missing));
        }
        if let Label::Symbol(symbol) = &label {
            if !self.has_symbol(symbol) {
                return Err(BuildError::UnknownSymbol(symbol.clone()));
            }
        }
        if self.kind == AutomatonKind::Dfa {
            if to.len() != 1 {
                return Err(BuildError::MultipleDestinations { count: to.len() });
            }
            if label.is_epsilon() {
                return Err(BuildError::EpsilonInDfa);
            }
        }
        if self.transition(from, &label).is_some() {
            return Err(BuildError::DuplicateTransition { from, label });
        }

        tracing::debug!(from, ?to, %label, "added transition");

        let mut transitions = self.transitions.clone();
        transitions.push(Transition { from, to, label });

        Ok(Self {
            transitions,
            ..self.clone()
        })
    }

    /// Drop the transition(s) leaving `from` on `label` whose destination set
    /// equals `to`. Returns an unchanged copy when nothing matches.
    pub fn remove_transition<I>(&self, from: StateId, to: I, label: &Label) -> Self
    where
        I: IntoIterator<Item = StateId>,
    {
        let to: BTreeSet<StateId> = to.into_iter().collect();
        let transitions: Vec<Transition> = self
            .transitions
            .iter()
            .filter(|t| !(t.matches(from, label) && t.to == to))
            .cloned()
            .collect();

        if transitions.len() != self.transitions.len() {
            tracing::debug!(from, ?to, %label, "removed transition");
        }

        Self {
            transitions,
            ..self.clone()
        }
    }

    pub fn set_start_state(&self, id: StateId) -> Result<Self, BuildError> {
        if !self.has_state(id) {
            return Err(BuildError::UnknownState(id));
        }

        tracing::debug!(state = id, "set start state");

        Ok(Self {
            start_state: id,
            ..self.clone()
        })
    }

    pub fn add_accept_state(&self, id: StateId) -> Result<Self, BuildError> {
        if !self.has_state(id) {
            return Err(BuildError::UnknownState(id));
        }
        if self.is_accepting(id) {
            return Err(BuildError::AlreadyAccepting(id));
        }

        let mut accept_states = self.accept_states.clone();
        accept_states.insert(id);

        tracing::debug!(state = id, "added accept state");

        Ok(Self {
            accept_states,
            ..self.clone()
        })
    }

    pub fn remove_accept_state(&self, id: StateId) -> Result<Self, BuildError> {
        if !self.has_state(id) {
            return Err(BuildError::UnknownState(id));
        }
        if !self.is_accepting(id) {
            return Err(BuildError::NotAccepting(id));
        }

        let mut accept_states = self.accept_states.clone();
        accept_states.remove(&id);

        tracing::debug!(state = id, "removed accept state");

        Ok(Self {
            accept_states,
            ..self.clone()
        })
    }

    /// All transitions leaving `id`, in insertion order.
    pub fn transitions_from(&self, id: StateId) -> Vec<&Transition> {
        self.transitions.iter().filter(|t| t.from == id).collect()
    }

    /// The first transition leaving `id` on `label`, if any.
    pub fn transition(&self, id: StateId, label: &Label) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.matches(id, label))
    }
}

//! Reachability analysis from the start state.

use super::predicates::has_start_state;
use crate::core::{Automaton, StateId};
use std::collections::{BTreeSet, HashMap, VecDeque};

/// States reachable from the start state, the start state included.
///
/// Breadth-first over the graph where every transition contributes one edge
/// per destination. Labels are ignored, so epsilon edges count too. Returns
/// an empty set when the start state is missing.
pub fn reachable_states(automaton: &Automaton) -> BTreeSet<StateId> {
    if !has_start_state(automaton) {
        return BTreeSet::new();
    }

    let mut edges: HashMap<StateId, Vec<StateId>> = HashMap::new();
    for transition in &automaton.transitions {
        edges
            .entry(transition.from)
            .or_default()
            .extend(transition.to.iter().copied());
    }

    let mut visited = BTreeSet::from([automaton.start_state]);
    let mut not_visited = VecDeque::from([automaton.start_state]);

    while let Some(state) = not_visited.pop_front() {
        for &target in edges.get(&state).into_iter().flatten() {
            if visited.insert(target) {
                not_visited.push_back(target);
            }
        }
    }

    tracing::trace!(
        start = automaton.start_state,
        reachable = visited.len(),
        "reachability traversal finished"
    );

    visited
}

/// States with no path from the start state.
///
/// Every state is orphaned when the start state itself is missing.
///
/// # Example
///
/// ```rust
/// use automaton_engine::core::{Automaton, AutomatonKind, Label};
/// use automaton_engine::validation::orphaned_states;
/// use std::collections::BTreeSet;
///
/// let (a, q1) = Automaton::new(AutomatonKind::Dfa, ["x"]).unwrap().add_state();
/// let (a, extra) = a.add_state();
/// let a = a
///     .add_transition(0, [q1], Label::symbol("x")).unwrap()
///     .add_transition(q1, [0], Label::symbol("x")).unwrap();
///
/// assert_eq!(orphaned_states(&a), BTreeSet::from([extra]));
/// ```
pub fn orphaned_states(automaton: &Automaton) -> BTreeSet<StateId> {
    let reachable = reachable_states(automaton);
    automaton
        .states
        .difference(&reachable)
        .copied()
        .collect()
}

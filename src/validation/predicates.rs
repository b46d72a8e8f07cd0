//! Structural predicates over automata.
//!
//! None of these assume the builder's invariants hold: duplicate
//! `(from, label)` pairs are recounted from the transition list every time.

use crate::core::{Automaton, AutomatonKind, Label, StateId};
use std::collections::HashMap;

/// Number of transitions per `(from, label)` pair.
fn transition_counts(automaton: &Automaton) -> HashMap<(StateId, &Label), usize> {
    let mut counts = HashMap::new();
    for transition in &automaton.transitions {
        *counts.entry((transition.from, &transition.label)).or_insert(0) += 1;
    }
    counts
}

/// Check that the automaton is a well-formed DFA.
///
/// Requires DFA kind, no epsilon labels, a single destination per
/// transition, and no two transitions sharing a `(from, label)` pair.
pub fn is_dfa(automaton: &Automaton) -> bool {
    if automaton.kind != AutomatonKind::Dfa {
        return false;
    }

    if automaton
        .transitions
        .iter()
        .any(|t| t.label.is_epsilon() || t.to.len() != 1)
    {
        return false;
    }

    let mut seen: HashMap<(StateId, &Label), usize> = HashMap::new();
    for transition in &automaton.transitions {
        let count = seen.entry((transition.from, &transition.label)).or_insert(0);
        *count += 1;
        if *count >= 2 {
            return false;
        }
    }

    true
}

/// Check that the automaton is a DFA with exactly one transition for every
/// `(state, symbol)` pair.
pub fn is_complete(automaton: &Automaton) -> bool {
    if !is_dfa(automaton) {
        return false;
    }

    let counts = transition_counts(automaton);
    automaton.states.iter().all(|&state| {
        automaton.alphabet.iter().all(|symbol| {
            let label = Label::symbol(symbol.as_str());
            counts.get(&(state, &label)).copied() == Some(1)
        })
    })
}

/// The `(state, symbol)` pairs with no outgoing transition, ordered by state
/// then symbol.
pub fn missing_transitions(automaton: &Automaton) -> Vec<(StateId, String)> {
    let counts = transition_counts(automaton);
    let mut missing = Vec::new();
    for &state in &automaton.states {
        for symbol in &automaton.alphabet {
            let label = Label::symbol(symbol.as_str());
            if !counts.contains_key(&(state, &label)) {
                missing.push((state, symbol.clone()));
            }
        }
    }
    missing
}

/// Whether `start_state` names an existing state.
pub fn has_start_state(automaton: &Automaton) -> bool {
    automaton.has_state(automaton.start_state)
}

pub fn has_accept_states(automaton: &Automaton) -> bool {
    !automaton.accept_states.is_empty()
}

/// The gate for simulation: a complete DFA with a valid start state.
pub fn is_runnable(automaton: &Automaton) -> bool {
    automaton.kind == AutomatonKind::Dfa
        && has_start_state(automaton)
        && is_dfa(automaton)
        && is_complete(automaton)
}

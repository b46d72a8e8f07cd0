//! Step-wise execution of a runnable DFA.

use crate::core::{Automaton, AutomatonKind, Label, StateId, Transition};
use crate::simulation::error::SimulationError;
use crate::simulation::trace::{render, SimulationStep};
use crate::validation::is_runnable;
use std::collections::BTreeSet;

/// An in-progress or finished run of an automaton over one input string.
///
/// A simulation is *ready* while input remains and *finished* once it is
/// consumed. Stepping never modifies the receiver; it returns the next
/// simulation value, so earlier values stay usable as snapshots.
///
/// A DFA run is always in exactly one state, so the current position is a
/// single id rather than a set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Simulation<'a> {
    automaton: &'a Automaton,
    current: StateId,
    remaining: String,
    input: String,
    steps: Vec<SimulationStep>,
}

impl<'a> Simulation<'a> {
    /// Start a simulation at the automaton's start state.
    ///
    /// Only runnable DFAs are accepted (see [`is_runnable`]).
    ///
    /// # Example
    ///
    /// ```rust
    /// use automaton_engine::core::{Automaton, AutomatonKind, Label};
    /// use automaton_engine::simulation::{Simulation, SimulationError};
    ///
    /// let a = Automaton::new(AutomatonKind::Dfa, ["a"]).unwrap();
    /// assert_eq!(Simulation::new(&a, "a"), Err(SimulationError::NotRunnable));
    ///
    /// let a = a.add_transition(0, [0], Label::symbol("a")).unwrap();
    /// let sim = Simulation::new(&a, "aa").unwrap().step().unwrap();
    /// assert_eq!(sim.remaining(), "a");
    /// assert!(!sim.is_finished());
    /// ```
    pub fn new(
        automaton: &'a Automaton,
        input: impl Into<String>,
    ) -> Result<Self, SimulationError> {
        if automaton.kind == AutomatonKind::Nfa {
            return Err(SimulationError::NfaUnsupported);
        }
        if !is_runnable(automaton) {
            return Err(SimulationError::NotRunnable);
        }

        let input = input.into();
        let start = automaton.start_state;

        tracing::debug!(start, input_len = input.len(), "starting simulation");

        Ok(Self {
            automaton,
            current: start,
            remaining: input.clone(),
            steps: vec![SimulationStep {
                state: start,
                symbol: None,
                remaining: input.clone(),
            }],
            input,
        })
    }

    /// Consume the next input symbol and return the advanced simulation.
    pub fn step(&self) -> Result<Self, SimulationError> {
        let Some(symbol) = self.remaining.chars().next() else {
            return Err(SimulationError::AlreadyFinished);
        };

        let text = symbol.to_string();
        if !self.automaton.has_symbol(&text) {
            return Err(SimulationError::SymbolNotInAlphabet(symbol));
        }
        let label = Label::Symbol(text);

        let state = self.current;
        let target = self
            .automaton
            .transition(state, &label)
            .and_then(Transition::single_target)
            .ok_or_else(|| {
                tracing::warn!(state, %symbol, "runnable automaton is missing a transition");
                SimulationError::NoTransition { state, symbol }
            })?;

        let remaining = self.remaining[symbol.len_utf8()..].to_string();

        tracing::debug!(
            from = state,
            to = target,
            %symbol,
            remaining = remaining.len(),
            "simulation step"
        );

        let mut steps = self.steps.clone();
        steps.push(SimulationStep {
            state: target,
            symbol: Some(symbol),
            remaining: remaining.clone(),
        });

        Ok(Self {
            automaton: self.automaton,
            current: target,
            remaining,
            input: self.input.clone(),
            steps,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Whether the run ended in an accept state. Always `false` while input
    /// remains.
    pub fn is_accepted(&self) -> bool {
        self.is_finished() && self.automaton.is_accepting(self.current)
    }

    /// Trace lines for every step so far, plus a result line once finished.
    pub fn execution_trace(&self) -> Vec<String> {
        let outcome = self.is_finished().then(|| self.is_accepted());
        render(&self.steps, outcome)
    }

    /// States visited so far, starting with the start state.
    pub fn path(&self) -> Vec<StateId> {
        self.steps.iter().map(|step| step.state).collect()
    }

    pub fn current_state(&self) -> StateId {
        self.current
    }

    /// The current position as a state set, the shape NFA runs would use.
    pub fn current_states(&self) -> BTreeSet<StateId> {
        BTreeSet::from([self.current])
    }

    pub fn automaton(&self) -> &'a Automaton {
        self.automaton
    }

    pub fn remaining(&self) -> &str {
        &self.remaining
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn steps(&self) -> &[SimulationStep] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts strings with an odd number of `1`s.
    fn odd_ones() -> Automaton {
        let (a, odd) = Automaton::new(AutomatonKind::Dfa, ["0", "1"])
            .unwrap()
            .add_state();
        a.add_transition(0, [0], Label::symbol("0"))
            .unwrap()
            .add_transition(0, [odd], Label::symbol("1"))
            .unwrap()
            .add_transition(odd, [odd], Label::symbol("0"))
            .unwrap()
            .add_transition(odd, [0], Label::symbol("1"))
            .unwrap()
            .add_accept_state(odd)
            .unwrap()
    }

    #[test]
    fn new_records_initial_step() {
        let a = odd_ones();
        let sim = Simulation::new(&a, "10").unwrap();

        assert_eq!(sim.current_states(), BTreeSet::from([0]));
        assert_eq!(sim.current_state(), 0);
        assert_eq!(sim.input(), "10");
        assert_eq!(
            sim.steps(),
            &[SimulationStep {
                state: 0,
                symbol: None,
                remaining: "10".to_string(),
            }]
        );
    }

    #[test]
    fn new_rejects_nfa_before_runnability() {
        let a = Automaton::new(AutomatonKind::Nfa, ["a"]).unwrap();
        assert_eq!(Simulation::new(&a, ""), Err(SimulationError::NfaUnsupported));
    }

    #[test]
    fn new_rejects_incomplete_dfa() {
        let a = odd_ones().remove_transition(1, [0], &Label::symbol("1"));
        assert_eq!(Simulation::new(&a, "1"), Err(SimulationError::NotRunnable));
    }

    #[test]
    fn step_is_pure_and_advances_one_symbol() {
        let a = odd_ones();
        let first = Simulation::new(&a, "10").unwrap();
        let second = first.step().unwrap();

        assert_eq!(first.remaining(), "10");
        assert_eq!(first.steps().len(), 1);

        assert_eq!(second.remaining(), "0");
        assert_eq!(second.current_state(), 1);
        assert_eq!(second.steps().len(), 2);
        assert_eq!(second.steps()[1].symbol, Some('1'));
    }

    #[test]
    fn stepping_past_the_end_fails() {
        let a = odd_ones();
        let sim = Simulation::new(&a, "1").unwrap().step().unwrap();

        assert!(sim.is_finished());
        assert_eq!(sim.step(), Err(SimulationError::AlreadyFinished));
    }

    #[test]
    fn foreign_symbol_is_rejected() {
        let a = odd_ones();
        let sim = Simulation::new(&a, "12").unwrap().step().unwrap();

        assert_eq!(sim.step(), Err(SimulationError::SymbolNotInAlphabet('2')));
    }

    #[test]
    fn dangling_target_surfaces_missing_transition() {
        let a = odd_ones();
        let mut transitions = a.transitions.clone();
        transitions[1] = Transition {
            from: 0,
            to: BTreeSet::from([9]),
            label: Label::symbol("1"),
        };
        let corrupted = Automaton { transitions, ..a };

        let sim = Simulation::new(&corrupted, "10").unwrap().step().unwrap();
        assert_eq!(sim.current_state(), 9);
        assert_eq!(
            sim.step(),
            Err(SimulationError::NoTransition {
                state: 9,
                symbol: '0',
            })
        );
    }

    #[test]
    fn acceptance_requires_finished_run() {
        let a = odd_ones();
        let sim = Simulation::new(&a, "10").unwrap().step().unwrap();

        assert_eq!(sim.current_state(), 1);
        assert!(!sim.is_accepted());

        let sim = sim.step().unwrap();
        assert!(sim.is_accepted());
        assert_eq!(sim.path(), vec![0, 1, 1]);
    }

    #[test]
    fn trace_only_has_result_when_finished() {
        let a = odd_ones();
        let sim = Simulation::new(&a, "11").unwrap().step().unwrap();

        assert_eq!(
            sim.execution_trace(),
            vec!["Start: 0 | Remaining: 11", "Read '1': 0 → 1 | Remaining: 1"]
        );

        let sim = sim.step().unwrap();
        assert_eq!(
            sim.execution_trace().last().map(String::as_str),
            Some("Result: REJECTED")
        );
    }
}

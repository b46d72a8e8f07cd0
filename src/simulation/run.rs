//! Whole-input helpers built on [`Simulation::step`].

use crate::core::{Automaton, StateId};
use crate::simulation::error::SimulationError;
use crate::simulation::machine::Simulation;

/// Step a fresh simulation until the input is consumed.
pub fn run_simulation<'a>(
    automaton: &'a Automaton,
    input: &str,
) -> Result<Simulation<'a>, SimulationError> {
    let mut simulation = Simulation::new(automaton, input)?;
    while !simulation.is_finished() {
        simulation = simulation.step()?;
    }
    Ok(simulation)
}

/// Whether the automaton accepts `input`.
///
/// # Example
///
/// ```rust
/// use automaton_engine::core::{Automaton, AutomatonKind, Label};
/// use automaton_engine::simulation::accepts;
///
/// let a = Automaton::new(AutomatonKind::Dfa, ["a"]).unwrap();
/// let a = a
///     .add_transition(0, [0], Label::symbol("a")).unwrap()
///     .add_accept_state(0).unwrap();
///
/// assert!(accepts(&a, "").unwrap());
/// assert!(accepts(&a, "aaa").unwrap());
/// assert!(accepts(&a, "b").is_err());
/// ```
pub fn accepts(automaton: &Automaton, input: &str) -> Result<bool, SimulationError> {
    Ok(run_simulation(automaton, input)?.is_accepted())
}

/// The state the automaton ends in after consuming `input`.
pub fn final_state(automaton: &Automaton, input: &str) -> Result<StateId, SimulationError> {
    Ok(run_simulation(automaton, input)?.current_state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AutomatonKind, Label};

    /// Counts `a`s modulo 3.
    fn mod_three() -> Automaton {
        let a = Automaton::new(AutomatonKind::Dfa, ["a"]).unwrap();
        let (a, q1) = a.add_state();
        let (a, q2) = a.add_state();
        a.add_transition(0, [q1], Label::symbol("a"))
            .unwrap()
            .add_transition(q1, [q2], Label::symbol("a"))
            .unwrap()
            .add_transition(q2, [0], Label::symbol("a"))
            .unwrap()
            .add_accept_state(0)
            .unwrap()
    }

    #[test]
    fn run_consumes_all_input() {
        let a = mod_three();
        let sim = run_simulation(&a, "aaaa").unwrap();

        assert!(sim.is_finished());
        assert_eq!(sim.path(), vec![0, 1, 2, 0, 1]);
        assert_eq!(sim.steps().len(), 5);
    }

    #[test]
    fn final_state_follows_the_walk() {
        let a = mod_three();
        assert_eq!(final_state(&a, ""), Ok(0));
        assert_eq!(final_state(&a, "aa"), Ok(2));
        assert_eq!(final_state(&a, "aaaaaaa"), Ok(1));
    }

    #[test]
    fn accepts_matches_accept_states() {
        let a = mod_three();
        assert_eq!(accepts(&a, ""), Ok(true));
        assert_eq!(accepts(&a, "a"), Ok(false));
        assert_eq!(accepts(&a, "aaa"), Ok(true));
    }

    #[test]
    fn errors_propagate_from_steps() {
        let a = mod_three();
        assert_eq!(
            accepts(&a, "aab"),
            Err(SimulationError::SymbolNotInAlphabet('b'))
        );

        let incomplete = a.remove_transition(2, [0], &Label::symbol("a"));
        assert_eq!(
            final_state(&incomplete, "a"),
            Err(SimulationError::NotRunnable)
        );
    }
}

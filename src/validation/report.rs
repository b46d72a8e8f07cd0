//! Aggregated validation findings.

use super::predicates::{
    has_accept_states, has_start_state, is_complete, is_dfa, missing_transitions,
};
use super::reachability::orphaned_states;
use crate::core::{Automaton, StateId};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Findings that make an automaton invalid.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No start state defined")]
    NoStartState,

    #[error("Not a valid DFA")]
    NotDfa,

    #[error("DFA is incomplete: missing transitions for {}", describe_missing(.missing))]
    Incomplete { missing: Vec<(StateId, String)> },
}

/// Advisory findings. They never affect validity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationWarning {
    #[error("No accept states defined")]
    NoAcceptStates,

    #[error("Unreachable states: {}", join_ids(.0))]
    UnreachableStates(Vec<StateId>),
}

fn describe_missing(missing: &[(StateId, String)]) -> String {
    missing
        .iter()
        .map(|(state, symbol)| format!("({state}, '{symbol}')"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_ids(ids: &[StateId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summary of everything the validator found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// `true` iff `errors` is empty
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

fn check(
    passed: bool,
    error: impl FnOnce() -> ValidationError,
) -> Validation<(), NonEmptyVec<ValidationError>> {
    if passed {
        Validation::success(())
    } else {
        Validation::fail(error())
    }
}

/// Run every check and collect all findings at once.
///
/// Completeness is only reported when the automaton is already a DFA.
///
/// # Example
///
/// ```rust
/// use automaton_engine::core::{Automaton, AutomatonKind};
/// use automaton_engine::validation::{validation_report, ValidationError};
///
/// let a = Automaton::new(AutomatonKind::Dfa, ["0"]).unwrap();
/// let broken = Automaton { start_state: 5, ..a };
///
/// let report = validation_report(&broken);
/// assert!(!report.valid);
/// assert!(report.errors.contains(&ValidationError::NoStartState));
/// ```
pub fn validation_report(automaton: &Automaton) -> ValidationReport {
    let deterministic = is_dfa(automaton);

    let checks = vec![
        check(has_start_state(automaton), || ValidationError::NoStartState),
        check(deterministic, || ValidationError::NotDfa),
        check(!deterministic || is_complete(automaton), || {
            ValidationError::Incomplete {
                missing: missing_transitions(automaton),
            }
        }),
    ];

    let errors: Vec<ValidationError> = match Validation::all_vec(checks) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    };

    let mut warnings = Vec::new();
    if !has_accept_states(automaton) {
        warnings.push(ValidationWarning::NoAcceptStates);
    }
    let orphaned = orphaned_states(automaton);
    if !orphaned.is_empty() {
        warnings.push(ValidationWarning::UnreachableStates(
            orphaned.into_iter().collect(),
        ));
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

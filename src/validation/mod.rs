//! Semantic validation of automata.
//!
//! Everything here is a total, side-effect free function. The checks are
//! safe to run on malformed or half-built values, which is the point: a
//! caller can ask whether an automaton is ready before acting on it.
//!
//! Findings are never raised as errors. Predicates return `bool`, and
//! [`validation_report`] collects every problem into a
//! [`ValidationReport`] instead of stopping at the first one.

mod predicates;
mod reachability;
mod report;

pub use predicates::{
    has_accept_states, has_start_state, is_complete, is_dfa, is_runnable, missing_transitions,
};
pub use reachability::{orphaned_states, reachable_states};
pub use report::{validation_report, ValidationError, ValidationReport, ValidationWarning};

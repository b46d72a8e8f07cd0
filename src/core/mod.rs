//! Core automaton data model.
//!
//! This module contains the pure shape of an automaton:
//! - `Automaton`, the immutable root value
//! - `Transition`, an edge whose destination is always a set of ids
//! - `Label`, either an alphabet symbol or the epsilon marker
//!
//! There is no behavior here. Construction and mutation live in
//! [`crate::builder`], inspection in [`crate::validation`] and execution in
//! [`crate::simulation`].

mod automaton;
mod transition;

pub use automaton::{Automaton, AutomatonKind, StateId};
pub use transition::{Label, Transition};

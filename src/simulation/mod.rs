//! Deterministic simulation of runnable automata.
//!
//! A [`Simulation`] has two states: *ready* while input remains and
//! *finished* once it is consumed. It moves only through
//! [`Simulation::step`], which returns a new value and records one
//! [`SimulationStep`] per consumed symbol.
//!
//! Only DFAs that pass [`crate::validation::is_runnable`] can be simulated.
//! NFA simulation is not supported yet.

mod error;
mod machine;
mod run;
mod trace;

pub use error::SimulationError;
pub use machine::Simulation;
pub use run::{accepts, final_state, run_simulation};
pub use trace::SimulationStep;

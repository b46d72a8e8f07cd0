//! Automaton Engine: a pure functional engine for finite automata
//!
//! Automata are immutable values. Every builder operation returns a new
//! automaton and leaves its input untouched, validation never fails, and a
//! simulation advances by producing new snapshots one symbol at a time.
//! Nothing in the engine performs I/O or keeps global state, so any number
//! of callers can hold and use different snapshots at once.
//!
//! # Core Concepts
//!
//! - **Automaton**: states, alphabet, transitions, start and accept states
//! - **Builder**: invariant-preserving constructors and mutators
//! - **Validation**: predicates, reachability and an aggregated report
//! - **Simulation**: deterministic, step-by-step execution with a trace
//! - **Exchange**: list-based records and versioned snapshots
//!
//! # Example
//!
//! ```rust
//! use automaton_engine::core::{Automaton, AutomatonKind, Label};
//! use automaton_engine::simulation::run_simulation;
//! use automaton_engine::validation::validation_report;
//!
//! // Binary strings containing at least one "1"
//! let a = Automaton::new(AutomatonKind::Dfa, ["0", "1"])?;
//! let (a, seen) = a.add_state();
//! let a = a
//!     .add_transition(0, [0], Label::symbol("0"))?
//!     .add_transition(0, [seen], Label::symbol("1"))?
//!     .add_transition(seen, [seen], Label::symbol("0"))?
//!     .add_transition(seen, [seen], Label::symbol("1"))?
//!     .add_accept_state(seen)?;
//!
//! assert!(validation_report(&a).valid);
//!
//! let run = run_simulation(&a, "001").unwrap();
//! assert!(run.is_accepted());
//! assert_eq!(run.execution_trace().last().unwrap(), "Result: ACCEPTED");
//! # Ok::<(), automaton_engine::builder::BuildError>(())
//! ```

pub mod builder;
pub mod core;
pub mod exchange;
pub mod simulation;
pub mod validation;

// Re-export commonly used types
pub use builder::BuildError;
pub use self::core::{Automaton, AutomatonKind, Label, StateId, Transition};
pub use simulation::{Simulation, SimulationError};
pub use validation::ValidationReport;

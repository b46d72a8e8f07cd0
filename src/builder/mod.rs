//! Builder API for automaton construction and mutation.
//!
//! The operations are implemented as methods on [`Automaton`] and all
//! follow the same contract: check everything first, then return a brand new
//! value. A failure is reported as a [`BuildError`] and the receiver stays
//! valid and unchanged.
//!
//! # Example
//!
//! ```rust
//! use automaton_engine::core::{Automaton, AutomatonKind, Label};
//!
//! let a = Automaton::new(AutomatonKind::Dfa, ["0", "1"])?;
//! let (a, q1) = a.add_state();
//! let a = a
//!     .add_transition(0, [q1], Label::symbol("0"))?
//!     .add_transition(0, [0], Label::symbol("1"))?
//!     .add_accept_state(q1)?;
//!
//! assert_eq!(a.transitions_from(0).len(), 2);
//! # Ok::<(), automaton_engine::builder::BuildError>(())
//! ```
//!
//! [`Automaton`]: crate::core::Automaton

mod automaton;
pub mod error;
pub mod macros;

pub use error::BuildError;

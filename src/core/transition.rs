//! Transition edges and their labels.

use super::automaton::StateId;
use std::collections::BTreeSet;
use std::fmt;

/// What a transition consumes: one alphabet symbol, or nothing at all.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    /// A member of the automaton's alphabet.
    Symbol(String),
    /// The epsilon marker. Only meaningful for NFA automata.
    Epsilon,
}

impl Label {
    /// Convenience constructor for [`Label::Symbol`].
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Self::Symbol(symbol.into())
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, Self::Epsilon)
    }

    /// The symbol text, or `None` for epsilon.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            Self::Epsilon => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(symbol) => write!(f, "'{symbol}'"),
            Self::Epsilon => write!(f, "ε"),
        }
    }
}

/// A directed edge of an automaton.
///
/// The destination is a set for both automaton kinds. A DFA restricts it to
/// exactly one member, but that rule is enforced by the builder and checked
/// by the validator rather than by this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Source state
    pub from: StateId,
    /// Destination states, never empty when built through the builder
    pub to: BTreeSet<StateId>,
    /// Consumed symbol or epsilon
    pub label: Label,
}

impl Transition {
    /// Whether this edge leaves `state` on `label`.
    pub fn matches(&self, state: StateId, label: &Label) -> bool {
        self.from == state && &self.label == label
    }

    /// The sole destination, if the destination set is a singleton.
    pub fn single_target(&self) -> Option<StateId> {
        match self.to.len() {
            1 => self.to.iter().next().copied(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_display_quotes_symbols() {
        assert_eq!(Label::symbol("a").to_string(), "'a'");
        assert_eq!(Label::Epsilon.to_string(), "ε");
    }

    #[test]
    fn single_target_requires_singleton() {
        let single = Transition {
            from: 0,
            to: BTreeSet::from([3]),
            label: Label::symbol("a"),
        };
        assert_eq!(single.single_target(), Some(3));

        let multi = Transition {
            to: BTreeSet::from([1, 2]),
            ..single.clone()
        };
        assert_eq!(multi.single_target(), None);
    }

    #[test]
    fn matches_checks_source_and_label() {
        let transition = Transition {
            from: 1,
            to: BTreeSet::from([2]),
            label: Label::symbol("x"),
        };

        assert!(transition.matches(1, &Label::symbol("x")));
        assert!(!transition.matches(2, &Label::symbol("x")));
        assert!(!transition.matches(1, &Label::Epsilon));
    }
}

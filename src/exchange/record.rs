//! Array-based representation of an automaton for storage and exchange.

use crate::core::{Automaton, AutomatonKind, Label, StateId};
use crate::exchange::error::ExchangeError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A transition as stored on disk. `symbol` is `None` for epsilon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from: StateId,
    pub to: Vec<StateId>,
    pub symbol: Option<String>,
}

/// Plain-list form of an [`Automaton`].
///
/// Lists produced from an automaton are sorted; lists read from elsewhere
/// may contain duplicates and are deduplicated on conversion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomatonRecord {
    pub kind: AutomatonKind,
    pub states: Vec<StateId>,
    pub alphabet: Vec<String>,
    pub transitions: Vec<TransitionRecord>,
    pub start_state: StateId,
    pub accept_states: Vec<StateId>,
    pub next_state_id: StateId,
}

impl From<&Automaton> for AutomatonRecord {
    fn from(automaton: &Automaton) -> Self {
        Self {
            kind: automaton.kind,
            states: automaton.states.iter().copied().collect(),
            alphabet: automaton.alphabet.iter().cloned().collect(),
            transitions: automaton
                .transitions
                .iter()
                .map(|t| TransitionRecord {
                    from: t.from,
                    to: t.to.iter().copied().collect(),
                    symbol: t.label.as_symbol().map(str::to_string),
                })
                .collect(),
            start_state: automaton.start_state,
            accept_states: automaton.accept_states.iter().copied().collect(),
            next_state_id: automaton.next_state_id,
        }
    }
}

impl TryFrom<AutomatonRecord> for Automaton {
    type Error = ExchangeError;

    /// Rebuild an automaton by replaying the record through the builder.
    ///
    /// The state set and id counter are taken as-is once the counter is known
    /// to exceed every listed id, so gaps left by removed states survive the
    /// round trip. The start state, transitions and accept states are then
    /// re-added with the usual checks.
    fn try_from(record: AutomatonRecord) -> Result<Self, Self::Error> {
        let states: BTreeSet<StateId> = record.states.iter().copied().collect();
        let Some(&highest) = states.iter().next_back() else {
            return Err(ExchangeError::ValidationFailed(
                "record has no states".to_string(),
            ));
        };
        if record.next_state_id <= highest {
            return Err(ExchangeError::ValidationFailed(format!(
                "nextStateId {} must exceed every state id (highest is {highest})",
                record.next_state_id
            )));
        }

        let mut automaton = Automaton {
            states,
            next_state_id: record.next_state_id,
            ..Automaton::new(record.kind, record.alphabet)?
        }
        .set_start_state(record.start_state)?;

        for transition in record.transitions {
            let label = transition.symbol.map_or(Label::Epsilon, Label::Symbol);
            automaton = automaton.add_transition(transition.from, transition.to, label)?;
        }

        let accept_states: BTreeSet<StateId> = record.accept_states.into_iter().collect();
        for id in accept_states {
            automaton = automaton.add_accept_state(id)?;
        }

        tracing::debug!(
            states = automaton.states.len(),
            transitions = automaton.transitions.len(),
            "restored automaton from record"
        );

        Ok(automaton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BuildError;

    fn sample() -> Automaton {
        let a = Automaton::new(AutomatonKind::Nfa, ["a", "b"]).unwrap();
        let (a, q1) = a.add_state();
        let (a, q2) = a.add_state();
        let (a, q3) = a.add_state();
        a.remove_state(q2)
            .unwrap()
            .add_transition(0, [q1, q3], Label::symbol("a"))
            .unwrap()
            .add_transition(q1, [q3], Label::Epsilon)
            .unwrap()
            .set_start_state(q1)
            .unwrap()
            .add_accept_state(q3)
            .unwrap()
    }

    fn record() -> AutomatonRecord {
        AutomatonRecord::from(&sample())
    }

    #[test]
    fn record_uses_sorted_lists_and_null_epsilon() {
        let record = record();

        assert_eq!(record.states, vec![0, 1, 3]);
        assert_eq!(record.alphabet, vec!["a", "b"]);
        assert_eq!(record.next_state_id, 4);
        assert_eq!(record.start_state, 1);
        assert_eq!(record.accept_states, vec![3]);
        assert_eq!(
            record.transitions[1],
            TransitionRecord {
                from: 1,
                to: vec![3],
                symbol: None,
            }
        );
    }

    #[test]
    fn record_json_uses_camel_case() {
        let json = serde_json::to_value(record()).unwrap();

        assert_eq!(json["kind"], "NFA");
        assert_eq!(json["startState"], 1);
        assert_eq!(json["nextStateId"], 4);
        assert_eq!(json["acceptStates"], serde_json::json!([3]));
        assert!(json["transitions"][1]["symbol"].is_null());
    }

    #[test]
    fn conversion_round_trips() {
        let original = sample();
        let restored = Automaton::try_from(AutomatonRecord::from(&original)).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn duplicates_in_lists_collapse() {
        let mut record = record();
        record.states.push(3);
        record.alphabet.push("a".to_string());
        record.accept_states.push(3);
        record.transitions[0].to.push(1);

        let restored = Automaton::try_from(record).unwrap();

        assert_eq!(restored, sample());
    }

    #[test]
    fn empty_state_list_is_rejected() {
        let mut record = record();
        record.states.clear();

        assert!(matches!(
            Automaton::try_from(record),
            Err(ExchangeError::ValidationFailed(_))
        ));
    }

    #[test]
    fn stale_counter_is_rejected() {
        let mut record = record();
        record.next_state_id = 3;

        assert!(matches!(
            Automaton::try_from(record),
            Err(ExchangeError::ValidationFailed(_))
        ));
    }

    #[test]
    fn sparse_ids_restore_without_filling_gaps() {
        let record = AutomatonRecord {
            kind: AutomatonKind::Dfa,
            states: vec![0, 1_000_000],
            alphabet: vec!["a".to_string()],
            transitions: vec![
                TransitionRecord {
                    from: 0,
                    to: vec![1_000_000],
                    symbol: Some("a".to_string()),
                },
                TransitionRecord {
                    from: 1_000_000,
                    to: vec![0],
                    symbol: Some("a".to_string()),
                },
            ],
            start_state: 1_000_000,
            accept_states: vec![0],
            next_state_id: 1_000_001,
        };

        let restored = Automaton::try_from(record.clone()).unwrap();

        assert_eq!(restored.states, BTreeSet::from([0, 1_000_000]));
        assert_eq!(restored.start_state, 1_000_000);
        assert_eq!(restored.next_state_id, 1_000_001);
        assert_eq!(AutomatonRecord::from(&restored), record);
        assert_eq!(restored.add_state().1, 1_000_001);
    }

    #[test]
    fn huge_counter_is_accepted_as_is() {
        let mut record = record();
        record.next_state_id = usize::MAX;

        let restored = Automaton::try_from(record).unwrap();

        assert_eq!(restored.next_state_id, usize::MAX);
        assert_eq!(restored.states, sample().states);
    }

    #[test]
    fn builder_checks_apply_to_records() {
        let mut record = record();
        record.start_state = 2;
        assert_eq!(
            Automaton::try_from(record),
            Err(ExchangeError::Build(BuildError::UnknownState(2)))
        );

        let mut record = self::record();
        record.kind = AutomatonKind::Dfa;
        assert_eq!(
            Automaton::try_from(record),
            Err(ExchangeError::Build(BuildError::MultipleDestinations {
                count: 2
            }))
        );

        let mut record = self::record();
        record.alphabet.clear();
        assert_eq!(
            Automaton::try_from(record),
            Err(ExchangeError::Build(BuildError::EmptyAlphabet))
        );
    }
}

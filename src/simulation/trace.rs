//! Step records and their human-readable rendering.

use crate::core::StateId;
use serde::{Deserialize, Serialize};

/// One entry of a simulation trace.
///
/// The first step of every simulation records the start state with no
/// consumed symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStep {
    /// State entered by this step
    pub state: StateId,
    /// Symbol consumed to get here, `None` for the initial step
    pub symbol: Option<char>,
    /// Input left after this step
    pub remaining: String,
}

fn show_remaining(remaining: &str) -> &str {
    if remaining.is_empty() {
        "ε"
    } else {
        remaining
    }
}

/// Render steps as trace lines, appending a result line when `outcome` is
/// known.
pub(crate) fn render(steps: &[SimulationStep], outcome: Option<bool>) -> Vec<String> {
    let mut lines = Vec::with_capacity(steps.len() + 1);
    let mut previous: Option<StateId> = None;

    for step in steps {
        let line = match (step.symbol, previous) {
            (Some(symbol), Some(from)) => format!(
                "Read '{symbol}': {from} → {} | Remaining: {}",
                step.state,
                show_remaining(&step.remaining)
            ),
            _ => format!(
                "Start: {} | Remaining: {}",
                step.state,
                show_remaining(&step.remaining)
            ),
        };
        lines.push(line);
        previous = Some(step.state);
    }

    if let Some(accepted) = outcome {
        let verdict = if accepted { "ACCEPTED" } else { "REJECTED" };
        lines.push(format!("Result: {verdict}"));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(state: StateId, symbol: Option<char>, remaining: &str) -> SimulationStep {
        SimulationStep {
            state,
            symbol,
            remaining: remaining.to_string(),
        }
    }

    #[test]
    fn renders_start_and_reads() {
        let steps = vec![
            step(0, None, "ab"),
            step(1, Some('a'), "b"),
            step(1, Some('b'), ""),
        ];

        let lines = render(&steps, Some(true));

        assert_eq!(
            lines,
            vec![
                "Start: 0 | Remaining: ab",
                "Read 'a': 0 → 1 | Remaining: b",
                "Read 'b': 1 → 1 | Remaining: ε",
                "Result: ACCEPTED",
            ]
        );
    }

    #[test]
    fn unknown_outcome_has_no_result_line() {
        let steps = vec![step(3, None, "x")];
        let lines = render(&steps, None);
        assert_eq!(lines, vec!["Start: 3 | Remaining: x"]);
    }

    #[test]
    fn rejected_outcome_is_rendered() {
        let steps = vec![step(0, None, "")];
        let lines = render(&steps, Some(false));
        assert_eq!(lines.last().map(String::as_str), Some("Result: REJECTED"));
    }

    #[test]
    fn step_serializes_to_json() {
        let json = serde_json::to_string(&step(2, Some('1'), "0")).unwrap();
        let back: SimulationStep = serde_json::from_str(&json).unwrap();
        assert_eq!(back, step(2, Some('1'), "0"));
    }
}

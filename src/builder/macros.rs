//! Macros for ergonomic automaton construction.

/// Build a DFA from a transition table.
///
/// States are numbered `0..states`. Every row goes through the builder, so
/// the expansion evaluates to `Result<Automaton, BuildError>` and reports the
/// first structural problem it meets.
///
/// # Example
///
/// ```
/// use automaton_engine::dfa;
/// use automaton_engine::simulation::accepts;
///
/// // Binary strings ending in "1"
/// let ends_in_one = dfa! {
///     alphabet: ["0", "1"],
///     states: 2,
///     start: 0,
///     accept: [1],
///     transitions: [
///         (0, "0") => 0,
///         (0, "1") => 1,
///         (1, "0") => 0,
///         (1, "1") => 1,
///     ],
/// }
/// .unwrap();
///
/// assert!(accepts(&ends_in_one, "0101").unwrap());
/// assert!(!accepts(&ends_in_one, "10").unwrap());
/// ```
#[macro_export]
macro_rules! dfa {
    (
        alphabet: [$($symbol:expr),+ $(,)?],
        states: $count:expr,
        start: $start:expr,
        accept: [$($accept:expr),* $(,)?],
        transitions: [
            $( ($from:expr, $label:expr) => $to:expr ),* $(,)?
        ] $(,)?
    ) => {
        (|| -> ::std::result::Result<$crate::core::Automaton, $crate::builder::BuildError> {
            let mut automaton = $crate::core::Automaton::new(
                $crate::core::AutomatonKind::Dfa,
                [$($symbol),+],
            )?;
            for _ in 1..$count {
                automaton = automaton.add_state().0;
            }
            automaton = automaton.set_start_state($start)?;
            $(
                automaton = automaton.add_accept_state($accept)?;
            )*
            $(
                automaton = automaton.add_transition(
                    $from,
                    [$to],
                    $crate::core::Label::symbol($label),
                )?;
            )*
            Ok(automaton)
        })()
    };
}

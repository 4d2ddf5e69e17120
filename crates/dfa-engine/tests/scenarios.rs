//! End-to-end acceptance scenarios and run/trace properties.

use dfa_core::{Dfa, State, Symbol, Transition, ViolationKind};
use dfa_engine::{ExecutionError, StepKind, TraceCursor, decide, trace};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const EVEN_ONES: [(&str, &str, &str); 4] = [
    ("q0", "0", "q0"),
    ("q0", "1", "q1"),
    ("q1", "0", "q1"),
    ("q1", "1", "q0"),
];

/// Accepts binary strings with an even number of 1s.
fn even_ones() -> Dfa {
    Dfa::new(["q0", "q1"], ["0", "1"], EVEN_ONES, "q0", ["q0"]).unwrap()
}

/// `even_ones` without the (q1, 1) transition.
fn even_ones_incomplete() -> Dfa {
    let transitions = EVEN_ONES.iter().filter(|(s, a, _)| !(*s == "q1" && *a == "1")).copied();
    Dfa::new(["q0", "q1"], ["0", "1"], transitions, "q0", ["q0"]).unwrap()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_acceptance() {
    let dfa = even_ones();
    assert_eq!(decide(&dfa, "11"), Ok(true));
    assert_eq!(decide(&dfa, "1"), Ok(false));
    assert_eq!(decide(&dfa, ""), Ok(true));
}

#[test]
fn scenario_invalid_symbol() {
    let dfa = even_ones();
    let err = decide(&dfa, "2").unwrap_err();
    assert_eq!(
        err,
        ExecutionError::InvalidSymbol {
            symbol: Symbol::new("2"),
            position: 0
        }
    );
}

#[test]
fn scenario_incomplete_dfa() {
    let dfa = even_ones_incomplete();
    assert_eq!(dfa.missing_transitions(), vec![(State::new("q1"), Symbol::new("1"))]);

    let err = decide(&dfa, "11").unwrap_err();
    assert_eq!(
        err,
        ExecutionError::UndefinedTransition {
            state: State::new("q1"),
            symbol: Symbol::new("1"),
            position: 1
        }
    );
    // trace fails identically instead of returning a truncated sequence
    assert_eq!(trace(&dfa, "11").unwrap_err(), err);
    // inputs that avoid the gap still run
    assert_eq!(decide(&dfa, "100"), Ok(false));
}

#[test]
fn scenario_construction_failure() {
    let err = Dfa::new(["q0", "q1"], ["0", "1"], EVEN_ONES, "q0", ["q5"]).unwrap_err();
    assert_eq!(
        err.kinds().into_iter().collect::<Vec<_>>(),
        vec![ViolationKind::FinalStateNotInStates]
    );
}

#[test]
fn scenario_empty_input_trace() {
    let dfa = even_ones();
    let t = trace(&dfa, "").unwrap();
    assert_eq!(t.len(), 2);
    assert_eq!(t[0].kind(), StepKind::Initial);
    assert_eq!(t[1].kind(), StepKind::Terminal);
    assert_eq!(t[1].step_number, 1);
    assert_eq!(t[1].accepted, Some(true));
}

#[test]
fn long_input_trace() {
    let dfa = Dfa::new(["loop"], ["a"], [("loop", "a", "loop")], "loop", ["loop"]).unwrap();
    let n = 100_000;
    let input = "a".repeat(n);
    let t = trace(&dfa, &input).unwrap();
    assert_eq!(t.len(), n + 2);
    assert_eq!(t[n / 2].processed().len(), n / 2);
    assert_eq!(t[n / 2].remaining().len(), n - n / 2);
    assert_eq!(t.terminal().step_number, n + 1);
    assert!(t.accepted());
}

#[test]
fn rejection_is_not_failure() {
    let dfa = even_ones();
    assert_eq!(decide(&dfa, "10"), Ok(false));
    assert!(decide(&dfa, "1a").is_err());
}

#[test]
fn debugger_session() {
    let dfa = even_ones();
    let t = trace(&dfa, "0110").unwrap();
    let mut cursor = TraceCursor::new(&t);
    let mut log = vec![cursor.current().log_line()];
    while let Some(step) = cursor.next() {
        log.push(step.log_line());
    }
    assert_eq!(log.len(), 6);
    assert_eq!(log[2], "Step 2: Read '1' | q0 -> q1");
    assert_eq!(log[5], "ACCEPTED in q0");

    // Stepping back re-renders the same record.
    let before = cursor.current().to_string();
    cursor.prev();
    cursor.next();
    assert_eq!(cursor.current().to_string(), before);
}

#[test]
fn shared_across_threads() {
    let dfa = even_ones();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let dfa = &dfa;
                scope.spawn(move || decide(dfa, &"1".repeat(i)))
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![Ok(true), Ok(false), Ok(true), Ok(false)]);
    });
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

/// A random automaton over states `s0..sN` and symbols `a..`, with each
/// transition present or absent at random, plus a random input over the
/// alphabet (occasionally with a foreign symbol).
fn automaton_and_input() -> impl Strategy<Value = (Dfa, String)> {
    (1usize..5, 1usize..4).prop_flat_map(|(n_states, n_symbols)| {
        let cells = n_states * n_symbols;
        (
            proptest::collection::vec(proptest::option::of(0..n_states), cells),
            0..n_states,
            proptest::collection::vec(any::<bool>(), n_states),
            proptest::collection::vec(0..=n_symbols, 0..12),
        )
            .prop_map(move |(targets, start, finals, input)| {
                let state = |i: usize| format!("s{i}");
                let symbol = |i: usize| char::from(b'a' + i as u8);
                let transitions: Vec<Transition> = targets
                    .iter()
                    .enumerate()
                    .filter_map(|(cell, target)| {
                        target.map(|t| {
                            Transition::new(
                                state(cell / n_symbols),
                                symbol(cell % n_symbols),
                                state(t),
                            )
                        })
                    })
                    .collect();
                let dfa = Dfa::new(
                    (0..n_states).map(state),
                    (0..n_symbols).map(symbol),
                    transitions,
                    state(start),
                    (0..n_states).filter(|i| finals[*i]).map(state),
                )
                .unwrap();
                // index n_symbols maps to 'z', which is never in the alphabet
                let input: String = input
                    .into_iter()
                    .map(|i| if i == n_symbols { 'z' } else { symbol(i) })
                    .collect();
                (dfa, input)
            })
    })
}

proptest! {
    #[test]
    fn decide_agrees_with_trace((dfa, input) in automaton_and_input()) {
        match (decide(&dfa, &input), trace(&dfa, &input)) {
            (Ok(accepted), Ok(t)) => {
                prop_assert_eq!(t.terminal().accepted, Some(accepted));
                prop_assert_eq!(t.len(), input.chars().count() + 2);
                prop_assert!(t.initial().symbol.is_none());
                prop_assert!(t.terminal().is_terminal);
                prop_assert_eq!(t.iter().filter(|s| s.is_terminal).count(), 1);
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (d, t) => prop_assert!(false, "decide {:?} disagrees with trace {:?}", d, t.map(|t| t.len())),
        }
    }

    #[test]
    fn decide_is_deterministic((dfa, input) in automaton_and_input()) {
        prop_assert_eq!(decide(&dfa, &input), decide(&dfa, &input));
        prop_assert_eq!(trace(&dfa, &input), trace(&dfa, &input));
    }
}

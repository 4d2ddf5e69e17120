// Advisory completeness inspection.
//
// A partial transition function never blocks construction. These helpers let
// a caller warn about the gaps before exporting or running an automaton.

use crate::label::{State, Symbol};
use crate::model::Dfa;

/// Every `(state, symbol)` pair without a defined transition, ordered by state
/// then symbol.
pub fn missing_transitions(dfa: &Dfa) -> Vec<(State, Symbol)> {
    let mut missing = Vec::new();
    for state in dfa.states() {
        for symbol in dfa.alphabet() {
            if dfa.target(state.as_str(), symbol.as_str()).is_none() {
                missing.push((state.clone(), symbol.clone()));
            }
        }
    }
    missing
}

/// Whether δ is defined for every `(state, symbol)` pair.
pub fn is_complete(dfa: &Dfa) -> bool {
    dfa.transition_count() == dfa.states().len() * dfa.alphabet().len()
}

impl Dfa {
    /// See [`missing_transitions`].
    pub fn missing_transitions(&self) -> Vec<(State, Symbol)> {
        missing_transitions(self)
    }

    /// See [`is_complete`].
    pub fn is_complete(&self) -> bool {
        is_complete(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_automaton_has_no_gaps() {
        let dfa = Dfa::new(
            ["q0", "q1"],
            ["0", "1"],
            [
                ("q0", "0", "q0"),
                ("q0", "1", "q1"),
                ("q1", "0", "q1"),
                ("q1", "1", "q0"),
            ],
            "q0",
            ["q0"],
        )
        .unwrap();
        assert!(dfa.is_complete());
        assert!(missing_transitions(&dfa).is_empty());
    }

    #[test]
    fn gaps_are_listed_in_order() {
        let dfa = Dfa::new(
            ["q1", "q0", "q2"],
            ["b", "a"],
            [("q0", "a", "q1"), ("q1", "b", "q2")],
            "q0",
            ["q2"],
        )
        .unwrap();
        assert!(!is_complete(&dfa));
        let missing: Vec<(String, String)> = dfa
            .missing_transitions()
            .into_iter()
            .map(|(s, a)| (s.into_string(), a.into_string()))
            .collect();
        assert_eq!(
            missing,
            vec![
                ("q0".to_string(), "b".to_string()),
                ("q1".to_string(), "a".to_string()),
                ("q2".to_string(), "a".to_string()),
                ("q2".to_string(), "b".to_string()),
            ]
        );
    }
}

// Typed interchange document.

use serde::{Deserialize, Serialize};

use dfa_core::{ConstructionError, Dfa, State, Symbol, Transition};

/// One `{from, symbol, to}` record of the transition list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from: State,
    pub symbol: Symbol,
    pub to: State,
}

/// The interchange document, field for field.
///
/// Obtained from a [`Dfa`] it is canonical: every list is sorted, and the
/// transitions are ordered by source state then symbol.
///
/// [`decode`](crate::decode) walks the raw JSON instead of deserializing into
/// this type, so that every bad field gets its own diagnostic. Deserializing
/// directly stops at the first problem; it suits callers that only need a
/// yes/no answer or read the document from a non-JSON serde format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfaDocument {
    pub states: Vec<State>,
    pub alphabet: Vec<Symbol>,
    pub transitions: Vec<TransitionRecord>,
    pub start_state: State,
    pub final_states: Vec<State>,
}

impl From<&Dfa> for DfaDocument {
    fn from(dfa: &Dfa) -> Self {
        Self {
            states: dfa.states().iter().cloned().collect(),
            alphabet: dfa.alphabet().iter().cloned().collect(),
            transitions: dfa
                .transitions()
                .map(|(from, symbol, to)| TransitionRecord {
                    from: from.clone(),
                    symbol: symbol.clone(),
                    to: to.clone(),
                })
                .collect(),
            start_state: dfa.start_state().clone(),
            final_states: dfa.final_states().iter().cloned().collect(),
        }
    }
}

impl From<TransitionRecord> for Transition {
    fn from(record: TransitionRecord) -> Self {
        Transition {
            from: record.from,
            symbol: record.symbol,
            to: record.to,
        }
    }
}

impl DfaDocument {
    /// Validate the document with the same checks as [`Dfa::new`].
    pub fn into_dfa(self) -> Result<Dfa, ConstructionError> {
        Dfa::new(
            self.states,
            self.alphabet,
            self.transitions,
            self.start_state,
            self.final_states,
        )
    }
}

impl TryFrom<DfaDocument> for Dfa {
    type Error = ConstructionError;

    fn try_from(document: DfaDocument) -> Result<Self, Self::Error> {
        document.into_dfa()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_from_dfa_is_sorted() {
        let dfa = Dfa::new(
            ["b", "a"],
            ["1", "0"],
            [("b", "0", "a"), ("a", "1", "b")],
            "a",
            ["b"],
        )
        .unwrap();
        let doc = DfaDocument::from(&dfa);
        assert_eq!(doc.states, vec![State::new("a"), State::new("b")]);
        assert_eq!(doc.alphabet, vec![Symbol::new("0"), Symbol::new("1")]);
        assert_eq!(doc.transitions[0].from, "a");
        assert_eq!(doc.transitions[1].from, "b");
        assert_eq!(Dfa::try_from(doc).unwrap(), dfa);
    }

    #[test]
    fn deserialized_document_builds_the_same_automaton() {
        let text = r#"{
            "states": ["q0", "q1"],
            "alphabet": ["a"],
            "transitions": [{"from": "q0", "symbol": "a", "to": "q1"}],
            "start_state": "q0",
            "final_states": ["q1"]
        }"#;
        let doc: DfaDocument = serde_json::from_str(text).unwrap();
        assert_eq!(doc.transitions[0].to, "q1");
        assert_eq!(Dfa::try_from(doc).unwrap(), crate::decode(text).unwrap());

        let missing_field = serde_json::from_str::<DfaDocument>(r#"{"states": ["q0"]}"#);
        assert!(missing_field.is_err());
    }

    #[test]
    fn invalid_document_reports_violations() {
        let doc = DfaDocument {
            states: vec![State::new("q0")],
            alphabet: vec![],
            transitions: vec![],
            start_state: State::new("q1"),
            final_states: vec![],
        };
        let err = doc.into_dfa().unwrap_err();
        assert_eq!(err.violations().len(), 2);
    }
}

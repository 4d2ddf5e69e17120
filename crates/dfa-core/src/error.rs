// Construction violations.
//
// Validation never stops at the first problem: every violated invariant is
// recorded so a caller can show the complete diagnostic at once.

use std::collections::BTreeSet;

use crate::label::{State, Symbol};

/// Category of a [`Violation`], without the offending labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViolationKind {
    MissingStartState,
    FinalStateNotInStates,
    TransitionStateUnknown,
    TransitionSymbolUnknown,
    TransitionTargetUnknown,
    EmptyStates,
    EmptyAlphabet,
    ConflictingTransition,
    MalformedDocument,
}

/// One structural problem found while building an automaton.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// The start state is not a member of the state set (or was never set).
    #[error("start state {} is not among the states", describe_start(.state))]
    MissingStartState { state: Option<State> },

    #[error("final state `{state}` is not among the states")]
    FinalStateNotInStates { state: State },

    #[error("transition ({from}, {symbol}) leaves unknown state `{from}`")]
    TransitionStateUnknown { from: State, symbol: Symbol },

    #[error("transition ({from}, {symbol}) reads symbol `{symbol}` outside the alphabet")]
    TransitionSymbolUnknown { from: State, symbol: Symbol },

    #[error("transition ({from}, {symbol}) targets unknown state `{to}`")]
    TransitionTargetUnknown { from: State, symbol: Symbol, to: State },

    #[error("the automaton has no states")]
    EmptyStates,

    #[error("the alphabet is empty")]
    EmptyAlphabet,

    /// Two records share a `(state, symbol)` key but disagree on the target.
    #[error("transition ({from}, {symbol}) goes to both `{first}` and `{second}`")]
    ConflictingTransition {
        from: State,
        symbol: Symbol,
        first: State,
        second: State,
    },

    /// The interchange document does not have the expected shape.
    #[error("malformed document at {path}: {detail}")]
    MalformedDocument { path: String, detail: String },
}

fn describe_start(state: &Option<State>) -> String {
    match state {
        Some(state) => format!("`{state}`"),
        None => "(unset)".to_string(),
    }
}

impl Violation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::MissingStartState { .. } => ViolationKind::MissingStartState,
            Violation::FinalStateNotInStates { .. } => ViolationKind::FinalStateNotInStates,
            Violation::TransitionStateUnknown { .. } => ViolationKind::TransitionStateUnknown,
            Violation::TransitionSymbolUnknown { .. } => ViolationKind::TransitionSymbolUnknown,
            Violation::TransitionTargetUnknown { .. } => ViolationKind::TransitionTargetUnknown,
            Violation::EmptyStates => ViolationKind::EmptyStates,
            Violation::EmptyAlphabet => ViolationKind::EmptyAlphabet,
            Violation::ConflictingTransition { .. } => ViolationKind::ConflictingTransition,
            Violation::MalformedDocument { .. } => ViolationKind::MalformedDocument,
        }
    }

    pub fn malformed(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Violation::MalformedDocument {
            path: path.into(),
            detail: detail.into(),
        }
    }
}

/// Error returned when an automaton cannot be built.
///
/// Always holds at least one [`Violation`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid automaton: {}", join_violations(.violations))]
pub struct ConstructionError {
    violations: Vec<Violation>,
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ConstructionError {
    pub fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// The distinct violation kinds present, in declaration order.
    pub fn kinds(&self) -> BTreeSet<ViolationKind> {
        self.violations.iter().map(Violation::kind).collect()
    }

    pub fn has(&self, kind: ViolationKind) -> bool {
        self.violations.iter().any(|v| v.kind() == kind)
    }
}

impl From<Violation> for ConstructionError {
    fn from(violation: Violation) -> Self {
        Self::new(vec![violation])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_violation() {
        let err = ConstructionError::new(vec![
            Violation::EmptyAlphabet,
            Violation::FinalStateNotInStates {
                state: State::new("q5"),
            },
        ]);
        let text = err.to_string();
        assert!(text.contains("the alphabet is empty"));
        assert!(text.contains("`q5`"));
    }

    #[test]
    fn kinds_are_deduplicated() {
        let err = ConstructionError::new(vec![
            Violation::FinalStateNotInStates {
                state: State::new("a"),
            },
            Violation::FinalStateNotInStates {
                state: State::new("b"),
            },
        ]);
        assert_eq!(err.kinds().len(), 1);
        assert!(err.has(ViolationKind::FinalStateNotInStates));
        assert!(!err.has(ViolationKind::EmptyStates));
    }

    #[test]
    fn unset_start_state_message() {
        let v = Violation::MissingStartState { state: None };
        assert_eq!(v.to_string(), "start state (unset) is not among the states");
    }
}

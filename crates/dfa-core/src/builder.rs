// Incremental editing of an automaton.
//
// `Dfa` has no setters. An editor keeps a `DfaBuilder`, applies the user's
// edits to it and calls `build` whenever it needs a validated value. Removing
// a state or symbol cascades to the transitions that mention it, so the
// builder never holds dangling references.

use std::collections::BTreeMap;

use crate::error::{ConstructionError, Violation};
use crate::label::{State, Symbol};
use crate::model::{Dfa, Transition};

/// Error returned by a rejected edit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuilderError {
    #[error("label must not be empty")]
    EmptyLabel,
    #[error("state `{0}` already exists")]
    DuplicateState(State),
    #[error("symbol `{0}` already exists")]
    DuplicateSymbol(Symbol),
    #[error("state `{0}` is already a final state")]
    DuplicateFinalState(State),
    #[error("unknown state `{0}`")]
    UnknownState(State),
    #[error("unknown symbol `{0}`")]
    UnknownSymbol(Symbol),
}

/// Mutable staging area for the five components of a [`Dfa`].
///
/// States, symbols and finals keep their insertion order, the way an editor
/// lists them. Every label argument is trimmed of surrounding whitespace. Transitions are keyed by `(from, symbol)`, so setting an
/// existing key replaces its target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DfaBuilder {
    states: Vec<State>,
    alphabet: Vec<Symbol>,
    transitions: BTreeMap<(State, Symbol), State>,
    start_state: Option<State>,
    final_states: Vec<State>,
}

fn label(raw: &str) -> Result<&str, BuilderError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(BuilderError::EmptyLabel)
    } else {
        Ok(trimmed)
    }
}

impl DfaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn alphabet(&self) -> &[Symbol] {
        &self.alphabet
    }

    pub fn start_state(&self) -> Option<&State> {
        self.start_state.as_ref()
    }

    pub fn final_states(&self) -> &[State] {
        &self.final_states
    }

    /// Staged transitions ordered by `(from, symbol)`.
    pub fn transitions(&self) -> impl Iterator<Item = (&State, &Symbol, &State)> + '_ {
        self.transitions
            .iter()
            .map(|((from, symbol), to)| (from, symbol, to))
    }

    /// Add a state. Surrounding whitespace is trimmed.
    pub fn add_state(&mut self, name: &str) -> Result<&mut Self, BuilderError> {
        let name = label(name)?;
        if self.states.iter().any(|s| s == name) {
            return Err(BuilderError::DuplicateState(State::new(name)));
        }
        self.states.push(State::new(name));
        Ok(self)
    }

    /// Remove a state together with every transition from or to it. Clears the
    /// start state and the final mark if they referred to it.
    ///
    /// Returns `false` if the state did not exist.
    pub fn remove_state(&mut self, name: &str) -> bool {
        let name = name.trim();
        let Some(index) = self.states.iter().position(|s| s == name) else {
            return false;
        };
        self.states.remove(index);
        self.transitions
            .retain(|(from, _), to| from.as_str() != name && to.as_str() != name);
        if self.start_state.as_ref().is_some_and(|s| s == name) {
            self.start_state = None;
        }
        self.final_states.retain(|s| s != name);
        true
    }

    /// Add a symbol. Surrounding whitespace is trimmed.
    pub fn add_symbol(&mut self, symbol: &str) -> Result<&mut Self, BuilderError> {
        let symbol = label(symbol)?;
        if self.alphabet.iter().any(|s| s == symbol) {
            return Err(BuilderError::DuplicateSymbol(Symbol::new(symbol)));
        }
        self.alphabet.push(Symbol::new(symbol));
        Ok(self)
    }

    /// Remove a symbol together with every transition reading it.
    pub fn remove_symbol(&mut self, symbol: &str) -> bool {
        let symbol = symbol.trim();
        let Some(index) = self.alphabet.iter().position(|s| s == symbol) else {
            return false;
        };
        self.alphabet.remove(index);
        self.transitions.retain(|(_, on), _| on.as_str() != symbol);
        true
    }

    /// Define δ(from, symbol) = to. All three labels must already be staged.
    ///
    /// Returns the previous target when an existing transition was replaced.
    pub fn set_transition(
        &mut self,
        from: &str,
        symbol: &str,
        to: &str,
    ) -> Result<Option<State>, BuilderError> {
        let from = self.known_state(from)?;
        let symbol = self.known_symbol(symbol)?;
        let to = self.known_state(to)?;
        Ok(self.transitions.insert((from, symbol), to))
    }

    /// Remove δ(from, symbol), returning its target if it was defined.
    pub fn remove_transition(&mut self, from: &str, symbol: &str) -> Option<State> {
        let key = (State::new(from.trim()), Symbol::new(symbol.trim()));
        self.transitions.remove(&key)
    }

    pub fn set_start(&mut self, state: &str) -> Result<&mut Self, BuilderError> {
        self.start_state = Some(self.known_state(state)?);
        Ok(self)
    }

    pub fn add_final(&mut self, state: &str) -> Result<&mut Self, BuilderError> {
        let state = self.known_state(state)?;
        if self.final_states.contains(&state) {
            return Err(BuilderError::DuplicateFinalState(state));
        }
        self.final_states.push(state);
        Ok(self)
    }

    pub fn remove_final(&mut self, state: &str) -> bool {
        let state = state.trim();
        let before = self.final_states.len();
        self.final_states.retain(|s| s != state);
        before != self.final_states.len()
    }

    /// Validate the staged components and produce a new [`Dfa`].
    ///
    /// The builder is left untouched, so editing can continue after a failed
    /// or successful build.
    pub fn build(&self) -> Result<Dfa, ConstructionError> {
        let transitions = self
            .transitions
            .iter()
            .map(|((from, symbol), to)| Transition::new(from, symbol, to));

        match &self.start_state {
            Some(start) => Dfa::new(
                self.states.iter(),
                self.alphabet.iter(),
                transitions,
                start,
                self.final_states.iter(),
            ),
            None => {
                // Run the remaining checks with a placeholder start so the
                // caller still sees every other problem.
                let placeholder = self.states.first().cloned().unwrap_or_else(|| State::new(""));
                let mut violations = vec![Violation::MissingStartState { state: None }];
                if let Err(err) = Dfa::new(
                    self.states.iter(),
                    self.alphabet.iter(),
                    transitions,
                    placeholder,
                    self.final_states.iter(),
                ) {
                    violations.extend(
                        err.into_violations()
                            .into_iter()
                            .filter(|v| !matches!(v, Violation::MissingStartState { .. })),
                    );
                }
                Err(ConstructionError::new(violations))
            }
        }
    }

    fn known_state(&self, name: &str) -> Result<State, BuilderError> {
        let name = name.trim();
        self.states
            .iter()
            .find(|s| *s == name)
            .cloned()
            .ok_or_else(|| BuilderError::UnknownState(State::new(name)))
    }

    fn known_symbol(&self, symbol: &str) -> Result<Symbol, BuilderError> {
        let symbol = symbol.trim();
        self.alphabet
            .iter()
            .find(|s| *s == symbol)
            .cloned()
            .ok_or_else(|| BuilderError::UnknownSymbol(Symbol::new(symbol)))
    }
}

impl From<&Dfa> for DfaBuilder {
    fn from(dfa: &Dfa) -> Self {
        Self {
            states: dfa.states().iter().cloned().collect(),
            alphabet: dfa.alphabet().iter().cloned().collect(),
            transitions: dfa
                .transitions()
                .map(|(from, symbol, to)| ((from.clone(), symbol.clone()), to.clone()))
                .collect(),
            start_state: Some(dfa.start_state().clone()),
            final_states: dfa.final_states().iter().cloned().collect(),
        }
    }
}

impl Dfa {
    /// A builder pre-populated with this automaton, for producing an edited copy.
    pub fn to_builder(&self) -> DfaBuilder {
        DfaBuilder::from(self)
    }
}

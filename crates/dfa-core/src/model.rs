// The validated automaton value.

use std::collections::BTreeSet;

use hashbrown::HashMap;

use crate::error::{ConstructionError, Violation};
use crate::label::{State, Symbol};

/// One `(from, symbol) -> to` edge as supplied to construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition {
    pub from: State,
    pub symbol: Symbol,
    pub to: State,
}

impl Transition {
    pub fn new(from: impl Into<State>, symbol: impl Into<Symbol>, to: impl Into<State>) -> Self {
        Self {
            from: from.into(),
            symbol: symbol.into(),
            to: to.into(),
        }
    }
}

impl<F, S, T> From<(F, S, T)> for Transition
where
    F: Into<State>,
    S: Into<Symbol>,
    T: Into<State>,
{
    fn from((from, symbol, to): (F, S, T)) -> Self {
        Self::new(from, symbol, to)
    }
}

/// A deterministic finite automaton `(Q, Σ, δ, q0, F)`.
///
/// A `Dfa` can only be obtained through [`Dfa::new`] (or a decoder that calls
/// it), so every value satisfies the structural invariants:
///
/// - the state set and the alphabet are non-empty,
/// - the start state and every final state belong to the state set,
/// - every transition leaves a known state on an alphabet symbol and enters a
///   known state, with at most one target per `(state, symbol)`.
///
/// The transition function may be partial. There are no setters; edits go
/// through [`DfaBuilder`](crate::DfaBuilder) and produce a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    states: BTreeSet<State>,
    alphabet: BTreeSet<Symbol>,
    /// δ keyed by source state, then by symbol. Rows are never empty.
    delta: HashMap<State, HashMap<Symbol, State>>,
    start_state: State,
    final_states: BTreeSet<State>,
    transition_count: usize,
}

/// Validate the five components and build a [`Dfa`].
///
/// Equivalent to [`Dfa::new`].
pub fn construct<S, A, T, F>(
    states: S,
    alphabet: A,
    transitions: T,
    start_state: impl Into<State>,
    final_states: F,
) -> Result<Dfa, ConstructionError>
where
    S: IntoIterator,
    S::Item: Into<State>,
    A: IntoIterator,
    A::Item: Into<Symbol>,
    T: IntoIterator,
    T::Item: Into<Transition>,
    F: IntoIterator,
    F::Item: Into<State>,
{
    Dfa::new(states, alphabet, transitions, start_state, final_states)
}

impl Dfa {
    /// Validate the five components and build a [`Dfa`].
    ///
    /// Duplicate states, symbols, finals and identical transition records
    /// collapse. All violations are collected before returning.
    pub fn new<S, A, T, F>(
        states: S,
        alphabet: A,
        transitions: T,
        start_state: impl Into<State>,
        final_states: F,
    ) -> Result<Self, ConstructionError>
    where
        S: IntoIterator,
        S::Item: Into<State>,
        A: IntoIterator,
        A::Item: Into<Symbol>,
        T: IntoIterator,
        T::Item: Into<Transition>,
        F: IntoIterator,
        F::Item: Into<State>,
    {
        let states: BTreeSet<State> = states.into_iter().map(Into::into).collect();
        let alphabet: BTreeSet<Symbol> = alphabet.into_iter().map(Into::into).collect();
        let start_state = start_state.into();
        let final_states: BTreeSet<State> = final_states.into_iter().map(Into::into).collect();

        let mut violations = Vec::new();

        if states.is_empty() {
            violations.push(Violation::EmptyStates);
        }
        if alphabet.is_empty() {
            violations.push(Violation::EmptyAlphabet);
        }
        if !states.contains(&start_state) {
            violations.push(Violation::MissingStartState {
                state: Some(start_state.clone()),
            });
        }
        for state in final_states.iter().filter(|s| !states.contains(*s)) {
            violations.push(Violation::FinalStateNotInStates {
                state: state.clone(),
            });
        }

        let mut delta: HashMap<State, HashMap<Symbol, State>> = HashMap::new();
        let mut transition_count = 0;

        for transition in transitions {
            let Transition { from, symbol, to } = transition.into();
            let mut well_formed = true;

            if !states.contains(&from) {
                violations.push(Violation::TransitionStateUnknown {
                    from: from.clone(),
                    symbol: symbol.clone(),
                });
                well_formed = false;
            }
            if !alphabet.contains(&symbol) {
                violations.push(Violation::TransitionSymbolUnknown {
                    from: from.clone(),
                    symbol: symbol.clone(),
                });
                well_formed = false;
            }
            if !states.contains(&to) {
                violations.push(Violation::TransitionTargetUnknown {
                    from: from.clone(),
                    symbol: symbol.clone(),
                    to: to.clone(),
                });
                well_formed = false;
            }
            if !well_formed {
                continue;
            }

            let row = delta.entry(from.clone()).or_default();
            match row.get(&symbol) {
                Some(existing) if *existing != to => {
                    violations.push(Violation::ConflictingTransition {
                        from,
                        symbol,
                        first: existing.clone(),
                        second: to,
                    });
                }
                Some(_) => {}
                None => {
                    row.insert(symbol, to);
                    transition_count += 1;
                }
            }
        }

        if !violations.is_empty() {
            tracing::debug!(violations = violations.len(), "rejected automaton");
            return Err(ConstructionError::new(violations));
        }

        tracing::debug!(
            states = states.len(),
            symbols = alphabet.len(),
            transitions = transition_count,
            "constructed automaton"
        );

        Ok(Self {
            states,
            alphabet,
            delta,
            start_state,
            final_states,
            transition_count,
        })
    }

    /// States in lexicographic order.
    pub fn states(&self) -> &BTreeSet<State> {
        &self.states
    }

    /// Alphabet symbols in lexicographic order.
    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    pub fn start_state(&self) -> &State {
        &self.start_state
    }

    pub fn final_states(&self) -> &BTreeSet<State> {
        &self.final_states
    }

    #[inline]
    pub fn is_final(&self, state: &str) -> bool {
        self.final_states.contains(state)
    }

    #[inline]
    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    #[inline]
    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.alphabet.contains(symbol)
    }

    /// δ(state, symbol), or `None` where the transition function is undefined.
    #[inline]
    pub fn target(&self, state: &str, symbol: &str) -> Option<&State> {
        self.delta.get(state)?.get(symbol)
    }

    /// Number of defined `(state, symbol)` pairs.
    pub fn transition_count(&self) -> usize {
        self.transition_count
    }

    /// Defined transitions as `(from, symbol, to)` rows, ordered by source
    /// state then symbol.
    pub fn transitions(&self) -> impl Iterator<Item = (&State, &Symbol, &State)> + '_ {
        self.states.iter().flat_map(move |from| {
            let row = self.delta.get(from);
            self.alphabet.iter().filter_map(move |symbol| {
                row.and_then(|r| r.get(symbol)).map(|to| (from, symbol, to))
            })
        })
    }

    /// Owned copies of [`Dfa::transitions`], suitable for feeding back into
    /// [`Dfa::new`].
    pub fn transition_records(&self) -> Vec<Transition> {
        self.transitions()
            .map(|(from, symbol, to)| Transition::new(from, symbol, to))
            .collect()
    }
}

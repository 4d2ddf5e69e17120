// Materialized execution traces.
//
// A trace for an input of N symbols holds exactly N + 2 records: the initial
// configuration, one record per transition, and the terminal verdict. The
// records are computed once and stored, so a viewer can move over them in any
// order without re-running the automaton.
//
// The input text is allocated once and shared by every record; a record only
// stores how many bytes of it were consumed, so a trace is O(N) in memory.

use std::ops::Index;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use dfa_core::{Dfa, State, Symbol};

use crate::ExecutionError;
use crate::run::{Machine, RunState};

/// Position of a [`Step`] within its trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StepKind {
    Initial,
    Transition,
    Terminal,
}

/// One record of a trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// 0 for the initial record, 1..=N for transitions, N + 1 for the verdict.
    pub step_number: usize,
    /// Symbol consumed by this record; `None` on the initial and terminal records.
    pub symbol: Option<Symbol>,
    /// State before the transition (the current state on initial/terminal records).
    pub state_before: State,
    /// State entered by the transition; `None` on the initial and terminal records.
    pub state_after: Option<State>,
    pub is_terminal: bool,
    /// Verdict; only set on the terminal record.
    pub accepted: Option<bool>,
    input: Arc<str>,
    consumed: usize,
}

/// Wire form of a [`Step`], with the input split at the record's position.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StepView<'a> {
    step_number: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol: Option<&'a Symbol>,
    state_before: &'a State,
    #[serde(skip_serializing_if = "Option::is_none")]
    state_after: Option<&'a State>,
    processed: &'a str,
    remaining: &'a str,
    is_terminal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    accepted: Option<bool>,
}

impl Serialize for Step {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        StepView {
            step_number: self.step_number,
            symbol: self.symbol.as_ref(),
            state_before: &self.state_before,
            state_after: self.state_after.as_ref(),
            processed: self.processed(),
            remaining: self.remaining(),
            is_terminal: self.is_terminal,
            accepted: self.accepted,
        }
        .serialize(serializer)
    }
}

impl Step {
    pub fn kind(&self) -> StepKind {
        if self.is_terminal {
            StepKind::Terminal
        } else if self.symbol.is_none() {
            StepKind::Initial
        } else {
            StepKind::Transition
        }
    }

    /// Input consumed so far, including this record's symbol.
    pub fn processed(&self) -> &str {
        &self.input[..self.consumed]
    }

    /// Input not yet consumed.
    pub fn remaining(&self) -> &str {
        &self.input[self.consumed..]
    }

    /// The state to highlight for this record.
    pub fn current_state(&self) -> &State {
        self.state_after.as_ref().unwrap_or(&self.state_before)
    }

    /// The `(from, to)` edge taken, on transition records.
    pub fn edge(&self) -> Option<(&State, &State)> {
        self.state_after.as_ref().map(|to| (&self.state_before, to))
    }
}

/// The complete, replayable record of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    input: Arc<str>,
    steps: Vec<Step>,
}

#[derive(Serialize)]
struct TraceView<'a> {
    input: &'a str,
    steps: &'a [Step],
}

impl Serialize for Trace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TraceView {
            input: &self.input,
            steps: &self.steps,
        }
        .serialize(serializer)
    }
}

impl Trace {
    /// Concatenation of the consumed symbols.
    ///
    /// Symbol boundaries are not recoverable from this string when symbols
    /// are longer than one character; use [`Trace::symbols`] for those.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The consumed symbols, in order.
    pub fn symbols(&self) -> Vec<&Symbol> {
        self.steps.iter().filter_map(|s| s.symbol.as_ref()).collect()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of records (input length + 2).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; every trace has an initial and a terminal record.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn initial(&self) -> &Step {
        &self.steps[0]
    }

    pub fn terminal(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    pub fn accepted(&self) -> bool {
        self.terminal().accepted == Some(true)
    }

    /// States visited in order, starting with the start state.
    pub fn path(&self) -> Vec<&State> {
        let mut path = Vec::with_capacity(self.steps.len() - 1);
        path.push(&self.initial().state_before);
        path.extend(self.steps.iter().filter_map(|s| s.state_after.as_ref()));
        path
    }
}

impl Index<usize> for Trace {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'t> IntoIterator for &'t Trace {
    type Item = &'t Step;
    type IntoIter = std::slice::Iter<'t, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl Machine<'_, '_> {
    /// Drive the machine to completion, recording every configuration.
    ///
    /// Fails with the same error [`Machine::run`] would return; a failed run
    /// yields no partial trace.
    pub fn trace(&self) -> Result<Trace, ExecutionError> {
        let input_len = self.symbols().len();
        let input: Arc<str> = Arc::from(self.symbols().concat());
        let mut steps = Vec::with_capacity(input_len + 2);

        let mut current = self.dfa().start_state();
        let mut position = 0;
        let mut consumed = 0;
        steps.push(Step {
            step_number: 0,
            symbol: None,
            state_before: current.clone(),
            state_after: None,
            is_terminal: false,
            accepted: None,
            input: Arc::clone(&input),
            consumed,
        });

        loop {
            match self.step(RunState::Running {
                state: current,
                position,
            }) {
                RunState::Running {
                    state: next,
                    position: advanced,
                } => {
                    let symbol = self.symbols()[position];
                    consumed += symbol.len();
                    tracing::trace!(step = advanced, %current, symbol, %next, "transition");
                    steps.push(Step {
                        step_number: advanced,
                        symbol: Some(Symbol::new(symbol)),
                        state_before: current.clone(),
                        state_after: Some(next.clone()),
                        is_terminal: false,
                        accepted: None,
                        input: Arc::clone(&input),
                        consumed,
                    });
                    current = next;
                    position = advanced;
                }
                RunState::Accepted(last) | RunState::Rejected(last) => {
                    steps.push(Step {
                        step_number: input_len + 1,
                        symbol: None,
                        state_before: last.clone(),
                        state_after: None,
                        is_terminal: true,
                        accepted: Some(self.dfa().is_final(last.as_str())),
                        input: Arc::clone(&input),
                        consumed: input.len(),
                    });
                    break;
                }
                RunState::Failed(err) => return Err(err),
            }
        }

        Ok(Trace { input, steps })
    }
}

/// Trace `dfa` on `input`, one `char` per step.
pub fn trace(dfa: &Dfa, input: &str) -> Result<Trace, ExecutionError> {
    let result = Machine::new(dfa, input).trace();
    match &result {
        Ok(trace) => tracing::debug!(
            steps = trace.len(),
            accepted = trace.accepted(),
            "trace finished"
        ),
        Err(err) => tracing::debug!(%err, "trace failed"),
    }
    result
}

/// [`trace`] over pre-tokenized symbols.
pub fn trace_symbols<S: AsRef<str>>(dfa: &Dfa, symbols: &[S]) -> Result<Trace, ExecutionError> {
    Machine::from_symbols(dfa, symbols).trace()
}

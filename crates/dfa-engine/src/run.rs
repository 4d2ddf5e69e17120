// Single-step execution machine.
//
// A run is a linear scan: every `step` consumes at most one input symbol and
// performs one transition lookup. `decide` and `trace` both drive the same
// `Machine::step`, so they cannot disagree.

use dfa_core::{Dfa, State, Symbol};

use crate::ExecutionError;

/// State of one execution run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState<'d> {
    /// `position` input symbols have been consumed and the automaton is in `state`.
    Running { state: &'d State, position: usize },
    Accepted(&'d State),
    Rejected(&'d State),
    Failed(ExecutionError),
}

impl RunState<'_> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunState::Running { .. })
    }
}

/// Result of a run that consumed its whole input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(State),
    Rejected(State),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    /// The state the run ended in.
    pub fn state(&self) -> &State {
        match self {
            Verdict::Accepted(state) | Verdict::Rejected(state) => state,
        }
    }
}

/// An automaton paired with one tokenized input.
///
/// Input symbols borrow from the caller's string or slice; nothing is copied
/// until a trace needs owned records.
pub struct Machine<'d, 'i> {
    dfa: &'d Dfa,
    input: Vec<&'i str>,
}

impl<'d, 'i> Machine<'d, 'i> {
    /// Tokenize `input` one `char` at a time.
    pub fn new(dfa: &'d Dfa, input: &'i str) -> Self {
        let input = input
            .char_indices()
            .map(|(i, c)| &input[i..i + c.len_utf8()])
            .collect();
        Self { dfa, input }
    }

    /// Use pre-tokenized symbols, which may be longer than one character.
    pub fn from_symbols<S: AsRef<str>>(dfa: &'d Dfa, symbols: &'i [S]) -> Self {
        Self {
            dfa,
            input: symbols.iter().map(|s| s.as_ref()).collect(),
        }
    }

    pub fn dfa(&self) -> &'d Dfa {
        self.dfa
    }

    pub fn symbols(&self) -> &[&'i str] {
        &self.input
    }

    /// `Running(start_state, full input)`.
    pub fn initial(&self) -> RunState<'d> {
        RunState::Running {
            state: self.dfa.start_state(),
            position: 0,
        }
    }

    /// Apply the transition rule once. Terminal states are returned unchanged.
    pub fn step(&self, state: RunState<'d>) -> RunState<'d> {
        let (current, position) = match state {
            RunState::Running { state, position } => (state, position),
            terminal => return terminal,
        };

        let Some(&symbol) = self.input.get(position) else {
            return if self.dfa.is_final(current.as_str()) {
                RunState::Accepted(current)
            } else {
                RunState::Rejected(current)
            };
        };

        if !self.dfa.has_symbol(symbol) {
            return RunState::Failed(ExecutionError::InvalidSymbol {
                symbol: Symbol::new(symbol),
                position,
            });
        }

        match self.dfa.target(current.as_str(), symbol) {
            Some(next) => RunState::Running {
                state: next,
                position: position + 1,
            },
            None => RunState::Failed(ExecutionError::UndefinedTransition {
                state: current.clone(),
                symbol: Symbol::new(symbol),
                position,
            }),
        }
    }

    /// Drive the machine to a terminal state.
    pub fn run(&self) -> Result<Verdict, ExecutionError> {
        let mut state = self.initial();
        loop {
            state = match self.step(state) {
                running @ RunState::Running { .. } => running,
                RunState::Accepted(s) => return Ok(Verdict::Accepted(s.clone())),
                RunState::Rejected(s) => return Ok(Verdict::Rejected(s.clone())),
                RunState::Failed(err) => return Err(err),
            };
        }
    }
}

/// Run `dfa` on `input` and report the final state.
pub fn outcome(dfa: &Dfa, input: &str) -> Result<Verdict, ExecutionError> {
    let result = Machine::new(dfa, input).run();
    match &result {
        Ok(verdict) => tracing::debug!(
            accepted = verdict.is_accepted(),
            state = %verdict.state(),
            "run finished"
        ),
        Err(err) => tracing::debug!(%err, "run failed"),
    }
    result
}

/// Whether `dfa` accepts `input`.
///
/// Errors are never folded into `false`: an out-of-alphabet symbol or a
/// missing transition is returned as an [`ExecutionError`].
pub fn decide(dfa: &Dfa, input: &str) -> Result<bool, ExecutionError> {
    outcome(dfa, input).map(|verdict| verdict.is_accepted())
}

/// [`decide`] over pre-tokenized symbols.
pub fn decide_symbols<S: AsRef<str>>(dfa: &Dfa, symbols: &[S]) -> Result<bool, ExecutionError> {
    Machine::from_symbols(dfa, symbols)
        .run()
        .map(|verdict| verdict.is_accepted())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ends_in_ab() -> Dfa {
        Dfa::new(
            ["s", "a", "ab"],
            ["a", "b"],
            [
                ("s", "a", "a"),
                ("s", "b", "s"),
                ("a", "a", "a"),
                ("a", "b", "ab"),
                ("ab", "a", "a"),
                ("ab", "b", "s"),
            ],
            "s",
            ["ab"],
        )
        .unwrap()
    }

    #[test]
    fn step_is_one_transition() {
        let dfa = ends_in_ab();
        let machine = Machine::new(&dfa, "ab");
        let s1 = machine.step(machine.initial());
        assert_eq!(
            s1,
            RunState::Running {
                state: &State::new("a"),
                position: 1
            }
        );
        let s2 = machine.step(s1);
        let s3 = machine.step(s2);
        assert_eq!(s3, RunState::Accepted(&State::new("ab")));
        assert!(s3.is_terminal());
        // Terminal states are fixed points.
        assert_eq!(machine.step(s3.clone()), s3);
    }

    #[test]
    fn outcome_reports_final_state() {
        let dfa = ends_in_ab();
        assert_eq!(
            outcome(&dfa, "abb").unwrap(),
            Verdict::Rejected(State::new("s"))
        );
        assert!(decide(&dfa, "bbab").unwrap());
    }

    #[test]
    fn invalid_symbol_position() {
        let dfa = ends_in_ab();
        assert_eq!(
            decide(&dfa, "abc"),
            Err(ExecutionError::InvalidSymbol {
                symbol: Symbol::new("c"),
                position: 2
            })
        );
    }

    #[test]
    fn multibyte_input_is_split_by_char() {
        let dfa = Dfa::new(["q"], ["ä", "ö"], [("q", "ä", "q"), ("q", "ö", "q")], "q", ["q"])
            .unwrap();
        let machine = Machine::new(&dfa, "äöä");
        assert_eq!(machine.symbols(), &["ä", "ö", "ä"]);
        assert!(decide(&dfa, "äöä").unwrap());
    }

    #[test]
    fn multi_character_symbols() {
        let dfa = Dfa::new(
            ["off", "on"],
            ["push", "pull"],
            [
                ("off", "push", "on"),
                ("on", "pull", "off"),
                ("on", "push", "on"),
                ("off", "pull", "off"),
            ],
            "off",
            ["on"],
        )
        .unwrap();
        assert!(decide_symbols(&dfa, &["push", "pull", "push"]).unwrap());
        assert!(!decide_symbols(&dfa, &["push", "pull"]).unwrap());
        // The same labels are unreachable one char at a time.
        assert!(matches!(
            decide(&dfa, "push"),
            Err(ExecutionError::InvalidSymbol { position: 0, .. })
        ));
    }
}

//! Execution engine for deterministic finite automata.
//!
//! Everything here reads an immutable [`Dfa`](dfa_core::Dfa) and allocates
//! only its own run state, so the same automaton can be shared by any number
//! of concurrent runs.
//!
//! # Architecture
//!
//! - [`run`] -- The single-step machine, [`decide`] and [`outcome`]
//! - [`trace`] -- Fully materialized step records ([`trace()`])
//! - [`cursor`] -- Forward/backward navigation over a finished trace
//! - [`render`] -- Human-readable trace report

pub mod cursor;
pub mod render;
pub mod run;
pub mod trace;

use dfa_core::{State, Symbol};

pub use cursor::TraceCursor;
pub use run::{Machine, RunState, Verdict, decide, decide_symbols, outcome};
pub use trace::{Step, StepKind, Trace, trace, trace_symbols};

/// Error that aborts a run.
///
/// A failed run is neither accepted nor rejected. `position` is the 0-based
/// index of the offending symbol in the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    #[error("symbol `{symbol}` at position {position} is not in the alphabet")]
    InvalidSymbol { symbol: Symbol, position: usize },
    #[error("no transition from `{state}` on `{symbol}` (position {position})")]
    UndefinedTransition {
        state: State,
        symbol: Symbol,
        position: usize,
    },
}

//! Deterministic finite automaton model.
//!
//! This crate holds the automaton value itself and everything that inspects or
//! rebuilds it. Execution lives in `dfa-engine`, the interchange format in
//! `dfa-codec`.
//!
//! # Architecture
//!
//! - [`label`] -- State and symbol labels
//! - [`model`] -- The validated [`Dfa`] value and its construction
//! - [`error`] -- Construction violations, collected exhaustively
//! - [`completeness`] -- Advisory missing-transition inspection
//! - [`builder`] -- Editing operations that produce a new [`Dfa`]

pub mod builder;
pub mod completeness;
pub mod error;
pub mod label;
pub mod model;

pub use builder::{BuilderError, DfaBuilder};
pub use completeness::{is_complete, missing_transitions};
pub use error::{ConstructionError, Violation, ViolationKind};
pub use label::{State, Symbol};
pub use model::{Dfa, Transition, construct};

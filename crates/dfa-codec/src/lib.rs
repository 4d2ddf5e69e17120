//! JSON interchange format for deterministic finite automata.
//!
//! The document lists all five components explicitly. Transitions are a list
//! of `{from, symbol, to}` records rather than a map, because the natural key
//! is a `(state, symbol)` pair and JSON objects only have string keys:
//!
//! ```json
//! {
//!   "states": ["q0", "q1"],
//!   "alphabet": ["0", "1"],
//!   "transitions": [
//!     {"from": "q0", "symbol": "1", "to": "q1"},
//!     {"from": "q1", "symbol": "1", "to": "q0"}
//!   ],
//!   "start_state": "q0",
//!   "final_states": ["q0"]
//! }
//! ```
//!
//! # Architecture
//!
//! - [`document`] -- Typed serde form of the document
//! - [`encode`] -- Canonical encoder
//! - [`decode`] -- Shape-checking decoder

pub mod decode;
pub mod document;
pub mod encode;

pub use decode::{decode, decode_value};
pub use document::{DfaDocument, TransitionRecord};
pub use encode::{EncodeOptions, encode, encode_with};

/// Error type for encoding.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("failed to serialize document: {0}")]
    Json(#[from] serde_json::Error),
}

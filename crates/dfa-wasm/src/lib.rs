// WASM bindings for the DFA engine.
//
// Provides a `WasmDfa` class exported via wasm-bindgen that wraps an
// immutable `Dfa`. Trace records are serialized to JavaScript values using
// serde-wasm-bindgen; construction and execution errors become `Error`s
// whose message is the Rust error's display text.
//
// Usage from JavaScript:
//
//   const dfa = WasmDfa.fromJson(documentText);
//   dfa.accepts("0110");           // => true
//   dfa.trace("01");               // => [{ stepNumber: 0, stateBefore: "q0", ... }, ...]
//   dfa.traceReport("01");         // => "Tracing execution of: '01'\n..."
//   dfa.missingTransitions();      // => [["q1", "0"], ...]
//   dfa.isComplete();              // => false
//   dfa.toJson(true);              // => canonical document text

use serde::Serialize;
use wasm_bindgen::prelude::*;

use dfa_core::{ConstructionError, Dfa};
use dfa_engine::ExecutionError;

/// Serializable summary of an automaton.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSummary {
    states: Vec<String>,
    alphabet: Vec<String>,
    start_state: String,
    final_states: Vec<String>,
    transition_count: usize,
    complete: bool,
}

fn summary(dfa: &Dfa) -> JsSummary {
    JsSummary {
        states: dfa.states().iter().map(|s| s.to_string()).collect(),
        alphabet: dfa.alphabet().iter().map(|a| a.to_string()).collect(),
        start_state: dfa.start_state().to_string(),
        final_states: dfa.final_states().iter().map(|s| s.to_string()).collect(),
        transition_count: dfa.transition_count(),
        complete: dfa.is_complete(),
    }
}

fn construction_error_to_js(e: ConstructionError) -> JsError {
    JsError::new(&e.to_string())
}

fn execution_error_to_js(e: ExecutionError) -> JsError {
    JsError::new(&e.to_string())
}

/// Deterministic finite automaton for WebAssembly.
#[wasm_bindgen]
pub struct WasmDfa {
    dfa: Dfa,
}

#[wasm_bindgen]
impl WasmDfa {
    /// Decode and validate a JSON automaton document.
    ///
    /// Throws with every construction problem listed in the message.
    #[wasm_bindgen(js_name = "fromJson")]
    pub fn from_json(text: &str) -> Result<WasmDfa, JsError> {
        let dfa = dfa_codec::decode(text).map_err(construction_error_to_js)?;
        Ok(WasmDfa { dfa })
    }

    /// Whether the automaton accepts `input` (one symbol per character).
    ///
    /// Throws on a symbol outside the alphabet or an undefined transition.
    pub fn accepts(&self, input: &str) -> Result<bool, JsError> {
        dfa_engine::decide(&self.dfa, input).map_err(execution_error_to_js)
    }

    /// Step-by-step execution of `input`.
    ///
    /// Returns a JavaScript array of step objects with fields:
    /// `stepNumber`, `symbol`, `stateBefore`, `stateAfter`, `processed`,
    /// `remaining`, `isTerminal`, `accepted`.
    pub fn trace(&self, input: &str) -> Result<JsValue, JsError> {
        let trace = dfa_engine::trace(&self.dfa, input).map_err(execution_error_to_js)?;
        serde_wasm_bindgen::to_value(trace.steps())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Human-readable trace report of `input`.
    #[wasm_bindgen(js_name = "traceReport")]
    pub fn trace_report(&self, input: &str) -> Result<String, JsError> {
        let trace = dfa_engine::trace(&self.dfa, input).map_err(execution_error_to_js)?;
        Ok(trace.to_string())
    }

    /// `(state, symbol)` pairs without a transition, as two-element arrays.
    #[wasm_bindgen(js_name = "missingTransitions")]
    pub fn missing_transitions(&self) -> js_sys::Array {
        self.dfa
            .missing_transitions()
            .into_iter()
            .map(|(state, symbol)| {
                js_sys::Array::of2(
                    &JsValue::from_str(state.as_str()),
                    &JsValue::from_str(symbol.as_str()),
                )
            })
            .collect()
    }

    /// Whether every `(state, symbol)` pair has a transition.
    #[wasm_bindgen(js_name = "isComplete")]
    pub fn is_complete(&self) -> bool {
        self.dfa.is_complete()
    }

    /// Component summary: `states`, `alphabet`, `startState`, `finalStates`,
    /// `transitionCount`, `complete`.
    pub fn summary(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&summary(&self.dfa))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Encode the automaton as a canonical JSON document (pretty unless
    /// `pretty` is `false`).
    #[wasm_bindgen(js_name = "toJson")]
    pub fn to_json(&self, pretty: Option<bool>) -> Result<String, JsError> {
        let options = dfa_codec::EncodeOptions {
            pretty: pretty.unwrap_or(true),
        };
        dfa_codec::encode_with(&self.dfa, options).map_err(|e| JsError::new(&e.to_string()))
    }
}

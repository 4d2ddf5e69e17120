// Shape-checking decoder.
//
// The text is parsed into a `serde_json::Value` first and walked by hand, so
// that every shape problem (missing field, wrong type, bad transition record)
// becomes its own `MalformedDocument` violation with a path. Only a
// well-shaped document goes on to the model's structural validation.

use serde_json::{Map, Value};

use dfa_core::{ConstructionError, Dfa, State, Symbol, Violation};

use crate::document::{DfaDocument, TransitionRecord};

/// Decode and validate a JSON document.
pub fn decode(text: &str) -> Result<Dfa, ConstructionError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| Violation::malformed("$", format!("invalid JSON: {e}")))?;
    decode_value(&value)
}

/// Decode an already parsed JSON value.
pub fn decode_value(value: &Value) -> Result<Dfa, ConstructionError> {
    let result = read_document(value).and_then(DfaDocument::into_dfa);
    match &result {
        Ok(dfa) => tracing::debug!(
            states = dfa.states().len(),
            transitions = dfa.transition_count(),
            "decoded automaton"
        ),
        Err(err) => tracing::debug!(violations = err.violations().len(), "rejected document"),
    }
    result
}

/// Collects shape problems while walking a document.
#[derive(Default)]
struct ShapeCheck {
    problems: Vec<Violation>,
}

impl ShapeCheck {
    fn problem(&mut self, path: impl Into<String>, detail: impl Into<String>) {
        self.problems.push(Violation::malformed(path, detail));
    }

    fn field<'v>(&mut self, object: &'v Map<String, Value>, name: &str) -> Option<&'v Value> {
        let value = object.get(name);
        if value.is_none() {
            self.problem(name, "missing required field");
        }
        value
    }

    fn string(&mut self, value: &Value, path: &str) -> Option<String> {
        match value.as_str() {
            Some(s) => Some(s.to_string()),
            None => {
                self.problem(path, format!("expected a string, found {}", type_name(value)));
                None
            }
        }
    }

    fn string_list(&mut self, object: &Map<String, Value>, name: &str) -> Option<Vec<String>> {
        let value = self.field(object, name)?;
        let Some(items) = value.as_array() else {
            self.problem(name, format!("expected an array, found {}", type_name(value)));
            return None;
        };
        let mut strings = Vec::with_capacity(items.len());
        let mut complete = true;
        for (i, item) in items.iter().enumerate() {
            match self.string(item, &format!("{name}[{i}]")) {
                Some(s) => strings.push(s),
                None => complete = false,
            }
        }
        complete.then_some(strings)
    }

    fn records(&mut self, object: &Map<String, Value>) -> Option<Vec<TransitionRecord>> {
        let value = self.field(object, "transitions")?;
        let Some(items) = value.as_array() else {
            self.problem(
                "transitions",
                format!("expected an array, found {}", type_name(value)),
            );
            return None;
        };
        let mut records = Vec::with_capacity(items.len());
        let mut complete = true;
        for (i, item) in items.iter().enumerate() {
            match self.record(item, &format!("transitions[{i}]")) {
                Some(record) => records.push(record),
                None => complete = false,
            }
        }
        complete.then_some(records)
    }

    /// Check one `{from, symbol, to}` record, reporting each bad field.
    fn record(&mut self, value: &Value, path: &str) -> Option<TransitionRecord> {
        let Some(object) = value.as_object() else {
            self.problem(path, format!("expected an object, found {}", type_name(value)));
            return None;
        };
        let mut part = |name: &str| match object.get(name) {
            Some(v) => self.string(v, &format!("{path}.{name}")),
            None => {
                self.problem(format!("{path}.{name}"), "missing required field");
                None
            }
        };
        let from = part("from");
        let symbol = part("symbol");
        let to = part("to");
        Some(TransitionRecord {
            from: State::new(from?),
            symbol: Symbol::new(symbol?),
            to: State::new(to?),
        })
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn read_document(value: &Value) -> Result<DfaDocument, ConstructionError> {
    let Some(object) = value.as_object() else {
        return Err(Violation::malformed(
            "$",
            format!("expected an object, found {}", type_name(value)),
        )
        .into());
    };

    let mut check = ShapeCheck::default();
    let states = check.string_list(object, "states");
    let alphabet = check.string_list(object, "alphabet");
    let transitions = check.records(object);
    let start_state = check
        .field(object, "start_state")
        .and_then(|v| check.string(v, "start_state"));
    let final_states = check.string_list(object, "final_states");

    match (states, alphabet, transitions, start_state, final_states) {
        (Some(states), Some(alphabet), Some(transitions), Some(start_state), Some(final_states))
            if check.problems.is_empty() =>
        {
            Ok(DfaDocument {
                states: states.into_iter().map(State::new).collect(),
                alphabet: alphabet.into_iter().map(Symbol::new).collect(),
                transitions,
                start_state: State::new(start_state),
                final_states: final_states.into_iter().map(State::new).collect(),
            })
        }
        _ => Err(ConstructionError::new(check.problems)),
    }
}

// Canonical encoder.

use dfa_core::Dfa;

use crate::CodecError;
use crate::document::DfaDocument;

/// Encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Indent the output for humans. Default: true.
    pub pretty: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Encode `dfa` as a pretty-printed canonical document.
pub fn encode(dfa: &Dfa) -> Result<String, CodecError> {
    encode_with(dfa, EncodeOptions::default())
}

/// Encode `dfa` with explicit options.
///
/// Output is deterministic: two equal automata always encode to the same text.
pub fn encode_with(dfa: &Dfa, options: EncodeOptions) -> Result<String, CodecError> {
    let document = DfaDocument::from(dfa);
    let text = if options.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    tracing::debug!(bytes = text.len(), pretty = options.pretty, "encoded automaton");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dfa {
        Dfa::new(
            ["q1", "q0"],
            ["1", "0"],
            [("q1", "1", "q0"), ("q0", "1", "q1")],
            "q0",
            ["q0"],
        )
        .unwrap()
    }

    #[test]
    fn compact_layout() {
        let text = encode_with(&sample(), EncodeOptions { pretty: false }).unwrap();
        assert_eq!(
            text,
            r#"{"states":["q0","q1"],"alphabet":["0","1"],"transitions":[{"from":"q0","symbol":"1","to":"q1"},{"from":"q1","symbol":"1","to":"q0"}],"start_state":"q0","final_states":["q0"]}"#
        );
    }

    #[test]
    fn pretty_is_default_and_stable() {
        let a = encode(&sample()).unwrap();
        let b = encode(&sample()).unwrap();
        assert_eq!(a, b);
        assert!(a.contains("\n  \"states\": ["));
    }
}

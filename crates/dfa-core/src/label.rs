// State and symbol labels.
//
// Both are opaque strings. They implement `Borrow<str>` so that maps keyed by
// a label can be queried with a plain `&str` without allocating.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Label identifying one state of an automaton.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(String);

/// Label identifying one symbol of an automaton's alphabet.
///
/// Input strings are consumed one `char` at a time, so only single-character
/// symbols are reachable from `&str` input. Longer labels are still valid.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

macro_rules! impl_label {
    ($name:ident) => {
        impl $name {
            pub fn new(label: impl Into<String>) -> Self {
                Self(label.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(label: &str) -> Self {
                Self(label.to_string())
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                Self(label)
            }
        }

        impl From<&$name> for $name {
            fn from(label: &$name) -> Self {
                label.clone()
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

impl_label!(State);
impl_label!(Symbol);

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

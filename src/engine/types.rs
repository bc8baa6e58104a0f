//! Engine payload types
//!
//! Payloads are opaque JSON text; the engine validates them.

/// Schema definition handed to `create`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema(String);

/// JSON document handed to `insert` and `update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(String);

/// Records returned by `read`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet(String);

macro_rules! text_payload {
    ($($name:ident),+) => {$(
        impl $name {
            pub fn new(text: impl Into<String>) -> Self {
                Self(text.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl From<String> for $name {
            fn from(text: String) -> Self {
                Self(text)
            }
        }

        impl From<&str> for $name {
            fn from(text: &str) -> Self {
                Self(text.to_string())
            }
        }
    )+};
}

text_payload!(Schema, Document, RecordSet);

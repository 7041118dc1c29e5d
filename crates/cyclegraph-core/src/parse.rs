//! Adjacency document parsing.
//!
//! An adjacency document is a JSON object mapping each node label to an array
//! of successor labels:
//!
//! ```json
//! { "0": [1, 2], "1": [3], "2": [3], "3": [] }
//! ```
//!
//! Labels may be JSON strings or integers. Integers are normalized to their
//! decimal string, so `1` and `"1"` name the same node. Object keys are always
//! strings in JSON, which makes integer successors line up with their keys.
//! Document order defines the universe order of the resulting [`Graph`].
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};

use crate::graph::Graph;

/// Error returned by [`parse_adjacency`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input is not well-formed JSON (syntax error or premature end).
    InvalidJson {
        /// 1-based line of the offending character.
        line: usize,
        /// 1-based column of the offending character.
        column: usize,
        /// The underlying serde_json message.
        detail: String,
    },
    /// The input is valid JSON but not an object of label arrays.
    InvalidShape {
        /// 1-based line of the offending value.
        line: usize,
        /// 1-based column of the offending value.
        column: usize,
        /// The underlying serde_json message.
        detail: String,
    },
}

impl ParseError {
    /// Returns the 1-based `(line, column)` the error was reported at.
    pub fn location(&self) -> (usize, usize) {
        match self {
            Self::InvalidJson { line, column, .. } | Self::InvalidShape { line, column, .. } => {
                (*line, *column)
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson {
                line,
                column,
                detail,
            } => write!(f, "invalid JSON at line {line}, column {column}: {detail}"),
            Self::InvalidShape {
                line,
                column,
                detail,
            } => write!(
                f,
                "invalid adjacency document at line {line}, column {column}: {detail}"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        let line = e.line();
        let column = e.column();
        let detail = e.to_string();
        match e.classify() {
            serde_json::error::Category::Data => Self::InvalidShape {
                line,
                column,
                detail,
            },
            serde_json::error::Category::Io
            | serde_json::error::Category::Syntax
            | serde_json::error::Category::Eof => Self::InvalidJson {
                line,
                column,
                detail,
            },
        }
    }
}

/// Parses an adjacency document into a graph over string labels.
///
/// # Errors
///
/// Returns [`ParseError::InvalidJson`] for malformed JSON and
/// [`ParseError::InvalidShape`] when the document is not an object whose
/// values are arrays of string or integer labels.
pub fn parse_adjacency(input: &str) -> Result<Graph<String>, ParseError> {
    let labelled: Graph<Label> = serde_json::from_str(input).map_err(|e| {
        let err = ParseError::from(e);
        tracing::trace!(error = %err, "adjacency document rejected");
        err
    })?;
    let graph = labelled.map_nodes(|label| label.0.clone());
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "adjacency document parsed"
    );
    Ok(graph)
}

/// A node label accepted as either a JSON string or a JSON integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Label(String);

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LabelVisitor)
    }
}

struct LabelVisitor;

impl Visitor<'_> for LabelVisitor {
    type Value = Label;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a node label (string or integer)")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Label, E> {
        Ok(Label(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Label, E> {
        Ok(Label(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Label, E> {
        Ok(Label(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Label, E> {
        Ok(Label(v.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Structured error types shared across the Fleury crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`FleuryError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (labels, counts, identifiers).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for the Euler-walk engine.
///
/// None of these failures are retried. `NoEulerWalk` and `InvalidInput` describe
/// the caller's graph; `InvalidEdge` and `InvariantViolation` indicate that the
/// engine (or a disconnected input that slipped past the degree check) reached a
/// state the algorithm rules out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum FleuryError {
    /// The graph does not admit an Euler walk.
    #[error("no euler walk: {0}")]
    NoEulerWalk(ErrorInfo),
    /// An edge operation referenced an edge instance that does not exist.
    #[error("invalid edge: {0}")]
    InvalidEdge(ErrorInfo),
    /// The walk builder reached a state that cannot occur for a valid graph.
    #[error("invariant violation: {0}")]
    InvariantViolation(ErrorInfo),
    /// Caller supplied adjacency data or arguments are malformed.
    #[error("invalid input: {0}")]
    InvalidInput(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl FleuryError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            FleuryError::NoEulerWalk(info)
            | FleuryError::InvalidEdge(info)
            | FleuryError::InvariantViolation(info)
            | FleuryError::InvalidInput(info)
            | FleuryError::Serde(info) => info,
        }
    }

    fn info_mut(&mut self) -> &mut ErrorInfo {
        match self {
            FleuryError::NoEulerWalk(info)
            | FleuryError::InvalidEdge(info)
            | FleuryError::InvariantViolation(info)
            | FleuryError::InvalidInput(info)
            | FleuryError::Serde(info) => info,
        }
    }

    /// Returns the stable error code of the payload.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Adds a context entry to the payload of any variant.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.info_mut()
            .context
            .insert(key.into(), value.to_string());
        self
    }

    /// Sets the remediation hint of any variant.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.info_mut().hint = Some(hint.into());
        self
    }
}

/// Shorthand for a [`FleuryError::NoEulerWalk`] with an empty context.
pub fn no_walk_error(code: impl Into<String>, message: impl Into<String>) -> FleuryError {
    FleuryError::NoEulerWalk(ErrorInfo::new(code, message))
}

/// Shorthand for a [`FleuryError::InvalidEdge`] with an empty context.
pub fn edge_error(code: impl Into<String>, message: impl Into<String>) -> FleuryError {
    FleuryError::InvalidEdge(ErrorInfo::new(code, message))
}

/// Shorthand for a [`FleuryError::InvariantViolation`] with an empty context.
pub fn invariant_error(code: impl Into<String>, message: impl Into<String>) -> FleuryError {
    FleuryError::InvariantViolation(ErrorInfo::new(code, message))
}

/// Shorthand for a [`FleuryError::InvalidInput`] with an empty context.
pub fn input_error(code: impl Into<String>, message: impl Into<String>) -> FleuryError {
    FleuryError::InvalidInput(ErrorInfo::new(code, message))
}

/// Shorthand for a [`FleuryError::Serde`] wrapping a foreign error message.
pub fn serde_error(code: impl Into<String>, err: impl Display) -> FleuryError {
    FleuryError::Serde(ErrorInfo::new(code, err.to_string()))
}

//! Error types for building operation trees.

use thiserror::Error;

/// Why an instrument document could not be reduced to a tree.
///
/// Every variant is terminal for the `interpret` call that produced it; no
/// partial tree survives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    #[error("unknown operation `{tag}`")]
    UnknownOperation { tag: String },

    /// The operands available to `tag` do not match its arity, whether too
    /// few or too many.
    #[error("`{tag}` takes {required} operand(s) but {available} were available")]
    StackUnderflow {
        tag: String,
        required: usize,
        available: usize,
    },

    #[error("document has no root element")]
    EmptyDocument,

    #[error("`{tag}` is missing its {field}")]
    InvalidLeafData { tag: String, field: &'static str },

    #[error("nesting exceeds the maximum depth of {max_depth}")]
    DepthLimitExceeded { max_depth: usize },
}

impl InterpretError {
    pub fn unknown(tag: impl Into<String>) -> Self {
        Self::UnknownOperation { tag: tag.into() }
    }

    pub fn underflow(tag: impl Into<String>, required: usize, available: usize) -> Self {
        Self::StackUnderflow {
            tag: tag.into(),
            required,
            available,
        }
    }

    pub fn invalid_leaf(tag: impl Into<String>, field: &'static str) -> Self {
        Self::InvalidLeafData {
            tag: tag.into(),
            field,
        }
    }
}

/// Malformed document text.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure reading or writing interpreter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

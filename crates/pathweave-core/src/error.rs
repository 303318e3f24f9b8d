//! Error types for pathweave
//!
//! `NoPath` is the only error a search reports for a well-formed graph.
//! Everything else is raised while building a graph or loading configuration,
//! before any search runs.

mod macros;

use thiserror::Error;

/// Errors that can occur during pathweave operations
#[derive(Error, Debug)]
pub enum PathError {
    // Search outcomes
    #[error("{}", describe_no_path(.source_node, .destination, .k))]
    NoPath {
        source_node: String,
        destination: String,
        k: Option<usize>,
    },

    // Graph construction errors
    #[error("node not found: {key}")]
    NodeNotFound { key: String },

    #[error("node #{id} does not belong to this graph")]
    UnknownNode { id: usize },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

fn describe_no_path(source: &str, destination: &str, k: &Option<usize>) -> String {
    match k {
        Some(k) => format!("no {} paths exist between {} and {}", k, source, destination),
        None => format!("no path exists between {} and {}", source, destination),
    }
}

impl PathError {
    /// Create an error for an unreachable destination
    pub fn no_path(source: impl Into<String>, destination: impl Into<String>) -> Self {
        PathError::NoPath {
            source_node: source.into(),
            destination: destination.into(),
            k: None,
        }
    }

    /// Create an error for a request of `k` disjoint paths that cannot be met
    pub fn no_paths(source: impl Into<String>, destination: impl Into<String>, k: usize) -> Self {
        PathError::NoPath {
            source_node: source.into(),
            destination: destination.into(),
            k: Some(k),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        PathError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a reference key with no node behind it
    pub fn node_not_found(key: impl std::fmt::Debug) -> Self {
        PathError::NodeNotFound {
            key: format!("{:?}", key),
        }
    }

    /// True when this error only reports that no (or not enough) paths exist
    pub fn is_no_path(&self) -> bool {
        matches!(self, PathError::NoPath { .. })
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathError::NoPath { .. } => "no_path",
            PathError::NodeNotFound { .. } => "node_not_found",
            PathError::UnknownNode { .. } => "unknown_node",
            PathError::AlreadyExists { .. } => "already_exists",
            PathError::InvalidValue { .. } => "invalid_value",
            PathError::Io(_) => "io_error",
            PathError::Toml(_) | PathError::TomlSerialize(_) => "toml_error",
            PathError::Json(_) => "json_error",
            PathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let PathError::NoPath {
            source_node,
            destination,
            k,
        } = self
        {
            error_obj["source"] = serde_json::json!(source_node);
            error_obj["destination"] = serde_json::json!(destination);
            if let Some(k) = k {
                error_obj["k"] = serde_json::json!(k);
            }
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for pathweave operations
pub type Result<T> = std::result::Result<T, PathError>;

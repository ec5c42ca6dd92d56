use thiserror::Error;

use crate::config::kinds::ValueKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors produced while accessing, loading, and exporting configuration data.
///
/// `NotFound`, `TypeMismatch`, and `MalformedField` are non-fatal by policy:
/// tree accessors convert them into well-defined defaults plus a tracing
/// diagnostic rather than propagating them across the API boundary.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Requested key or subconfig name is absent.
	#[error("key not found: {key}")]
	NotFound {
		/// Key or name that was looked up.
		key: String,
	},
	/// Key exists but holds a different kind than requested.
	#[error("type mismatch: expected {expected}, got {actual}")]
	TypeMismatch {
		/// Kind the caller asked for.
		expected: ValueKind,
		/// Kind actually stored.
		actual: ValueKind,
	},
	/// Document field could not be mapped to a supported kind.
	#[error("malformed document field {name}: {reason}")]
	MalformedField {
		/// Field name in the document.
		name: String,
		/// Why the field was rejected.
		reason: String,
	},
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Document text could not be parsed.
	#[error("parse: {0}")]
	Parse(#[from] serde_json::Error),
}

//! Error types for document and configuration operations.

/// Errors raised by document tree and custom element operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
	/// The node cannot be inserted at that position, e.g. a node into itself,
	/// an ancestor into a descendant, or anything into a text node.
	#[error("hierarchy request error: {0}")]
	HierarchyRequest(String),

	/// The node is not a child of the node it was removed from.
	#[error("node not found: {0}")]
	NotFound(String),

	/// A custom element with that name is already defined.
	#[error("custom element <{0}> is already defined")]
	AlreadyDefined(String),

	/// The name is not a valid custom element name.
	#[error("invalid custom element name: {0:?}")]
	InvalidCustomElementName(String),
}

/// Errors raised while loading a [`UxConfig`](crate::config::UxConfig).
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The file could not be read.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// The JSON source could not be parsed.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// The TOML source could not be parsed.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// The file extension is neither `.json` nor `.toml`.
	#[error("unsupported configuration format: {0}")]
	UnsupportedFormat(String),
}

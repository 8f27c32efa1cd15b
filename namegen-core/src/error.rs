//! Error handling for the name generator

use thiserror::Error;

/// Errors surfaced by profile loading and generator configuration.
///
/// Generation itself never fails: missing data degrades to a fallback
/// strategy or to the sentinel string instead.
#[derive(Debug, Error)]
pub enum NameGenError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Profile parse error: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("Profile cache error: {0}")]
	Cache(#[from] postcard::Error),

	#[error("Invalid profile path: {0}")]
	InvalidPath(String),

	#[error("Corpus contains no usable names: {0}")]
	EmptyCorpus(String),

	#[error("Configuration error: {0}")]
	Config(String),

	#[error("Unknown strategy '{0}'")]
	UnknownStrategy(String),
}

impl NameGenError {
	/// Create a configuration error
	pub fn config(message: impl Into<String>) -> Self {
		Self::Config(message.into())
	}
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, NameGenError>;

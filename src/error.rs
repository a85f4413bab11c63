/* src/error.rs */

use std::sync::Arc;

/// Error captured while loading a document.
///
/// Cloning yields the same failure: wrapped I/O and JSON errors are shared, not
/// re-created, so a backend can hand the identical error out on every call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
	/// IO error while reading a path source.
	#[error("io error: {0}")]
	Io(#[source] Arc<std::io::Error>),

	/// Source contents are not valid UTF-8.
	#[error("invalid utf-8: {0}")]
	Utf8(#[from] std::str::Utf8Error),

	/// A non-blank line is not a JSON value.
	#[error("parse error on line {line}: {source}")]
	Parse {
		/// 1-based line number in the source text.
		line: usize,
		#[source]
		source: Arc<serde_json::Error>,
	},

	/// The assembled value does not match the document schema.
	#[error("schema error: {0}")]
	Schema(#[source] Arc<serde_json::Error>),

	/// Validation error from validator crate.
	#[cfg(feature = "validate")]
	#[error("validation failed: {0}")]
	Validation(#[from] validator::ValidationErrors),
}

/// Coarse classification of a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// The raw text could not be obtained.
	SourceRead,
	/// A line failed to parse as JSON.
	LineParse,
	/// The parsed value was rejected by the document schema.
	Schema,
}

impl LoadError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Io(_) | Self::Utf8(_) => ErrorKind::SourceRead,
			Self::Parse { .. } => ErrorKind::LineParse,
			Self::Schema(_) => ErrorKind::Schema,
			#[cfg(feature = "validate")]
			Self::Validation(_) => ErrorKind::Schema,
		}
	}
}

impl From<std::io::Error> for LoadError {
	fn from(e: std::io::Error) -> Self {
		Self::Io(Arc::new(e))
	}
}

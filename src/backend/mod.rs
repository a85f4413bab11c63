/* src/backend/mod.rs */

//!
//! The backend contract: construct from a source, check validity, convert.
//!
//! - [`JsonlBackend`] - newline-delimited Docling JSON
//! - [`JsonBackend`] - single-value Docling JSON

mod json;
mod jsonl;

pub use json::JsonBackend;
pub use jsonl::{JsonlBackend, JsonlBackendBuilder};

use super::{Format, InputFormat, LoadError, Source, ValidateDocument};
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;

/// Outcome of the one-time load performed when a backend is constructed.
#[derive(Debug)]
pub enum LoadResult<T> {
	/// Successfully loaded, parsed and validated.
	Ok(T),
	/// The failure captured during the load.
	Invalid(LoadError),
}

impl<T> LoadResult<T> {
	pub fn is_ok(&self) -> bool {
		matches!(self, Self::Ok(_))
	}

	/// Borrows the document, or clones the captured error.
	pub fn as_result(&self) -> Result<&T, LoadError> {
		match self {
			Self::Ok(value) => Ok(value),
			Self::Invalid(e) => Err(e.clone()),
		}
	}

	pub fn into_result(self) -> Result<T, LoadError> {
		match self {
			Self::Ok(value) => Ok(value),
			Self::Invalid(e) => Err(e),
		}
	}
}

/// Capabilities shared by every format-specific backend.
pub trait DocumentBackend {
	/// The document type produced by this backend.
	type Document;

	/// Whether the load performed at construction produced a document.
	fn is_valid(&self) -> bool;

	/// Whether documents of this kind can be loaded page by page.
	fn supports_pagination() -> bool
	where
		Self: Sized;

	/// Input formats this backend claims.
	fn supported_formats() -> BTreeSet<InputFormat>
	where
		Self: Sized;
}

/// A backend that yields a whole document in one step.
pub trait DeclarativeBackend: DocumentBackend {
	/// Returns the cached document, or the failure captured at construction.
	///
	/// Repeated calls return the same document or the same error; the source is
	/// never read again.
	fn convert(&self) -> Result<&Self::Document, LoadError>;
}

/// Reads the source once and runs it through `format` and document validation.
pub(crate) fn load_document<D, S, F>(source: &S, format: &F) -> LoadResult<D>
where
	D: DeserializeOwned + ValidateDocument,
	S: Source,
	F: Format,
{
	let bytes = match source.read() {
		Ok(b) => b,
		Err(e) => return captured(source, e),
	};

	let doc = match format.parse::<D>(&bytes) {
		Ok(doc) => doc,
		Err(e) => return captured(source, e),
	};

	if let Err(e) = doc.validate_document() {
		return captured(source, e);
	}

	#[cfg(feature = "logging")]
	log::debug!(
		"Loaded {} document from {} ({} bytes)",
		format.input_format(),
		source.describe(),
		bytes.len()
	);

	LoadResult::Ok(doc)
}

fn captured<D, S: Source>(_source: &S, e: LoadError) -> LoadResult<D> {
	#[cfg(feature = "logging")]
	log::warn!("Failed to load document from {}: {}", _source.describe(), e);

	LoadResult::Invalid(e)
}

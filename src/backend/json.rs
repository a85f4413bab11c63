/* src/backend/json.rs */

use super::super::{DocumentSource, InputFormat, LoadError, ValidateDocument, format::Json};
use super::{DeclarativeBackend, DocumentBackend, LoadResult, load_document};
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;

/// Backend for a Docling document serialized as a single JSON value.
#[derive(Debug)]
pub struct JsonBackend<D> {
	source: DocumentSource,
	result: LoadResult<D>,
}

impl<D> JsonBackend<D>
where
	D: DeserializeOwned + ValidateDocument,
{
	/// Creates the backend and performs the load.
	pub fn new(source: impl Into<DocumentSource>) -> Self {
		let source = source.into();
		let result = load_document(&source, &Json);
		Self { source, result }
	}
}

impl<D> JsonBackend<D> {
	pub fn source(&self) -> &DocumentSource {
		&self.source
	}
}

impl<D> DocumentBackend for JsonBackend<D> {
	type Document = D;

	fn is_valid(&self) -> bool {
		self.result.is_ok()
	}

	fn supports_pagination() -> bool {
		false
	}

	fn supported_formats() -> BTreeSet<InputFormat> {
		BTreeSet::from([InputFormat::JsonDocling])
	}
}

impl<D> DeclarativeBackend for JsonBackend<D> {
	fn convert(&self) -> Result<&D, LoadError> {
		self.result.as_result()
	}
}

/* src/backend/jsonl.rs */

use super::super::{DocumentSource, InputFormat, LoadError, ValidateDocument, format::Jsonl};
use super::{DeclarativeBackend, DocumentBackend, LoadResult, load_document};
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::marker::PhantomData;
use std::path::PathBuf;

/// Backend for Docling documents serialized as newline-delimited JSON.
///
/// The source is read and validated exactly once, inside the constructor.
/// Construction never fails: a failure is stored and handed back by
/// [`DeclarativeBackend::convert`] on every call.
pub struct JsonlBackend<D> {
	source: DocumentSource,
	result: LoadResult<D>,
}

/// Builder for JsonlBackend.
pub struct JsonlBackendBuilder<D> {
	source: Option<DocumentSource>,
	_doc: PhantomData<fn() -> D>,
}

impl<D> JsonlBackendBuilder<D>
where
	D: DeserializeOwned + ValidateDocument,
{
	pub fn new() -> Self {
		Self {
			source: None,
			_doc: PhantomData,
		}
	}

	pub fn source(mut self, source: impl Into<DocumentSource>) -> Self {
		self.source = Some(source.into());
		self
	}

	/// Builds the backend, running the load. Fails only when no source was set.
	pub fn build(self) -> Result<JsonlBackend<D>, &'static str> {
		let source = self.source.ok_or("source is required")?;
		Ok(JsonlBackend::new(source))
	}
}

impl<D> Default for JsonlBackendBuilder<D>
where
	D: DeserializeOwned + ValidateDocument,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<D> JsonlBackend<D>
where
	D: DeserializeOwned + ValidateDocument,
{
	pub fn builder() -> JsonlBackendBuilder<D> {
		JsonlBackendBuilder::new()
	}

	/// Creates the backend and performs the load.
	pub fn new(source: impl Into<DocumentSource>) -> Self {
		let source = source.into();
		let result = load_document(&source, &Jsonl);
		Self { source, result }
	}

	pub fn from_path(path: impl Into<PathBuf>) -> Self {
		let path: PathBuf = path.into();
		Self::new(path)
	}

	pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
		let bytes: Vec<u8> = bytes.into();
		Self::new(bytes)
	}
}

impl<D> JsonlBackend<D> {
	/// The source this backend was constructed from.
	pub fn source(&self) -> &DocumentSource {
		&self.source
	}

	/// The stored outcome of the load.
	pub fn load_result(&self) -> &LoadResult<D> {
		&self.result
	}

	/// Consumes the backend, yielding the document or the captured error.
	pub fn into_document(self) -> Result<D, LoadError> {
		self.result.into_result()
	}
}

impl<D> DocumentBackend for JsonlBackend<D> {
	type Document = D;

	fn is_valid(&self) -> bool {
		self.result.is_ok()
	}

	fn supports_pagination() -> bool {
		false
	}

	fn supported_formats() -> BTreeSet<InputFormat> {
		BTreeSet::from([InputFormat::JsonlDocling])
	}
}

impl<D> DeclarativeBackend for JsonlBackend<D> {
	fn convert(&self) -> Result<&D, LoadError> {
		self.result.as_result()
	}
}

impl<D> std::fmt::Debug for JsonlBackend<D>
where
	D: std::fmt::Debug,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("JsonlBackend")
			.field("source", &self.source)
			.field("result", &self.result)
			.finish()
	}
}

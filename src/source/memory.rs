/* src/source/memory.rs */

use super::super::{LoadError, Source};
use std::borrow::Cow;

/// An in-memory source holding the complete input.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
	data: Vec<u8>,
}

impl MemorySource {
	/// Creates a MemorySource over the given bytes.
	pub fn new(data: impl Into<Vec<u8>>) -> Self {
		Self { data: data.into() }
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.data
	}
}

impl Source for MemorySource {
	fn read(&self) -> Result<Cow<'_, [u8]>, LoadError> {
		Ok(Cow::Borrowed(&self.data))
	}

	fn describe(&self) -> String {
		format!("memory buffer ({} bytes)", self.data.len())
	}
}

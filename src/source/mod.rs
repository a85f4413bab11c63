/* src/source/mod.rs */

mod file;
mod memory;

pub use file::FileSource;
pub use memory::MemorySource;

use super::{LoadError, Source};
use std::borrow::Cow;
use std::path::PathBuf;

/// The input handed to a backend: either a filesystem path or an in-memory buffer.
///
/// The set is closed, so a backend never meets a source kind it cannot read.
#[derive(Debug, Clone)]
pub enum DocumentSource {
	/// Read from a file at construction time.
	File(FileSource),
	/// Decode an owned byte buffer.
	Memory(MemorySource),
}

impl Source for DocumentSource {
	fn read(&self) -> Result<Cow<'_, [u8]>, LoadError> {
		match self {
			Self::File(s) => s.read(),
			Self::Memory(s) => s.read(),
		}
	}

	fn describe(&self) -> String {
		match self {
			Self::File(s) => s.describe(),
			Self::Memory(s) => s.describe(),
		}
	}
}

impl From<FileSource> for DocumentSource {
	fn from(source: FileSource) -> Self {
		Self::File(source)
	}
}

impl From<MemorySource> for DocumentSource {
	fn from(source: MemorySource) -> Self {
		Self::Memory(source)
	}
}

impl From<PathBuf> for DocumentSource {
	fn from(path: PathBuf) -> Self {
		Self::File(FileSource::new(path))
	}
}

impl From<&std::path::Path> for DocumentSource {
	fn from(path: &std::path::Path) -> Self {
		Self::File(FileSource::new(path))
	}
}

impl From<Vec<u8>> for DocumentSource {
	fn from(bytes: Vec<u8>) -> Self {
		Self::Memory(MemorySource::new(bytes))
	}
}

impl From<&[u8]> for DocumentSource {
	fn from(bytes: &[u8]) -> Self {
		Self::Memory(MemorySource::new(bytes.to_vec()))
	}
}

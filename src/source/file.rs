/* src/source/file.rs */

use super::super::{LoadError, Source};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// A file system source. The file is opened, read to the end and closed on each `read`.
#[derive(Debug, Clone)]
pub struct FileSource {
	path: PathBuf,
}

impl FileSource {
	/// Create a new FileSource for the given path.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl Source for FileSource {
	fn read(&self) -> Result<Cow<'_, [u8]>, LoadError> {
		// std::fs::read drops the handle on every exit path, including errors.
		let bytes = std::fs::read(&self.path)?;
		Ok(Cow::Owned(bytes))
	}

	fn describe(&self) -> String {
		format!("file {}", self.path.display())
	}
}

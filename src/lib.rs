/* src/lib.rs */

//!
//! Loads newline-delimited JSON (JSONL) into a validated document.
//!
//! The crate is a format adapter. It owns no document model: the target type is
//! supplied by the caller and only needs to implement [`serde::Deserialize`].
//!
//! - **source**: where the raw bytes come from (a path or an in-memory buffer).
//! - **format**: how bytes become a typed value ([`format::Jsonl`], [`format::Json`]).
//! - **backend**: the construct / validate / convert contract ([`JsonlBackend`]).
//!
//! ## Feature Flags
//!
//! - `logging` (default): Emits `log` records when a load succeeds or fails.
//! - `validate`: Runs `validator::Validate` on the document after deserialization.
//! - `full`: Enables all features.
//!
//! ## Basic Usage
//!
//! See `demos/basic.rs` for a complete example.

pub mod backend;
pub mod error;
pub mod format;
pub mod input_format;
pub mod source;

pub use backend::{DeclarativeBackend, DocumentBackend, JsonBackend, JsonlBackend, LoadResult};
pub use error::{ErrorKind, LoadError};
pub use input_format::InputFormat;
pub use source::{DocumentSource, FileSource, MemorySource};

use serde::de::DeserializeOwned;
use std::borrow::Cow;

/// Internal trait for optional validation.
#[cfg(feature = "validate")]
pub trait ValidateDocument: validator::Validate {
	fn validate_document(&self) -> Result<(), LoadError> {
		self.validate().map_err(LoadError::Validation)
	}
}

#[cfg(feature = "validate")]
impl<T: validator::Validate> ValidateDocument for T {}

#[cfg(not(feature = "validate"))]
pub trait ValidateDocument {
	fn validate_document(&self) -> Result<(), LoadError> {
		Ok(())
	}
}

#[cfg(not(feature = "validate"))]
impl<T> ValidateDocument for T {}

/// Abstract format parser that converts bytes into a structured object.
pub trait Format {
	/// Tag claimed by this format.
	fn input_format(&self) -> InputFormat;

	/// Parse the raw bytes into the target type.
	fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, LoadError>;
}

/// Abstract data source that yields the complete raw contents at once.
pub trait Source {
	/// Read the full contents. Sources that already hold the bytes lend them.
	fn read(&self) -> Result<Cow<'_, [u8]>, LoadError>;

	/// Short human-readable description, used in log records.
	fn describe(&self) -> String;
}

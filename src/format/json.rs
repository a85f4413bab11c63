/* src/format/json.rs */

use super::super::{Format, InputFormat, LoadError};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use std::sync::Arc;

/// Single-document JSON parser using `serde_json`.
pub struct Json;

impl Format for Json {
	fn input_format(&self) -> InputFormat {
		InputFormat::JsonDocling
	}

	fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, LoadError> {
		let text = std::str::from_utf8(input)?;
		serde_json::from_str(text).map_err(|e| match e.classify() {
			Category::Data => LoadError::Schema(Arc::new(e)),
			Category::Io | Category::Syntax | Category::Eof => LoadError::Parse {
				line: e.line(),
				source: Arc::new(e),
			},
		})
	}
}

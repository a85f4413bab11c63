/* src/format/jsonl.rs */

use super::super::{Format, InputFormat, LoadError};
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use std::sync::Arc;

/// Newline-delimited JSON parser.
///
/// Every non-blank line is parsed as one JSON value. The values are joined, in
/// order and as written, into a single JSON array, and that array is what the
/// target type is deserialized from.
pub struct Jsonl;

impl Format for Jsonl {
	fn input_format(&self) -> InputFormat {
		InputFormat::JsonlDocling
	}

	fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, LoadError> {
		let text = std::str::from_utf8(input)?;
		let values = parse_lines(text)?;

		let array = join_array(&values);
		serde_json::from_str(&array).map_err(|e| LoadError::Schema(Arc::new(e)))
	}
}

/// Splits text into lines. `\n`, `\r\n` and a lone `\r` each end a line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
	text.split('\n').flat_map(|line| {
		let line = line.strip_suffix('\r').unwrap_or(line);
		line.split('\r')
	})
}

/// Parses every non-blank line into a raw JSON value, stopping at the first bad line.
///
/// Only JSON whitespace may surround a value; a line is blank when it holds
/// nothing but whitespace of any kind.
pub fn parse_lines(text: &str) -> Result<Vec<Box<RawValue>>, LoadError> {
	let mut values = Vec::new();

	for (idx, line) in split_lines(text).enumerate() {
		if line.trim().is_empty() {
			continue;
		}
		let value = serde_json::from_str(line).map_err(|e| LoadError::Parse {
			line: idx + 1,
			source: Arc::new(e),
		})?;
		values.push(value);
	}

	Ok(values)
}

fn join_array(values: &[Box<RawValue>]) -> String {
	let len = values.iter().map(|v| v.get().len() + 1).sum::<usize>() + 2;
	let mut array = String::with_capacity(len);
	array.push('[');
	for (i, value) in values.iter().enumerate() {
		if i > 0 {
			array.push(',');
		}
		array.push_str(value.get().trim());
	}
	array.push(']');
	array
}

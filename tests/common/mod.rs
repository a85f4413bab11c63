/* tests/common/mod.rs */

#![allow(dead_code)]

use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

/// Merges every line object into one map; later keys win.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(from = "Vec<Map<String, Value>>")]
pub struct Merged {
	pub fields: Map<String, Value>,
}

impl From<Vec<Map<String, Value>>> for Merged {
	fn from(lines: Vec<Map<String, Value>>) -> Self {
		let mut fields = Map::new();
		for line in lines {
			fields.extend(line);
		}
		Self { fields }
	}
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "label", rename_all = "snake_case")]
pub enum Item {
	Title { text: String },
	Paragraph { text: String },
	Table { rows: Vec<Vec<String>> },
}

/// One item per line.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(transparent)]
pub struct Document {
	pub items: Vec<Item>,
}

/// Like [`Document`], but rejects a document without items.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(try_from = "Vec<Item>")]
pub struct NonEmptyDocument {
	pub items: Vec<Item>,
}

impl TryFrom<Vec<Item>> for NonEmptyDocument {
	type Error = String;

	fn try_from(items: Vec<Item>) -> Result<Self, Self::Error> {
		if items.is_empty() {
			return Err("document has no items".to_string());
		}
		Ok(Self { items })
	}
}

pub const SAMPLE: &str = concat!(
	"{\"label\": \"title\", \"text\": \"Quarterly Report\"}\n",
	"{\"label\": \"paragraph\", \"text\": \"Revenue grew.\"}\n",
	"{\"label\": \"table\", \"rows\": [[\"q1\", \"10\"], [\"q2\", \"12\"]]}\n",
);

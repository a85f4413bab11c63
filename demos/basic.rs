/* demos/basic.rs */

use jsonl_doc::{DeclarativeBackend, DocumentBackend, JsonlBackend};
use serde::Deserialize;
use std::fs;
use validator::Validate;

#[derive(Debug, Deserialize)]
#[serde(tag = "label", rename_all = "snake_case")]
enum Item {
	Title { text: String },
	Paragraph { text: String },
}

#[derive(Debug, Deserialize, Validate)]
#[serde(transparent)]
struct Document {
	items: Vec<Item>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// 0. Prepare a real file
	let path = "example_document.jsonl";
	fs::write(
		path,
		"{\"label\": \"title\", \"text\": \"Release Notes\"}\n\n{\"label\": \"paragraph\", \"text\": \"Bug fixes.\"}\n",
	)?;
	println!("Created {}", path);

	// 1. Load from the path; nothing is raised here
	let backend = JsonlBackend::<Document>::from_path(path);
	println!("Valid: {}", backend.is_valid());

	// 2. Retrieve the document
	let doc = backend.convert()?;
	for item in &doc.items {
		match item {
			Item::Title { text } => println!("# {}", text),
			Item::Paragraph { text } => println!("{}", text),
		}
	}

	// 3. A broken buffer reports its failure on every convert
	let broken = JsonlBackend::<Document>::from_bytes("{\"label\": \"title\"}\nnot-json\n");
	println!("Valid: {}", broken.is_valid());
	if let Err(e) = broken.convert() {
		println!("Error: {}", e);
	}

	// Cleanup
	fs::remove_file(path)?;
	println!("Done.");
	Ok(())
}

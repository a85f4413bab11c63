/* src/input_format.rs */

//!
//! Input format tags. A format registry dispatches on these; each backend
//! claims the tags it can read.

use std::fmt;

/// A document input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputFormat {
	Docx,
	Pptx,
	Html,
	Image,
	Pdf,
	Asciidoc,
	Md,
	Csv,
	Xlsx,
	XmlUspto,
	XmlJats,
	/// A whole Docling document serialized as one JSON value.
	JsonDocling,
	/// A Docling document serialized as newline-delimited JSON.
	JsonlDocling,
}

impl InputFormat {
	pub const ALL: [InputFormat; 13] = [
		Self::Docx,
		Self::Pptx,
		Self::Html,
		Self::Image,
		Self::Pdf,
		Self::Asciidoc,
		Self::Md,
		Self::Csv,
		Self::Xlsx,
		Self::XmlUspto,
		Self::XmlJats,
		Self::JsonDocling,
		Self::JsonlDocling,
	];

	/// Stable lowercase name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Docx => "docx",
			Self::Pptx => "pptx",
			Self::Html => "html",
			Self::Image => "image",
			Self::Pdf => "pdf",
			Self::Asciidoc => "asciidoc",
			Self::Md => "md",
			Self::Csv => "csv",
			Self::Xlsx => "xlsx",
			Self::XmlUspto => "xml_uspto",
			Self::XmlJats => "xml_jats",
			Self::JsonDocling => "json_docling",
			Self::JsonlDocling => "jsonl_docling",
		}
	}

	/// File extensions associated with the format.
	pub fn extensions(&self) -> &'static [&'static str] {
		match self {
			Self::Docx => &["docx", "dotx", "docm", "dotm"],
			Self::Pptx => &["pptx", "potx", "ppsx", "pptm", "potm", "ppsm"],
			Self::Html => &["html", "htm", "xhtml"],
			Self::Image => &["jpg", "jpeg", "png", "tif", "tiff", "bmp", "webp"],
			Self::Pdf => &["pdf"],
			Self::Asciidoc => &["adoc", "asciidoc", "asc"],
			Self::Md => &["md"],
			Self::Csv => &["csv"],
			Self::Xlsx => &["xlsx", "xlsm"],
			Self::XmlUspto => &["xml", "txt"],
			Self::XmlJats => &["xml", "nxml"],
			Self::JsonDocling => &["json"],
			Self::JsonlDocling => &["jsonl"],
		}
	}

	/// MIME types associated with the format.
	pub fn mime_types(&self) -> &'static [&'static str] {
		match self {
			Self::Docx => &["application/vnd.openxmlformats-officedocument.wordprocessingml.document"],
			Self::Pptx => &["application/vnd.openxmlformats-officedocument.presentationml.presentation"],
			Self::Html => &["text/html", "application/xhtml+xml"],
			Self::Image => &["image/png", "image/jpeg", "image/tiff", "image/bmp", "image/webp"],
			Self::Pdf => &["application/pdf"],
			Self::Asciidoc => &["text/asciidoc"],
			Self::Md => &["text/markdown", "text/x-markdown"],
			Self::Csv => &["text/csv"],
			Self::Xlsx => &["application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"],
			Self::XmlUspto => &["application/xml", "text/plain"],
			Self::XmlJats => &["application/xml"],
			Self::JsonDocling => &["application/json"],
			Self::JsonlDocling => &["application/jsonl", "application/x-ndjson"],
		}
	}

	/// Resolves the first format claiming the extension (case-insensitive, leading dot allowed).
	///
	/// Extensions shared by several formats (e.g. `xml`) resolve to the first in [`Self::ALL`].
	pub fn from_extension(ext: &str) -> Option<Self> {
		let ext = ext.trim_start_matches('.').to_ascii_lowercase();
		Self::ALL
			.into_iter()
			.find(|format| format.extensions().contains(&ext.as_str()))
	}
}

impl fmt::Display for InputFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/* src/format/mod.rs */

mod json;
pub use json::Json;

mod jsonl;
pub use jsonl::{Jsonl, parse_lines, split_lines};

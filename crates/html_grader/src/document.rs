use crate::error::GraderError;
use scraper::Html;
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn load_document(path: &Path) -> Result<Html, GraderError> {
	let raw = fs::read(path).map_err(|e| GraderError::read_error(path, e))?;
	debug!(path = %path.display(), bytes = raw.len(), "read html file");
	Ok(parse_document(&raw))
}

/// Parses raw bytes as an HTML document. Invalid UTF-8 is replaced rather than rejected.
pub fn parse_document(raw: &[u8]) -> Html {
	Html::parse_document(&String::from_utf8_lossy(raw))
}

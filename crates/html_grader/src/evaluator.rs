use crate::error::GraderError;
use scraper::{Html, Selector};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use tracing::debug;

/// Selector → whether at least one element matched, in sorted selector order.
///
/// Keys sort by UTF-8 bytes, which differs from UTF-16 code unit order only when astral characters meet U+E000..=U+FFFF.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CheckResults(BTreeMap<String, bool>);

impl CheckResults {
	pub fn get(&self, selector: &str) -> Option<bool> {
		self.0.get(selector).copied()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
		self.0.iter().map(|(selector, present)| (selector.as_str(), *present))
	}

	/// JSON object with 4-space indentation.
	pub fn to_json_pretty(&self) -> Result<String, GraderError> {
		let mut buf = Vec::new();
		let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
		self.serialize(&mut ser)?;
		// serde_json only ever writes UTF-8.
		Ok(String::from_utf8(buf).expect("serde_json produced invalid UTF-8"))
	}
}

pub fn evaluate(document: &Html, selectors: &[String]) -> Result<CheckResults, GraderError> {
	let mut sorted = selectors.to_vec();
	sorted.sort();
	sorted.dedup();

	let mut out = BTreeMap::new();
	for check in sorted {
		let selector = Selector::parse(&check).map_err(|e| GraderError::invalid_selector_error(&check, format!("{e:?}")))?;
		let present = document.select(&selector).next().is_some();
		debug!(selector = %check, present, "evaluated selector");
		out.insert(check, present);
	}

	Ok(CheckResults(out))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::document::parse_document;

	fn checks(list: &[&str]) -> Vec<String> {
		list.iter().map(|s| (*s).to_string()).collect()
	}

	#[test]
	fn test_present_and_absent_tags() {
		let document = parse_document(b"<html><h1>x</h1></html>");
		let results = evaluate(&document, &checks(&["h1", "h2"])).unwrap();
		assert_eq!(results.get("h1"), Some(true));
		assert_eq!(results.get("h2"), Some(false));
		assert_eq!(results.to_json_pretty().unwrap(), "{\n    \"h1\": true,\n    \"h2\": false\n}");
	}

	#[test]
	fn test_keys_come_out_sorted() {
		let document = parse_document(b"<div></div>");
		let results = evaluate(&document, &checks(&["p", "div", "a"])).unwrap();
		let keys: Vec<&str> = results.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, vec!["a", "div", "p"]);
		assert_eq!(results.get("div"), Some(true));
		assert_eq!(results.get("a"), Some(false));
		assert_eq!(results.get("p"), Some(false));
	}

	#[test]
	fn test_many_matches_is_still_true() {
		let document = parse_document(b"<ul><li>1</li><li>2</li><li>3</li></ul>");
		let results = evaluate(&document, &checks(&["li"])).unwrap();
		assert_eq!(results.get("li"), Some(true));
	}

	#[test]
	fn test_attribute_and_compound_selectors() {
		let document = parse_document(br#"<a href="/x">x</a><a>y</a><section id="i18n"><p class="note">n</p></section>"#);
		let results = evaluate(&document, &checks(&["a[href]", "a[title]", "#i18n", "section > p.note", "div.note"])).unwrap();
		assert_eq!(results.get("a[href]"), Some(true));
		assert_eq!(results.get("a[title]"), Some(false));
		assert_eq!(results.get("#i18n"), Some(true));
		assert_eq!(results.get("section > p.note"), Some(true));
		assert_eq!(results.get("div.note"), Some(false));
	}

	#[test]
	fn test_duplicates_collapse_to_one_key() {
		let document = parse_document(b"<p>x</p>");
		let results = evaluate(&document, &checks(&["p", "em", "p"])).unwrap();
		assert_eq!(results.len(), 2);
		assert_eq!(results.get("p"), Some(true));
	}

	#[test]
	fn test_input_order_does_not_matter() {
		let document = parse_document(b"<main><h1>t</h1><img src=\"a.png\"></main>");
		let forward = evaluate(&document, &checks(&["img[src]", "h1", "footer"])).unwrap();
		let mut sorted = checks(&["img[src]", "h1", "footer"]);
		sorted.sort();
		let again = evaluate(&document, &sorted).unwrap();
		assert_eq!(forward, again);
		assert_eq!(forward.to_json_pretty().unwrap(), again.to_json_pretty().unwrap());
	}

	#[test]
	fn test_non_ascii_selectors_serialize_verbatim() {
		let document = parse_document("<p class=\"café\">x</p>".as_bytes());
		let results = evaluate(&document, &checks(&["p.café", "p.日本"])).unwrap();
		assert_eq!(results.to_json_pretty().unwrap(), "{\n    \"p.café\": true,\n    \"p.日本\": false\n}");
	}

	#[test]
	fn test_empty_checklist() {
		let document = parse_document(b"<p>x</p>");
		let results = evaluate(&document, &[]).unwrap();
		assert!(results.is_empty());
		assert_eq!(results.to_json_pretty().unwrap(), "{}");
	}

	#[test]
	fn test_invalid_selector_is_an_error() {
		let document = parse_document(b"<p>x</p>");
		let err = evaluate(&document, &checks(&["p", "!!"])).unwrap_err();
		assert!(matches!(err, GraderError::InvalidSelector { ref selector, .. } if selector == "!!"));
	}
}

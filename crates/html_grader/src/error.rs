use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraderError {
	#[error("{} does not exist. Exiting.", path.display())]
	MissingFile { path: PathBuf },

	#[error("Failed to read {}: {source}", path.display())]
	Read { path: PathBuf, source: io::Error },

	#[error("Checklist {} is not a JSON array of selector strings: {source}", path.display())]
	Checklist { path: PathBuf, source: serde_json::Error },

	#[error("Invalid selector \"{selector}\": {reason}")]
	InvalidSelector { selector: String, reason: String },

	#[error("Failed to fetch {url}: {source}")]
	Fetch { url: String, source: reqwest::Error },

	#[error("Failed to write fetched page to {}: {source}", path.display())]
	Scratch { path: PathBuf, source: io::Error },

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl GraderError {
	pub fn missing_file_error(path: &Path) -> Self {
		Self::MissingFile { path: path.to_path_buf() }
	}

	pub fn read_error(path: &Path, source: io::Error) -> Self {
		Self::Read {
			path: path.to_path_buf(),
			source,
		}
	}

	pub fn checklist_error(path: &Path, source: serde_json::Error) -> Self {
		Self::Checklist {
			path: path.to_path_buf(),
			source,
		}
	}

	pub fn invalid_selector_error(selector: &str, reason: impl Into<String>) -> Self {
		Self::InvalidSelector {
			selector: selector.to_string(),
			reason: reason.into(),
		}
	}

	pub fn fetch_error(url: &str, source: reqwest::Error) -> Self {
		Self::Fetch { url: url.to_string(), source }
	}

	pub fn scratch_error(path: &Path, source: io::Error) -> Self {
		Self::Scratch {
			path: path.to_path_buf(),
			source,
		}
	}

	/// True for the one failure the binary reports with a friendly message and exit code 1.
	pub const fn is_missing_file(&self) -> bool {
		matches!(self, Self::MissingFile { .. })
	}
}

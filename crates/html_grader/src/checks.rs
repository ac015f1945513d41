use crate::error::GraderError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Returns `path` unchanged if it names an existing file.
pub fn verify_exists(path: &Path) -> Result<&Path, GraderError> {
	if path.is_file() {
		Ok(path)
	} else {
		Err(GraderError::missing_file_error(path))
	}
}

/// Like [`verify_exists`], but a missing file ends the process with exit code 1.
pub fn assert_file_exists(path: &Path) -> PathBuf {
	match verify_exists(path) {
		Ok(path) => path.to_path_buf(),
		Err(err) => {
			eprintln!("{err}");
			std::process::exit(1);
		}
	}
}

/// Reads a checklist: a JSON array of selector strings.
pub fn load_checklist(path: &Path) -> Result<Vec<String>, GraderError> {
	let raw = fs::read(path).map_err(|e| GraderError::read_error(path, e))?;
	let checks: Vec<String> = serde_json::from_slice(&raw).map_err(|e| GraderError::checklist_error(path, e))?;
	debug!(path = %path.display(), count = checks.len(), "loaded checklist");
	Ok(checks)
}

pub mod checks;
pub mod config;
pub mod document;
pub mod error;
pub mod evaluator;
pub mod fetch;
pub mod observability;

pub use checks::{assert_file_exists, load_checklist, verify_exists};
pub use config::{resolve_source, Config, HtmlSource};
pub use document::{load_document, parse_document};
pub use error::GraderError;
pub use evaluator::{evaluate, CheckResults};
pub use fetch::Fetcher;

use std::path::Path;
use tracing::info;

/// Grades an HTML file on disk against a checklist file.
pub fn check_html_file(html_path: &Path, checks_path: &Path) -> Result<CheckResults, GraderError> {
	let document = load_document(html_path)?;
	let checks = load_checklist(checks_path)?;
	evaluate(&document, &checks)
}

/// Resolves the HTML source, fetching it first when it is a URL, then grades it.
pub async fn run(config: &Config) -> Result<CheckResults, GraderError> {
	let checks_path = verify_exists(&config.checks)?;

	let document = match resolve_source(config)? {
		HtmlSource::File(path) => {
			info!(path = %path.display(), "grading file");
			load_document(&path)?
		}
		HtmlSource::Url(url) => {
			info!(%url, "grading url");
			let body = Fetcher::new(&config.scratch_file).fetch_url(&url).await?;
			parse_document(&body)
		}
	};

	let checks = load_checklist(checks_path)?;
	evaluate(&document, &checks)
}

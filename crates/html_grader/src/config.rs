use crate::checks::verify_exists;
use crate::error::GraderError;
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

pub const CHECKSFILE_DEFAULT: &str = "checks.json";
pub const HTMLFILE_DEFAULT: &str = "index.html";
pub const URL_FILENAME: &str = "url_file.txt";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser, Debug, Clone)]
#[command(name = "html-grader")]
#[command(author, version, about = "Grades an HTML page for the presence of CSS selectors", long_about = None)]
pub struct Config {
	/// Path to checks.json
	#[arg(short, long, env = "CHECKS_FILE", value_name = "CHECK_FILE", default_value = CHECKSFILE_DEFAULT)]
	pub checks: PathBuf,

	/// Path to index.html
	#[arg(short, long, env = "HTML_FILE", value_name = "HTML_FILE")]
	pub file: Option<PathBuf>,

	/// URL to page
	#[arg(short, long, env = "HTML_URL", value_name = "URL")]
	pub url: Option<String>,

	/// Where the body of a fetched page is written
	#[arg(long, env = "URL_FILENAME", default_value = URL_FILENAME)]
	pub scratch_file: PathBuf,

	/// Tracing filter directives, e.g. "html_grader=debug"
	#[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
	pub rust_log: String,

	/// Emit logs as JSON lines
	#[arg(long, env = "LOG_JSON")]
	pub log_json: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			checks: PathBuf::from(CHECKSFILE_DEFAULT),
			file: None,
			url: None,
			scratch_file: PathBuf::from(URL_FILENAME),
			rust_log: DEFAULT_LOG_FILTER.to_string(),
			log_json: false,
		}
	}
}

/// Where the HTML under test comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlSource {
	File(PathBuf),
	Url(String),
}

/// Picks the HTML source for a run. An explicit file wins over a URL; with neither, the
/// default `index.html` is used without checking that it exists.
pub fn resolve_source(config: &Config) -> Result<HtmlSource, GraderError> {
	if config.file.is_some() && config.url.is_some() {
		warn!("have specified both file and url");
	}

	match (&config.file, &config.url) {
		(Some(file), _) => Ok(HtmlSource::File(verify_exists(file)?.to_path_buf())),
		(None, Some(url)) => Ok(HtmlSource::Url(url.clone())),
		(None, None) => Ok(HtmlSource::File(PathBuf::from(HTMLFILE_DEFAULT))),
	}
}

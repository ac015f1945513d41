use crate::error::GraderError;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Downloads pages and keeps a copy of the last successful body in a scratch file.
pub struct Fetcher {
	client: reqwest::Client,
	scratch_file: PathBuf,
}

impl Fetcher {
	pub fn new(scratch_file: impl Into<PathBuf>) -> Self {
		Self {
			client: reqwest::Client::new(),
			scratch_file: scratch_file.into(),
		}
	}

	pub fn scratch_file(&self) -> &Path {
		&self.scratch_file
	}

	/// GETs `url` and returns its body. Non-2xx responses count as failures; on failure the
	/// scratch file is not touched. No retries.
	pub async fn fetch_url(&self, url: &str) -> Result<Vec<u8>, GraderError> {
		let body = match self.get(url).await {
			Ok(body) => body,
			Err(e) => {
				error!(url, error = %e, "fetch failed");
				return Err(GraderError::fetch_error(url, e));
			}
		};

		tokio::fs::write(&self.scratch_file, &body)
			.await
			.map_err(|e| GraderError::scratch_error(&self.scratch_file, e))?;

		info!(url, bytes = body.len(), scratch_file = %self.scratch_file.display(), "fetched page");
		Ok(body)
	}

	async fn get(&self, url: &str) -> Result<Vec<u8>, reqwest::Error> {
		let response = self.client.get(url).send().await?.error_for_status()?;
		Ok(response.bytes().await?.to_vec())
	}
}

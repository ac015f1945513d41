use clap::Parser;
use html_grader::observability::init_tracing;
use html_grader::{assert_file_exists, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	dotenv::dotenv().ok();

	let config = Config::parse();

	// Missing inputs end the run here with exit code 1, before any logging or fetching.
	assert_file_exists(&config.checks);
	if let Some(file) = &config.file {
		assert_file_exists(file);
	}

	init_tracing(&config);

	let results = html_grader::run(&config).await?;
	println!("{}", results.to_json_pretty()?);

	Ok(())
}

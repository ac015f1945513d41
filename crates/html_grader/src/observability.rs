use crate::config::{Config, DEFAULT_LOG_FILTER};
use std::io::IsTerminal;
use tracing_subscriber::{filter::EnvFilter, fmt::format::JsonFields, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Logs go to stderr; stdout is reserved for the JSON report.
pub fn init_tracing(config: &Config) {
	let filter = EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

	tracing_subscriber::registry()
		.with(if config.log_json {
			Box::new(
				tracing_subscriber::fmt::layer()
					.fmt_fields(JsonFields::default())
					.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
					.with_writer(std::io::stderr)
					.with_filter(filter),
			) as Box<dyn Layer<_> + Send + Sync>
		} else {
			Box::new(
				tracing_subscriber::fmt::layer()
					.without_time()
					.with_target(false)
					.with_ansi(std::io::stderr().is_terminal())
					.with_writer(std::io::stderr)
					.with_filter(filter),
			)
		})
		.init();
}

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Installs the global tracing subscriber, writing to stderr so run
/// output on stdout stays machine-parseable.
///
/// A `RUST_LOG` value takes precedence over the `-v` ladder.
pub fn init_logging(verbosity: u8) {
	// Below -vv the engine's protocol chatter is cut entirely; one
	// navigation produces hundreds of frames otherwise.
	let filter = match verbosity {
		0 => "error,playwright_core=off,pw=off",
		1 => "info,playwright_core=warn",
		_ => "debug",
	};

	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

	let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(stderr)
		.with_target(true)
		.with_level(true)
		.compact()
		.init();
}

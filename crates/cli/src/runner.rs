//! Orchestrates a full validation run: load checks, open a session,
//! evaluate every check, close, report.

use tracing::info;

use crate::browser::{LivePage, ValidationSession, urls_equivalent};
use crate::checks::{self, CheckReport, evaluate_one};
use crate::cli::Cli;
use crate::config::RunConfig;
use crate::error::Result;
use crate::output::{
	CheckRunData, DiagnosticLevel, OutputFormat, ResultBuilder, print_outcome_line, print_result,
	print_summary,
};

/// Runs the validation end to end and prints the result in the
/// requested format. Returns the aggregate verdict.
///
/// The session is closed before this returns, on success and on every
/// failure path after launch.
pub async fn run(cli: &Cli) -> Result<bool> {
	let checks = checks::load_checks(&cli.checks)?;
	let config = RunConfig::from_cli(cli);
	info!(url = %config.target_url, browser = %config.browser_kind, count = checks.len(), "starting validation run");

	// Timer starts before launch so timings cover the whole run.
	let builder = ResultBuilder::new("check");

	let mut session = ValidationSession::new();
	session.open(&config).await?;

	let mut outcomes = Vec::with_capacity(checks.len());
	if let Some(page) = session.page() {
		let probe = LivePage::new(page);
		for check in &checks {
			let outcome = evaluate_one(&probe, check).await;
			if cli.format == OutputFormat::Text {
				print_outcome_line(&outcome);
			}
			outcomes.push(outcome);
		}
	}
	let resolved_url = session.resolved_url();
	session.close().await;

	let report = CheckReport::new(outcomes);
	let data = CheckRunData::new(&config.target_url, config.browser_kind, report);
	let passed = data.passed;

	let mut builder = builder.data(data);
	if let Some(resolved) = resolved_url {
		if !urls_equivalent(&resolved, &config.target_url) {
			builder = builder.diagnostic(
				DiagnosticLevel::Warning,
				format!(
					"page resolved to {resolved} instead of {} (redirect?)",
					config.target_url
				),
			);
		}
	}
	let result = builder.build();

	if cli.format == OutputFormat::Text {
		if let Some(data) = &result.data {
			print_summary(data);
		}
	}
	print_result(&result, cli.format);

	Ok(passed)
}

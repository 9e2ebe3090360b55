use clap::Parser;

use uicheck_cli::cli::Cli;
use uicheck_cli::logging::init_logging;
use uicheck_cli::output::{CheckRunData, CommandResult, ResultBuilder, print_result};
use uicheck_cli::runner;

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let exit_code = match runner::run(&cli).await {
		Ok(true) => 0,
		Ok(false) => 1,
		Err(err) => {
			let result: CommandResult<CheckRunData> = ResultBuilder::new("check")
				.error(err.to_command_error())
				.build();
			print_result(&result, cli.format);
			1
		}
	};

	std::process::exit(exit_code);
}

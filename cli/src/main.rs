//! `heroes`: command-line front end for the heroes REST API.

use std::io::Write;
use std::process::ExitCode;

use hero_core::{HeroClient, HeroService, ReqwestTransport, TracingSink};

mod app;
mod cli;

use app::{exit_code, run_lenient, run_strict, setup_tracing};
use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {e}");
            return exit_code::INTERNAL_ERROR;
        }
    };

    let client = HeroClient::new(&cli.base_url).with_resource_path(&cli.resource_path);
    let service = HeroService::new(client, ReqwestTransport::new(), TracingSink);

    let output = if cli.strict {
        match runtime.block_on(run_strict(&service, cli.command)) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("{e}");
                return exit_code::api_error();
            }
        }
    } else {
        runtime.block_on(run_lenient(&service, cli.command))
    };

    let mut stdout = std::io::stdout().lock();
    match writeln!(stdout, "{output}") {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("Failed to write output: {e}");
            exit_code::INTERNAL_ERROR
        }
    }
}

use std::env;
use std::io;
use std::process;

use clap::error::ErrorKind;
use tracing::debug;

use autoweka_tools::cli::{WrapperArgs, WRAPPER_USAGE};
use autoweka_tools::error::{Result, ToolError};
use autoweka_tools::logging;
use autoweka_tools::models::RunResult;
use autoweka_tools::wrapper::{run_solver, RunRequest, WrapperConfig};

/// Exit status for bad arguments (`exit -1` truncated by the OS).
const USAGE_EXIT_CODE: i32 = 255;

fn main() {
    logging::init();

    let args = parse_args();
    let request = args.to_request();

    match run(&request) {
        Ok(result) => println!("{}", result),
        Err(e @ ToolError::Launch { .. }) => {
            // Still hand the configurator a parsable line.
            eprintln!("Error: {}", e);
            println!("{}", RunResult::defaults(request.cutoff_time, request.seed));
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn parse_args() -> WrapperArgs {
    match WrapperArgs::try_parse_split(env::args_os()) {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprint!("{}", e);
                println!("{}", WRAPPER_USAGE);
                process::exit(USAGE_EXIT_CODE);
            }
        },
    }
}

fn run(request: &RunRequest) -> Result<RunResult> {
    let config = WrapperConfig::from_env()?;
    debug!(?config, "wrapper configured");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_solver(&config, request, &mut out)
}

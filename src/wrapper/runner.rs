use std::io::Write;
use std::process::Stdio;

use tracing::{debug, info};

use crate::error::{Result, ToolError};
use crate::models::RunResult;
use crate::wrapper::config::{RunRequest, WrapperConfig};
use crate::wrapper::invocation::SolverInvocation;
use crate::wrapper::output::parse_solver_output;
use crate::wrapper::scratch::ScratchFile;

/// Run the solver once and collect its statistics.
///
/// The platform banner and the command line are echoed to `out` before the
/// solver starts. The call blocks until the solver exits; its exit code is
/// not inspected. The scratch output file is gone when this returns,
/// whether or not the run succeeded.
pub fn run_solver<W: Write>(
    config: &WrapperConfig,
    request: &RunRequest,
    out: &mut W,
) -> Result<RunResult> {
    let invocation = SolverInvocation::build(config, request);

    if let Some(banner) = config.platform.banner() {
        writeln!(out, "{}", banner)?;
    }

    let (scratch, stdout_file) = ScratchFile::create_in(&config.output_dir)?;
    writeln!(out, "Calling: {} > {}", invocation, scratch.path().display())?;
    out.flush()?;

    info!(instance = %request.instance, seed = request.seed, "starting solver");
    let status = invocation
        .to_command()
        .stdin(Stdio::null())
        .stdout(Stdio::from(stdout_file))
        .status()
        .map_err(|source| ToolError::Launch {
            program: invocation.program.clone(),
            source,
        })?;
    debug!(%status, "solver exited");

    let defaults = RunResult::defaults(request.cutoff_time, request.seed);
    let result = parse_solver_output(scratch.open()?, defaults)?;
    scratch.remove()?;

    Ok(result)
}

use std::fmt;
use std::path::PathBuf;
use std::process::Command;

use crate::models::format_seconds;
use crate::wrapper::config::{RunRequest, WrapperConfig};

/// Algorithm selector passed to ubcsat.
const ALGORITHM: &str = "saps";

/// Report flags making ubcsat print the run statistics we parse.
const REPORT_FLAGS: [&str; 4] = ["-r", "stats", "stdout", "default,best"];

/// Program and argument vector for one solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverInvocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl SolverInvocation {
    pub fn build(config: &WrapperConfig, request: &RunRequest) -> Self {
        let mut args = vec!["-alg".to_string(), ALGORITHM.to_string()];
        args.extend(request.extra_params.iter().cloned());
        args.extend([
            "-inst".to_string(),
            request.instance.clone(),
            "-cutoff".to_string(),
            request.cutoff_length.to_string(),
            "-timeout".to_string(),
            format_seconds(request.cutoff_time),
            "-target".to_string(),
            request.target_quality().to_string(),
            "-seed".to_string(),
            request.seed.to_string(),
        ]);
        args.extend(REPORT_FLAGS.iter().map(|flag| flag.to_string()));

        Self {
            program: config.solver_binary(),
            args,
        }
    }

    /// A process command with the arguments passed as-is, no shell involved.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for SolverInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::wrapper::RunRequest;

/// Generate the LaTeX configuration-space tables from a directory of `.params` files.
#[derive(Parser, Debug)]
#[command(name = "param_table")]
#[command(author, version, about, long_about = None)]
pub struct ParamTableArgs {
    /// Root of the parameter directory (contains base/, ensemble/, meta/, attribselection/).
    pub param_dir: PathBuf,
}

/// Wrapper running the SAPS algorithm of ubcsat for an algorithm configurator.
///
/// The solver directory defaults to the wrapper's own directory and can be
/// moved with the `SAPS_SOLVER_DIR` environment variable.
#[derive(Parser, Debug)]
#[command(name = "saps_wrapper")]
#[command(author, version, about, long_about = None)]
pub struct WrapperArgs {
    /// Instance file name.
    pub instance: String,

    /// Instance specifics; the first token is the target quality.
    pub instance_specifics: String,

    /// Cutoff time in seconds.
    #[arg(allow_negative_numbers = true)]
    pub cutoff_time: f64,

    /// Cutoff length in search steps.
    #[arg(allow_negative_numbers = true)]
    pub cutoff_length: i64,

    /// Random seed.
    #[arg(allow_negative_numbers = true)]
    pub seed: i64,

    /// Parameters passed on to the solver unchanged.
    #[arg(skip)]
    pub params: Vec<String>,
}

/// Positionals consumed by the wrapper before the solver parameters start.
const WRAPPER_POSITIONALS: usize = 5;

/// Usage text printed when the wrapper gets too few or malformed arguments.
pub const WRAPPER_USAGE: &str = "\
saps_wrapper is a wrapper for the SAPS algorithm.
Usage: saps_wrapper <instance_relname> <instance_specifics> <cutoff_time> <cutoff_length> <seed> <params to be passed on>.";

impl WrapperArgs {
    /// Parse a full command line, program name first.
    ///
    /// Only the program name and the five wrapper positionals go through
    /// clap. Every later token is kept verbatim for the solver, so solver
    /// flags such as `--version` or `--` never reach the wrapper's parser.
    pub fn try_parse_split<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut head: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let tail = head.split_off(head.len().min(WRAPPER_POSITIONALS + 1));

        let mut parsed = Self::try_parse_from(head)?;
        parsed.params = tail
            .into_iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        Ok(parsed)
    }

    pub fn to_request(&self) -> RunRequest {
        RunRequest {
            instance: self.instance.clone(),
            instance_specifics: self.instance_specifics.clone(),
            cutoff_time: self.cutoff_time,
            cutoff_length: self.cutoff_length,
            seed: self.seed,
            extra_params: self.params.clone(),
        }
    }
}

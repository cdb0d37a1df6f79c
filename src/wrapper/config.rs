use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Result, ToolError};
use crate::wrapper::platform::Platform;

/// Environment variable naming the directory that holds the solver builds.
pub const SOLVER_DIR_ENV: &str = "SAPS_SOLVER_DIR";

/// Where the wrapper finds the solver and writes its scratch output.
///
/// Resolved once at startup and passed explicitly to everything that
/// needs a path.
#[derive(Debug, Clone)]
pub struct WrapperConfig {
    /// Directory holding the `ubcsat` builds.
    pub base_dir: PathBuf,

    /// Directory receiving the temporary solver output.
    pub output_dir: PathBuf,

    pub platform: Platform,
}

impl WrapperConfig {
    /// Resolve from the running process.
    ///
    /// `solver_dir` overrides the default of the executable's own directory.
    pub fn resolve(solver_dir: Option<&Path>) -> Result<Self> {
        let base_dir = match solver_dir {
            Some(dir) => dir.to_path_buf(),
            None => executable_dir()?,
        };

        Ok(Self {
            base_dir: absolute(&base_dir)?,
            output_dir: env::current_dir()?,
            platform: Platform::current(),
        })
    }

    /// Resolve using `SAPS_SOLVER_DIR` when it is set and not empty.
    pub fn from_env() -> Result<Self> {
        let solver_dir = env::var_os(SOLVER_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        Self::resolve(solver_dir.as_deref())
    }

    /// Path of the solver build for the configured platform.
    pub fn solver_binary(&self) -> PathBuf {
        self.platform.solver_path(&self.base_dir)
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        ToolError::InvalidInput(format!("executable has no parent: {}", exe.display()))
    })
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

/// One algorithm run as requested by the configurator.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRequest {
    /// Instance file handed to the solver.
    pub instance: String,

    /// Free-form instance data; the first token is the target quality.
    pub instance_specifics: String,

    /// Time budget in seconds.
    pub cutoff_time: f64,

    /// Step budget.
    pub cutoff_length: i64,

    pub seed: i64,

    /// Solver parameters forwarded verbatim, e.g. `-alpha 1.2`.
    pub extra_params: Vec<String>,
}

impl RunRequest {
    /// Target solution quality, `0` when the instance specifics are blank.
    pub fn target_quality(&self) -> &str {
        self.instance_specifics
            .split_whitespace()
            .next()
            .unwrap_or("0")
    }
}

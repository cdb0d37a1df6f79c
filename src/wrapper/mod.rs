pub mod config;
pub mod invocation;
pub mod output;
pub mod platform;
pub mod runner;
pub mod scratch;

pub use config::{RunRequest, WrapperConfig, SOLVER_DIR_ENV};
pub use invocation::SolverInvocation;
pub use output::parse_solver_output;
pub use platform::Platform;
pub use runner::run_solver;
pub use scratch::ScratchFile;

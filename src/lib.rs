pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod params;
pub mod render;
pub mod wrapper;

pub use error::{Result, ToolError};
pub use models::{ParameterDeclaration, ParameterFile, RunResult, RunStatus};

mod declaration;
mod run_result;

pub use declaration::{ParameterDeclaration, ParameterFile, RangeKind};
pub use run_result::{format_seconds, RunResult, RunStatus};

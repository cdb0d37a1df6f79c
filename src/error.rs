use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Could not read parameter file {path}: {source}")]
    ParamFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to launch solver {program}: {source}")]
    Launch {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("Solver output file missing: {0}")]
    MissingOutput(PathBuf),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ToolError>;

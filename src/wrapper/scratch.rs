use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, warn};

use crate::error::{Result, ToolError};

const PREFIX: &str = "ubcsat_output";
const MAX_ATTEMPTS: usize = 8;

/// Temporary file receiving the solver's standard output.
///
/// Named `ubcsat_output<pid>-<random>.txt` so parallel wrapper runs in one
/// directory do not clash. Removed by [`ScratchFile::remove`], or on drop
/// if the run bails out early.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
    removed: bool,
}

impl ScratchFile {
    /// Create a fresh, exclusively opened file in `dir`.
    pub fn create_in(dir: &Path) -> Result<(Self, File)> {
        let mut rng = rand::thread_rng();

        for _ in 0..MAX_ATTEMPTS {
            let name = format!("{}{}-{:016x}.txt", PREFIX, std::process::id(), rng.r#gen::<u64>());
            let path = dir.join(name);

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => {
                    debug!(path = %path.display(), "scratch file created");
                    return Ok((
                        Self {
                            path,
                            removed: false,
                        },
                        file,
                    ));
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    warn!(path = %path.display(), "scratch file name taken, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(ToolError::Io(io::Error::new(
            ErrorKind::AlreadyExists,
            "could not pick an unused solver output file name",
        )))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file for reading back the solver output.
    pub fn open(&self) -> Result<BufReader<File>> {
        match File::open(&self.path) {
            Ok(file) => Ok(BufReader::new(file)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ToolError::MissingOutput(self.path.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete the file.
    pub fn remove(mut self) -> Result<()> {
        self.removed = true;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ToolError::MissingOutput(self.path.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if !self.removed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use tempfile::tempdir;

    #[test]
    fn test_create_write_read_remove() {
        let dir = tempdir().unwrap();
        let (scratch, mut file) = ScratchFile::create_in(dir.path()).unwrap();
        let name = scratch.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(PREFIX));
        assert!(name.ends_with(".txt"));

        file.write_all(b"SuccessfulRuns = 1\n").unwrap();
        drop(file);

        let mut text = String::new();
        scratch.open().unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, "SuccessfulRuns = 1\n");

        let path = scratch.path().to_path_buf();
        scratch.remove().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_names_are_distinct() {
        let dir = tempdir().unwrap();
        let (a, _) = ScratchFile::create_in(dir.path()).unwrap();
        let (b, _) = ScratchFile::create_in(dir.path()).unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn test_dropped_file_is_cleaned_up() {
        let dir = tempdir().unwrap();
        let path = {
            let (scratch, _) = ScratchFile::create_in(dir.path()).unwrap();
            scratch.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_output_is_reported() {
        let dir = tempdir().unwrap();
        let (scratch, _) = ScratchFile::create_in(dir.path()).unwrap();
        fs::remove_file(scratch.path()).unwrap();
        assert!(matches!(scratch.open(), Err(ToolError::MissingOutput(_))));
    }
}

use std::path::{Path, PathBuf};

/// Host family, deciding which solver build is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Mac,
    Windows,
}

const MAC_MARKERS: [&str; 2] = ["mac", "darwin"];
const WINDOWS_MARKERS: [&str; 4] = ["win", "msys", "mingw", "emc"];

impl Platform {
    /// Classify a platform identifier such as `x86_64-darwin`.
    ///
    /// Mac markers are checked before Windows markers, since `darwin`
    /// also contains `win`. Anything unrecognised is treated as Linux.
    pub fn detect(identifier: &str) -> Self {
        let identifier = identifier.to_lowercase();
        if MAC_MARKERS.iter().any(|m| identifier.contains(m)) {
            Platform::Mac
        } else if WINDOWS_MARKERS.iter().any(|m| identifier.contains(m)) {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Platform of the running binary.
    pub fn current() -> Self {
        Self::detect(&Self::current_identifier())
    }

    /// `<arch>-<os>` of the running binary, e.g. `x86_64-linux`.
    pub fn current_identifier() -> String {
        format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS)
    }

    /// Banner echoed before the run for non-default platforms.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Platform::Linux => None,
            Platform::Mac => Some("Mac OS X Detected"),
            Platform::Windows => Some("Windows Detected"),
        }
    }

    /// File name of the solver build for this platform.
    pub fn solver_file_name(&self) -> &'static str {
        match self {
            Platform::Linux => "ubcsat",
            Platform::Mac => "ubcsat-mac",
            Platform::Windows => "ubcsat.exe",
        }
    }

    /// Full path of the solver build inside `base_dir`.
    pub fn solver_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(self.solver_file_name())
    }
}

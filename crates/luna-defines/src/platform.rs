//! Target-platform selection and platform-bound symbols.
//!
//! Exactly one of the two supported operating-system families is selected
//! when this crate is compiled. Downstream code branches on the
//! [`WINDOWS`]/[`LINUX`] constants (or [`Platform::CURRENT`]) instead of
//! repeating `target_os` checks, and calls [`current_dir`] without caring
//! which underlying OS call backs it. Building for any other target is a
//! hard error, not a silent fallback.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[cfg(not(any(target_os = "windows", target_os = "linux")))]
compile_error!("luna-defines only supports the Linux and Windows families for now");

/// `true` when the build targets the Windows family.
pub const WINDOWS: bool = cfg!(target_os = "windows");

/// `true` when the build targets the Linux family.
pub const LINUX: bool = cfg!(target_os = "linux");

/// Operating-system family selected at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    /// The Windows family.
    Windows,
    /// The Linux family.
    Linux,
}

impl Platform {
    /// The platform in force for this build.
    #[cfg(target_os = "windows")]
    pub const CURRENT: Platform = Platform::Windows;

    /// The platform in force for this build.
    #[cfg(target_os = "linux")]
    pub const CURRENT: Platform = Platform::Linux;

    /// Lowercase family name, suitable for paths and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Retrieve the current working directory.
///
/// The stable name for the per-platform retrieval call: the standard
/// library resolves it to the `GetCurrentDirectoryW` family on Windows and
/// `getcwd(3)` on Linux. The `compile_error!` gate above limits the
/// possible bindings to those two.
pub fn current_dir() -> io::Result<PathBuf> {
    std::env::current_dir()
}

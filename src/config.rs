// Configuration: loader and session settings
//
// Defaults load `graphblas` from the system search path in blocking mode.
// `LoaderConfig::from_env` lets a host override both without code changes:
// - GRAPHBLAS_LIBRARY: explicit path to the shared library
// - GRAPHBLAS_MODE: `blocking` or `nonblocking`

use crate::core::error::{GraphBlasError, Result};
use crate::ffi::init::{GrB_Mode, GrB_BLOCKING, GrB_NONBLOCKING};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const LIBRARY_ENV: &str = "GRAPHBLAS_LIBRARY";
pub const MODE_ENV: &str = "GRAPHBLAS_MODE";
pub const DEFAULT_LIBRARY_NAME: &str = "graphblas";

/// Execution mode selected at `init`, fixed for the lifetime of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Every operation completes before returning
    #[default]
    Blocking,
    /// Operations may be left pending until their result is needed or `wait` is called
    NonBlocking,
}

impl Mode {
    pub fn to_grb_mode(self) -> GrB_Mode {
        match self {
            Mode::Blocking => GrB_BLOCKING,
            Mode::NonBlocking => GrB_NONBLOCKING,
        }
    }

    pub fn from_grb_mode(mode: GrB_Mode) -> Option<Mode> {
        match mode {
            GrB_BLOCKING => Some(Mode::Blocking),
            GrB_NONBLOCKING => Some(Mode::NonBlocking),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Blocking => write!(f, "blocking"),
            Mode::NonBlocking => write!(f, "nonblocking"),
        }
    }
}

impl FromStr for Mode {
    type Err = GraphBlasError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blocking" => Ok(Mode::Blocking),
            "nonblocking" | "non-blocking" | "non_blocking" => Ok(Mode::NonBlocking),
            _ => Err(GraphBlasError::InvalidConfig(format!(
                "unrecognised mode '{}', expected 'blocking' or 'nonblocking'",
                s.trim()
            ))),
        }
    }
}

/// Where to find the native library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibrarySource {
    /// Base name without prefix or extension, resolved on the loader search path
    Name(String),
    /// Exact file to open
    Path(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub source: LibrarySource,
    pub mode: Mode,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            source: LibrarySource::Name(DEFAULT_LIBRARY_NAME.to_string()),
            mode: Mode::default(),
        }
    }
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `GRAPHBLAS_LIBRARY` and `GRAPHBLAS_MODE`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(LIBRARY_ENV).filter(|p| !p.trim().is_empty()) {
            config.source = LibrarySource::Path(PathBuf::from(path));
        }
        if let Some(mode) = lookup(MODE_ENV).filter(|m| !m.trim().is_empty()) {
            config.mode = mode.parse().map_err(|e| {
                log::warn!("Invalid {}={:?}: {}", MODE_ENV, mode, e);
                e
            })?;
        }

        Ok(config)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.source = LibrarySource::Name(name.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = LibrarySource::Path(path.into());
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

// Core Layer: Status interpretation
//
// Every native call returns one GrB_Info. It is split here into a Rust
// Result whose Ok side still remembers whether the requested value was
// present (GrB_SUCCESS) or implicit (GrB_NO_VALUE).

use crate::core::error::{GraphBlasError, Result};
use crate::ffi::error::*;

/// Successful outcome of a native call
///
/// `Absent` means the call succeeded but the requested entry has no stored
/// value; the caller picks a default suited to its semiring.
#[must_use = "an Absent outcome carries no value and must be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    Present(T),
    Absent,
}

impl<T> Outcome<T> {
    /// `present` is the classified status, `value` the slot the call wrote
    pub fn from_presence(present: bool, value: T) -> Self {
        if present {
            Outcome::Present(value)
        } else {
            Outcome::Absent
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Outcome::Present(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Present(value) => Some(value),
            Outcome::Absent => None,
        }
    }

    /// Substitute `default` (e.g. the additive identity) for an implicit value
    pub fn unwrap_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        self.into_option().unwrap_or_else(f)
    }

    /// Treat an implicit value as an error, for calls that always produce one
    pub fn require(self) -> Result<T> {
        self.into_option().ok_or(GraphBlasError::MissingValue)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Present(value) => Outcome::Present(f(value)),
            Outcome::Absent => Outcome::Absent,
        }
    }
}

/// Classify a raw status
///
/// `Ok(true)` for success, `Ok(false)` for the informational band.
pub fn check(info: GrB_Info) -> Result<bool> {
    match info {
        GrB_SUCCESS => Ok(true),
        GrB_NO_VALUE => Ok(false),
        other => Err(GraphBlasError::from_grb_info(other)
            .unwrap_or(GraphBlasError::UnknownStatus(other))),
    }
}

/// Pair a raw status with the output slot the call wrote into
///
/// For hosts issuing native calls this crate does not bind (see
/// `Matrix::as_raw`). The slot is only returned when the status says it
/// was written.
pub fn outcome<T>(info: GrB_Info, slot: T) -> Result<Outcome<T>> {
    Ok(Outcome::from_presence(check(info)?, slot))
}

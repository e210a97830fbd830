// Core Layer: Rust Error Types
// Idiomatic Rust error handling

use crate::ffi::error::*;
use std::fmt;

/// Which band of the status taxonomy an error falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed invalid arguments or objects; a caller bug
    Api,
    /// Resource exhaustion or a bounds violation while executing
    Execution,
    /// Raised by this crate before or instead of reaching native code
    Binding,
}

/// Rust-native GraphBLAS error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphBlasError {
    /// Object has not been initialized
    UninitializedObject,
    /// Object is corrupted
    InvalidObject,
    /// Input pointer is null
    NullPointer,
    /// Invalid parameter value
    InvalidValue,
    /// Row or column index out of bounds
    InvalidIndex,
    /// Object domains are not compatible
    DomainMismatch,
    /// Dimension mismatch between operands
    DimensionMismatch,
    /// Output object must be empty
    OutputNotEmpty,
    /// Memory allocation failed
    OutOfMemory,
    /// Output array not large enough
    InsufficientSpace,
    /// Index in a list exceeds valid bounds
    IndexOutOfBounds,
    /// The native library reported an unrecoverable failure
    Panic,
    /// Status outside the known table
    UnknownStatus(GrB_Info),
    /// Native library could not be opened
    LibraryLoad(String),
    /// A required symbol is absent from the native library
    MissingSymbol(String),
    /// A call was issued before `init`
    NotInitialized,
    /// `init` was called on a context that is already running
    AlreadyInitialized,
    /// A call was issued after `finalize`
    Finalized,
    /// Handle refers to an object that was already released
    StaleHandle,
    /// The library reported `GrB_NO_VALUE` where a value is always expected
    MissingValue,
    /// A constructor reported success but produced no object
    NullHandle,
    /// Loader or session settings could not be understood
    InvalidConfig(String),
}

impl GraphBlasError {
    /// Convert Rust error to C API error code
    ///
    /// Binding errors have no native counterpart and return `None`.
    pub fn to_grb_info(&self) -> Option<GrB_Info> {
        let info = match self {
            Self::UninitializedObject => GrB_UNINITIALIZED_OBJECT,
            Self::InvalidObject => GrB_INVALID_OBJECT,
            Self::NullPointer => GrB_NULL_POINTER,
            Self::InvalidValue => GrB_INVALID_VALUE,
            Self::InvalidIndex => GrB_INVALID_INDEX,
            Self::DomainMismatch => GrB_DOMAIN_MISMATCH,
            Self::DimensionMismatch => GrB_DIMENSION_MISMATCH,
            Self::OutputNotEmpty => GrB_OUTPUT_NOT_EMPTY,
            Self::OutOfMemory => GrB_OUT_OF_MEMORY,
            Self::InsufficientSpace => GrB_INSUFFICIENT_SPACE,
            Self::IndexOutOfBounds => GrB_INDEX_OUT_OF_BOUNDS,
            Self::Panic => GrB_PANIC,
            Self::UnknownStatus(info) => *info,
            _ => return None,
        };
        Some(info)
    }

    /// Convert C API error code to Rust error
    ///
    /// Returns `None` for the success and informational codes.
    pub fn from_grb_info(info: GrB_Info) -> Option<Self> {
        match info {
            GrB_SUCCESS | GrB_NO_VALUE => None,
            GrB_UNINITIALIZED_OBJECT => Some(Self::UninitializedObject),
            GrB_INVALID_OBJECT => Some(Self::InvalidObject),
            GrB_NULL_POINTER => Some(Self::NullPointer),
            GrB_INVALID_VALUE => Some(Self::InvalidValue),
            GrB_INVALID_INDEX => Some(Self::InvalidIndex),
            GrB_DOMAIN_MISMATCH => Some(Self::DomainMismatch),
            GrB_DIMENSION_MISMATCH => Some(Self::DimensionMismatch),
            GrB_OUTPUT_NOT_EMPTY => Some(Self::OutputNotEmpty),
            GrB_OUT_OF_MEMORY => Some(Self::OutOfMemory),
            GrB_INSUFFICIENT_SPACE => Some(Self::InsufficientSpace),
            GrB_INDEX_OUT_OF_BOUNDS => Some(Self::IndexOutOfBounds),
            GrB_PANIC => Some(Self::Panic),
            other => Some(Self::UnknownStatus(other)),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UninitializedObject
            | Self::InvalidObject
            | Self::NullPointer
            | Self::InvalidValue
            | Self::InvalidIndex
            | Self::DomainMismatch
            | Self::DimensionMismatch
            | Self::OutputNotEmpty => ErrorKind::Api,
            Self::OutOfMemory
            | Self::InsufficientSpace
            | Self::IndexOutOfBounds
            | Self::Panic => ErrorKind::Execution,
            Self::UnknownStatus(_)
            | Self::LibraryLoad(_)
            | Self::MissingSymbol(_)
            | Self::NotInitialized
            | Self::AlreadyInitialized
            | Self::Finalized
            | Self::StaleHandle
            | Self::MissingValue
            | Self::NullHandle
            | Self::InvalidConfig(_) => ErrorKind::Binding,
        }
    }

    pub fn is_api_error(&self) -> bool {
        self.kind() == ErrorKind::Api
    }

    pub fn is_execution_error(&self) -> bool {
        self.kind() == ErrorKind::Execution
    }
}

impl fmt::Display for GraphBlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UninitializedObject => write!(f, "Object has not been initialized"),
            Self::InvalidObject => write!(f, "Object is corrupted"),
            Self::NullPointer => write!(f, "Input pointer is null"),
            Self::InvalidValue => write!(f, "Invalid parameter value"),
            Self::InvalidIndex => write!(f, "Invalid index"),
            Self::DomainMismatch => write!(f, "Object domains are not compatible"),
            Self::DimensionMismatch => write!(f, "Dimension mismatch between operands"),
            Self::OutputNotEmpty => write!(f, "Output object must be empty"),
            Self::OutOfMemory => write!(f, "Memory allocation failed"),
            Self::InsufficientSpace => write!(f, "Insufficient space in output"),
            Self::IndexOutOfBounds => write!(f, "Index exceeds valid bounds"),
            Self::Panic => write!(f, "Native library panicked"),
            Self::UnknownStatus(info) => write!(f, "Unknown GrB_Info status {}", info),
            Self::LibraryLoad(msg) => write!(f, "Failed to load GraphBLAS library: {}", msg),
            Self::MissingSymbol(name) => write!(f, "Symbol '{}' not found in GraphBLAS library", name),
            Self::NotInitialized => write!(f, "GraphBLAS has not been initialized"),
            Self::AlreadyInitialized => write!(f, "GraphBLAS is already initialized"),
            Self::Finalized => write!(f, "GraphBLAS has been finalized"),
            Self::StaleHandle => write!(f, "Handle refers to an object that was released"),
            Self::MissingValue => write!(f, "Native call reported no value where one is required"),
            Self::NullHandle => write!(f, "Native call succeeded but returned a NULL object"),
            Self::InvalidConfig(msg) => write!(f, "Invalid GraphBLAS configuration: {}", msg),
        }
    }
}

impl std::error::Error for GraphBlasError {}

/// Result type for GraphBLAS operations
pub type Result<T> = std::result::Result<T, GraphBlasError>;

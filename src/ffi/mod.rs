// FFI Layer: C API Module
//
// Raw declarations of the GraphBLAS C API consumed from the native library:
// status codes, mode constants, opaque handle types and entry point
// signatures. Nothing here is safe to call directly; see `core` for the
// checked surface.

pub mod api;
pub mod error;
pub mod init;
pub mod matrix;
pub mod types;

// Re-export commonly used types
pub use api::{BuiltinTypes, GraphBlasApi};
pub use error::*;
pub use init::{GrB_Mode, GrB_BLOCKING, GrB_NONBLOCKING};
pub use matrix::{GrB_Index, GrB_Matrix};
pub use types::{GrB_Type, BUILTIN_TYPE_COUNT, BUILTIN_TYPE_SYMBOLS};

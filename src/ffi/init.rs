// FFI Layer: GraphBLAS context entry points
//
// GrB_init must be called before any other GraphBLAS method and GrB_finalize
// must be the last one.

use crate::ffi::error::GrB_Info;

/// Execution mode passed to `GrB_init` (a C `enum`)
pub type GrB_Mode = i32;

/// Methods may return with pending computations
pub const GrB_NONBLOCKING: GrB_Mode = 0;

/// No computations are ever left pending
pub const GrB_BLOCKING: GrB_Mode = 1;

/// `GrB_Info GrB_init (GrB_Mode mode)`
pub type GrB_init_fn = unsafe extern "C" fn(mode: GrB_Mode) -> GrB_Info;

/// `GrB_Info GrB_wait (void)`: forces all pending operations to complete
pub type GrB_wait_fn = unsafe extern "C" fn() -> GrB_Info;

/// `GrB_Info GrB_finalize (void)`: pending computations are abandoned
pub type GrB_finalize_fn = unsafe extern "C" fn() -> GrB_Info;

/// `const char *GrB_error (void)`: last error message, owned by the library
pub type GrB_error_fn = unsafe extern "C" fn() -> *const std::os::raw::c_char;

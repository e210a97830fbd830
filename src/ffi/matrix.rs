// FFI Layer: GrB_Matrix C API

use crate::ffi::error::GrB_Info;
use crate::ffi::types::GrB_Type;

/// Opaque GrB_Matrix handle
#[repr(C)]
pub struct GrB_Matrix_opaque {
    _private: [u8; 0],
}

/// GrB_Matrix pointer
pub type GrB_Matrix = *mut GrB_Matrix_opaque;

/// GrB_Index type (unsigned 64-bit)
pub type GrB_Index = u64;

/// Create a new matrix with no entries
pub type GrB_Matrix_new_fn = unsafe extern "C" fn(
    a: *mut GrB_Matrix,
    type_: GrB_Type,
    nrows: GrB_Index,
    ncols: GrB_Index,
) -> GrB_Info;

/// Make an exact copy of a matrix into a newly created handle
pub type GrB_Matrix_dup_fn = unsafe extern "C" fn(c: *mut GrB_Matrix, a: GrB_Matrix) -> GrB_Info;

/// Clear a matrix of all entries; type and dimensions remain unchanged
pub type GrB_Matrix_clear_fn = unsafe extern "C" fn(a: GrB_Matrix) -> GrB_Info;

/// Get the number of rows of a matrix
pub type GrB_Matrix_nrows_fn =
    unsafe extern "C" fn(nrows: *mut GrB_Index, a: GrB_Matrix) -> GrB_Info;

/// Get the number of columns of a matrix
pub type GrB_Matrix_ncols_fn =
    unsafe extern "C" fn(ncols: *mut GrB_Index, a: GrB_Matrix) -> GrB_Info;

/// Get the number of stored entries in a matrix
pub type GrB_Matrix_nvals_fn =
    unsafe extern "C" fn(nvals: *mut GrB_Index, a: GrB_Matrix) -> GrB_Info;

/// Get the type of a matrix (SuiteSparse extension)
pub type GxB_Matrix_type_fn = unsafe extern "C" fn(type_: *mut GrB_Type, a: GrB_Matrix) -> GrB_Info;

/// Free a matrix and set the handle to NULL
pub type GrB_Matrix_free_fn = unsafe extern "C" fn(a: *mut GrB_Matrix) -> GrB_Info;

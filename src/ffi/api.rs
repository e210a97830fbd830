// FFI Layer: resolved call table
//
// Every supported native entry point as a function pointer, plus the
// addresses read out of the built-in type globals. A table is produced once
// per loaded library (see `loader`) and is immutable afterwards.

use crate::ffi::init::*;
use crate::ffi::matrix::*;
use crate::ffi::types::{GrB_Type, BUILTIN_TYPE_COUNT};

/// Function pointers for the GraphBLAS entry points this crate binds
#[derive(Debug, Clone, Copy)]
pub struct GraphBlasApi {
    pub init: GrB_init_fn,
    pub wait: GrB_wait_fn,
    pub finalize: GrB_finalize_fn,
    pub matrix_new: GrB_Matrix_new_fn,
    pub matrix_dup: GrB_Matrix_dup_fn,
    pub matrix_clear: GrB_Matrix_clear_fn,
    pub matrix_nrows: GrB_Matrix_nrows_fn,
    pub matrix_ncols: GrB_Matrix_ncols_fn,
    pub matrix_nvals: GrB_Matrix_nvals_fn,
    pub matrix_type: GxB_Matrix_type_fn,
    pub matrix_free: GrB_Matrix_free_fn,
    /// `GrB_error` is not exported by every library version
    pub error: Option<GrB_error_fn>,
}

/// Addresses of the built-in `GrB_Type` singletons
///
/// Stored as integers so the table is `Send + Sync`; they are turned back
/// into `GrB_Type` only when handed to a native call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinTypes {
    addresses: [usize; BUILTIN_TYPE_COUNT],
}

impl BuiltinTypes {
    /// Build from addresses listed in `BUILTIN_TYPE_SYMBOLS` order
    pub fn from_addresses(addresses: [usize; BUILTIN_TYPE_COUNT]) -> Self {
        Self { addresses }
    }

    /// Build from already dereferenced `GrB_Type` values
    pub fn from_handles(handles: [GrB_Type; BUILTIN_TYPE_COUNT]) -> Self {
        Self {
            addresses: handles.map(|t| t as usize),
        }
    }

    /// Address of the built-in at `index` in `BUILTIN_TYPE_SYMBOLS`
    pub fn address(&self, index: usize) -> Option<usize> {
        self.addresses.get(index).copied()
    }

    /// Position of `address` among the built-ins, if it is one of them
    pub fn position(&self, address: usize) -> Option<usize> {
        self.addresses.iter().position(|&a| a == address)
    }

    pub fn addresses(&self) -> &[usize] {
        &self.addresses
    }
}

// FFI Layer: GraphBLAS C API status codes
// GrB_Info return type for all C API functions
//
// Values mirror the SuiteSparse:GraphBLAS header exactly. They must not be
// renumbered: the native library compares against these integers.

/// GraphBLAS return status codes (a C `enum`, so `int` wide)
pub type GrB_Info = i32;

pub const GrB_SUCCESS: GrB_Info = 0;

// Informational code, not an error
pub const GrB_NO_VALUE: GrB_Info = 1; // A(i,j) requested but not there

// API errors: caught right away even in non-blocking mode
pub const GrB_UNINITIALIZED_OBJECT: GrB_Info = 2;
pub const GrB_INVALID_OBJECT: GrB_Info = 3;
pub const GrB_NULL_POINTER: GrB_Info = 4;
pub const GrB_INVALID_VALUE: GrB_Info = 5;
pub const GrB_INVALID_INDEX: GrB_Info = 6; // index passed as a scalar
pub const GrB_DOMAIN_MISMATCH: GrB_Info = 7;
pub const GrB_DIMENSION_MISMATCH: GrB_Info = 8;
pub const GrB_OUTPUT_NOT_EMPTY: GrB_Info = 9;

// Execution errors: may be deferred in non-blocking mode
pub const GrB_OUT_OF_MEMORY: GrB_Info = 10;
pub const GrB_INSUFFICIENT_SPACE: GrB_Info = 11;
pub const GrB_INDEX_OUT_OF_BOUNDS: GrB_Info = 12; // index inside a list
pub const GrB_PANIC: GrB_Info = 13;

/// Helper to get error message for a GrB_Info code
pub fn grb_info_to_string(info: GrB_Info) -> &'static str {
    match info {
        GrB_SUCCESS => "GrB_SUCCESS: operation completed successfully",
        GrB_NO_VALUE => "GrB_NO_VALUE: requested entry is not present, its value is implicit",
        GrB_UNINITIALIZED_OBJECT => "GrB_UNINITIALIZED_OBJECT: object has not been initialized",
        GrB_INVALID_OBJECT => "GrB_INVALID_OBJECT: object is corrupted",
        GrB_NULL_POINTER => "GrB_NULL_POINTER: input pointer is NULL",
        GrB_INVALID_VALUE => "GrB_INVALID_VALUE: invalid parameter value",
        GrB_INVALID_INDEX => "GrB_INVALID_INDEX: row or column index is out of bounds",
        GrB_DOMAIN_MISMATCH => "GrB_DOMAIN_MISMATCH: object domains are not compatible",
        GrB_DIMENSION_MISMATCH => "GrB_DIMENSION_MISMATCH: matrix dimensions do not match",
        GrB_OUTPUT_NOT_EMPTY => "GrB_OUTPUT_NOT_EMPTY: output matrix already has values in it",
        GrB_OUT_OF_MEMORY => "GrB_OUT_OF_MEMORY: out of memory",
        GrB_INSUFFICIENT_SPACE => "GrB_INSUFFICIENT_SPACE: output array not large enough",
        GrB_INDEX_OUT_OF_BOUNDS => "GrB_INDEX_OUT_OF_BOUNDS: index in a list is out of bounds",
        GrB_PANIC => "GrB_PANIC: unrecoverable failure inside the library",
        _ => "Unknown GrB_Info code",
    }
}

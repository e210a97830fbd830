// FFI Layer: GrB_Type C API
//
// Opaque type handles. Built-in types are global variables exported by the
// native library; each symbol holds a GrB_Type that must be read once the
// library is loaded.

/// Opaque GrB_Type handle
#[repr(C)]
pub struct GrB_Type_opaque {
    _private: [u8; 0],
}

/// GrB_Type pointer (opaque handle to a native type object)
pub type GrB_Type = *mut GrB_Type_opaque;

pub const GrB_BOOL: &str = "GrB_BOOL";
pub const GrB_INT8: &str = "GrB_INT8";
pub const GrB_INT16: &str = "GrB_INT16";
pub const GrB_INT32: &str = "GrB_INT32";
pub const GrB_INT64: &str = "GrB_INT64";
pub const GrB_UINT8: &str = "GrB_UINT8";
pub const GrB_UINT16: &str = "GrB_UINT16";
pub const GrB_UINT32: &str = "GrB_UINT32";
pub const GrB_UINT64: &str = "GrB_UINT64";
pub const GrB_FP32: &str = "GrB_FP32";
pub const GrB_FP64: &str = "GrB_FP64";

pub const BUILTIN_TYPE_COUNT: usize = 11;

/// Symbol names of every built-in type, in `TypeCode` order
pub const BUILTIN_TYPE_SYMBOLS: [&str; BUILTIN_TYPE_COUNT] = [
    GrB_BOOL, GrB_INT8, GrB_INT16, GrB_INT32, GrB_INT64, GrB_UINT8, GrB_UINT16, GrB_UINT32,
    GrB_UINT64, GrB_FP32, GrB_FP64,
];

// Type System: Bridge between native built-in types and Rust primitives
//
// The native library identifies element types by GrB_Type handles whose
// addresses are only known after loading. This module names them statically:
// 1. TypeCode - one variant per built-in type, with its exported symbol
// 2. GraphBLASType trait - maps a Rust primitive to its TypeCode

use crate::ffi::types::{BUILTIN_TYPE_COUNT, BUILTIN_TYPE_SYMBOLS};
use std::fmt;

/// Runtime type code enumeration for the built-in types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    /// Boolean type
    Bool,
    /// Signed 8-bit integer
    Int8,
    /// Signed 16-bit integer
    Int16,
    /// Signed 32-bit integer
    Int32,
    /// Signed 64-bit integer
    Int64,
    /// Unsigned 8-bit integer
    Uint8,
    /// Unsigned 16-bit integer
    Uint16,
    /// Unsigned 32-bit integer
    Uint32,
    /// Unsigned 64-bit integer
    Uint64,
    /// 32-bit floating point
    Fp32,
    /// 64-bit floating point
    Fp64,
}

impl TypeCode {
    /// Every built-in, in the order of `BUILTIN_TYPE_SYMBOLS`
    pub const ALL: [TypeCode; BUILTIN_TYPE_COUNT] = [
        TypeCode::Bool,
        TypeCode::Int8,
        TypeCode::Int16,
        TypeCode::Int32,
        TypeCode::Int64,
        TypeCode::Uint8,
        TypeCode::Uint16,
        TypeCode::Uint32,
        TypeCode::Uint64,
        TypeCode::Fp32,
        TypeCode::Fp64,
    ];

    /// Position in `ALL` and `BUILTIN_TYPE_SYMBOLS`
    pub fn index(&self) -> usize {
        match self {
            TypeCode::Bool => 0,
            TypeCode::Int8 => 1,
            TypeCode::Int16 => 2,
            TypeCode::Int32 => 3,
            TypeCode::Int64 => 4,
            TypeCode::Uint8 => 5,
            TypeCode::Uint16 => 6,
            TypeCode::Uint32 => 7,
            TypeCode::Uint64 => 8,
            TypeCode::Fp32 => 9,
            TypeCode::Fp64 => 10,
        }
    }

    pub fn from_index(index: usize) -> Option<TypeCode> {
        Self::ALL.get(index).copied()
    }

    /// Name of the global variable holding this type in the native library
    pub fn symbol(&self) -> &'static str {
        BUILTIN_TYPE_SYMBOLS[self.index()]
    }

    /// Get human-readable name for this type code
    pub fn name(&self) -> &'static str {
        match self {
            TypeCode::Bool => "bool",
            TypeCode::Int8 => "int8",
            TypeCode::Int16 => "int16",
            TypeCode::Int32 => "int32",
            TypeCode::Int64 => "int64",
            TypeCode::Uint8 => "uint8",
            TypeCode::Uint16 => "uint16",
            TypeCode::Uint32 => "uint32",
            TypeCode::Uint64 => "uint64",
            TypeCode::Fp32 => "float32",
            TypeCode::Fp64 => "float64",
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for Rust primitives that have a GraphBLAS built-in counterpart
pub trait GraphBLASType: Copy + 'static {
    /// The built-in type code for this type
    const TYPE_CODE: TypeCode;

    /// Get human-readable type name
    fn type_name() -> &'static str {
        Self::TYPE_CODE.name()
    }
}

impl GraphBLASType for bool {
    const TYPE_CODE: TypeCode = TypeCode::Bool;
}

impl GraphBLASType for i8 {
    const TYPE_CODE: TypeCode = TypeCode::Int8;
}

impl GraphBLASType for i16 {
    const TYPE_CODE: TypeCode = TypeCode::Int16;
}

impl GraphBLASType for i32 {
    const TYPE_CODE: TypeCode = TypeCode::Int32;
}

impl GraphBLASType for i64 {
    const TYPE_CODE: TypeCode = TypeCode::Int64;
}

impl GraphBLASType for u8 {
    const TYPE_CODE: TypeCode = TypeCode::Uint8;
}

impl GraphBLASType for u16 {
    const TYPE_CODE: TypeCode = TypeCode::Uint16;
}

impl GraphBLASType for u32 {
    const TYPE_CODE: TypeCode = TypeCode::Uint32;
}

impl GraphBLASType for u64 {
    const TYPE_CODE: TypeCode = TypeCode::Uint64;
}

impl GraphBLASType for f32 {
    const TYPE_CODE: TypeCode = TypeCode::Fp32;
}

impl GraphBLASType for f64 {
    const TYPE_CODE: TypeCode = TypeCode::Fp64;
}

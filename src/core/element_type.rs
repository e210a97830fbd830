// Core Layer: Element type handles
//
// A GrB_Type owned by the native library. Built-ins are resolved once when
// the library loads and are never freed from this side.

use crate::core::handles::RawHandle;
use crate::ffi::api::BuiltinTypes;
use crate::ffi::types::GrB_Type;
use crate::types::TypeCode;
use std::fmt;

/// Borrowed handle to a native type object
///
/// Equality is address equality: two values are the same type iff the
/// library handed out the same object.
#[derive(Clone, Copy)]
pub struct ElementType {
    raw: RawHandle,
    code: Option<TypeCode>,
}

impl ElementType {
    /// Wrap an address returned by the library, recognising built-ins
    pub(crate) fn from_address(address: usize, builtins: &BuiltinTypes) -> Self {
        Self {
            raw: RawHandle::borrowed(address),
            code: builtins.position(address).and_then(TypeCode::from_index),
        }
    }

    pub(crate) fn builtin(code: TypeCode, builtins: &BuiltinTypes) -> Self {
        let address = builtins.address(code.index()).unwrap_or(0);
        Self {
            raw: RawHandle::borrowed(address),
            code: Some(code),
        }
    }

    /// Built-in type code, or `None` for a type the library created elsewhere
    pub fn code(&self) -> Option<TypeCode> {
        self.code
    }

    pub fn is_builtin(&self) -> bool {
        self.code.is_some()
    }

    pub fn address(&self) -> usize {
        self.raw.address()
    }

    pub fn as_ptr(&self) -> GrB_Type {
        self.raw.as_ptr()
    }
}

impl PartialEq for ElementType {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for ElementType {}

impl fmt::Debug for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "ElementType({} @ {:#x})", code, self.address()),
            None => write!(f, "ElementType(@ {:#x})", self.address()),
        }
    }
}

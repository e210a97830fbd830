// Integration tests for the built-in type bridge

use graphblas_binding::ffi::types::BUILTIN_TYPE_SYMBOLS;
use graphblas_binding::{GraphBLASType, TypeCode};

fn symbol_of<T: GraphBLASType>() -> &'static str {
    T::TYPE_CODE.symbol()
}

#[test]
fn test_primitives_select_their_native_globals() {
    assert_eq!(symbol_of::<bool>(), "GrB_BOOL");
    assert_eq!(symbol_of::<i8>(), "GrB_INT8");
    assert_eq!(symbol_of::<i16>(), "GrB_INT16");
    assert_eq!(symbol_of::<i32>(), "GrB_INT32");
    assert_eq!(symbol_of::<i64>(), "GrB_INT64");
    assert_eq!(symbol_of::<u8>(), "GrB_UINT8");
    assert_eq!(symbol_of::<u16>(), "GrB_UINT16");
    assert_eq!(symbol_of::<u32>(), "GrB_UINT32");
    assert_eq!(symbol_of::<u64>(), "GrB_UINT64");
    assert_eq!(symbol_of::<f32>(), "GrB_FP32");
    assert_eq!(symbol_of::<f64>(), "GrB_FP64");
}

#[test]
fn test_type_names() {
    assert_eq!(TypeCode::Bool.name(), "bool");
    assert_eq!(TypeCode::Int32.name(), "int32");
    assert_eq!(TypeCode::Int64.name(), "int64");
    assert_eq!(TypeCode::Fp32.to_string(), "float32");
    assert_eq!(f64::type_name(), "float64");
}

#[test]
fn test_every_code_has_a_native_symbol() {
    assert_eq!(TypeCode::ALL.len(), BUILTIN_TYPE_SYMBOLS.len());
    for code in TypeCode::ALL {
        assert!(code.symbol().starts_with("GrB_"));
        assert_eq!(BUILTIN_TYPE_SYMBOLS[code.index()], code.symbol());
        assert_eq!(TypeCode::from_index(code.index()), Some(code));
    }
}

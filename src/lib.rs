// graphblas-binding: Rust binding to the GraphBLAS C API
//
// Loads a native GraphBLAS library (SuiteSparse:GraphBLAS) at runtime and
// exposes its context and matrix entry points.
//
// Architecture:
// - Layer 1 (ffi): raw C declarations, status codes and mode constants
// - Layer 2 (loader, config): opening the library and resolving symbols
// - Layer 3 (core): lifecycle, status classification, checked handles
// - types: built-in element types bridged to Rust primitives
//
// Typical use:
//
// ```no_run
// use graphblas_binding::{Context, Matrix, Mode, TypeCode};
//
// let ctx = Context::global()?;
// ctx.init(Mode::Blocking)?;
// let a = Matrix::new(ctx, &ctx.builtin(TypeCode::Bool), 1000, 1000)?;
// assert_eq!(a.nvals()?, 0);
// drop(a);
// ctx.finalize()?;
// # Ok::<(), graphblas_binding::GraphBlasError>(())
// ```

#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]

pub mod config;
pub mod core;
pub mod ffi;
pub mod loader;
pub mod types;

// Re-export commonly used items for convenience
pub use config::{LibrarySource, LoaderConfig, Mode};
pub use core::{Context, ElementType, GraphBlasError, Matrix, Outcome, Phase, Result};
pub use loader::{Library, LibraryId};
pub use types::{GraphBLASType, TypeCode};

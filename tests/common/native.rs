#![allow(non_snake_case)]

// In-process stand-in for libgraphblas
//
// Exposes the bound entry points as `extern "C"` functions with the native
// signatures so the binding's whole call path runs in tests. Matrices are
// boxed structs whose addresses serve as GrB_Matrix handles; built-in types
// are distinct statics. Only bookkeeping is modelled, no arithmetic.

use graphblas_binding::ffi::api::{BuiltinTypes, GraphBlasApi};
use graphblas_binding::ffi::error::*;
use graphblas_binding::ffi::init::{GrB_Mode, GrB_BLOCKING, GrB_NONBLOCKING};
use graphblas_binding::ffi::matrix::{GrB_Index, GrB_Matrix};
use graphblas_binding::ffi::types::GrB_Type;
use graphblas_binding::Library;
use std::collections::{HashMap, HashSet};
use std::os::raw::c_char;
use std::panic::catch_unwind;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Largest dimension accepted, as in SuiteSparse (GxB_INDEX_MAX)
pub const INDEX_MAX: GrB_Index = 1 << 60;

// One byte each so every built-in has its own address
static TYPE_OBJECTS: [u8; 11] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

static ERROR_MESSAGE: &[u8] = b"fake GraphBLAS: last call failed\0";

// Bumped by `reset`; each value names a separate native instance
static INSTANCE: AtomicUsize = AtomicUsize::new(0);

#[derive(Clone)]
struct FakeMatrix {
    type_: usize,
    nrows: GrB_Index,
    ncols: GrB_Index,
    nvals: GrB_Index,
}

#[derive(Default)]
struct NativeState {
    mode: Option<GrB_Mode>,
    finalized: bool,
    live: HashSet<usize>,
    calls: Vec<&'static str>,
    failures: HashMap<&'static str, GrB_Info>,
    last_failed: bool,
}

lazy_static::lazy_static! {
    static ref STATE: Mutex<NativeState> = Mutex::new(NativeState::default());
}

fn state() -> MutexGuard<'static, NativeState> {
    STATE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Record the call and return an injected failure, if one is queued
fn enter(symbol: &'static str) -> Option<GrB_Info> {
    let mut st = state();
    st.calls.push(symbol);
    let injected = st.failures.remove(symbol);
    st.last_failed = injected.is_some();
    injected
}

fn finish(info: GrB_Info) -> GrB_Info {
    state().last_failed = info != GrB_SUCCESS && info != GrB_NO_VALUE;
    info
}

fn type_address(index: usize) -> usize {
    &TYPE_OBJECTS[index] as *const u8 as usize
}

fn is_builtin(type_: GrB_Type) -> bool {
    (0..TYPE_OBJECTS.len()).any(|i| type_address(i) == type_ as usize)
}

fn initialized() -> bool {
    let st = state();
    st.mode.is_some() && !st.finalized
}

/// Look up a live matrix by address
unsafe fn matrix<'a>(a: GrB_Matrix) -> Result<&'a mut FakeMatrix, GrB_Info> {
    if a.is_null() {
        return Err(GrB_NULL_POINTER);
    }
    if !state().live.contains(&(a as usize)) {
        return Err(GrB_UNINITIALIZED_OBJECT);
    }
    Ok(&mut *(a as *mut FakeMatrix))
}

fn adopt(m: FakeMatrix) -> GrB_Matrix {
    let ptr = Box::into_raw(Box::new(m));
    state().live.insert(ptr as usize);
    ptr as GrB_Matrix
}

unsafe extern "C" fn GrB_init(mode: GrB_Mode) -> GrB_Info {
    if let Some(info) = enter("GrB_init") {
        return info;
    }
    let mut st = state();
    if st.mode.is_some() || st.finalized {
        return GrB_INVALID_VALUE;
    }
    if mode != GrB_BLOCKING && mode != GrB_NONBLOCKING {
        return GrB_INVALID_VALUE;
    }
    st.mode = Some(mode);
    GrB_SUCCESS
}

unsafe extern "C" fn GrB_wait() -> GrB_Info {
    if let Some(info) = enter("GrB_wait") {
        return info;
    }
    if !initialized() {
        return finish(GrB_PANIC);
    }
    GrB_SUCCESS
}

unsafe extern "C" fn GrB_finalize() -> GrB_Info {
    if let Some(info) = enter("GrB_finalize") {
        return info;
    }
    let mut st = state();
    st.finalized = true;
    GrB_SUCCESS
}

unsafe extern "C" fn GrB_Matrix_new(
    a: *mut GrB_Matrix,
    type_: GrB_Type,
    nrows: GrB_Index,
    ncols: GrB_Index,
) -> GrB_Info {
    let result = catch_unwind(|| {
        if let Some(info) = enter("GrB_Matrix_new") {
            return info;
        }
        if !initialized() {
            return GrB_PANIC;
        }
        if a.is_null() || type_.is_null() {
            return GrB_NULL_POINTER;
        }
        *a = std::ptr::null_mut();
        if !is_builtin(type_) {
            return GrB_UNINITIALIZED_OBJECT;
        }
        if nrows > INDEX_MAX || ncols > INDEX_MAX {
            return GrB_INVALID_VALUE;
        }
        *a = adopt(FakeMatrix {
            type_: type_ as usize,
            nrows,
            ncols,
            nvals: 0,
        });
        GrB_SUCCESS
    });

    finish(result.unwrap_or(GrB_PANIC))
}

unsafe extern "C" fn GrB_Matrix_dup(c: *mut GrB_Matrix, a: GrB_Matrix) -> GrB_Info {
    let result = catch_unwind(|| {
        if let Some(info) = enter("GrB_Matrix_dup") {
            return info;
        }
        if c.is_null() {
            return GrB_NULL_POINTER;
        }
        match matrix(a) {
            Ok(source) => {
                let copy = source.clone();
                *c = adopt(copy);
                GrB_SUCCESS
            }
            Err(info) => info,
        }
    });

    finish(result.unwrap_or(GrB_PANIC))
}

unsafe extern "C" fn GrB_Matrix_clear(a: GrB_Matrix) -> GrB_Info {
    if let Some(info) = enter("GrB_Matrix_clear") {
        return info;
    }
    finish(match matrix(a) {
        Ok(m) => {
            m.nvals = 0;
            GrB_SUCCESS
        }
        Err(info) => info,
    })
}

unsafe fn query(
    symbol: &'static str,
    out: *mut GrB_Index,
    a: GrB_Matrix,
    field: fn(&FakeMatrix) -> GrB_Index,
) -> GrB_Info {
    if let Some(info) = enter(symbol) {
        return info;
    }
    if out.is_null() {
        return finish(GrB_NULL_POINTER);
    }
    finish(match matrix(a) {
        Ok(m) => {
            *out = field(m);
            GrB_SUCCESS
        }
        Err(info) => info,
    })
}

unsafe extern "C" fn GrB_Matrix_nrows(nrows: *mut GrB_Index, a: GrB_Matrix) -> GrB_Info {
    query("GrB_Matrix_nrows", nrows, a, |m| m.nrows)
}

unsafe extern "C" fn GrB_Matrix_ncols(ncols: *mut GrB_Index, a: GrB_Matrix) -> GrB_Info {
    query("GrB_Matrix_ncols", ncols, a, |m| m.ncols)
}

unsafe extern "C" fn GrB_Matrix_nvals(nvals: *mut GrB_Index, a: GrB_Matrix) -> GrB_Info {
    query("GrB_Matrix_nvals", nvals, a, |m| m.nvals)
}

unsafe extern "C" fn GxB_Matrix_type(type_: *mut GrB_Type, a: GrB_Matrix) -> GrB_Info {
    if let Some(info) = enter("GxB_Matrix_type") {
        return info;
    }
    if type_.is_null() {
        return finish(GrB_NULL_POINTER);
    }
    finish(match matrix(a) {
        Ok(m) => {
            *type_ = m.type_ as GrB_Type;
            GrB_SUCCESS
        }
        Err(info) => info,
    })
}

unsafe extern "C" fn GrB_Matrix_free(a: *mut GrB_Matrix) -> GrB_Info {
    if let Some(info) = enter("GrB_Matrix_free") {
        return info;
    }
    if a.is_null() {
        return finish(GrB_NULL_POINTER);
    }
    let ptr = *a;
    if ptr.is_null() {
        return GrB_SUCCESS;
    }
    if !state().live.remove(&(ptr as usize)) {
        return finish(GrB_UNINITIALIZED_OBJECT);
    }
    drop(Box::from_raw(ptr as *mut FakeMatrix));
    *a = std::ptr::null_mut();
    GrB_SUCCESS
}

unsafe extern "C" fn GrB_error() -> *const c_char {
    if state().last_failed {
        ERROR_MESSAGE.as_ptr() as *const c_char
    } else {
        std::ptr::null()
    }
}

/// Call table pointing at the functions above
pub fn api() -> GraphBlasApi {
    GraphBlasApi {
        init: GrB_init,
        wait: GrB_wait,
        finalize: GrB_finalize,
        matrix_new: GrB_Matrix_new,
        matrix_dup: GrB_Matrix_dup,
        matrix_clear: GrB_Matrix_clear,
        matrix_nrows: GrB_Matrix_nrows,
        matrix_ncols: GrB_Matrix_ncols,
        matrix_nvals: GrB_Matrix_nvals,
        matrix_type: GxB_Matrix_type,
        matrix_free: GrB_Matrix_free,
        error: Some(GrB_error),
    }
}

pub fn builtins() -> BuiltinTypes {
    let mut addresses = [0usize; 11];
    for (i, slot) in addresses.iter_mut().enumerate() {
        *slot = type_address(i);
    }
    BuiltinTypes::from_addresses(addresses)
}

/// Name of the current native instance
pub fn instance_name() -> String {
    format!("fake-graphblas-{}", INSTANCE.load(Ordering::SeqCst))
}

/// The current native instance, as the binding sees it
pub fn library() -> Library {
    Library::from_api(instance_name(), api(), builtins())
}

/// Start a new native instance, leaking any matrices a previous test left behind
pub fn reset() {
    *state() = NativeState::default();
    INSTANCE.fetch_add(1, Ordering::SeqCst);
}

/// Make the next call to `symbol` return `info` without doing anything
pub fn fail_next(symbol: &'static str, info: GrB_Info) {
    state().failures.insert(symbol, info);
}

/// Names of the entry points called since the last reset
pub fn calls() -> Vec<&'static str> {
    state().calls.clone()
}

pub fn call_count(symbol: &str) -> usize {
    state().calls.iter().filter(|c| **c == symbol).count()
}

/// Number of matrices allocated and not yet freed
pub fn live_matrices() -> usize {
    state().live.len()
}

pub fn native_mode() -> Option<GrB_Mode> {
    state().mode
}

pub fn is_finalized() -> bool {
    state().finalized
}

/// Pretend entries were stored in `a`; there is no bound setter
pub fn set_nvals(a: GrB_Matrix, nvals: GrB_Index) {
    if state().live.contains(&(a as usize)) {
        unsafe { (*(a as *mut FakeMatrix)).nvals = nvals };
    }
}

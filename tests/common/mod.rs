// Shared setup for integration tests
#![allow(dead_code)]

pub mod native;

use graphblas_binding::Context;
use std::sync::{Mutex, MutexGuard, PoisonError};

lazy_static::lazy_static! {
    // The native stand-in keeps global state, so tests take turns
    static ref TEST_LOCK: Mutex<()> = Mutex::new(());
}

/// Serialize against other tests and start from a fresh native state
pub fn setup() -> MutexGuard<'static, ()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let guard = TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    native::reset();
    guard
}

/// A context over the native stand-in, not yet initialized
pub fn context() -> Context {
    Context::new(native::library())
}

// The process-wide context can be set once; this file is its own process

mod common;

use common::native;
use graphblas_binding::{Context, GraphBlasError, Mode, Phase, TypeCode};

#[test]
fn test_global_context_is_installed_once() {
    let _guard = common::setup();

    let ctx = Context::install_global(native::library()).unwrap();
    assert_eq!(ctx.phase(), Phase::Uninitialized);
    assert_eq!(ctx.library().name(), native::instance_name());

    // A second install is refused and the first stays in place
    let err = Context::install_global(native::library()).unwrap_err();
    assert_eq!(err, GraphBlasError::AlreadyInitialized);
    let again = Context::global().unwrap();
    assert!(std::ptr::eq(ctx, again));

    again.init(Mode::NonBlocking).unwrap();
    let a = graphblas_binding::Matrix::new(ctx, &ctx.builtin(TypeCode::Bool), 5, 6).unwrap();
    assert_eq!(a.shape().unwrap(), (5, 6));
    again.wait().unwrap();
    drop(a);

    ctx.finalize().unwrap();
    assert_eq!(Context::global().unwrap().phase(), Phase::Finalized);
    assert_eq!(ctx.init(Mode::Blocking), Err(GraphBlasError::Finalized));
}

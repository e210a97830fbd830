// Core Layer: Matrix handle
//
// Safe wrapper over a native GrB_Matrix. The wrapper owns the native object:
// dropping it calls GrB_Matrix_free. The address itself lives in the
// registry shared by every context over the same library, so a Matrix that
// outlives `finalize` fails with `StaleHandle` rather than handing a dead
// pointer to the library.

use crate::core::context::Context;
use crate::core::element_type::ElementType;
use crate::core::error::{GraphBlasError, Result};
use crate::core::handles::Handle;
use crate::core::status::Outcome;
use crate::ffi::api::GraphBlasApi;
use crate::ffi::error::GrB_Info;
use crate::ffi::matrix::{GrB_Index, GrB_Matrix};
use crate::ffi::types::GrB_Type;
use crate::types::GraphBLASType;
use std::fmt;

type QueryFn = unsafe extern "C" fn(*mut GrB_Index, GrB_Matrix) -> GrB_Info;

/// Sparse matrix owned through a GraphBLAS context
pub struct Matrix<'ctx> {
    ctx: &'ctx Context,
    handle: Handle,
}

impl<'ctx> Matrix<'ctx> {
    /// Create a new matrix with no entries (`GrB_Matrix_new`)
    pub fn new(
        ctx: &'ctx Context,
        element_type: &ElementType,
        nrows: GrB_Index,
        ncols: GrB_Index,
    ) -> Result<Self> {
        let handle = ctx.create("GrB_Matrix_new", |api, out| unsafe {
            (api.matrix_new)(out, element_type.as_ptr(), nrows, ncols)
        })?;
        Ok(Self { ctx, handle })
    }

    /// Create a matrix whose element type is the built-in matching `T`
    pub fn new_typed<T: GraphBLASType>(
        ctx: &'ctx Context,
        nrows: GrB_Index,
        ncols: GrB_Index,
    ) -> Result<Self> {
        Self::new(ctx, &ctx.builtin(T::TYPE_CODE), nrows, ncols)
    }

    /// Make an exact, independent copy (`GrB_Matrix_dup`)
    pub fn dup(&self) -> Result<Matrix<'ctx>> {
        let source = self.as_raw()?;
        let handle = self
            .ctx
            .create("GrB_Matrix_dup", |api, out| unsafe { (api.matrix_dup)(out, source) })?;
        Ok(Self {
            ctx: self.ctx,
            handle,
        })
    }

    /// Remove all entries; type and dimensions are unchanged (`GrB_Matrix_clear`)
    pub fn clear(&mut self) -> Result<()> {
        let raw = self.as_raw()?;
        self.ctx
            .call("GrB_Matrix_clear", |api| unsafe { (api.matrix_clear)(raw) })?;
        Ok(())
    }

    /// Number of rows (`GrB_Matrix_nrows`)
    pub fn nrows(&self) -> Result<GrB_Index> {
        self.query("GrB_Matrix_nrows", |api| api.matrix_nrows)
    }

    /// Number of columns (`GrB_Matrix_ncols`)
    pub fn ncols(&self) -> Result<GrB_Index> {
        self.query("GrB_Matrix_ncols", |api| api.matrix_ncols)
    }

    /// Number of stored entries (`GrB_Matrix_nvals`)
    ///
    /// In non-blocking mode this forces any pending work on the matrix.
    pub fn nvals(&self) -> Result<GrB_Index> {
        self.query("GrB_Matrix_nvals", |api| api.matrix_nvals)
    }

    /// Get shape as (nrows, ncols)
    pub fn shape(&self) -> Result<(GrB_Index, GrB_Index)> {
        Ok((self.nrows()?, self.ncols()?))
    }

    /// Element type of the matrix (`GxB_Matrix_type`)
    pub fn element_type(&self) -> Result<ElementType> {
        let raw = self.as_raw()?;
        let mut out: GrB_Type = std::ptr::null_mut();
        let present = self
            .ctx
            .call("GxB_Matrix_type", |api| unsafe { (api.matrix_type)(&mut out, raw) })?;
        let address = Outcome::from_presence(present, out as usize).require()?;
        Ok(self.ctx.element_type_at(address))
    }

    /// Free the native matrix now and report the status (`GrB_Matrix_free`)
    ///
    /// Dropping a `Matrix` does the same but can only log a failure.
    pub fn free(self) -> Result<()> {
        self.ctx.release(self.handle)
    }

    /// Registry handle of this matrix
    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn context(&self) -> &'ctx Context {
        self.ctx
    }

    /// The native pointer, for calls this crate does not bind
    ///
    /// Valid only while this `Matrix` is alive and the context is initialized.
    pub fn as_raw(&self) -> Result<GrB_Matrix> {
        Ok(self.ctx.matrix(self.handle)?.as_ptr())
    }

    fn query<S>(&self, symbol: &str, select: S) -> Result<GrB_Index>
    where
        S: FnOnce(&GraphBlasApi) -> QueryFn,
    {
        let raw = self.as_raw()?;
        let mut out: GrB_Index = 0;
        let present = self
            .ctx
            .call(symbol, |api| unsafe { select(api)(&mut out, raw) })?;
        Outcome::from_presence(present, out).require()
    }
}

impl Drop for Matrix<'_> {
    fn drop(&mut self) {
        match self.ctx.release(self.handle) {
            // Already released by `free` or by finalize
            Ok(()) | Err(GraphBlasError::StaleHandle) => {}
            Err(e) => log::warn!("Failed to free matrix {:?}: {}", self.handle, e),
        }
    }
}

impl fmt::Debug for Matrix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix").field("handle", &self.handle).finish()
    }
}

// Core Layer: GraphBLAS context and lifecycle
//
// Uninitialized -> Initialized(mode) -> Finalized. The phase belongs to the
// native library instance, not to a `Context`: every context over the same
// instance shares one `Lifecycle`, kept in a process-wide table for the life
// of the process. Native calls hold the phase for reading so `finalize`
// cannot run underneath one; `init` and `finalize` hold it for writing.
// Finalized is terminal.

use crate::config::{LoaderConfig, Mode};
use crate::core::element_type::ElementType;
use crate::core::error::{GraphBlasError, Result};
use crate::core::handles::{Handle, HandleRegistry, Ownership, RawHandle};
use crate::core::status;
use crate::ffi::api::GraphBlasApi;
use crate::ffi::error::{grb_info_to_string, GrB_Info};
use crate::ffi::matrix::GrB_Matrix;
use crate::loader::{Library, LibraryId};
use crate::types::TypeCode;
use once_cell::sync::{Lazy, OnceCell};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

static GLOBAL: OnceCell<Context> = OnceCell::new();

// Entries are never removed, so a finalized instance stays finalized
static LIFECYCLES: Lazy<Mutex<HashMap<LibraryId, Arc<Lifecycle>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Lifecycle phase of a native library instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Initialized(Mode),
    Finalized,
}

impl Phase {
    fn ensure_running(self) -> Result<()> {
        match self {
            Phase::Initialized(_) => Ok(()),
            Phase::Uninitialized => Err(GraphBlasError::NotInitialized),
            Phase::Finalized => Err(GraphBlasError::Finalized),
        }
    }
}

/// State shared by every context over one native instance
#[derive(Debug)]
struct Lifecycle {
    phase: RwLock<Phase>,
    matrices: HandleRegistry<RawHandle>,
}

fn lifecycle_for(id: LibraryId) -> Arc<Lifecycle> {
    let mut table = LIFECYCLES.lock().unwrap_or_else(PoisonError::into_inner);
    table
        .entry(id)
        .or_insert_with(|| {
            Arc::new(Lifecycle {
                phase: RwLock::new(Phase::Uninitialized),
                matrices: HandleRegistry::new(),
            })
        })
        .clone()
}

/// A loaded library together with the lifecycle of its native instance
#[derive(Debug)]
pub struct Context {
    library: Library,
    lifecycle: Arc<Lifecycle>,
}

impl Context {
    /// Wrap a loaded library
    ///
    /// Contexts over the same native instance (see `Library::id`) observe one
    /// phase: initializing through either initializes both, and once one is
    /// finalized no other can bring the instance back.
    pub fn new(library: Library) -> Self {
        let lifecycle = lifecycle_for(library.id());
        Self { library, lifecycle }
    }

    /// Load the native library and attach to its lifecycle
    pub fn load(config: &LoaderConfig) -> Result<Self> {
        Ok(Self::new(Library::load(config)?))
    }

    /// The process-wide context, loading the library on first use
    ///
    /// The library is located through `LoaderConfig::from_env`. A failed load
    /// is reported to the caller and retried on the next call.
    pub fn global() -> Result<&'static Context> {
        GLOBAL.get_or_try_init(|| {
            let config = LoaderConfig::from_env()?;
            Context::load(&config)
        })
    }

    /// Install an already loaded library as the process-wide context
    pub fn install_global(library: Library) -> Result<&'static Context> {
        let mut installed = false;
        let ctx = GLOBAL.get_or_init(|| {
            installed = true;
            Context::new(library)
        });
        if installed {
            Ok(ctx)
        } else {
            Err(GraphBlasError::AlreadyInitialized)
        }
    }

    /// Load the process-wide context and initialize it in the configured mode
    pub fn init_global() -> Result<&'static Context> {
        let config = LoaderConfig::from_env()?;
        let ctx = Self::global()?;
        ctx.init(config.mode)?;
        Ok(ctx)
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn phase(&self) -> Phase {
        *self.read_phase()
    }

    /// Mode chosen at `init`, while initialized
    pub fn mode(&self) -> Option<Mode> {
        match self.phase() {
            Phase::Initialized(mode) => Some(mode),
            _ => None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.mode().is_some()
    }

    /// Start the library in `mode` (`GrB_init`)
    pub fn init(&self, mode: Mode) -> Result<()> {
        let mut phase = self.write_phase();
        match *phase {
            Phase::Uninitialized => {}
            Phase::Initialized(_) => return Err(GraphBlasError::AlreadyInitialized),
            Phase::Finalized => return Err(GraphBlasError::Finalized),
        }

        let info = unsafe { (self.api().init)(mode.to_grb_mode()) };
        self.classify("GrB_init", info)?;

        log::info!("GraphBLAS '{}' initialized in {} mode", self.library.name(), mode);
        *phase = Phase::Initialized(mode);
        Ok(())
    }

    /// Force all pending operations to complete (`GrB_wait`)
    ///
    /// In blocking mode there is never pending work and this returns at once.
    pub fn wait(&self) -> Result<()> {
        self.call("GrB_wait", |api| unsafe { (api.wait)() })?;
        Ok(())
    }

    /// Shut the library down (`GrB_finalize`)
    ///
    /// Pending work is abandoned, not completed. Matrices still alive, from
    /// any context over this instance, are freed first and every outstanding
    /// `Matrix` becomes stale. A second call returns `Finalized` without
    /// reaching the library.
    pub fn finalize(&self) -> Result<()> {
        let mut phase = self.write_phase();
        match *phase {
            Phase::Initialized(_) => {}
            Phase::Uninitialized => return Err(GraphBlasError::NotInitialized),
            Phase::Finalized => return Err(GraphBlasError::Finalized),
        }

        let live = self.lifecycle.matrices.drain();
        if !live.is_empty() {
            log::debug!("Releasing {} live matrices before finalize", live.len());
        }
        for raw in live.into_iter().filter(|r| r.ownership() == Ownership::Owned) {
            let mut ptr: GrB_Matrix = raw.as_ptr();
            let info = unsafe { (self.api().matrix_free)(&mut ptr) };
            if let Err(e) = self.classify("GrB_Matrix_free", info) {
                log::warn!("Failed to free matrix {:#x} during finalize: {}", raw.address(), e);
            }
        }

        // Terminal even if the library reports an error
        *phase = Phase::Finalized;
        let info = unsafe { (self.api().finalize)() };
        self.classify("GrB_finalize", info)?;

        log::info!("GraphBLAS '{}' finalized", self.library.name());
        Ok(())
    }

    /// The built-in type singleton for `code`
    pub fn builtin(&self, code: TypeCode) -> ElementType {
        ElementType::builtin(code, self.library.builtins())
    }

    pub(crate) fn element_type_at(&self, address: usize) -> ElementType {
        ElementType::from_address(address, self.library.builtins())
    }

    /// Number of matrices created on this native instance and not yet freed
    pub fn live_matrices(&self) -> usize {
        self.lifecycle.matrices.len()
    }

    /// Address registered under `handle`
    pub(crate) fn matrix(&self, handle: Handle) -> Result<RawHandle> {
        self.lifecycle.matrices.get(handle)
    }

    /// Forward one native call and classify its status
    ///
    /// Fails with a lifecycle error, without calling `f`, unless initialized.
    /// Returns `Ok(false)` for `GrB_NO_VALUE`.
    pub(crate) fn call<F>(&self, symbol: &str, f: F) -> Result<bool>
    where
        F: FnOnce(&GraphBlasApi) -> GrB_Info,
    {
        let phase = self.read_phase();
        phase.ensure_running()?;

        let info = f(self.api());
        self.classify(symbol, info)
    }

    /// Forward a call that produces a new matrix and register the result
    ///
    /// Registration happens before the phase is released, so a concurrent
    /// `finalize` either sees the matrix and frees it or runs first and
    /// prevents the call.
    pub(crate) fn create<F>(&self, symbol: &str, f: F) -> Result<Handle>
    where
        F: FnOnce(&GraphBlasApi, &mut GrB_Matrix) -> GrB_Info,
    {
        let phase = self.read_phase();
        phase.ensure_running()?;

        let mut out: GrB_Matrix = std::ptr::null_mut();
        let info = f(self.api(), &mut out);
        self.classify(symbol, info)?;
        if out.is_null() {
            log::error!("{} reported success but returned a NULL matrix", symbol);
            return Err(GraphBlasError::NullHandle);
        }

        let handle = self.lifecycle.matrices.insert(RawHandle::owned(out as usize));
        log::trace!("Matrix {:p} registered as {:?}", out, handle);
        Ok(handle)
    }

    /// Unregister `handle` and free its matrix (`GrB_Matrix_free`)
    pub(crate) fn release(&self, handle: Handle) -> Result<()> {
        let phase = self.read_phase();
        // Finalize drains the registry, so a live entry implies a running library
        let raw = self.lifecycle.matrices.remove(handle)?;
        phase.ensure_running()?;

        let mut ptr: GrB_Matrix = raw.as_ptr();
        let info = unsafe { (self.api().matrix_free)(&mut ptr) };
        self.classify("GrB_Matrix_free", info)?;
        Ok(())
    }

    fn api(&self) -> &GraphBlasApi {
        self.library.api()
    }

    fn classify(&self, symbol: &str, info: GrB_Info) -> Result<bool> {
        let result = status::check(info);
        match &result {
            Ok(_) => log::debug!("{} -> {}", symbol, grb_info_to_string(info)),
            Err(_) => match self.library.last_error() {
                Some(detail) => {
                    log::debug!("{} -> {} ({})", symbol, grb_info_to_string(info), detail)
                }
                None => log::debug!("{} -> {}", symbol, grb_info_to_string(info)),
            },
        }
        result
    }

    fn read_phase(&self) -> RwLockReadGuard<'_, Phase> {
        self.lifecycle.phase.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_phase(&self) -> RwLockWriteGuard<'_, Phase> {
        self.lifecycle.phase.write().unwrap_or_else(PoisonError::into_inner)
    }
}

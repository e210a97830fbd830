// Loader Layer: native library loading and symbol resolution
//
// Opening the library resolves every bound entry point and reads every
// built-in type global up front. A library that lacks any of them is
// rejected here, before a single call can be made.

use crate::config::{LibrarySource, LoaderConfig};
use crate::core::error::{GraphBlasError, Result};
use crate::ffi::api::{BuiltinTypes, GraphBlasApi};
use crate::ffi::init::GrB_error_fn;
use crate::ffi::types::{GrB_Type, BUILTIN_TYPE_COUNT, BUILTIN_TYPE_SYMBOLS};
use std::ffi::CStr;
use std::fmt;
use std::path::Path;

/// Identity of the native instance behind a `Library`
///
/// Libraries with equal ids share one lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LibraryId {
    /// An opened shared object, known by the address of its `GrB_init`
    Native(usize),
    /// An in-process call table, known by the name it was given
    InProcess(String),
}

/// A loaded GraphBLAS library: its call table and built-in type singletons
pub struct Library {
    api: GraphBlasApi,
    builtins: BuiltinTypes,
    name: String,
    // Keeps the code behind `api` mapped; `None` for in-process tables
    _native: Option<libloading::Library>,
}

impl Library {
    /// Load the library described by `config`
    pub fn load(config: &LoaderConfig) -> Result<Self> {
        match &config.source {
            LibrarySource::Path(path) => Self::open(path),
            LibrarySource::Name(name) => Self::open(libloading::library_filename(name)),
        }
    }

    /// Open a library from a path or platform file name
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();

        // Running the library's initializers is the only effect of opening it
        let native = unsafe { libloading::Library::new(path) }.map_err(|e| {
            log::error!("Failed to load GraphBLAS library '{}': {}", name, e);
            GraphBlasError::LibraryLoad(format!("'{}': {}", name, e))
        })?;

        let (api, builtins) = unsafe { (resolve_api(&native, &name)?, resolve_builtins(&native, &name)?) };

        log::info!(
            "Loaded GraphBLAS library '{}' ({} built-in types{})",
            name,
            BUILTIN_TYPE_SYMBOLS.len(),
            if api.error.is_some() { ", GrB_error available" } else { "" }
        );

        Ok(Self {
            api,
            builtins,
            name,
            _native: Some(native),
        })
    }

    /// Wrap a call table whose functions are already present in the process
    ///
    /// Used for statically linked builds and test doubles. Tables wrapped
    /// under the same `name` are treated as one native instance.
    pub fn from_api(name: impl Into<String>, api: GraphBlasApi, builtins: BuiltinTypes) -> Self {
        Self {
            api,
            builtins,
            name: name.into(),
            _native: None,
        }
    }

    pub fn api(&self) -> &GraphBlasApi {
        &self.api
    }

    pub fn builtins(&self) -> &BuiltinTypes {
        &self.builtins
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The native instance this library refers to
    ///
    /// Opening the same shared object twice yields the same code, hence the
    /// same id.
    pub fn id(&self) -> LibraryId {
        match self._native {
            Some(_) => LibraryId::Native(self.api.init as usize),
            None => LibraryId::InProcess(self.name.clone()),
        }
    }

    /// The library's description of the last error, if it exports `GrB_error`
    pub fn last_error(&self) -> Option<String> {
        let error = self.api.error?;
        let message = unsafe { error() };
        if message.is_null() {
            return None;
        }
        // The string is owned by the library and only valid until the next call
        let message = unsafe { CStr::from_ptr(message) }.to_string_lossy().trim().to_string();
        if message.is_empty() {
            None
        } else {
            Some(message)
        }
    }
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("name", &self.name)
            .field("builtins", &self.builtins)
            .field("dynamic", &self._native.is_some())
            .finish()
    }
}

/// Look up a function symbol and copy out the pointer
///
/// # Safety
/// `F` must match the native signature of `symbol`.
unsafe fn function<F: Copy>(native: &libloading::Library, library: &str, symbol: &str) -> Result<F> {
    native
        .get::<F>(symbol.as_bytes())
        .map(|f| *f)
        .map_err(|e| {
            log::error!("Function '{}' not found in '{}': {}", symbol, library, e);
            GraphBlasError::MissingSymbol(symbol.to_string())
        })
}

unsafe fn resolve_api(native: &libloading::Library, library: &str) -> Result<GraphBlasApi> {
    Ok(GraphBlasApi {
        init: function(native, library, "GrB_init")?,
        wait: function(native, library, "GrB_wait")?,
        finalize: function(native, library, "GrB_finalize")?,
        matrix_new: function(native, library, "GrB_Matrix_new")?,
        matrix_dup: function(native, library, "GrB_Matrix_dup")?,
        matrix_clear: function(native, library, "GrB_Matrix_clear")?,
        matrix_nrows: function(native, library, "GrB_Matrix_nrows")?,
        matrix_ncols: function(native, library, "GrB_Matrix_ncols")?,
        matrix_nvals: function(native, library, "GrB_Matrix_nvals")?,
        matrix_type: function(native, library, "GxB_Matrix_type")?,
        matrix_free: function(native, library, "GrB_Matrix_free")?,
        error: native.get::<GrB_error_fn>(b"GrB_error").ok().map(|f| *f),
    })
}

unsafe fn resolve_builtins(native: &libloading::Library, library: &str) -> Result<BuiltinTypes> {
    read_builtins(library, |symbol| function::<*const GrB_Type>(native, library, symbol))
}

/// Read each built-in `GrB_Type` global
///
/// `lookup` yields the symbol's address, which is the address of a variable
/// holding the handle, so it is dereferenced once here.
///
/// # Safety
/// Every non-null address returned by `lookup` must point at a `GrB_Type`.
unsafe fn read_builtins<L>(library: &str, mut lookup: L) -> Result<BuiltinTypes>
where
    L: FnMut(&str) -> Result<*const GrB_Type>,
{
    let mut handles: [GrB_Type; BUILTIN_TYPE_COUNT] =
        [std::ptr::null_mut(); BUILTIN_TYPE_COUNT];

    for (slot, symbol) in handles.iter_mut().zip(BUILTIN_TYPE_SYMBOLS) {
        let variable = lookup(symbol)?;
        if variable.is_null() {
            return Err(GraphBlasError::MissingSymbol(symbol.to_string()));
        }
        let handle = *variable;
        if handle.is_null() {
            log::error!("Built-in type '{}' in '{}' is NULL", symbol, library);
            return Err(GraphBlasError::LibraryLoad(format!(
                "built-in type '{}' is NULL in '{}'",
                symbol, library
            )));
        }
        log::trace!("Resolved {} at {:p}", symbol, handle);
        *slot = handle;
    }

    Ok(BuiltinTypes::from_handles(handles))
}

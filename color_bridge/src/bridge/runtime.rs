// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Process-wide state for the embedded Python interpreter.
//!
//! The interpreter and the `colorspaces` module handle are initialized once
//! per process and torn down at most once, no matter how many times
//! [`shutdown`] runs (repeated shutdown signals must be safe). The call model
//! is single threaded and synchronous: each conversion blocks the caller until
//! the routine returns or fails, and there is no cancellation or timeout - a
//! hang on the Python side blocks the whole process.
//!
//! pyo3 never finalizes the interpreter itself (doing so with live handles is
//! unsound); the resource this module owns and releases is the cached module
//! handle. Its reference count is decremented exactly once, in [`shutdown`].

use std::{path::PathBuf,
          sync::{Mutex, MutexGuard}};

use pyo3::{prelude::*, types::PyList};

use super::error::{BridgeError, BridgeResult};

/// Name of the Python module hosting the conversion routines.
pub const CONVERSION_MODULE_NAME: &str = "colorspaces";

/// The lifecycle of the cached module handle. Transitions are one way:
/// `Uninit` → `Ready` on the first successful import, anything → `Shutdown`
/// on teardown.
#[derive(Debug)]
enum ModuleCache {
    Uninit,
    Ready(Py<PyModule>),
    Shutdown,
}

static MODULE_CACHE: Mutex<ModuleCache> = Mutex::new(ModuleCache::Uninit);

fn lock_module_cache() -> MutexGuard<'static, ModuleCache> {
    match MODULE_CACHE.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Bring up the interpreter, put the current working directory on the module
/// search path, and import the `colorspaces` module eagerly.
///
/// Idempotent: calling this when the module is already loaded is a no-op.
///
/// # Errors
///
/// [`BridgeError::ModuleResolution`] if the module cannot be imported,
/// [`BridgeError::RuntimeShutdown`] if [`shutdown`] already ran.
pub fn try_initialize() -> BridgeResult<()> { try_initialize_with_search_paths(&[]) }

/// Like [`try_initialize`], with extra directories prepended to the module
/// search path ahead of the import. The current working directory is always
/// included.
///
/// # Errors
///
/// Same as [`try_initialize`].
pub fn try_initialize_with_search_paths(extra_paths: &[PathBuf]) -> BridgeResult<()> {
    Python::with_gil(|py| {
        try_prepend_search_paths(py, extra_paths).map_err(|source| {
            BridgeError::ModuleResolution {
                module_name: CONVERSION_MODULE_NAME.to_string(),
                source,
            }
        })?;
        try_cached_module(py).map(|_| ())
    })
}

/// Get the cached module handle, importing it on first use. The caller must
/// hold the GIL.
pub(crate) fn try_cached_module(py: Python<'_>) -> BridgeResult<Py<PyModule>> {
    let mut cache = lock_module_cache();
    match &*cache {
        ModuleCache::Shutdown => Err(BridgeError::RuntimeShutdown),
        ModuleCache::Ready(module) => Ok(module.clone_ref(py)),
        ModuleCache::Uninit => {
            // Import failure is fatal to this call but not cached; a later
            // call may retry once the module becomes importable.
            try_prepend_search_paths(py, &[]).map_err(|source| {
                BridgeError::ModuleResolution {
                    module_name: CONVERSION_MODULE_NAME.to_string(),
                    source,
                }
            })?;
            let module = py.import(CONVERSION_MODULE_NAME).map_err(|source| {
                BridgeError::ModuleResolution {
                    module_name: CONVERSION_MODULE_NAME.to_string(),
                    source,
                }
            })?;
            let handle = module.unbind();
            let result = handle.clone_ref(py);
            *cache = ModuleCache::Ready(handle);
            tracing::debug!(
                message = "Loaded Python conversion module",
                module_name = CONVERSION_MODULE_NAME
            );
            Ok(result)
        }
    }
}

/// Prepend the current working directory and `extra_paths` to `sys.path`,
/// skipping entries that are already present.
fn try_prepend_search_paths(py: Python<'_>, extra_paths: &[PathBuf]) -> PyResult<()> {
    let sys_path = py.import("sys")?.getattr("path")?.downcast_into::<PyList>()?;

    let mut entries = vec![".".to_string()];
    entries.extend(
        extra_paths
            .iter()
            .map(|path| path.to_string_lossy().into_owned()),
    );

    for entry in entries {
        if !sys_path.contains(&entry)? {
            sys_path.insert(0, &entry)?;
        }
    }

    Ok(())
}

/// Release the cached module handle and refuse all further conversions.
///
/// Idempotent: safe to call any number of times (e.g. from a signal handler
/// and again on the normal exit path). The handle's reference count is
/// decremented exactly once, on the first call that finds it loaded.
pub fn shutdown() {
    let previous = {
        let mut cache = lock_module_cache();
        std::mem::replace(&mut *cache, ModuleCache::Shutdown)
    };
    if let ModuleCache::Ready(module) = previous {
        // Deterministic release: decref now, with the GIL held, rather than
        // deferring to pyo3's pending-decref queue.
        Python::with_gil(|py| drop(module.into_bound(py)));
        tracing::debug!(message = "Released Python conversion module handle");
    }
}

/// Whether [`shutdown`] has run.
#[must_use]
pub fn is_shut_down() -> bool {
    matches!(&*lock_module_cache(), ModuleCache::Shutdown)
}

/// Scoped ownership of the bridge runtime: acquiring it initializes the
/// interpreter and module eagerly, dropping it runs [`shutdown`]. Because
/// [`shutdown`] is idempotent, combining this guard with explicit shutdown
/// calls (e.g. on an interrupt path) is safe.
#[derive(Debug)]
#[must_use]
pub struct RuntimeGuard {
    _private: (),
}

impl RuntimeGuard {
    /// # Errors
    ///
    /// Same as [`try_initialize`].
    pub fn try_acquire() -> BridgeResult<Self> {
        try_initialize()?;
        Ok(Self { _private: () })
    }

    /// # Errors
    ///
    /// Same as [`try_initialize_with_search_paths`].
    pub fn try_acquire_with_search_paths(extra_paths: &[PathBuf]) -> BridgeResult<Self> {
        try_initialize_with_search_paths(extra_paths)?;
        Ok(Self { _private: () })
    }
}

impl Drop for RuntimeGuard {
    fn drop(&mut self) { shutdown(); }
}

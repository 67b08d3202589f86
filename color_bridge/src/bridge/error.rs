// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Boundary failure taxonomy.
//!
//! Every way a conversion call can fail maps to exactly one [`BridgeError`]
//! variant. The `try_` functions in [`super::convert`] return these directly;
//! the soft API swallows them after logging, so callers there cannot
//! distinguish "default color because the call failed" from "default color
//! because that is the true conversion" - use the `try_` API when that
//! distinction matters.

/// Convenience type alias for bridge call results.
pub type BridgeResult<T> = core::result::Result<T, BridgeError>;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum BridgeError {
    /// The external module hosting the conversion routines cannot be located
    /// or loaded. Fatal to the call; the next call may retry the import.
    #[error("failed to load Python module `{module_name}`")]
    #[diagnostic(
        code(color_bridge::module_resolution),
        help("the module must be importable from the current working directory or a configured search path")
    )]
    ModuleResolution {
        module_name: String,
        #[source]
        source: pyo3::PyErr,
    },

    /// The named routine is missing from the module, or exists but is not
    /// callable.
    #[error("cannot find callable `{routine_name}` in Python module `{module_name}`")]
    #[diagnostic(code(color_bridge::function_resolution))]
    FunctionResolution {
        module_name: String,
        routine_name: String,
    },

    /// The routine itself raised during execution.
    #[error("call to `{routine_name}` failed")]
    #[diagnostic(code(color_bridge::invocation))]
    Invocation {
        routine_name: String,
        #[source]
        source: pyo3::PyErr,
    },

    /// The routine returned something other than a 3-element numeric
    /// sequence.
    #[error("`{routine_name}` returned `{reply_repr}`, expected a 3-element numeric sequence")]
    #[diagnostic(code(color_bridge::shape_mismatch))]
    ShapeMismatch {
        routine_name: String,
        reply_repr: String,
    },

    /// A conversion was attempted after [`shutdown`] released the module
    /// handle.
    ///
    /// [`shutdown`]: super::runtime::shutdown
    #[error("the Python runtime has been shut down")]
    #[diagnostic(code(color_bridge::runtime_shutdown))]
    RuntimeShutdown,
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The cross-language conversion bridge.
//!
//! The contract with the Python side is narrow: a routine name (string) plus
//! 3 positional floats in, 3 positional floats out, or failure. Everything in
//! this module exists to transport data across that boundary safely:
//!
//! - [`registry`] - the closed set of conversion routines ([`ConversionFn`]).
//! - [`runtime`] - the process-wide interpreter and the cached `colorspaces`
//!   module handle, with idempotent teardown.
//! - [`convert`] - marshal, invoke, unmarshal; the `try_` API surfaces
//!   [`BridgeError`], the soft API degrades to a default color with a logged
//!   diagnostic so a display loop never crashes on a boundary failure.
//! - [`error`] - the boundary failure taxonomy.

// Attach sources.
pub mod convert;
pub mod error;
pub mod registry;
pub mod runtime;

// Re-export.
pub use convert::*;
pub use error::*;
pub use registry::*;
pub use runtime::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl-color-viewer
//!
//! Full-screen terminal viewer for the conversion pipeline in
//! [`r3bl_color_bridge`]. The display harness is deliberately simple: compute
//! the pipeline once, render it with truecolor swatches, redraw on any
//! keypress, and exit on `q`, `Esc`, or `Ctrl+C`. The terminal is restored on
//! every exit path by [`RawModeGuard`], and the Python runtime handle is
//! released by the bridge's `RuntimeGuard` in `main`.

// Attach sources.
pub mod cli_arg;
pub mod logging;
pub mod raw_mode;
pub mod report;
pub mod ui;

// Re-export.
pub use cli_arg::*;
pub use logging::*;
pub use raw_mode::*;
pub use report::*;

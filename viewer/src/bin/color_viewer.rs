// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::Parser;
use miette::IntoDiagnostic as _;
use r3bl_color_bridge::{Rgb, RuntimeGuard};
use r3bl_color_viewer::{CliArg, ConversionReport, try_initialize_logging, ui};

fn main() -> miette::Result<()> {
    let cli_arg = CliArg::parse();

    let _log_guard = if cli_arg.enable_logging {
        Some(try_initialize_logging()?)
    } else {
        None
    };
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start color-viewer", cli_arg = ?cli_arg);

    // The runtime always searches the current working directory; `python/`
    // under it is where this repo keeps `colorspaces.py`.
    let mut search_paths = vec![PathBuf::from("python")];
    search_paths.extend(cli_arg.module_paths.iter().cloned());

    // Dropping the guard (on every exit path below) releases the module
    // handle; teardown is idempotent so a second shutdown elsewhere is safe.
    let maybe_runtime_guard =
        match RuntimeGuard::try_acquire_with_search_paths(&search_paths) {
            Ok(runtime_guard) => Some(runtime_guard),
            Err(error) => {
                // The display loop still runs; conversions degrade to default
                // colors.
                tracing::warn!(
                    message = "Python conversion module unavailable",
                    error = %error
                );
                None
            }
        };

    let start = Rgb::new(cli_arg.red, cli_arg.green, cli_arg.blue);
    let report = ConversionReport::compute(start);
    ui::run(&report).into_diagnostic()?;

    drop(maybe_runtime_guard);
    tracing::debug!(message = "Stop color-viewer");
    Ok(())
}

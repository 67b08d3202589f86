// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! File-backed logging. The viewer owns the whole screen while it runs, so
//! diagnostics must never be written to stdout or stderr; they go to
//! [`LOG_FILE_NAME`] in the current working directory instead.

use tracing_appender::non_blocking::WorkerGuard;

pub const LOG_FILE_NAME: &str = "color_viewer_log.txt";

/// Install the global tracing subscriber writing to [`LOG_FILE_NAME`]. Keep
/// the returned guard alive for the life of the process, or buffered log
/// lines are lost.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn try_initialize_logging() -> miette::Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);
    let (non_blocking_writer, worker_guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_max_level(tracing_core::LevelFilter::DEBUG)
        .with_writer(non_blocking_writer)
        .with_ansi(false)
        .try_init()
        .map_err(|error| miette::miette!("failed to install tracing subscriber: {error}"))?;

    Ok(worker_guard)
}

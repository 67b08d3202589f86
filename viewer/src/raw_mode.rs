// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scoped terminal state. Raw mode and the alternate screen are process-wide
//! side effects; holding them in a drop guard means the terminal is restored
//! on every exit path - normal quit, `?` propagation, and panics alike.

use std::io;

use crossterm::{cursor::{Hide, Show},
                execute,
                terminal::{EnterAlternateScreen,
                           LeaveAlternateScreen,
                           disable_raw_mode,
                           enable_raw_mode}};

#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Enter raw mode, switch to the alternate screen, and hide the cursor.
    ///
    /// # Errors
    ///
    /// Any terminal I/O failure.
    pub fn try_new() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Restore in reverse order of acquisition. Failures here are ignored;
        // there is nowhere left to report them.
        execute!(io::stdout(), Show, LeaveAlternateScreen).ok();
        disable_raw_mode().ok();
    }
}

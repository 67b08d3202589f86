// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(bin_name = "color-viewer")]
#[command(
    about = "Full-screen terminal viewer for cross-language color conversions",
    long_about = None
)]
#[command(version)]
#[command(next_line_help = true)]
pub struct CliArg {
    /// Red channel of the starting color, in [0, 1]
    #[arg(value_name = "red", long, short = 'r', default_value_t = 0.5)]
    pub red: f32,

    /// Green channel of the starting color, in [0, 1]
    #[arg(value_name = "green", long, short = 'g', default_value_t = 0.5)]
    pub green: f32,

    /// Blue channel of the starting color, in [0, 1]
    #[arg(value_name = "blue", long, short = 'b', default_value_t = 0.5)]
    pub blue: f32,

    /// Extra directories to prepend to the Python module search path.
    /// `colorspaces.py` must be importable from one of them, or from the
    /// current working directory 💡
    #[arg(value_name = "dir", long = "module-path", short = 'm')]
    pub module_paths: Vec<PathBuf>,

    /// Write diagnostics to a log file instead of the (fullscreen) display
    #[arg(long, short = 'l')]
    pub enable_logging: bool,
}

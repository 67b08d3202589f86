// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_color_bridge
//!
//! Strongly typed color values and a marshaling bridge that hands the actual
//! color math to an external Python module (`colorspaces.py`) over an embedded
//! interpreter. This crate never re-derives conversion formulas; it transports
//! 3-channel float colors to and from whatever implements them.
//!
//! There are two halves:
//!
//! 1. [`channels`] - small value types ([`Rgb`], [`Xyz`], [`Lab`], [`Luv`],
//!    [`Hsv`], [`Hls`], [`Gray`]), each three `f32` channels plus an optional
//!    alpha, with componentwise arithmetic and [`lerp`] defined once over the
//!    [`ChannelTriplet`] capability.
//! 2. [`bridge`] - the call path that serializes a color's channels, invokes a
//!    named conversion routine ([`ConversionFn`]) on the Python side, and
//!    deserializes the reply into the destination type. Failures surface as
//!    [`BridgeError`] on the `try_` paths, or degrade to a default color (all
//!    channels 0, alpha 1) with a logged diagnostic on the soft paths.
//!
//! # Example
//!
//! ```no_run
//! use r3bl_color_bridge::{Rgb, RuntimeGuard, rgb_to_xyz, try_xyz_to_rgb};
//!
//! # fn main() -> Result<(), r3bl_color_bridge::BridgeError> {
//! let _guard = RuntimeGuard::try_acquire()?;
//!
//! let rgb = Rgb::new(0.5, 0.5, 0.5);
//! let xyz = rgb_to_xyz(&rgb); // Soft path: default color on failure.
//! let back = try_xyz_to_rgb(&xyz)?; // Explicit path: failures are visible.
//! # Ok(())
//! # }
//! ```

pub mod bridge;
pub mod channels;

pub use bridge::*;
pub use channels::*;

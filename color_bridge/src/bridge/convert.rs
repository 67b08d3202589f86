// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Marshal, invoke, unmarshal.
//!
//! One conversion call moves through these steps:
//!
//! 1. Resolve the cached `colorspaces` module (imported once per process).
//! 2. Resolve the named routine in it; missing or non-callable attributes are
//!    [`BridgeError::FunctionResolution`].
//! 3. Marshal exactly 3 floats into a Python list, positional order x,y,z.
//!    Alpha never crosses the boundary.
//! 4. Invoke the routine with that list as its sole positional argument.
//! 5. Validate the reply is a 3-element numeric sequence and unmarshal it
//!    positionally into the destination type via
//!    [`ChannelTriplet::from_array`], which applies the destination's clamp
//!    policy.
//!
//! All Python object handles are `Bound`/`Py` smart pointers, so every
//! reference count taken during a call is released exactly once on every
//! path, including the early-return error paths.
//!
//! The soft functions ([`convert_or_default`] and the non-`try_` wrappers)
//! implement the fail-soft policy: any boundary error is logged and replaced
//! with a default-constructed destination color, so the host display loop
//! keeps running on typos or a broken Python environment. The returned value
//! is always a valid, fully-constructed instance of the destination type.

use pyo3::prelude::*;

use super::{error::{BridgeError, BridgeResult},
            registry::ConversionFn,
            runtime};
use crate::channels::{ChannelTriplet, Hls, Hsv, Lab, Luv, Rgb, Xyz};

/// The raw boundary call: routine name in, 3 floats in, 3 floats out.
///
/// The typed API below is what most callers want; this exists so the boundary
/// contract itself (string-keyed, positional, shape-checked) is testable and
/// reusable without going through the registry.
///
/// # Errors
///
/// Any [`BridgeError`] variant, per the taxonomy in [`super::error`].
pub fn try_call_routine(routine_name: &str, channels: [f64; 3]) -> BridgeResult<[f64; 3]> {
    Python::with_gil(|py| {
        let module = runtime::try_cached_module(py)?;
        let module = module.bind(py);

        let routine = module.getattr(routine_name).map_err(|_| {
            BridgeError::FunctionResolution {
                module_name: runtime::CONVERSION_MODULE_NAME.to_string(),
                routine_name: routine_name.to_string(),
            }
        })?;
        if !routine.is_callable() {
            return Err(BridgeError::FunctionResolution {
                module_name: runtime::CONVERSION_MODULE_NAME.to_string(),
                routine_name: routine_name.to_string(),
            });
        }

        let reply = routine.call1((channels.to_vec(),)).map_err(|source| {
            BridgeError::Invocation {
                routine_name: routine_name.to_string(),
                source,
            }
        })?;

        let values: Vec<f64> = reply.extract().map_err(|_| {
            BridgeError::ShapeMismatch {
                routine_name: routine_name.to_string(),
                reply_repr: describe_reply(&reply),
            }
        })?;
        match values.as_slice() {
            [x, y, z] => Ok([*x, *y, *z]),
            _ => Err(BridgeError::ShapeMismatch {
                routine_name: routine_name.to_string(),
                reply_repr: format!("sequence of length {}", values.len()),
            }),
        }
    })
}

fn describe_reply(reply: &Bound<'_, PyAny>) -> String {
    reply.str().map_or_else(
        |_| "<unprintable>".to_string(),
        |text| text.to_string_lossy().into_owned(),
    )
}

/// Run `conversion` on `input`, producing the destination type or a
/// [`BridgeError`]. The destination's clamp policy applies to the unmarshaled
/// channels; alpha is the destination default (`1.0`).
///
/// # Errors
///
/// Any [`BridgeError`] variant, per the taxonomy in [`super::error`].
pub fn try_convert<Src: ChannelTriplet, Dst: ChannelTriplet>(
    conversion: ConversionFn,
    input: &Src,
) -> BridgeResult<Dst> {
    let [x, y, z] = input.to_array();
    let reply = try_call_routine(
        conversion.routine_name(),
        [f64::from(x), f64::from(y), f64::from(z)],
    )?;
    Ok(Dst::from_array([
        reply[0] as f32,
        reply[1] as f32,
        reply[2] as f32,
    ]))
}

/// Run `conversion` on `input`; on any boundary error, log a diagnostic and
/// return `Dst::default()` instead of propagating.
#[must_use]
pub fn convert_or_default<Src: ChannelTriplet, Dst: ChannelTriplet>(
    conversion: ConversionFn,
    input: &Src,
) -> Dst {
    match try_convert(conversion, input) {
        Ok(converted) => converted,
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Color conversion failed, returning default color",
                conversion = %conversion,
                error = %error
            );
            Dst::default()
        }
    }
}

/// Convert sRGB to CIE XYZ. Soft path: default [`Xyz`] on failure.
#[must_use]
pub fn rgb_to_xyz(input: &Rgb) -> Xyz { convert_or_default(ConversionFn::RgbToXyz, input) }

/// Convert sRGB to HSV. Soft path: default [`Hsv`] on failure.
#[must_use]
pub fn rgb_to_hsv(input: &Rgb) -> Hsv { convert_or_default(ConversionFn::RgbToHsv, input) }

/// Convert sRGB to HLS. Soft path: default [`Hls`] on failure.
#[must_use]
pub fn rgb_to_hls(input: &Rgb) -> Hls { convert_or_default(ConversionFn::RgbToHls, input) }

/// Collapse sRGB to its grayscale equivalent (still an [`Rgb`], with three
/// equal channels). Soft path: default [`Rgb`] on failure.
#[must_use]
pub fn rgb_grayscale(input: &Rgb) -> Rgb {
    convert_or_default(ConversionFn::RgbGrayscale, input)
}

/// Convert CIE XYZ to sRGB. Soft path: default [`Rgb`] on failure.
#[must_use]
pub fn xyz_to_rgb(input: &Xyz) -> Rgb { convert_or_default(ConversionFn::XyzToRgb, input) }

/// Convert CIE XYZ to CIE L*a*b*. Soft path: default [`Lab`] on failure.
#[must_use]
pub fn xyz_to_lab(input: &Xyz) -> Lab { convert_or_default(ConversionFn::XyzToLab, input) }

/// Convert CIE XYZ to CIE L*u*v*. Soft path: default [`Luv`] on failure.
#[must_use]
pub fn xyz_to_luv(input: &Xyz) -> Luv { convert_or_default(ConversionFn::XyzToLuv, input) }

/// # Errors
///
/// See [`try_convert`].
pub fn try_rgb_to_xyz(input: &Rgb) -> BridgeResult<Xyz> {
    try_convert(ConversionFn::RgbToXyz, input)
}

/// # Errors
///
/// See [`try_convert`].
pub fn try_rgb_to_hsv(input: &Rgb) -> BridgeResult<Hsv> {
    try_convert(ConversionFn::RgbToHsv, input)
}

/// # Errors
///
/// See [`try_convert`].
pub fn try_rgb_to_hls(input: &Rgb) -> BridgeResult<Hls> {
    try_convert(ConversionFn::RgbToHls, input)
}

/// # Errors
///
/// See [`try_convert`].
pub fn try_rgb_grayscale(input: &Rgb) -> BridgeResult<Rgb> {
    try_convert(ConversionFn::RgbGrayscale, input)
}

/// # Errors
///
/// See [`try_convert`].
pub fn try_xyz_to_rgb(input: &Xyz) -> BridgeResult<Rgb> {
    try_convert(ConversionFn::XyzToRgb, input)
}

/// # Errors
///
/// See [`try_convert`].
pub fn try_xyz_to_lab(input: &Xyz) -> BridgeResult<Lab> {
    try_convert(ConversionFn::XyzToLab, input)
}

/// # Errors
///
/// See [`try_convert`].
pub fn try_xyz_to_luv(input: &Xyz) -> BridgeResult<Luv> {
    try_convert(ConversionFn::XyzToLuv, input)
}

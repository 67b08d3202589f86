// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The computed conversion pipeline that the UI renders.
//!
//! All conversions use the bridge's soft API: if the Python side is missing
//! or broken, every derived color degrades to its default (zero channels) and
//! the viewer still displays, which beats crashing a fullscreen app over a
//! missing module.

use r3bl_color_bridge::{ChannelTriplet as _, Hls, Hsv, Lab, Luv, Rgb, Xyz,
                        lerp, rgb_grayscale, rgb_to_hls, rgb_to_hsv,
                        rgb_to_xyz, saturate_unit_interval, xyz_to_lab,
                        xyz_to_luv, xyz_to_rgb};

/// Number of cells in the interpolation strip.
pub const GRADIENT_STEP_COUNT: usize = 32;

#[derive(Debug)]
pub struct ConversionReport {
    /// The starting color.
    pub rgb: Rgb,
    pub xyz: Xyz,
    /// `rgb` converted to XYZ and back; close to `rgb` but not bit-identical.
    pub round_trip: Rgb,
    pub lab: Lab,
    pub luv: Luv,
    pub hsv: Hsv,
    pub hls: Hls,
    pub grayscale: Rgb,
    /// `rgb + round_trip`, left unclamped to show operator semantics.
    pub sum: Rgb,
    /// Interpolation from `rgb` to white in sRGB.
    pub gradient: Vec<Rgb>,
}

impl ConversionReport {
    #[must_use]
    pub fn compute(start: Rgb) -> Self {
        let xyz = rgb_to_xyz(&start);
        let round_trip = xyz_to_rgb(&xyz);
        Self {
            rgb: start,
            xyz,
            round_trip,
            lab: xyz_to_lab(&xyz),
            luv: xyz_to_luv(&xyz),
            hsv: rgb_to_hsv(&start),
            hls: rgb_to_hls(&start),
            grayscale: rgb_grayscale(&start),
            sum: start + round_trip,
            gradient: build_gradient(start, Rgb::new(1.0, 1.0, 1.0)),
        }
    }
}

/// Evenly spaced interpolation steps from `start` to `end`, inclusive of both
/// endpoints. Pure; does not cross the language boundary.
#[must_use]
pub fn build_gradient(start: Rgb, end: Rgb) -> Vec<Rgb> {
    (0..GRADIENT_STEP_COUNT)
        .map(|index| {
            let t = index as f32 / (GRADIENT_STEP_COUNT - 1) as f32;
            lerp(start, end, t)
        })
        .collect()
}

/// Quantize a color to 8-bit channels for a truecolor swatch. Saturates
/// first, since arithmetic results (e.g. [`ConversionReport::sum`]) may sit
/// outside `[0, 1]`.
#[must_use]
pub fn to_rgb8(color: &Rgb) -> (u8, u8, u8) {
    let [x, y, z] = color.to_array();
    let quantize = |channel: f32| (saturate_unit_interval(channel) * 255.0).round() as u8;
    (quantize(x), quantize(y), quantize(z))
}

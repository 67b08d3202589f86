// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Interpolate from dark red to white in sRGB, and show each step's L*a*b*
//! projection computed on the Python side.
//!
//! Run from the repository root so `python/colorspaces.py` is found:
//! `cargo run --example main -- ` (no arguments).

use r3bl_color_bridge::{ChannelTriplet, Rgb, RuntimeGuard, lerp, rgb_to_xyz,
                        xyz_to_lab};

fn main() -> Result<(), r3bl_color_bridge::BridgeError> {
    let _guard = RuntimeGuard::try_acquire_with_search_paths(&["python".into()])?;

    let color_start = Rgb::new(0.5, 0.0, 0.0);
    let color_end = Rgb::new(1.0, 1.0, 1.0);

    println!("{:28} {}", "sRGB", "L*a*b*");
    println!("{}", "-".repeat(70));

    for step in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let color = lerp(color_start, color_end, step);
        let lab = xyz_to_lab(&rgb_to_xyz(&color));
        let (red, green, blue) = to_rgb8(&color);
        println!("\x1b[38;2;{red};{green};{blue}m\u{2588}\u{2588}\x1b[0m {color}    {lab}");
    }

    Ok(())
}

fn to_rgb8(color: &Rgb) -> (u8, u8, u8) {
    let [x, y, z] = color.to_array();
    let quantize = |channel: f32| (channel * 255.0).round() as u8;
    (quantize(x), quantize(y), quantize(z))
}

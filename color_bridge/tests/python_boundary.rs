// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End-to-end tests that cross the real language boundary: they need a Python
//! interpreter and the `colorspaces` module from the repository's `python/`
//! directory. The interpreter is process-global state, so everything here is
//! serialized.
//!
//! Teardown is deliberately not exercised in this binary; it lives in
//! `runtime_shutdown.rs`, which runs in its own process.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use r3bl_color_bridge::{BridgeError, ChannelTriplet, ConversionFn, Hsv, Rgb, Xyz,
                        try_call_routine, try_convert, try_rgb_grayscale,
                        try_rgb_to_hsv, try_rgb_to_xyz, try_xyz_to_rgb};
use serial_test::serial;

const TOLERANCE: f64 = 1e-3;

fn try_initialize_runtime() {
    let module_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../python");
    r3bl_color_bridge::try_initialize_with_search_paths(&[module_dir])
        .expect("colorspaces.py should be importable from the repo's python/ directory");
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "{actual} != {expected}"
    );
}

#[test]
#[serial]
fn test_known_conversion_returns_routine_triple() {
    try_initialize_runtime();

    // Pure red picks out the first column of the sRGB -> XYZ matrix.
    let xyz = try_rgb_to_xyz(&Rgb::new(1.0, 0.0, 0.0)).unwrap();
    assert_close(f64::from(xyz.x), 0.412453);
    assert_close(f64::from(xyz.y), 0.212671);
    assert_close(f64::from(xyz.z), 0.019334);
}

#[test]
#[serial]
fn test_mid_gray_round_trips_within_tolerance() {
    try_initialize_runtime();

    let original = Rgb::new(0.5, 0.5, 0.5);
    let xyz = try_rgb_to_xyz(&original).unwrap();
    let round_tripped = try_xyz_to_rgb(&xyz).unwrap();

    assert_close(f64::from(round_tripped.x), 0.5);
    assert_close(f64::from(round_tripped.y), 0.5);
    assert_close(f64::from(round_tripped.z), 0.5);
}

#[test]
#[serial]
fn test_hsv_of_pure_red() {
    try_initialize_runtime();

    let hsv = try_rgb_to_hsv(&Rgb::new(1.0, 0.0, 0.0)).unwrap();
    assert_eq!(hsv.to_array(), [0.0, 1.0, 1.0]);
}

#[test]
#[serial]
fn test_grayscale_has_equal_channels() {
    try_initialize_runtime();

    let gray = try_rgb_grayscale(&Rgb::new(0.25, 0.5, 0.75)).unwrap();
    assert_eq!(gray.x, gray.y);
    assert_eq!(gray.y, gray.z);
    // Green dominates the luma sum.
    assert!(f64::from(gray.x) > 0.25 && f64::from(gray.x) < 0.75);
}

#[test]
#[serial]
fn test_destination_clamp_policy_applies_to_replies() {
    try_initialize_runtime();

    // A bright XYZ value whose RGB projection the Python side clips to [0,1];
    // even if it didn't, Rgb's own clamp policy saturates the unmarshaled
    // channels.
    let rgb: Rgb = try_convert(ConversionFn::XyzToRgb, &Xyz::new(2.0, 2.0, 2.0)).unwrap();
    for channel in rgb.to_array() {
        assert!((0.0..=1.0).contains(&channel));
    }
}

#[test]
#[serial]
fn test_missing_routine_is_function_resolution_error() {
    try_initialize_runtime();

    let result = try_call_routine("no_such_conversion", [0.5, 0.5, 0.5]);
    assert!(matches!(
        result,
        Err(BridgeError::FunctionResolution { ref routine_name, .. })
            if routine_name == "no_such_conversion"
    ));
}

#[test]
#[serial]
fn test_non_callable_attribute_is_function_resolution_error() {
    try_initialize_runtime();

    // `D65_WHITE_POINT` exists in the module but is a list, not a routine.
    let result = try_call_routine("D65_WHITE_POINT", [0.5, 0.5, 0.5]);
    assert!(matches!(
        result,
        Err(BridgeError::FunctionResolution { .. })
    ));
}

#[test]
#[serial]
fn test_scalar_reply_is_shape_mismatch_error() {
    try_initialize_runtime();

    // `relative_luminance` is a real routine, but it returns one float, not
    // a 3-element sequence.
    let result = try_call_routine("relative_luminance", [0.5, 0.5, 0.5]);
    assert!(matches!(
        result,
        Err(BridgeError::ShapeMismatch { ref routine_name, .. })
            if routine_name == "relative_luminance"
    ));
}

#[test]
#[serial]
fn test_wrong_arity_is_invocation_error() {
    try_initialize_runtime();

    // `lerp` exists but wants three arguments; calling it with one raises a
    // TypeError on the Python side.
    let result = try_call_routine("lerp", [0.5, 0.5, 0.5]);
    assert!(matches!(result, Err(BridgeError::Invocation { .. })));
}

#[test]
#[serial]
fn test_hsv_wrapper_matches_generic_dispatch() {
    try_initialize_runtime();

    let input = Rgb::new(0.2, 0.4, 0.6);
    let via_wrapper = try_rgb_to_hsv(&input).unwrap();
    let via_registry: Hsv = try_convert(ConversionFn::RgbToHsv, &input).unwrap();
    assert_eq!(via_wrapper, via_registry);
}

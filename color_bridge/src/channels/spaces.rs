// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The concrete color space types. All of them share the same three-channel
//! shape; what differs is the nominal type (so conversions stay explicit) and
//! the [`ClampPolicy`] declared in the table at the bottom of this file.

use super::{clamp::{ClampPolicy, apply_clamp_policy, saturate_unit_interval},
            triplet::{ChannelTriplet,
                      componentwise_add,
                      componentwise_scale,
                      componentwise_sub}};

/// Declares one color space type: the struct, its clamping constructors, its
/// [`ChannelTriplet`] impl, and the componentwise operators.
///
/// The operators are generic in [`super::triplet`] and instantiated here per
/// type, because a blanket `impl core::ops::Add` over every [`ChannelTriplet`]
/// is ruled out by trait coherence.
macro_rules! define_color_space {
    (
        $(#[$meta:meta])*
        $name:ident => $policy:expr
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct $name {
            pub x: f32,
            pub y: f32,
            pub z: f32,
            pub alpha: f32,
        }

        /// All channels zero, alpha fully opaque. This is also the value the
        /// conversion bridge degrades to when a boundary call fails.
        impl Default for $name {
            fn default() -> Self {
                Self { x: 0.0, y: 0.0, z: 0.0, alpha: 1.0 }
            }
        }

        impl $name {
            /// Construct from three channels, applying this space's clamp
            /// policy per channel. Alpha defaults to `1.0`.
            #[must_use]
            pub fn new(x: f32, y: f32, z: f32) -> Self {
                Self::new_with_alpha(x, y, z, 1.0)
            }

            /// Construct with an explicit alpha. Alpha is always saturated to
            /// `[0, 1]` regardless of the channel policy.
            #[must_use]
            pub fn new_with_alpha(x: f32, y: f32, z: f32, alpha: f32) -> Self {
                Self {
                    x: apply_clamp_policy($policy, x),
                    y: apply_clamp_policy($policy, y),
                    z: apply_clamp_policy($policy, z),
                    alpha: saturate_unit_interval(alpha),
                }
            }
        }

        impl ChannelTriplet for $name {
            const CLAMP_POLICY: ClampPolicy = $policy;

            fn to_array(&self) -> [f32; 3] { [self.x, self.y, self.z] }

            fn from_array(channels: [f32; 3]) -> Self {
                Self::new(channels[0], channels[1], channels[2])
            }

            fn from_array_raw(channels: [f32; 3], alpha: f32) -> Self {
                Self {
                    x: channels[0],
                    y: channels[1],
                    z: channels[2],
                    alpha,
                }
            }

            fn alpha(&self) -> f32 { self.alpha }
        }

        impl core::ops::Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self { componentwise_add(self, rhs) }
        }

        impl core::ops::Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self { componentwise_sub(self, rhs) }
        }

        impl core::ops::Mul<f32> for $name {
            type Output = Self;
            fn mul(self, scalar: f32) -> Self { componentwise_scale(self, scalar) }
        }

        impl core::ops::Mul<$name> for f32 {
            type Output = $name;
            fn mul(self, color: $name) -> $name { componentwise_scale(color, self) }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{:.6}, {:.6}, {:.6}", self.x, self.y, self.z)
            }
        }
    };
}

define_color_space! {
    /// sRGB color. Channels are red, green, blue in `[0, 1]`.
    ///
    /// This is the entry point of every conversion pipeline in this crate:
    /// [`rgb_to_xyz`], [`rgb_to_hsv`], [`rgb_to_hls`], and [`rgb_grayscale`]
    /// all start here.
    ///
    /// [`rgb_to_xyz`]: crate::bridge::rgb_to_xyz
    /// [`rgb_to_hsv`]: crate::bridge::rgb_to_hsv
    /// [`rgb_to_hls`]: crate::bridge::rgb_to_hls
    /// [`rgb_grayscale`]: crate::bridge::rgb_grayscale
    Rgb => ClampPolicy::Saturate
}

define_color_space! {
    /// Achromatic gray, stored as three equal-by-convention channels in
    /// `[0, 1]`.
    Gray => ClampPolicy::Saturate
}

define_color_space! {
    /// CIE 1931 XYZ tristimulus values. Unbounded.
    Xyz => ClampPolicy::Unbounded
}

define_color_space! {
    /// CIE L*a*b*. Channels are L*, a*, b*. Unbounded (L* commonly spans
    /// `[0, 100]`, a*/b* are signed).
    Lab => ClampPolicy::Unbounded
}

define_color_space! {
    /// CIE L*u*v*. Unbounded.
    Luv => ClampPolicy::Unbounded
}

define_color_space! {
    /// Hue, saturation, value, each normalized to `[0, 1]`.
    Hsv => ClampPolicy::Saturate
}

define_color_space! {
    /// Hue, lightness, saturation, each normalized to `[0, 1]`.
    Hls => ClampPolicy::Saturate
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const EPSILON: f32 = 1e-5;

    fn assert_channels_close<T: ChannelTriplet>(lhs: T, rhs: T) {
        let [x1, y1, z1] = lhs.to_array();
        let [x2, y2, z2] = rhs.to_array();
        assert!(
            (x1 - x2).abs() < EPSILON
                && (y1 - y2).abs() < EPSILON
                && (z1 - z2).abs() < EPSILON,
            "{lhs:?} != {rhs:?}"
        );
    }

    #[test_case(0.0, 0.0, 0.0)]
    #[test_case(0.25, 0.5, 0.75)]
    #[test_case(1.0, 1.0, 1.0)]
    fn test_to_array_from_array_round_trip(x: f32, y: f32, z: f32) {
        let original = Rgb::new(x, y, z);
        let round_tripped = Rgb::from_array(original.to_array());
        assert_eq!(round_tripped, original);
    }

    #[test]
    fn test_clamped_space_saturates_out_of_range_channels() {
        let rgb = Rgb::new(1.5, -0.2, 0.5);
        assert_eq!(rgb.to_array(), [1.0, 0.0, 0.5]);

        let hsv = Hsv::new(2.0, 0.5, -1.0);
        assert_eq!(hsv.to_array(), [1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_unbounded_space_passes_channels_through() {
        let lab = Lab::new(53.19, 80.11, -67.22);
        assert_eq!(lab.to_array(), [53.19, 80.11, -67.22]);

        let xyz = Xyz::new(-0.5, 1.2, 108.8);
        assert_eq!(xyz.to_array(), [-0.5, 1.2, 108.8]);
    }

    #[test]
    fn test_alpha_defaults_to_opaque_and_is_always_saturated() {
        assert_eq!(Rgb::new(0.1, 0.2, 0.3).alpha, 1.0);
        assert_eq!(Rgb::new_with_alpha(0.1, 0.2, 0.3, 2.5).alpha, 1.0);
        assert_eq!(Lab::new_with_alpha(50.0, 0.0, 0.0, -1.0).alpha, 0.0);
    }

    #[test]
    fn test_default_is_zero_channels_opaque_alpha() {
        let default_rgb = Rgb::default();
        assert_eq!(default_rgb.to_array(), [0.0, 0.0, 0.0]);
        assert_eq!(default_rgb.alpha, 1.0);
    }

    #[test]
    fn test_componentwise_addition_does_not_clamp() {
        let sum = Rgb::new(0.2, 0.3, 0.4) + Rgb::new(0.1, 0.1, 0.1);
        assert_channels_close(sum, Rgb::from_array_raw([0.3, 0.4, 0.5], 1.0));

        // Composing results may leave a value out of its nominal range until
        // it is explicitly re-constructed.
        let overflow = Rgb::new(0.8, 0.8, 0.8) + Rgb::new(0.8, 0.8, 0.8);
        assert_channels_close(overflow, Rgb::from_array_raw([1.6, 1.6, 1.6], 1.0));
        let reconstructed = Rgb::from_array(overflow.to_array());
        assert_eq!(reconstructed.to_array(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_componentwise_subtraction_does_not_clamp() {
        let difference = Rgb::new(0.2, 0.5, 0.5) - Rgb::new(0.5, 0.2, 0.5);
        assert_channels_close(difference, Rgb::from_array_raw([-0.3, 0.3, 0.0], 1.0));
    }

    #[test]
    fn test_scalar_multiplication_is_symmetric() {
        let color = Xyz::new(0.5, 1.0, 2.0);
        assert_eq!(color * 2.0, 2.0 * color);
        assert_channels_close(2.0 * color, Xyz::new(1.0, 2.0, 4.0));
    }

    #[test]
    fn test_display_formats_three_channels() {
        let rgb = Rgb::new(0.5, 0.5, 0.5);
        assert_eq!(rgb.to_string(), "0.500000, 0.500000, 0.500000");
    }
}

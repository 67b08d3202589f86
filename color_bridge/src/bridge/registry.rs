// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The closed set of conversion routines the external module is expected to
//! provide. Dispatching through this enum (instead of open-ended string
//! lookup) means a typo is a compile error on the Rust side; "function not
//! found at runtime" remains possible only because the Python side is loaded
//! dynamically, and is reported as
//! [`BridgeError::FunctionResolution`](super::BridgeError::FunctionResolution).

use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// A named conversion routine. The serialized form of each variant is the
/// routine's name on the Python side, e.g. [`ConversionFn::RgbToXyz`] is
/// `rgb_to_xyz`.
///
/// Each routine takes exactly 3 floats and returns exactly 3 floats; the
/// numeric formulas live entirely on the external side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,
         Display, EnumCount, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ConversionFn {
    RgbToXyz,
    XyzToRgb,
    XyzToLab,
    XyzToLuv,
    RgbToHsv,
    RgbToHls,
    RgbGrayscale,
}

impl ConversionFn {
    /// The routine's name on the external side.
    #[must_use]
    pub fn routine_name(self) -> &'static str { self.into() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;
    use strum::{EnumCount as _, IntoEnumIterator as _};
    use test_case::test_case;

    #[test_case(ConversionFn::RgbToXyz, "rgb_to_xyz")]
    #[test_case(ConversionFn::XyzToRgb, "xyz_to_rgb")]
    #[test_case(ConversionFn::XyzToLab, "xyz_to_lab")]
    #[test_case(ConversionFn::XyzToLuv, "xyz_to_luv")]
    #[test_case(ConversionFn::RgbToHsv, "rgb_to_hsv")]
    #[test_case(ConversionFn::RgbToHls, "rgb_to_hls")]
    #[test_case(ConversionFn::RgbGrayscale, "rgb_grayscale")]
    fn test_routine_names(conversion: ConversionFn, expected: &str) {
        assert_eq!(conversion.routine_name(), expected);
        assert_eq!(conversion.to_string(), expected);
        assert_eq!(ConversionFn::from_str(expected).unwrap(), conversion);
    }

    #[test]
    fn test_registry_is_closed() {
        assert_eq!(ConversionFn::COUNT, 7);
        assert_eq!(ConversionFn::iter().count(), ConversionFn::COUNT);
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Length units of the source model and conversion to SI
//!
//! Building models usually store lengths in an internal unit (decimal feet
//! for the most common authoring tool). Reports are written in metres and
//! square metres.

/// Length unit of the source model coordinates, areas and volumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LengthUnit {
    #[default]
    Feet,
    Inch,
    Metre,
    Centimetre,
    Millimetre,
}

impl LengthUnit {
    /// Parse a unit name, case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ft" | "foot" | "feet" => Some(LengthUnit::Feet),
            "in" | "inch" | "inches" => Some(LengthUnit::Inch),
            "m" | "metre" | "meter" | "metres" | "meters" => Some(LengthUnit::Metre),
            "cm" | "centi" | "centimetre" | "centimeter" => Some(LengthUnit::Centimetre),
            "mm" | "milli" | "millimetre" | "millimeter" => Some(LengthUnit::Millimetre),
            _ => None,
        }
    }

    /// Metres per one unit
    #[inline]
    pub fn metres_per_unit(self) -> f64 {
        match self {
            LengthUnit::Feet => 0.3048,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Metre => 1.0,
            LengthUnit::Centimetre => 1e-2,
            LengthUnit::Millimetre => 1e-3,
        }
    }

    /// Convert a length to metres
    #[inline]
    pub fn length_to_metres(self, value: f64) -> f64 {
        value * self.metres_per_unit()
    }

    /// Convert an area to square metres
    #[inline]
    pub fn area_to_square_metres(self, value: f64) -> f64 {
        let scale = self.metres_per_unit();
        value * scale * scale
    }

    /// Convert a volume to cubic metres
    #[inline]
    pub fn volume_to_cubic_metres(self, value: f64) -> f64 {
        let scale = self.metres_per_unit();
        value * scale * scale * scale
    }
}

/// Round to a fixed number of decimal places
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_names() {
        assert_eq!(LengthUnit::from_name("FEET"), Some(LengthUnit::Feet));
        assert_eq!(LengthUnit::from_name(" mm "), Some(LengthUnit::Millimetre));
        assert_eq!(LengthUnit::from_name("Meter"), Some(LengthUnit::Metre));
        assert_eq!(LengthUnit::from_name("furlong"), None);
    }

    #[test]
    fn test_conversions() {
        assert_relative_eq!(LengthUnit::Feet.length_to_metres(10.0), 3.048, epsilon = 1e-12);
        assert_relative_eq!(
            LengthUnit::Feet.area_to_square_metres(1.0),
            0.09290304,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            LengthUnit::Millimetre.volume_to_cubic_metres(1e9),
            1.0,
            epsilon = 1e-12
        );
        assert_eq!(LengthUnit::Metre.area_to_square_metres(12.5), 12.5);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.34567, 3), 2.346);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-1.23449, 2), -1.23);
    }
}

// Copyright (c) 2024-2026 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The units module contains the angle and distance units that an
//! `Ellipsoid` accepts and returns values in, together with the functions
//! that normalise longitudes and bearings into their output ranges.

use angle_sc::{Angle, Degrees, Radians};
use icao_units::si::Metres;
use serde::{Deserialize, Serialize};

/// Two Pi, a full turn in radians.
const TAU: f64 = 2.0 * core::f64::consts::PI;

/// The unit of the angles passed to and returned from an `Ellipsoid`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Convert a value in this unit to radians.
    #[must_use]
    pub fn to_radians(self, value: f64) -> Radians {
        match self {
            Self::Degrees => Radians(value.to_radians()),
            Self::Radians => Radians(value),
        }
    }

    /// Convert a value in radians to this unit.
    #[must_use]
    pub fn from_radians(self, value: Radians) -> f64 {
        match self {
            Self::Degrees => value.0.to_degrees(),
            Self::Radians => value.0,
        }
    }

    /// A quarter turn, 90° or π/2 radians, in this unit.
    #[must_use]
    pub const fn quarter_turn(self) -> f64 {
        match self {
            Self::Degrees => 90.0,
            Self::Radians => core::f64::consts::FRAC_PI_2,
        }
    }

    /// Convert a value in this unit to an `Angle`.
    ///
    /// Note: an `Angle` from `Degrees` has exact sines and cosines at
    /// multiples of 90°, e.g. the cosine of 90° is exactly zero.
    #[must_use]
    pub fn to_angle(self, value: f64) -> Angle {
        match self {
            Self::Degrees => Angle::from(Degrees(value)),
            Self::Radians => Angle::from(Radians(value)),
        }
    }
}

/// The unit of the distances passed to and returned from an `Ellipsoid`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceUnit {
    #[default]
    Meter,
    Foot,
    Kilometer,
    Mile,
    NauticalMile,
}

impl DistanceUnit {
    /// The number of metres in one of this unit.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Meter => 1.0,
            Self::Foot => 0.3048,
            Self::Kilometer => 1000.0,
            Self::Mile => 1609.344,
            Self::NauticalMile => 1852.0,
        }
    }

    /// Convert a distance in this unit to `Metres`.
    #[must_use]
    pub fn to_metres(self, value: f64) -> Metres {
        Metres(value * self.factor())
    }

    /// Convert a distance in `Metres` to this unit.
    #[must_use]
    pub fn from_metres(self, value: Metres) -> f64 {
        value.0 / self.factor()
    }
}

/// Normalise an angle in radians.
/// * `value` - the angle in radians.
/// * `symmetric` - whether the result is in the range (-π, π], otherwise
///   it is in the range [0, 2π).
///
/// returns the normalised angle.
/// # Examples
/// ```
/// use vincenty_ellipsoid::units::normalise;
/// use vincenty_ellipsoid::Radians;
/// use core::f64::consts::PI;
///
/// assert_eq!(PI, normalise(Radians(-PI), true).0);
/// assert_eq!(PI, normalise(Radians(-PI), false).0);
/// assert_eq!(0.0, normalise(Radians(2.0 * PI), false).0);
/// ```
#[must_use]
pub fn normalise(value: Radians, symmetric: bool) -> Radians {
    let mut angle = libm::fmod(value.0, TAU);
    if symmetric {
        if angle <= -core::f64::consts::PI {
            angle += TAU;
        } else if core::f64::consts::PI < angle {
            angle -= TAU;
        }
    } else {
        if angle < 0.0 {
            angle += TAU;
        }
        // a tiny negative angle may round up to 2π
        if TAU <= angle {
            angle -= TAU;
        }
    }
    Radians(angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_angle_unit() {
        assert_eq!(AngleUnit::Degrees, AngleUnit::default());

        assert_eq!(PI, AngleUnit::Degrees.to_radians(180.0).0);
        assert_eq!(180.0, AngleUnit::Degrees.from_radians(Radians(PI)));
        assert_eq!(1.5, AngleUnit::Radians.to_radians(1.5).0);
        assert_eq!(1.5, AngleUnit::Radians.from_radians(Radians(1.5)));
        assert_eq!(90.0, AngleUnit::Degrees.quarter_turn());
        assert_eq!(FRAC_PI_2, AngleUnit::Radians.quarter_turn());

        assert_eq!(0.0, AngleUnit::Degrees.to_angle(90.0).cos().0);
        assert_eq!(1.0, AngleUnit::Degrees.to_angle(90.0).sin().0);
        assert!(AngleUnit::Radians.to_angle(FRAC_PI_2).cos().0 < f64::EPSILON);
    }

    #[test]
    fn test_distance_unit() {
        assert_eq!(DistanceUnit::Meter, DistanceUnit::default());

        assert_eq!(1.0, DistanceUnit::Meter.factor());
        assert_eq!(0.3048, DistanceUnit::Foot.factor());
        assert_eq!(1000.0, DistanceUnit::Kilometer.factor());
        assert_eq!(1609.344, DistanceUnit::Mile.factor());
        assert_eq!(1852.0, DistanceUnit::NauticalMile.factor());

        assert_eq!(2.0, DistanceUnit::Kilometer.from_metres(Metres(2000.0)));
        assert_eq!(3048.0, DistanceUnit::Foot.to_metres(10_000.0).0);
    }

    #[test]
    fn test_nautical_mile_matches_icao_units() {
        let metres = Metres(12_345.0);
        let nm = icao_units::non_si::NauticalMiles::from(metres);
        assert!(is_within_tolerance(
            nm.0,
            DistanceUnit::NauticalMile.from_metres(metres),
            f64::EPSILON
        ));
    }

    #[test]
    fn test_normalise_symmetric() {
        assert_eq!(0.0, normalise(Radians(0.0), true).0);
        assert_eq!(PI, normalise(Radians(PI), true).0);
        assert_eq!(PI, normalise(Radians(-PI), true).0);
        assert_eq!(-FRAC_PI_2, normalise(Radians(3.0 * FRAC_PI_2), true).0);
        assert!(is_within_tolerance(
            -FRAC_PI_2,
            normalise(Radians(7.0 * FRAC_PI_2), true).0,
            4.0 * f64::EPSILON
        ));
    }

    #[test]
    fn test_normalise_not_symmetric() {
        assert_eq!(0.0, normalise(Radians(0.0), false).0);
        assert_eq!(PI, normalise(Radians(-PI), false).0);
        assert_eq!(3.0 * FRAC_PI_2, normalise(Radians(-FRAC_PI_2), false).0);
        assert_eq!(0.0, normalise(Radians(TAU), false).0);

        let result = normalise(Radians(-1.0e-20), false).0;
        assert!((0.0..TAU).contains(&result));
    }
}

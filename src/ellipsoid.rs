// Copyright (c) 2024 Ken Barker

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

//! The ellipsoid module contains functions for calculating the properties of
//! an ellipsoid given its Semimajor axis (the equivalent of its radius) and
//! flattening ratio.

#![allow(clippy::suboptimal_flops)]

pub mod coefficients;
pub mod shapes;

use crate::Metres;
use angle_sc::Angle;

/// Calculate the flattening ratio of an ellipsoid from its inverse.
/// * `inverse_flattening` - the reciprocal of the flattening ratio.
/// # Examples
/// ```
/// use vincenty_ellipsoid::ellipsoid::{calculate_flattening, shapes};
///
/// assert_eq!(1.0 / 298.257_223_563, calculate_flattening(shapes::WGS84.inverse_flattening));
/// ```
#[must_use]
pub fn calculate_flattening(inverse_flattening: f64) -> f64 {
    1.0 / inverse_flattening
}

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use vincenty_ellipsoid::Metres;
/// use vincenty_ellipsoid::ellipsoid::{calculate_flattening, calculate_minor_axis, shapes};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// let f = calculate_flattening(shapes::WGS84.inverse_flattening);
/// assert_eq!(b, calculate_minor_axis(shapes::WGS84.a, f));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the square of the second Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_sq_2nd_eccentricity(f: f64) -> f64 {
    let one_minus_f = 1.0 - f;
    calculate_sq_eccentricity(f) / (one_minus_f * one_minus_f)
}

/// Calculate the tangent of the reduced latitude on the auxiliary sphere.
/// * `lat` - the geodetic latitude.
/// * `one_minus_f` - one minus the flattening ratio.
///
/// returns the tangent of the reduced latitude, None if `lat` is at a pole.
#[must_use]
pub fn calculate_reduced_latitude_tangent(lat: Angle, one_minus_f: f64) -> Option<f64> {
    let cos_lat = lat.cos().0;
    if libm::fabs(cos_lat) < f64::EPSILON {
        None
    } else {
        Some(one_minus_f * lat.sin().0 / cos_lat)
    }
}

/// Calculate the radius of curvature in the prime vertical, `N`.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
/// * `sin_lat` - the sine of the geodetic latitude.
#[must_use]
pub fn calculate_prime_vertical_radius(a: Metres, e_2: f64, sin_lat: f64) -> Metres {
    Metres(a.0 / libm::sqrt(1.0 - e_2 * sin_lat * sin_lat))
}

/// Calculate the meridional radius of curvature, `M`.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
/// * `sin_lat` - the sine of the geodetic latitude.
#[must_use]
pub fn calculate_meridional_radius(a: Metres, e_2: f64, sin_lat: f64) -> Metres {
    let w_2 = 1.0 - e_2 * sin_lat * sin_lat;
    Metres(a.0 * (1.0 - e_2) / (w_2 * libm::sqrt(w_2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::{is_within_tolerance, Degrees};

    #[test]
    fn test_wgs84_eccentricities() {
        let f = calculate_flattening(shapes::WGS84.inverse_flattening);
        assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(f));
        assert_eq!(0.006739496742276434, calculate_sq_2nd_eccentricity(f));
    }

    #[test]
    fn test_calculate_reduced_latitude_tangent() {
        let one_minus_f = 1.0 - calculate_flattening(shapes::WGS84.inverse_flattening);

        assert_eq!(
            Some(0.0),
            calculate_reduced_latitude_tangent(Angle::from(Degrees(0.0)), one_minus_f)
        );

        let tu = calculate_reduced_latitude_tangent(Angle::from(Degrees(45.0)), one_minus_f);
        assert!(is_within_tolerance(
            one_minus_f,
            tu.unwrap_or_default(),
            2.0 * f64::EPSILON
        ));

        assert_eq!(
            None,
            calculate_reduced_latitude_tangent(Angle::from(Degrees(90.0)), one_minus_f)
        );
        assert_eq!(
            None,
            calculate_reduced_latitude_tangent(Angle::from(Degrees(-90.0)), one_minus_f)
        );
    }

    #[test]
    fn test_radii_of_curvature() {
        let a = shapes::WGS84.a;
        let e_2 = calculate_sq_eccentricity(calculate_flattening(shapes::WGS84.inverse_flattening));

        // At the equator N is the Semimajor axis and M is b^2/a
        assert_eq!(a, calculate_prime_vertical_radius(a, e_2, 0.0));
        assert!(is_within_tolerance(
            6_335_439.327_292_82,
            calculate_meridional_radius(a, e_2, 0.0).0,
            1e-6
        ));

        // At the poles N and M are both a^2/b
        let n = calculate_prime_vertical_radius(a, e_2, 1.0);
        let m = calculate_meridional_radius(a, e_2, 1.0);
        assert!(is_within_tolerance(6_399_593.625_758_49, n.0, 1e-6));
        assert!(is_within_tolerance(n.0, m.0, 1e-6));
    }
}

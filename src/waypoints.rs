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

//! The waypoints module contains calculations derived from the geodesic
//! solutions: waypoints along a geodesic, small local displacements and
//! the local scales of longitude and latitude.
//!
//! All values are in the angle and distance units of the `Ellipsoid`.

use crate::ellipsoid::{calculate_meridional_radius, calculate_prime_vertical_radius};
use crate::error::{Error, Result};
use crate::{Ellipsoid, GeodeticPoint, Metres, Radians};
use alloc::vec::Vec;
use tracing::debug;

/// Calculate equally spaced waypoints between a pair of positions.
///
/// The distance and initial bearing from `a` to `b` are calculated by the
/// inverse solution, then each waypoint is calculated by the direct
/// solution at `i * distance / steps` along the initial bearing from `a`.
/// The waypoints are only as accurate as the direct solution at the
/// full distance, so the last waypoint approximates `b`.
/// * `a`, `b` - the start and finish positions.
/// * `steps` - the number of intervals between the waypoints.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the distance, initial bearing and `steps + 1` waypoints
/// including `a` and the approximation of `b`.
/// # Errors
/// `InvalidArgument` if `steps` is zero, otherwise any error from the
/// inverse or direct solutions.
pub fn calculate_intermediate_points(
    a: &GeodeticPoint,
    b: &GeodeticPoint,
    steps: u32,
    ellipsoid: &Ellipsoid,
) -> Result<(f64, f64, Vec<GeodeticPoint>)> {
    if steps == 0 {
        return Err(Error::InvalidArgument("steps"));
    }

    let (distance, bearing) = ellipsoid.inverse(a, b)?;
    let points = (0..=steps)
        .map(|i| ellipsoid.direct(a, distance * f64::from(i) / f64::from(steps), bearing))
        .collect::<Result<Vec<_>>>()?;
    debug!(steps = steps, distance = distance, "intermediate points");

    Ok((distance, bearing, points))
}

/// Calculate the displacement of `b` from `a` on a plane tangent to the
/// ellipsoid at `a`.
///
/// Note: a flat earth approximation, only valid over a few kilometres.
/// * `a`, `b` - the positions.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the East (x) and North (y) displacements.
/// # Errors
/// any error from the inverse solution.
pub fn calculate_displacement(
    a: &GeodeticPoint,
    b: &GeodeticPoint,
    ellipsoid: &Ellipsoid,
) -> Result<(f64, f64)> {
    let (distance, bearing) = ellipsoid.inverse(a, b)?;
    let bearing = ellipsoid.angle_unit().to_radians(bearing).0;
    Ok((distance * libm::sin(bearing), distance * libm::cos(bearing)))
}

/// Calculate the position at a displacement from `a` on a plane tangent to
/// the ellipsoid at `a`, the inverse of `calculate_displacement`.
///
/// Note: a flat earth approximation, only valid over a few kilometres.
/// * `a` - the start position.
/// * `x`, `y` - the East and North displacements.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the position.
/// # Errors
/// `InvalidArgument` if `x` or `y` is not finite, otherwise any error from
/// the direct solution.
pub fn calculate_location(
    a: &GeodeticPoint,
    x: f64,
    y: f64,
    ellipsoid: &Ellipsoid,
) -> Result<GeodeticPoint> {
    if !(x.is_finite() && y.is_finite()) {
        return Err(Error::InvalidArgument("displacement"));
    }
    let distance = libm::hypot(x, y);
    let bearing = ellipsoid
        .angle_unit()
        .from_radians(Radians(libm::atan2(x, y)));
    ellipsoid.direct(a, distance, bearing)
}

/// Calculate the distances along a parallel and a meridian per unit of
/// longitude and latitude at a latitude, from the prime vertical and
/// meridional radii of curvature.
/// * `latitude` - the latitude, it may be at a pole.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the longitude and latitude scales.
/// # Errors
/// `InvalidArgument` if the latitude is not valid.
pub fn calculate_scales(latitude: f64, ellipsoid: &Ellipsoid) -> Result<(f64, f64)> {
    let lat = ellipsoid.latitude_angle(latitude)?;
    let sin_lat = lat.sin().0;
    let n = calculate_prime_vertical_radius(ellipsoid.a(), ellipsoid.e_2(), sin_lat);
    let m = calculate_meridional_radius(ellipsoid.a(), ellipsoid.e_2(), sin_lat);

    // Radians per angle unit
    let per_unit = ellipsoid.angle_unit().to_radians(1.0).0;
    let distance_unit = ellipsoid.distance_unit();
    Ok((
        distance_unit.from_metres(Metres(n.0 * lat.cos().0 * per_unit)),
        distance_unit.from_metres(Metres(m.0 * per_unit)),
    ))
}

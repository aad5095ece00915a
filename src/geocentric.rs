// Copyright (c) 2026 Ken Barker

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

//! The geocentric module contains functions for converting positions between
//! geodetic coordinates (latitude, longitude and elevation) and
//! Earth-Centered Earth-Fixed (ECEF) Cartesian coordinates.
//!
//! The conversion from ECEF coordinates uses Bowring's closed form
//! approximation, see: B. R. Bowring,
//! *Transformation from spatial to geographical coordinates*,
//! Survey Review, July 1976.

#![allow(clippy::suboptimal_flops)]

use crate::ellipsoid::calculate_prime_vertical_radius;
use crate::error::{Error, Result};
use crate::{Ellipsoid, Metres};
use angle_sc::{Angle, Radians};
use serde::{Deserialize, Serialize};

/// A position in Earth-Centered Earth-Fixed Cartesian coordinates, in metres.
///
/// The origin is the centre of the ellipsoid, the z-axis points to the North
/// pole and the x-axis to the intersection of the equator and the prime meridian.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocentricPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl GeocentricPoint {
    /// Constructor.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Convert a geodetic position to ECEF coordinates.
/// * `lat`, `lon` - the geodetic latitude and longitude.
/// * `height` - the height above the ellipsoid.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the `GeocentricPoint` of the position.
#[must_use]
pub fn calculate_geocentric_point(
    lat: Angle,
    lon: Angle,
    height: Metres,
    ellipsoid: &Ellipsoid,
) -> GeocentricPoint {
    let a = ellipsoid.a();
    let b = ellipsoid.b();
    let (sin_lat, cos_lat) = (lat.sin().0, lat.cos().0);

    let n = calculate_prime_vertical_radius(a, ellipsoid.e_2(), sin_lat).0;
    let r = (n + height.0) * cos_lat;
    GeocentricPoint::new(
        r * lon.cos().0,
        r * lon.sin().0,
        (b.0 * b.0 / (a.0 * a.0) * n + height.0) * sin_lat,
    )
}

/// Convert an ECEF position to geodetic coordinates.
/// * `point` - the position in ECEF coordinates.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the geodetic latitude and longitude in the range (-π, π] and the
/// height above the ellipsoid.
/// # Errors
/// `OnPolarAxis` if the point is on the polar axis, i.e. `x` and `y` are zero.
pub fn calculate_geodetic_position(
    point: &GeocentricPoint,
    ellipsoid: &Ellipsoid,
) -> Result<(Radians, Radians, Metres)> {
    if point.x == 0.0 && point.y == 0.0 {
        return Err(Error::OnPolarAxis);
    }

    let a = ellipsoid.a().0;
    let b = ellipsoid.b().0;
    let e_2 = ellipsoid.e_2();
    let ep_2 = ellipsoid.ep_2();

    // The distance from the polar axis
    let p = libm::hypot(point.x, point.y);

    // The parametric latitude
    let theta = Angle::from_y_x(point.z * a, p * b);
    let sin_theta = theta.sin().0;
    let cos_theta = theta.cos().0;

    let lat = Angle::from_y_x(
        point.z + ep_2 * b * sin_theta * sin_theta * sin_theta,
        p - e_2 * a * cos_theta * cos_theta * cos_theta,
    );
    let lon = libm::atan2(point.y, point.x);

    let n = calculate_prime_vertical_radius(ellipsoid.a(), e_2, lat.sin().0);
    let height = p / lat.cos().0 - n.0;

    Ok((Radians::from(lat), Radians(lon), Metres(height)))
}

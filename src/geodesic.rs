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

//! The geodesic module contains Vincenty's iterative solutions of the
//! inverse and direct geodesic problems on the surface of an ellipsoid.
//!
//! Both solutions use the auxiliary sphere of reduced latitude together
//! with Helmert's elliptical terms, see:
//! T. Vincenty, [Direct and Inverse Solutions of Geodesics on the Ellipsoid with Application of Nested Equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf),
//! Survey Review, April 1975.
//!
//! The solutions are not valid for antipodal or nearly antipodal points:
//! the inverse solution does not converge for them and returns
//! `Error::NonConvergence`.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

use crate::ellipsoid::calculate_reduced_latitude_tangent;
use crate::ellipsoid::coefficients::{
    evaluate_a_b, evaluate_c, evaluate_delta_lambda, evaluate_delta_sigma,
};
use crate::error::{Error, Result};
use crate::units::normalise;
use crate::{Ellipsoid, Metres};
use angle_sc::{Angle, Radians};
use tracing::{debug, trace, warn};

/// The maximum number of iterations of the inverse solution.
pub const MAX_INVERSE_ITERATIONS: u32 = 20;

/// The convergence tolerance of the longitude on the auxiliary sphere, in Radians.
pub const INVERSE_TOLERANCE: f64 = 1.0e-23;

/// The maximum number of iterations of the direct solution.
pub const MAX_DIRECT_ITERATIONS: u32 = 100;

/// The convergence tolerance of the arc length on the auxiliary sphere, in Radians.
pub const DIRECT_TOLERANCE: f64 = 0.5e-13;

/// The largest change in the longitude on the auxiliary sphere that is
/// accepted as rounding error once the inverse iterations are exhausted.
/// `INVERSE_TOLERANCE` is far smaller than the resolution of an `f64`
/// Radians value, so the iteration may end flipping between adjacent values.
#[must_use]
fn inverse_residual_tolerance(lambda: f64) -> f64 {
    4.0 * f64::EPSILON * libm::fmax(1.0, libm::fabs(lambda))
}

/// A great circle arc on the auxiliary sphere between a pair of reduced
/// latitudes, separated by the longitude difference `lambda`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct AuxiliaryArc {
    sin_lambda: f64,
    cos_lambda: f64,
    /// The arc length in radians.
    sigma: f64,
    sin_sigma: f64,
    cos_sigma: f64,
    /// The sine of the azimuth at the equator.
    sin_alpha: f64,
    /// The square of the cosine of the azimuth at the equator.
    sq_cos_alpha: f64,
    /// The cosine of twice the arc length from the equator to the mid point.
    cos_2sigma_m: f64,
}

impl AuxiliaryArc {
    /// Vincenty, Eqs. 14 to 17.
    /// * `beta1`, `beta2` - the reduced latitudes of the start and finish points.
    /// * `lambda` - the longitude difference on the auxiliary sphere in radians.
    #[must_use]
    fn new(beta1: Angle, beta2: Angle, lambda: f64) -> Self {
        let (sin_u1, cos_u1) = (beta1.sin().0, beta1.cos().0);
        let (sin_u2, cos_u2) = (beta2.sin().0, beta2.cos().0);

        let sin_lambda = libm::sin(lambda);
        let cos_lambda = libm::cos(lambda);

        let y = cos_u2 * sin_lambda;
        let x = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        let sin_sigma = libm::sqrt(y * y + x * x);
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = libm::atan2(sin_sigma, cos_sigma);

        // coincident points
        let sin_alpha = if sin_sigma == 0.0 {
            1.0
        } else {
            cos_u1 * cos_u2 * sin_lambda / sin_sigma
        };
        let sq_cos_alpha = 1.0 - sin_alpha * sin_alpha;

        // zero on an equatorial line
        let cos_2sigma_m = if 0.0 < sq_cos_alpha {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / sq_cos_alpha
        } else {
            0.0
        };

        Self {
            sin_lambda,
            cos_lambda,
            sigma,
            sin_sigma,
            cos_sigma,
            sin_alpha,
            sq_cos_alpha,
            cos_2sigma_m,
        }
    }
}

/// Calculate the reduced latitude on the auxiliary sphere.
/// * `lat` - the geodetic latitude.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the reduced latitude or `Error::PoleSingularity` if `lat` is at
/// a pole.
fn reduced_latitude(lat: Angle, ellipsoid: &Ellipsoid) -> Result<Angle> {
    calculate_reduced_latitude_tangent(lat, ellipsoid.one_minus_f())
        .map(|tu| Angle::from_y_x(tu, 1.0))
        .ok_or(Error::PoleSingularity)
}

/// Calculate the geodesic distance and initial azimuth between a pair of
/// positions, the "inverse" problem.
/// * `lat1`, `lon1` - the start position.
/// * `lat2`, `lon2` - the finish position.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the geodesic distance in metres and the azimuth at the start
/// position in the range (-π, π].
/// # Errors
/// `PoleSingularity` if either latitude is at a pole,
/// `NonConvergence` if the points are nearly antipodal.
pub fn calculate_distance_and_azimuth(
    lat1: Angle,
    lon1: Radians,
    lat2: Angle,
    lon2: Radians,
    ellipsoid: &Ellipsoid,
) -> Result<(Metres, Radians)> {
    let f = ellipsoid.f();
    let beta1 = reduced_latitude(lat1, ellipsoid)?;
    let beta2 = reduced_latitude(lat2, ellipsoid)?;

    // Longitudes in the range [0, 2π)
    let delta_lon = normalise(lon2, false).0 - normalise(lon1, false).0;

    let mut lambda = delta_lon;
    let mut iterations = 0;
    let arc = loop {
        iterations += 1;
        let arc = AuxiliaryArc::new(beta1, beta2, lambda);
        let c = evaluate_c(f, arc.sq_cos_alpha);
        let next = delta_lon
            + evaluate_delta_lambda(
                f,
                c,
                arc.sin_alpha,
                arc.sigma,
                arc.sin_sigma,
                arc.cos_sigma,
                arc.cos_2sigma_m,
            );
        let delta = libm::fabs(next - lambda);
        lambda = next;
        trace!(iterations = iterations, lambda = lambda, delta = delta, "inverse iteration");

        if delta <= INVERSE_TOLERANCE {
            break arc;
        }
        if MAX_INVERSE_ITERATIONS <= iterations {
            if delta <= inverse_residual_tolerance(lambda) {
                break arc;
            }
            warn!(iterations = iterations, delta = delta, "inverse solution did not converge");
            return Err(Error::NonConvergence {
                solver: "inverse",
                iterations,
            });
        }
    };
    debug!(iterations = iterations, "inverse solution converged");

    let (a, b) = evaluate_a_b(ellipsoid.ep_2(), arc.sq_cos_alpha);
    let delta_sigma = evaluate_delta_sigma(b, arc.sin_sigma, arc.cos_sigma, arc.cos_2sigma_m);
    let distance = ellipsoid.b().0 * a * (arc.sigma - delta_sigma);

    let azimuth = libm::atan2(
        beta2.cos().0 * arc.sin_lambda,
        beta1.cos().0 * beta2.sin().0 - beta1.sin().0 * beta2.cos().0 * arc.cos_lambda,
    );

    if distance.is_finite() && azimuth.is_finite() {
        Ok((Metres(distance), Radians(azimuth)))
    } else {
        warn!(iterations = iterations, "inverse solution is not finite");
        Err(Error::NonConvergence {
            solver: "inverse",
            iterations,
        })
    }
}

/// Calculate the position at a distance along a geodesic from a start
/// position with an initial azimuth, the "direct" problem.
/// * `lat1`, `lon1` - the start position.
/// * `distance` - the geodesic distance in metres.
/// * `azimuth` - the azimuth at the start position.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the latitude and longitude of the finish position, the longitude
/// is not normalised.
/// # Errors
/// `PoleSingularity` if the start latitude is at a pole,
/// `NonConvergence` if the arc length does not converge.
pub fn calculate_destination(
    lat1: Angle,
    lon1: Radians,
    distance: Metres,
    azimuth: Angle,
    ellipsoid: &Ellipsoid,
) -> Result<(Radians, Radians)> {
    let f = ellipsoid.f();
    let tu1 = calculate_reduced_latitude_tangent(lat1, ellipsoid.one_minus_f())
        .ok_or(Error::PoleSingularity)?;
    let beta1 = Angle::from_y_x(tu1, 1.0);
    let (sin_u1, cos_u1) = (beta1.sin().0, beta1.cos().0);
    let (sin_az, cos_az) = (azimuth.sin().0, azimuth.cos().0);

    // Twice the arc length from the equator to the start position
    let two_sigma1 = 2.0 * libm::atan2(tu1, cos_az);

    let sin_alpha = cos_u1 * sin_az;
    let sq_cos_alpha = 1.0 - sin_alpha * sin_alpha;
    let (a, b) = evaluate_a_b(ellipsoid.ep_2(), sq_cos_alpha);

    let sigma0 = distance.0 / (ellipsoid.b().0 * a);
    let mut sigma = sigma0;
    let mut iterations = 0;
    let (sin_sigma, cos_sigma, cos_2sigma_m) = loop {
        iterations += 1;
        let sin_sigma = libm::sin(sigma);
        let cos_sigma = libm::cos(sigma);
        let cos_2sigma_m = libm::cos(two_sigma1 + sigma);
        let next = sigma0 + evaluate_delta_sigma(b, sin_sigma, cos_sigma, cos_2sigma_m);
        let delta = libm::fabs(next - sigma);
        sigma = next;
        trace!(iterations = iterations, sigma = sigma, delta = delta, "direct iteration");

        if delta <= DIRECT_TOLERANCE {
            break (sin_sigma, cos_sigma, cos_2sigma_m);
        }
        if MAX_DIRECT_ITERATIONS <= iterations {
            warn!(iterations = iterations, delta = delta, "direct solution did not converge");
            return Err(Error::NonConvergence {
                solver: "direct",
                iterations,
            });
        }
    };
    debug!(iterations = iterations, "direct solution converged");

    let t = cos_u1 * cos_sigma * cos_az - sin_u1 * sin_sigma;
    let lat2 = libm::atan2(
        sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_az,
        ellipsoid.one_minus_f() * libm::sqrt(sin_alpha * sin_alpha + t * t),
    );

    let lambda = libm::atan2(
        sin_sigma * sin_az,
        cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_az,
    );
    let c = evaluate_c(f, sq_cos_alpha);
    let delta_lon = lambda
        - evaluate_delta_lambda(
            f,
            c,
            sin_alpha,
            sigma,
            sin_sigma,
            cos_sigma,
            cos_2sigma_m,
        );

    Ok((Radians(lat2), Radians(lon1.0 + delta_lon)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::{is_within_tolerance, Degrees};

    fn degrees(value: f64) -> Angle {
        Angle::from(Degrees(value))
    }

    fn radians(value: f64) -> Radians {
        Radians(value.to_radians())
    }

    #[test]
    fn test_inverse_reference_values() {
        let wgs84_ellipsoid = Ellipsoid::wgs84();

        // San Francisco to Los Angeles airports
        let (distance, azimuth) = calculate_distance_and_azimuth(
            degrees(37.619002),
            radians(-122.374843),
            degrees(33.942536),
            radians(-118.408074),
            &wgs84_ellipsoid,
        )
        .expect("converges");
        assert!(is_within_tolerance(543_044.190_419_953, distance.0, 1e-6));
        assert!(is_within_tolerance(
            137.501_340_154_962_75,
            azimuth.0.to_degrees(),
            1e-9
        ));

        // Los Angeles to San Francisco airports
        let (distance, azimuth) = calculate_distance_and_azimuth(
            degrees(33.942536),
            radians(-118.408074),
            degrees(37.619002),
            radians(-122.374843),
            &wgs84_ellipsoid,
        )
        .expect("converges");
        assert!(is_within_tolerance(543_044.190_419_953, distance.0, 1e-6));
        assert!(is_within_tolerance(
            -40.177_537_630_207_26,
            azimuth.0.to_degrees(),
            1e-9
        ));
    }

    #[test]
    fn test_inverse_equator_and_meridian() {
        let wgs84_ellipsoid = Ellipsoid::wgs84();

        // Eastbound along the equator
        let (distance, azimuth) = calculate_distance_and_azimuth(
            degrees(0.0),
            radians(0.0),
            degrees(0.0),
            radians(90.0),
            &wgs84_ellipsoid,
        )
        .expect("converges");
        assert!(is_within_tolerance(
            6_378_137.0 * core::f64::consts::FRAC_PI_2,
            distance.0,
            1e-6
        ));
        assert!(is_within_tolerance(90.0, azimuth.0.to_degrees(), 1e-12));

        // Northbound along a meridian
        let (distance, azimuth) = calculate_distance_and_azimuth(
            degrees(0.0),
            radians(10.0),
            degrees(45.0),
            radians(10.0),
            &wgs84_ellipsoid,
        )
        .expect("converges");
        assert!(is_within_tolerance(4_984_944.377_977_125, distance.0, 1e-6));
        assert_eq!(0.0, azimuth.0);

        // Southbound along a meridian
        let (distance, azimuth) = calculate_distance_and_azimuth(
            degrees(45.0),
            radians(10.0),
            degrees(-30.0),
            radians(10.0),
            &wgs84_ellipsoid,
        )
        .expect("converges");
        assert!(is_within_tolerance(8_305_057.775_917_362, distance.0, 1e-6));
        assert!(is_within_tolerance(180.0, azimuth.0.to_degrees(), 1e-12));
    }

    #[test]
    fn test_inverse_coincident_points() {
        let wgs84_ellipsoid = Ellipsoid::wgs84();
        let (distance, _) = calculate_distance_and_azimuth(
            degrees(10.0),
            radians(20.0),
            degrees(10.0),
            radians(20.0),
            &wgs84_ellipsoid,
        )
        .expect("converges");
        assert!(distance.0 < 1e-6);
    }

    #[test]
    fn test_inverse_pole_singularity() {
        let wgs84_ellipsoid = Ellipsoid::wgs84();
        assert_eq!(
            Err(Error::PoleSingularity),
            calculate_distance_and_azimuth(
                degrees(90.0),
                radians(0.0),
                degrees(45.0),
                radians(10.0),
                &wgs84_ellipsoid,
            )
        );
        assert_eq!(
            Err(Error::PoleSingularity),
            calculate_distance_and_azimuth(
                degrees(45.0),
                radians(0.0),
                degrees(-90.0),
                radians(10.0),
                &wgs84_ellipsoid,
            )
        );
    }

    #[test]
    fn test_inverse_nearly_antipodal() {
        let wgs84_ellipsoid = Ellipsoid::wgs84();
        assert_eq!(
            Err(Error::NonConvergence {
                solver: "inverse",
                iterations: MAX_INVERSE_ITERATIONS
            }),
            calculate_distance_and_azimuth(
                degrees(0.0),
                radians(0.0),
                degrees(0.001),
                radians(179.999),
                &wgs84_ellipsoid,
            )
        );
        assert!(calculate_distance_and_azimuth(
            degrees(0.0),
            radians(0.0),
            degrees(0.5),
            radians(179.5),
            &wgs84_ellipsoid,
        )
        .is_err());
    }

    #[test]
    fn test_inverse_residual_tolerance() {
        assert_eq!(4.0 * f64::EPSILON, inverse_residual_tolerance(0.5));
        assert_eq!(8.0 * f64::EPSILON, inverse_residual_tolerance(-2.0));
    }

    #[test]
    fn test_direct_reference_values() {
        let wgs84_ellipsoid = Ellipsoid::wgs84();

        let (lat, lon) = calculate_destination(
            degrees(37.619002),
            radians(-122.374843),
            Metres(20_000.0),
            degrees(45.0),
            &wgs84_ellipsoid,
        )
        .expect("converges");
        assert!(is_within_tolerance(
            37.746_310_540_363_73,
            lat.0.to_degrees(),
            1e-9
        ));
        assert!(is_within_tolerance(
            -122.214_381_614_928_77,
            lon.0.to_degrees(),
            1e-9
        ));

        // Sydney, 1000 km North West
        let (lat, lon) = calculate_destination(
            degrees(-33.87),
            radians(151.21),
            Metres(1_000_000.0),
            degrees(-60.0),
            &wgs84_ellipsoid,
        )
        .expect("converges");
        assert!(is_within_tolerance(
            -29.036_320_227_651_4,
            lat.0.to_degrees(),
            1e-9
        ));
        assert!(is_within_tolerance(
            142.319_744_589_402_43,
            lon.0.to_degrees(),
            1e-9
        ));
    }

    #[test]
    fn test_direct_zero_distance() {
        let wgs84_ellipsoid = Ellipsoid::wgs84();
        let (lat, lon) = calculate_destination(
            degrees(-42.0),
            radians(147.0),
            Metres(0.0),
            degrees(123.0),
            &wgs84_ellipsoid,
        )
        .expect("converges");
        assert!(is_within_tolerance(-42.0, lat.0.to_degrees(), 1e-12));
        assert!(is_within_tolerance(147.0, lon.0.to_degrees(), 1e-12));
    }

    #[test]
    fn test_direct_along_the_equator() {
        let wgs84_ellipsoid = Ellipsoid::wgs84();
        let (lat, lon) = calculate_destination(
            degrees(0.0),
            radians(0.0),
            Metres(6_378_137.0 * core::f64::consts::FRAC_PI_2),
            degrees(90.0),
            &wgs84_ellipsoid,
        )
        .expect("converges");
        assert!(is_within_tolerance(0.0, lat.0.to_degrees(), 1e-12));
        assert!(is_within_tolerance(90.0, lon.0.to_degrees(), 1e-12));
    }

    #[test]
    fn test_direct_pole_singularity() {
        let wgs84_ellipsoid = Ellipsoid::wgs84();
        assert_eq!(
            Err(Error::PoleSingularity),
            calculate_destination(
                degrees(90.0),
                radians(90.0),
                Metres(1000.0),
                degrees(90.0),
                &wgs84_ellipsoid,
            )
        );
    }
}

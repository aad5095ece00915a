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

//! This module contains coefficients and functions for performing Vincenty's
//! calculations on the surface of an ellipsoid.
//!
//! It uses the equations given by T. Vincenty in
//! [Direct and Inverse Solutions of Geodesics on the Ellipsoid with Application of Nested Equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf),
//! Survey Review, April 1975, with Helmert's expansion for the
//! coefficients `A` and `B`.

#![allow(clippy::suboptimal_flops)]

/// The longitude correction coefficient `C`.
/// Vincenty, Eq. 10.
/// * `f` - the flattening ratio.
/// * `sq_cos_alpha` - the square of the cosine of the azimuth at the equator.
/// # Examples
/// ```
/// use vincenty_ellipsoid::ellipsoid::coefficients::evaluate_c;
///
/// // A geodesic along the equator has no longitude correction
/// assert_eq!(0.0, evaluate_c(1.0 / 298.257_223_563, 0.0));
/// ```
#[must_use]
pub fn evaluate_c(f: f64, sq_cos_alpha: f64) -> f64 {
    (((-3.0 * sq_cos_alpha) + 4.0) * f + 4.0) * sq_cos_alpha * f / 16.0
}

/// The distance coefficients `A` and `B` using Helmert's expansion in `k1`.
/// Vincenty, Eqs. 3 & 4 and Rapp, Geometric Geodesy Part II, Eq. 1.56.
/// * `ep_2` - the square of the second Eccentricity of the ellipsoid.
/// * `sq_cos_alpha` - the square of the cosine of the azimuth at the equator.
///
/// returns `A` and `B`.
#[must_use]
pub fn evaluate_a_b(ep_2: f64, sq_cos_alpha: f64) -> (f64, f64) {
    let sqrt_1_u2 = libm::sqrt(ep_2 * sq_cos_alpha + 1.0);
    let k1 = (sqrt_1_u2 - 1.0) / (sqrt_1_u2 + 1.0);
    let a = (k1 * k1 / 4.0 + 1.0) / (1.0 - k1);
    let b = k1 * (1.0 - 0.375 * k1 * k1);
    (a, b)
}

/// The difference between the great circle distance on the auxiliary
/// sphere and the geodesic distance, `Δσ`.
/// Vincenty, Eq. 6.
/// * `b` - the coefficient `B`.
/// * `sin_sigma`, `cos_sigma` - the sine and cosine of the arc length on the
///   auxiliary sphere.
/// * `cos_2sigma_m` - the cosine of twice the arc length from the equator to
///   the mid point of the arc.
#[must_use]
pub fn evaluate_delta_sigma(b: f64, sin_sigma: f64, cos_sigma: f64, cos_2sigma_m: f64) -> f64 {
    let sq_cos_2sigma_m = cos_2sigma_m * cos_2sigma_m;
    b * sin_sigma
        * (cos_2sigma_m
            + b / 4.0
                * (cos_sigma * (2.0 * sq_cos_2sigma_m - 1.0)
                    - b / 6.0
                        * cos_2sigma_m
                        * (4.0 * sin_sigma * sin_sigma - 3.0)
                        * (4.0 * sq_cos_2sigma_m - 3.0)))
}

/// The difference between the longitude on the auxiliary sphere and the
/// longitude on the ellipsoid.
/// Vincenty, Eqs. 11 & 13.
/// * `f` - the flattening ratio.
/// * `c` - the coefficient `C`.
/// * `sin_alpha` - the sine of the azimuth at the equator.
/// * `sigma` - the arc length on the auxiliary sphere in radians.
/// * `sin_sigma`, `cos_sigma` - the sine and cosine of `sigma`.
/// * `cos_2sigma_m` - the cosine of twice the arc length from the equator to
///   the mid point of the arc.
#[must_use]
pub fn evaluate_delta_lambda(
    f: f64,
    c: f64,
    sin_alpha: f64,
    sigma: f64,
    sin_sigma: f64,
    cos_sigma: f64,
    cos_2sigma_m: f64,
) -> f64 {
    let sq_cos_2sigma_m = cos_2sigma_m * cos_2sigma_m;
    (1.0 - c)
        * f
        * sin_alpha
        * (sigma + c * sin_sigma * (cos_2sigma_m + c * cos_sigma * (2.0 * sq_cos_2sigma_m - 1.0)))
}

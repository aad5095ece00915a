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

//! vincenty-ellipsoid
//!
//! A library for performing geodesic and geocentric calculations on a
//! reference ellipsoid, see *Figure 1*.
//!
//! <img src="https://upload.wikimedia.org/wikipedia/commons/thumb/3/3e/WGS84_mean_Earth_radius.svg/800px-WGS84_mean_Earth_radius.svg.png" width="400">
//!
//! *Figure 1 The WGS-84 Ellipsoid (not to scale)
//! [Cmglee](https://commons.wikimedia.org/wiki/User:Cmglee), [CC BY-SA 4.0](https://creativecommons.org/licenses/by-sa/4.0), via Wikimedia Commons*
//!
//! An `Ellipsoid` is defined by the shape of a reference ellipsoid, e.g.
//! [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf),
//! together with the units of the angles and distances that it accepts and
//! returns and the ranges of the longitudes and bearings that it returns.
//!
//! ## Geodesic navigation
//!
//! The shortest path between two points on the surface of an ellipsoid is a
//! [geodesic segment](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid).
//!
//! This library uses T. Vincenty's iterative solutions on the auxiliary
//! sphere of reduced latitude to calculate:
//!
//! - the length and initial bearing of a geodesic between two positions, the
//!   "inverse" problem, see `Ellipsoid::inverse`;
//! - the position at a distance and bearing from a position, the "direct"
//!   problem, see `Ellipsoid::direct`;
//! - equally spaced waypoints between two positions and small local
//!   displacements, see the `waypoints` module.
//!
//! Vincenty's solutions are not valid for antipodal or nearly antipodal
//! positions: the inverse solution reports `Error::NonConvergence` for them.
//!
//! ## Geocentric coordinates
//!
//! The `geocentric` module converts between geodetic positions and
//! Earth-Centred, Earth-Fixed (ECEF) coordinates in metres.
//!
//! ## Design
//!
//! The `Ellipsoid` is immutable after construction, all of its operations are
//! pure functions of their inputs, so it can be shared between threads.
//! It can be constructed from one of the named reference ellipsoids in
//! `ellipsoid::shapes`, from a custom `Shape` or from an `EllipsoidConfig`.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`;
//! - [libm](https://crates.io/crates/libm) - for floating point functions;
//! - [thiserror](https://crates.io/crates/thiserror) - to define `Error`;
//! - [tracing](https://crates.io/crates/tracing) - to report the progress of
//!   the iterative solutions;
//! - [serde](https://crates.io/crates/serde) - to serialize the configuration.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate alloc;
extern crate angle_sc;
extern crate icao_units;

pub mod config;
pub mod ellipsoid;
pub mod error;
pub mod geocentric;
pub mod geodesic;
pub mod units;
pub mod waypoints;

pub use angle_sc::{Angle, Degrees, Radians};
pub use config::EllipsoidConfig;
pub use ellipsoid::shapes::Shape;
pub use error::{Error, Result};
pub use geocentric::GeocentricPoint;
pub use icao_units::si::Metres;
pub use units::{AngleUnit, DistanceUnit};

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use units::normalise;

/// A geodetic position in the angle unit of the `Ellipsoid` that uses it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeodeticPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// The height above the ellipsoid in metres.
    #[serde(default)]
    pub elevation: Option<f64>,
}

impl GeodeticPoint {
    /// Constructor.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: None,
        }
    }

    /// Constructor with an elevation.
    #[must_use]
    pub const fn with_elevation(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: Some(elevation),
        }
    }
}

/// Check that an input value is finite.
fn finite(value: f64, name: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidArgument(name))
    }
}

/// A reference ellipsoid with the units and ranges of its inputs and outputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis and inverse flattening.
    shape: Shape,
    angle_unit: AngleUnit,
    distance_unit: DistanceUnit,
    /// Output longitudes in (-π, π] if true, otherwise [0, 2π).
    longitude_symmetric: bool,
    /// Output bearings in (-π, π] if true, otherwise [0, 2π).
    bearing_symmetric: bool,
}

impl Ellipsoid {
    /// Constructor.
    /// * `shape` - the shape of the ellipsoid.
    /// * `angle_unit`, `distance_unit` - the units of inputs and outputs.
    /// * `longitude_symmetric`, `bearing_symmetric` - the output ranges.
    /// # Errors
    /// `InvalidArgument` if the shape is not an oblate ellipsoid.
    pub fn new(
        shape: Shape,
        angle_unit: AngleUnit,
        distance_unit: DistanceUnit,
        longitude_symmetric: bool,
        bearing_symmetric: bool,
    ) -> Result<Self> {
        if !shape.is_valid() {
            return Err(Error::InvalidArgument("shape"));
        }
        Ok(Self {
            shape,
            angle_unit,
            distance_unit,
            longitude_symmetric,
            bearing_symmetric,
        })
    }

    /// Construct an `Ellipsoid` from the name of a reference ellipsoid.
    /// # Errors
    /// `InvalidEllipsoidName` if `name` is not in `ellipsoid::shapes::SHAPES`.
    pub fn from_name(
        name: &str,
        angle_unit: AngleUnit,
        distance_unit: DistanceUnit,
        longitude_symmetric: bool,
        bearing_symmetric: bool,
    ) -> Result<Self> {
        let shape =
            ellipsoid::shapes::find(name).ok_or_else(|| Error::InvalidEllipsoidName(name.into()))?;
        Self::new(
            *shape,
            angle_unit,
            distance_unit,
            longitude_symmetric,
            bearing_symmetric,
        )
    }

    /// Construct a WGS-84 `Ellipsoid` in degrees and metres with symmetric
    /// longitudes and bearings.
    #[must_use]
    pub const fn wgs84() -> Self {
        Self {
            shape: ellipsoid::shapes::WGS84,
            angle_unit: AngleUnit::Degrees,
            distance_unit: DistanceUnit::Meter,
            longitude_symmetric: true,
            bearing_symmetric: true,
        }
    }

    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.shape.a
    }

    /// The reciprocal of the flattening of the ellipsoid.
    #[must_use]
    pub const fn inverse_flattening(&self) -> f64 {
        self.shape.inverse_flattening
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub fn f(&self) -> f64 {
        ellipsoid::calculate_flattening(self.shape.inverse_flattening)
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub fn b(&self) -> Metres {
        ellipsoid::calculate_minor_axis(self.shape.a, self.f())
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub fn one_minus_f(&self) -> f64 {
        1.0 - self.f()
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub fn e_2(&self) -> f64 {
        ellipsoid::calculate_sq_eccentricity(self.f())
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub fn ep_2(&self) -> f64 {
        ellipsoid::calculate_sq_2nd_eccentricity(self.f())
    }

    /// The number of metres in the distance unit.
    #[must_use]
    pub const fn distance_factor(&self) -> f64 {
        self.distance_unit.factor()
    }

    #[must_use]
    pub const fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    #[must_use]
    pub const fn distance_unit(&self) -> DistanceUnit {
        self.distance_unit
    }

    #[must_use]
    pub const fn longitude_symmetric(&self) -> bool {
        self.longitude_symmetric
    }

    #[must_use]
    pub const fn bearing_symmetric(&self) -> bool {
        self.bearing_symmetric
    }

    /// Convert an input latitude to an `Angle`.
    /// # Errors
    /// `InvalidArgument` if the latitude is not finite or beyond a pole.
    pub(crate) fn latitude_angle(&self, latitude: f64) -> Result<Angle> {
        let latitude = finite(latitude, "latitude")?;
        if self.angle_unit.quarter_turn() < libm::fabs(latitude) {
            return Err(Error::InvalidArgument("latitude"));
        }
        Ok(self.angle_unit.to_angle(latitude))
    }

    /// Convert an input longitude to `Radians`.
    pub(crate) fn longitude_radians(&self, longitude: f64) -> Result<Radians> {
        finite(longitude, "longitude").map(|value| self.angle_unit.to_radians(value))
    }

    /// Convert an input distance to `Metres`.
    pub(crate) fn distance_metres(&self, distance: f64) -> Result<Metres> {
        finite(distance, "distance").map(|value| self.distance_unit.to_metres(value))
    }

    /// Normalise a longitude and convert it to the angle unit.
    fn output_longitude(&self, longitude: Radians) -> f64 {
        self.angle_unit
            .from_radians(normalise(longitude, self.longitude_symmetric))
    }

    /// Normalise a bearing and convert it to the angle unit.
    fn output_bearing(&self, bearing: Radians) -> f64 {
        self.angle_unit
            .from_radians(normalise(bearing, self.bearing_symmetric))
    }

    /// Calculate the distance and initial bearing of the geodesic between
    /// a pair of positions.
    /// * `a`, `b` - the start and finish positions.
    ///
    /// returns the distance in the distance unit and the bearing in the
    /// angle unit.
    /// # Errors
    /// `InvalidArgument` if a coordinate is not valid,
    /// `PoleSingularity` if a position is at a pole,
    /// `NonConvergence` if the positions are nearly antipodal.
    pub fn inverse(&self, a: &GeodeticPoint, b: &GeodeticPoint) -> Result<(f64, f64)> {
        let (distance, azimuth) = geodesic::calculate_distance_and_azimuth(
            self.latitude_angle(a.latitude)?,
            self.longitude_radians(a.longitude)?,
            self.latitude_angle(b.latitude)?,
            self.longitude_radians(b.longitude)?,
            self,
        )?;
        Ok((
            self.distance_unit.from_metres(distance),
            self.output_bearing(azimuth),
        ))
    }

    /// The distance between a pair of positions in the distance unit.
    /// # Errors
    /// see `inverse`.
    pub fn range(&self, a: &GeodeticPoint, b: &GeodeticPoint) -> Result<f64> {
        self.inverse(a, b).map(|(distance, _)| distance)
    }

    /// The initial bearing from `a` to `b` in the angle unit.
    /// # Errors
    /// see `inverse`.
    pub fn bearing(&self, a: &GeodeticPoint, b: &GeodeticPoint) -> Result<f64> {
        self.inverse(a, b).map(|(_, bearing)| bearing)
    }

    /// Calculate the position at a distance and bearing from a position.
    /// * `a` - the start position.
    /// * `distance` - the distance in the distance unit.
    /// * `bearing` - the initial bearing in the angle unit.
    /// # Errors
    /// `InvalidArgument` if an argument is not valid,
    /// `PoleSingularity` if the start position is at a pole,
    /// `NonConvergence` if the solution does not converge.
    pub fn direct(&self, a: &GeodeticPoint, distance: f64, bearing: f64) -> Result<GeodeticPoint> {
        let bearing = finite(bearing, "bearing")?;
        let (lat, lon) = geodesic::calculate_destination(
            self.latitude_angle(a.latitude)?,
            self.longitude_radians(a.longitude)?,
            self.distance_metres(distance)?,
            self.angle_unit.to_angle(bearing),
            self,
        )?;
        Ok(GeodeticPoint::new(
            self.angle_unit.from_radians(lat),
            self.output_longitude(lon),
        ))
    }

    /// Convert a geodetic position to ECEF coordinates in metres.
    /// A missing elevation is taken as zero.
    /// # Errors
    /// `InvalidArgument` if a coordinate is not valid.
    pub fn to_ecef(&self, point: &GeodeticPoint) -> Result<GeocentricPoint> {
        let lat = self.latitude_angle(point.latitude)?;
        let lon = self.longitude_radians(point.longitude)?;
        let height = finite(point.elevation.unwrap_or_default(), "elevation")?;
        Ok(geocentric::calculate_geocentric_point(
            lat,
            Angle::from(lon),
            Metres(height),
            self,
        ))
    }

    /// Convert ECEF coordinates in metres to a geodetic position with
    /// its elevation in metres.
    /// # Errors
    /// `InvalidArgument` if a coordinate is not finite,
    /// `OnPolarAxis` if the point is on the polar axis.
    pub fn to_lla(&self, point: &GeocentricPoint) -> Result<GeodeticPoint> {
        finite(point.x, "x")?;
        finite(point.y, "y")?;
        finite(point.z, "z")?;
        let (lat, lon, height) = geocentric::calculate_geodetic_position(point, self)?;
        Ok(GeodeticPoint::with_elevation(
            self.angle_unit.from_radians(lat),
            self.output_longitude(lon),
            height.0,
        ))
    }

    /// Calculate `steps + 1` equally spaced waypoints from `a` to `b`,
    /// see `waypoints::calculate_intermediate_points`.
    /// # Errors
    /// `InvalidArgument` if `steps` is zero, otherwise see `inverse`.
    pub fn intermediate(
        &self,
        a: &GeodeticPoint,
        b: &GeodeticPoint,
        steps: u32,
    ) -> Result<(f64, f64, Vec<GeodeticPoint>)> {
        waypoints::calculate_intermediate_points(a, b, steps, self)
    }

    /// The local East and North displacement of `b` from `a`,
    /// see `waypoints::calculate_displacement`.
    /// # Errors
    /// see `inverse`.
    pub fn displacement(&self, a: &GeodeticPoint, b: &GeodeticPoint) -> Result<(f64, f64)> {
        waypoints::calculate_displacement(a, b, self)
    }

    /// The position at a local East and North displacement from `a`,
    /// see `waypoints::calculate_location`.
    /// # Errors
    /// see `direct`.
    pub fn location(&self, a: &GeodeticPoint, x: f64, y: f64) -> Result<GeodeticPoint> {
        waypoints::calculate_location(a, x, y, self)
    }

    /// The distances per unit of longitude and latitude at a latitude,
    /// see `waypoints::calculate_scales`.
    /// # Errors
    /// `InvalidArgument` if the latitude is not valid.
    pub fn scales(&self, latitude: f64) -> Result<(f64, f64)> {
        waypoints::calculate_scales(latitude, self)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::wgs84()
    }
}

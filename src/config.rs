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

//! The config module contains `EllipsoidConfig`: the serializable
//! parameters of an `Ellipsoid`.
//!
//! # Examples
//! ```
//! use vincenty_ellipsoid::{DistanceUnit, Ellipsoid, EllipsoidConfig};
//!
//! let config = EllipsoidConfig {
//!     distance_unit: DistanceUnit::NauticalMile,
//!     ..EllipsoidConfig::default()
//! };
//! let ellipsoid = Ellipsoid::try_from(&config).unwrap();
//! assert_eq!(1852.0, ellipsoid.distance_factor());
//! ```

use crate::error::{Error, Result};
use crate::units::{AngleUnit, DistanceUnit};
use crate::Ellipsoid;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// The parameters of an `Ellipsoid`, missing fields take their default
/// values: "WGS84", degrees, metres and symmetric output ranges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipsoidConfig {
    /// The name of a reference ellipsoid in `ellipsoid::shapes::SHAPES`.
    pub name: String,
    pub angle_unit: AngleUnit,
    pub distance_unit: DistanceUnit,
    pub longitude_symmetric: bool,
    pub bearing_symmetric: bool,
}

impl Default for EllipsoidConfig {
    fn default() -> Self {
        Self {
            name: String::from("WGS84"),
            angle_unit: AngleUnit::Degrees,
            distance_unit: DistanceUnit::Meter,
            longitude_symmetric: true,
            bearing_symmetric: true,
        }
    }
}

impl TryFrom<&EllipsoidConfig> for Ellipsoid {
    type Error = Error;

    /// Construct an `Ellipsoid` from an `EllipsoidConfig`.
    /// # Errors
    /// `InvalidEllipsoidName` if the name is not a reference ellipsoid.
    fn try_from(config: &EllipsoidConfig) -> Result<Self> {
        Self::from_name(
            &config.name,
            config.angle_unit,
            config.distance_unit,
            config.longitude_symmetric,
            config.bearing_symmetric,
        )
    }
}

impl From<&Ellipsoid> for EllipsoidConfig {
    fn from(ellipsoid: &Ellipsoid) -> Self {
        Self {
            name: String::from(ellipsoid.shape().name),
            angle_unit: ellipsoid.angle_unit(),
            distance_unit: ellipsoid.distance_unit(),
            longitude_symmetric: ellipsoid.longitude_symmetric(),
            bearing_symmetric: ellipsoid.bearing_symmetric(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipsoid_config_default() {
        let config = EllipsoidConfig::default();
        let ellipsoid = Ellipsoid::try_from(&config).unwrap();
        assert_eq!(Ellipsoid::wgs84(), ellipsoid);
        assert_eq!(config, EllipsoidConfig::from(&ellipsoid));
    }

    #[test]
    fn test_ellipsoid_config_serde() {
        let config: EllipsoidConfig = serde_json::from_str(
            r#"{ "name": "AIRY", "distance_unit": "nautical-mile", "bearing_symmetric": false }"#,
        )
        .unwrap();
        assert_eq!("AIRY", config.name);
        assert_eq!(AngleUnit::Degrees, config.angle_unit);
        assert_eq!(DistanceUnit::NauticalMile, config.distance_unit);
        assert!(config.longitude_symmetric);
        assert!(!config.bearing_symmetric);

        let ellipsoid = Ellipsoid::try_from(&config).unwrap();
        assert_eq!(1852.0, ellipsoid.distance_factor());
        assert!(!ellipsoid.bearing_symmetric());

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""angle_unit":"degrees""#));
        let parsed: EllipsoidConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);

        let empty: EllipsoidConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(EllipsoidConfig::default(), empty);

        assert!(serde_json::from_str::<EllipsoidConfig>(r#"{ "angle_unit": "grads" }"#).is_err());
    }

    #[test]
    fn test_ellipsoid_config_invalid_name() {
        let config = EllipsoidConfig {
            name: String::from("wgs84"),
            ..EllipsoidConfig::default()
        };
        assert_eq!(
            Err(Error::InvalidEllipsoidName(String::from("wgs84"))),
            Ellipsoid::try_from(&config)
        );
    }
}

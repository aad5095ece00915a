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

//! The shapes module contains the primary parameters of the named reference
//! ellipsoids: the Semimajor axis and the reciprocal of the flattening.

use crate::Metres;

/// The shape of a reference ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    /// The name of the ellipsoid.
    pub name: &'static str,
    /// The Semimajor axis, the radius at the equator.
    pub a: Metres,
    /// The reciprocal of the flattening ratio, 1/f.
    pub inverse_flattening: f64,
}

impl Shape {
    /// Constructor.
    #[must_use]
    pub const fn new(name: &'static str, a: Metres, inverse_flattening: f64) -> Self {
        Self {
            name,
            a,
            inverse_flattening,
        }
    }

    /// Whether the shape describes an oblate ellipsoid:
    /// `0 < a` and `1 < inverse_flattening`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.a.0.is_finite()
            && 0.0 < self.a.0
            && self.inverse_flattening.is_finite()
            && 1.0 < self.inverse_flattening
    }
}

/// The WGS 84 ellipsoid, see ICAO WGS 84 Implementation Manual, Tab. 3-1.
pub const WGS84: Shape = Shape::new("WGS84", Metres(6_378_137.0), 298.257_223_563);

/// The North American Datum 1927 ellipsoid, Clarke 1866.
pub const NAD27: Shape = Shape::new("NAD27", Metres(6_378_206.4), 294.978_698_213_8);

/// The named reference ellipsoids.
pub const SHAPES: [Shape; 20] = [
    Shape::new("AIRY", Metres(6_377_563.396), 299.324_964_6),
    Shape::new("AIRY-MODIFIED", Metres(6_377_340.189), 299.324_964_6),
    Shape::new("AUSTRALIAN", Metres(6_378_160.0), 298.25),
    Shape::new("BESSEL-1841", Metres(6_377_397.155), 299.152_812_8),
    Shape::new("CLARKE-1880", Metres(6_378_249.145), 293.465),
    Shape::new("EVEREST-1830", Metres(6_377_276.345), 300.8017),
    Shape::new("EVEREST-MODIFIED", Metres(6_377_304.063), 300.8017),
    Shape::new("FISHER-1960", Metres(6_378_166.0), 298.3),
    Shape::new("FISHER-1968", Metres(6_378_150.0), 298.3),
    Shape::new("GRS80", Metres(6_378_137.0), 298.257_222_100_88),
    Shape::new("HOUGH-1956", Metres(6_378_270.0), 297.0),
    Shape::new("HAYFORD", Metres(6_378_388.0), 297.0),
    Shape::new("IAU76", Metres(6_378_140.0), 298.257),
    Shape::new("KRASSOVSKY-1938", Metres(6_378_245.0), 298.3),
    NAD27,
    Shape::new("NWL-9D", Metres(6_378_145.0), 298.25),
    Shape::new("SOUTHAMERICAN-1969", Metres(6_378_160.0), 298.25),
    Shape::new("SOVIET-1985", Metres(6_378_136.0), 298.257),
    Shape::new("WGS72", Metres(6_378_135.0), 298.26),
    WGS84,
];

/// Find a named reference ellipsoid.
/// * `name` - the name of the ellipsoid, case sensitive.
///
/// returns the `Shape` of the ellipsoid, None if `name` is unknown.
/// # Examples
/// ```
/// use vincenty_ellipsoid::ellipsoid::shapes;
///
/// assert_eq!(Some(&shapes::WGS84), shapes::find("WGS84"));
/// assert_eq!(None, shapes::find("WGS48"));
/// ```
#[must_use]
pub fn find(name: &str) -> Option<&'static Shape> {
    SHAPES.iter().find(|shape| shape.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes_are_valid() {
        for shape in &SHAPES {
            assert!(shape.is_valid(), "{}", shape.name);
        }
    }

    #[test]
    fn test_shape_names_are_unique() {
        for (i, shape) in SHAPES.iter().enumerate() {
            assert!(SHAPES[i + 1..].iter().all(|other| other.name != shape.name));
        }
    }

    #[test]
    fn test_find() {
        let nad27 = find("NAD27").expect("NAD27");
        assert_eq!(Metres(6_378_206.4), nad27.a);
        assert_eq!(294.978_698_213_8, nad27.inverse_flattening);

        let airy = find("AIRY").expect("AIRY");
        assert_eq!(Metres(6_377_563.396), airy.a);

        assert!(find("wgs84").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_is_valid() {
        assert!(!Shape::new("ZERO", Metres(0.0), 298.0).is_valid());
        assert!(!Shape::new("SPHERE", Metres(6_371_000.0), 1.0).is_valid());
        assert!(!Shape::new("NAN", Metres(f64::NAN), 298.0).is_valid());
        assert!(!Shape::new("INFINITE", Metres(6_371_000.0), f64::INFINITY).is_valid());
    }
}

//! Provides [`Point`].
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::convert::out_of_china;

/// Represents a position on the Earth, a pair of latitude and longitude in degree.
///
/// A [`Point`] does not know which coordinate reference system it is in,
/// see [`Transformer`](crate::Transformer).
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let point = Point::new(39.915, 116.404);
/// assert_eq!(point.latitude(), &39.915);
/// assert_eq!(point.longitude(), &116.404);
///
/// // From/into a (latitude, longitude) tuple
/// assert_eq!(Point::from((39.915, 116.404)), point);
/// assert_eq!(<(f64, f64)>::from(point), (39.915, 116.404));
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// The latitude \[deg\] of the point
    pub(crate) latitude: f64,
    /// The longitude \[deg\] of the point
    pub(crate) longitude: f64,
}

impl From<(f64, f64)> for Point {
    /// see [`Point::new()`]
    fn from(rhs: (f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1)
    }
}

impl From<Point> for (f64, f64) {
    fn from(rhs: Point) -> Self {
        (rhs.latitude, rhs.longitude)
    }
}

impl Point {
    /// Makes a [`Point`].
    ///
    /// This does not check the value range,
    /// out-of-range and NaN values are kept as is.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// let point = Point::new(39.915, 116.404);
    /// assert_eq!(point.latitude(), &39.915);
    /// assert_eq!(point.longitude(), &116.404);
    /// ```
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the latitude of `self`.
    #[inline]
    pub fn latitude(&self) -> &f64 {
        &self.latitude
    }

    /// Returns the longitude of `self`.
    #[inline]
    pub fn longitude(&self) -> &f64 {
        &self.longitude
    }

    /// Returns `true` if `self` is outside the region GCJ02 applies to.
    ///
    /// See [`out_of_china`](crate::out_of_china).
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// assert!(!Point::new(39.915, 116.404).is_out_of_china());
    /// assert!(Point::new(-33.86, 151.2).is_out_of_china());
    /// ```
    #[inline]
    pub fn is_out_of_china(&self) -> bool {
        out_of_china(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Crs, Transformer};

    #[test]
    fn test_unchecked() {
        for (lat, lon) in [(91.0, 181.0), (-95.5, -400.0), (720.0, 0.0)] {
            let point = Point::new(lat, lon);
            assert_eq!(point.latitude(), &lat);
            assert_eq!(point.longitude(), &lon);

            let result = Transformer::new(Crs::GCJ02, Crs::BD09).forward(&point);
            assert!(result.latitude().is_finite());
            assert!(result.longitude().is_finite());
        }

        let point = Point::new(f64::NAN, 116.404);
        assert!(point.latitude().is_nan());
        assert!(!point.is_out_of_china());
    }

    #[test]
    fn test_tuple() {
        let point = Point::from((39.915, 116.404));
        assert_eq!(point.latitude(), &39.915);
        assert_eq!(point.longitude(), &116.404);
        assert_eq!(<(f64, f64)>::from(point), (39.915, 116.404));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Point::new(39.915, 116.404),
            &[
                Token::Struct {
                    name: "Point",
                    len: 2,
                },
                Token::Str("latitude"),
                Token::F64(39.915),
                Token::Str("longitude"),
                Token::F64(116.404),
                Token::StructEnd,
            ],
        );
    }
}

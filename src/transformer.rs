//! Provides [`Transformer`] and [`transform`].
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::convert::{
    bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_wgs84, wgs84_to_bd09, wgs84_to_gcj02,
};
use crate::{Crs, Point};

/// Returns the [`Point`] in `to` of `point` in `from`.
///
/// Returns `point` as is when `from` equals `to`.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let point = Point::new(39.915, 116.404);
///
/// let result = transform(&point, Crs::GCJ02, Crs::BD09);
/// assert_eq!(result, Point::from(gcj02_to_bd09(39.915, 116.404)));
///
/// assert_eq!(transform(&point, Crs::BD09, Crs::BD09), point);
/// ```
pub fn transform(point: &Point, from: Crs, to: Crs) -> Point {
    let (lat, lon) = (point.latitude, point.longitude);

    let result = match (from, to) {
        (Crs::WGS84, Crs::GCJ02) => wgs84_to_gcj02(lat, lon),
        (Crs::WGS84, Crs::BD09) => wgs84_to_bd09(lat, lon),
        (Crs::GCJ02, Crs::WGS84) => gcj02_to_wgs84(lat, lon),
        (Crs::GCJ02, Crs::BD09) => gcj02_to_bd09(lat, lon),
        (Crs::BD09, Crs::GCJ02) => bd09_to_gcj02(lat, lon),
        (Crs::BD09, Crs::WGS84) => bd09_to_wgs84(lat, lon),
        (Crs::WGS84, Crs::WGS84) | (Crs::GCJ02, Crs::GCJ02) | (Crs::BD09, Crs::BD09) => {
            return *point
        }
    };

    log::trace!("{from} -> {to}: ({lat}, {lon}) -> ({}, {})", result.0, result.1);

    result.into()
}

/// The coordinate transformer between a pair of [`Crs`].
///
/// [`Transformer::forward`] converts from [`source`](Transformer::source)
/// to [`target`](Transformer::target),
/// and [`Transformer::backward`] does the reverse.
///
/// Conversions into [`Crs::WGS84`] are approximate,
/// see [`gcj02_to_wgs84`](crate::gcj02_to_wgs84).
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let tf = Transformer::new(Crs::WGS84, Crs::GCJ02);
///
/// let origin = Point::new(39.915, 116.404);
///
/// let result = tf.forward(&origin);
/// assert!((result.latitude() - 39.91640428150164).abs() < 1e-8);
/// assert!((result.longitude() - 116.41024449916938).abs() < 1e-8);
///
/// let p = tf.backward(&result);
/// assert!((p.latitude() - origin.latitude()).abs() < 1e-3);
/// assert!((p.longitude() - origin.longitude()).abs() < 1e-3);
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transformer {
    /// The system of the input of [`Transformer::forward`].
    pub source: Crs,
    /// The system of the output of [`Transformer::forward`].
    pub target: Crs,
}

impl Transformer {
    /// Makes a [`Transformer`].
    #[inline]
    pub const fn new(source: Crs, target: Crs) -> Self {
        Self { source, target }
    }

    /// Returns the [`Transformer`] which `source` and `target` are swapped.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// let tf = Transformer::new(Crs::WGS84, Crs::BD09);
    /// assert_eq!(tf.reversed(), Transformer::new(Crs::BD09, Crs::WGS84));
    /// ```
    #[inline]
    pub const fn reversed(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }

    /// Returns the forward-transformed position.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// let tf = Transformer::new(Crs::GCJ02, Crs::BD09);
    ///
    /// let result = tf.forward(&Point::new(39.915, 116.404));
    /// assert!((result.latitude() - 39.92133699351021).abs() < 1e-8);
    /// assert!((result.longitude() - 116.41036949371029).abs() < 1e-8);
    /// ```
    #[inline]
    pub fn forward(&self, point: &Point) -> Point {
        transform(point, self.source, self.target)
    }

    /// Returns the backward-transformed position.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// let tf = Transformer::new(Crs::GCJ02, Crs::BD09);
    ///
    /// let result = tf.backward(&Point::new(39.915, 116.404));
    /// assert!((result.latitude() - 39.90865673957631).abs() < 1e-8);
    /// assert!((result.longitude() - 116.39762729119315).abs() < 1e-8);
    /// ```
    #[inline]
    pub fn backward(&self, point: &Point) -> Point {
        transform(point, self.target, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Crs; 3] = [Crs::WGS84, Crs::GCJ02, Crs::BD09];

    #[test]
    fn test_identity() {
        let point = Point::new(39.915, 116.404);
        for crs in ALL {
            assert_eq!(Transformer::new(crs, crs).forward(&point), point);
            assert_eq!(Transformer::new(crs, crs).backward(&point), point);
        }
    }

    #[test]
    fn test_dispatch() {
        let (lat, lon) = (31.2304, 121.4737);
        let point = Point::new(lat, lon);

        for (from, to, expected) in [
            (Crs::WGS84, Crs::GCJ02, wgs84_to_gcj02(lat, lon)),
            (Crs::WGS84, Crs::BD09, wgs84_to_bd09(lat, lon)),
            (Crs::GCJ02, Crs::WGS84, gcj02_to_wgs84(lat, lon)),
            (Crs::GCJ02, Crs::BD09, gcj02_to_bd09(lat, lon)),
            (Crs::BD09, Crs::GCJ02, bd09_to_gcj02(lat, lon)),
            (Crs::BD09, Crs::WGS84, bd09_to_wgs84(lat, lon)),
        ] {
            assert_eq!(transform(&point, from, to), Point::from(expected));
            assert_eq!(
                Transformer::new(from, to).forward(&point),
                Point::from(expected)
            );
            assert_eq!(
                Transformer::new(to, from).backward(&point),
                Point::from(expected)
            );
        }
    }

    #[test]
    fn test_round_trip() {
        let origin = Point::new(22.5431, 114.0579);
        for source in ALL {
            for target in ALL {
                let tf = Transformer::new(source, target);
                let actual = tf.backward(&tf.forward(&origin));
                assert!((actual.latitude() - origin.latitude()).abs() < 1e-3);
                assert!((actual.longitude() - origin.longitude()).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_out_of_china() {
        let origin = Point::new(-33.86, 151.2);
        let tf = Transformer::new(Crs::WGS84, Crs::GCJ02);
        assert_eq!(tf.forward(&origin), origin);
        assert_eq!(tf.backward(&origin), origin);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Transformer::new(Crs::WGS84, Crs::BD09),
            &[
                Token::Struct {
                    name: "Transformer",
                    len: 2,
                },
                Token::Str("source"),
                Token::Str("WGS84"),
                Token::Str("target"),
                Token::Str("BD09"),
                Token::StructEnd,
            ],
        );

        let tf: Transformer = serde_json::from_str(r#"{"source":"gcj02","target":"BD09"}"#).unwrap();
        assert_eq!(tf, Transformer::new(Crs::GCJ02, Crs::BD09));
    }
}

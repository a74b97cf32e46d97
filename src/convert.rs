//! Provides the WGS84, GCJ02 and BD09 conversion functions.
//!
//! Every function takes and returns `(latitude, longitude)` in degrees.
//! Nothing is validated; any finite input gives a finite output.
//!
//! The conversions into WGS84 ([`gcj02_to_wgs84`] and [`bd09_to_wgs84`])
//! are first-order approximations, not exact inverses.
//! They re-evaluate the forward offset at the already shifted point,
//! so the residual error is from sub-meter up to a few meters.
use std::f64::consts::PI;

/// The semi-major axis \[m\] of the Krasovsky 1940 ellipsoid.
const A: f64 = 6378245.0;

/// The squared eccentricity of the Krasovsky 1940 ellipsoid.
const EE: f64 = 0.00669342162296594323;

/// The angular frequency of the BD09 perturbation, π × 3000 / 180.
///
/// Written out since `PI * 3000.0 / 180.0` in `f64` rounds one ulp lower.
const XPI: f64 = 52.35987755982989;

/// Returns `true` if the point is outside the region GCJ02 applies to.
///
/// The point is outside only when it is outside both the longitude band
/// 72.004 to 137.8347 and the latitude band 0.8293 to 55.8271.
///
/// # Example
///
/// ```
/// # use gcjtrans::out_of_china;
/// #
/// assert!(!out_of_china(39.915, 116.404));
/// assert!(out_of_china(0.0, 0.0));
/// assert!(out_of_china(-33.86, 151.2));
/// ```
#[inline]
#[must_use]
pub fn out_of_china(lat: f64, lon: f64) -> bool {
    (lon < 72.004 || lon > 137.8347) && (lat < 0.8293 || lat > 55.8271)
}

/// Returns the GCJ02 point of a WGS84 point.
///
/// The result is the input itself when [`out_of_china`] holds.
///
/// # Example
///
/// ```
/// # use gcjtrans::wgs84_to_gcj02;
/// #
/// let (lat, lon) = wgs84_to_gcj02(39.915, 116.404);
/// assert!((lat - 39.91640428150164).abs() < 1e-8);
/// assert!((lon - 116.41024449916938).abs() < 1e-8);
///
/// assert_eq!(wgs84_to_gcj02(0.0, 0.0), (0.0, 0.0));
/// ```
#[must_use]
pub fn wgs84_to_gcj02(lat: f64, lon: f64) -> (f64, f64) {
    if out_of_china(lat, lon) {
        return (lat, lon);
    }

    let (d_lat, d_lon) = offset(lat, lon);
    (lat + d_lat, lon + d_lon)
}

/// Returns the BD09 point of a WGS84 point.
///
/// This is [`wgs84_to_gcj02`] followed by [`gcj02_to_bd09`].
///
/// # Example
///
/// ```
/// # use gcjtrans::{gcj02_to_bd09, wgs84_to_bd09, wgs84_to_gcj02};
/// #
/// let (lat, lon) = wgs84_to_gcj02(39.915, 116.404);
/// assert_eq!(wgs84_to_bd09(39.915, 116.404), gcj02_to_bd09(lat, lon));
/// ```
#[inline]
#[must_use]
pub fn wgs84_to_bd09(lat: f64, lon: f64) -> (f64, f64) {
    let (lat, lon) = wgs84_to_gcj02(lat, lon);
    gcj02_to_bd09(lat, lon)
}

/// Returns the approximate WGS84 point of a GCJ02 point.
///
/// The offset is evaluated at the GCJ02 point itself and subtracted,
/// it is not solved for.
///
/// # Example
///
/// ```
/// # use gcjtrans::{gcj02_to_wgs84, wgs84_to_gcj02};
/// #
/// let (lat, lon) = gcj02_to_wgs84(39.915, 116.404);
/// assert!((lat - 39.91359571849836).abs() < 1e-8);
/// assert!((lon - 116.39775550083061).abs() < 1e-8);
///
/// // Not exact, but close
/// let (lat, lon) = wgs84_to_gcj02(39.915, 116.404);
/// let (lat, lon) = gcj02_to_wgs84(lat, lon);
/// assert!((lat - 39.915).abs() < 1e-3);
/// assert!((lon - 116.404).abs() < 1e-3);
/// ```
#[must_use]
pub fn gcj02_to_wgs84(lat: f64, lon: f64) -> (f64, f64) {
    let (t_lat, t_lon) = wgs84_to_gcj02(lat, lon);
    (lat * 2.0 - t_lat, lon * 2.0 - t_lon)
}

/// Returns the BD09 point of a GCJ02 point.
///
/// # Example
///
/// ```
/// # use gcjtrans::gcj02_to_bd09;
/// #
/// let (lat, lon) = gcj02_to_bd09(39.915, 116.404);
/// assert!((lat - 39.92133699351021).abs() < 1e-8);
/// assert!((lon - 116.41036949371029).abs() < 1e-8);
/// ```
#[must_use]
pub fn gcj02_to_bd09(lat: f64, lon: f64) -> (f64, f64) {
    let z = f64::sqrt(lat * lat + lon * lon) + 0.00002 * f64::sin(lat * XPI);
    let theta = f64::atan2(lat, lon) + 0.000003 * f64::cos(lon * XPI);
    let bd_lon = z * f64::cos(theta) + 0.0065;
    let bd_lat = z * f64::sin(theta) + 0.006;
    (bd_lat, bd_lon)
}

/// Returns the GCJ02 point of a BD09 point.
///
/// # Example
///
/// ```
/// # use gcjtrans::{bd09_to_gcj02, gcj02_to_bd09};
/// #
/// let (lat, lon) = bd09_to_gcj02(39.915, 116.404);
/// assert!((lat - 39.90865673957631).abs() < 1e-8);
/// assert!((lon - 116.39762729119315).abs() < 1e-8);
///
/// let (lat, lon) = gcj02_to_bd09(39.915, 116.404);
/// let (lat, lon) = bd09_to_gcj02(lat, lon);
/// assert!((lat - 39.915).abs() < 1e-6);
/// assert!((lon - 116.404).abs() < 1e-6);
/// ```
#[must_use]
pub fn bd09_to_gcj02(bd_lat: f64, bd_lon: f64) -> (f64, f64) {
    let x = bd_lon - 0.0065;
    let y = bd_lat - 0.006;
    let z = f64::sqrt(x * x + y * y) - 0.00002 * f64::sin(y * XPI);
    let theta = f64::atan2(y, x) - 0.000003 * f64::cos(x * XPI);
    let gg_lon = z * f64::cos(theta);
    let gg_lat = z * f64::sin(theta);
    (gg_lat, gg_lon)
}

/// Returns the approximate WGS84 point of a BD09 point.
///
/// This is [`bd09_to_gcj02`] followed by [`gcj02_to_wgs84`].
///
/// # Example
///
/// ```
/// # use gcjtrans::{bd09_to_wgs84, wgs84_to_bd09};
/// #
/// let (lat, lon) = wgs84_to_bd09(39.915, 116.404);
/// let (lat, lon) = bd09_to_wgs84(lat, lon);
/// assert!((lat - 39.915).abs() < 1e-3);
/// assert!((lon - 116.404).abs() < 1e-3);
/// ```
#[inline]
#[must_use]
pub fn bd09_to_wgs84(bd_lat: f64, bd_lon: f64) -> (f64, f64) {
    let (lat, lon) = bd09_to_gcj02(bd_lat, bd_lon);
    gcj02_to_wgs84(lat, lon)
}

/// Returns the GCJ02 offset \[deg\] at the point.
///
/// It does not check [`out_of_china`].
#[inline]
fn offset(lat: f64, lon: f64) -> (f64, f64) {
    let d_lat = transform_lat(lon - 105.0, lat - 35.0);
    let d_lon = transform_lon(lon - 105.0, lat - 35.0);

    let rad_lat = lat / 180.0 * PI;
    let magic = f64::sin(rad_lat);
    let magic = 1.0 - EE * magic * magic;
    let sqrt_magic = f64::sqrt(magic);

    (
        (d_lat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrt_magic) * PI),
        (d_lon * 180.0) / (A / sqrt_magic * f64::cos(rad_lat) * PI),
    )
}

// The two series below must keep this exact operation order,
// the published GCJ02 values depend on it.

fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret =
        -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * f64::sqrt(x.abs());
    ret += (20.0 * f64::sin(6.0 * x * PI) + 20.0 * f64::sin(2.0 * x * PI)) * 2.0 / 3.0;
    ret += (20.0 * f64::sin(y * PI) + 40.0 * f64::sin(y / 3.0 * PI)) * 2.0 / 3.0;
    ret += (160.0 * f64::sin(y / 12.0 * PI) + 320.0 * f64::sin(y * PI / 30.0)) * 2.0 / 3.0;
    ret
}

fn transform_lon(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * f64::sqrt(x.abs());
    ret += (20.0 * f64::sin(6.0 * x * PI) + 20.0 * f64::sin(2.0 * x * PI)) * 2.0 / 3.0;
    ret += (20.0 * f64::sin(x * PI) + 40.0 * f64::sin(x / 3.0 * PI)) * 2.0 / 3.0;
    ret += (150.0 * f64::sin(x / 12.0 * PI) + 300.0 * f64::sin(x / 30.0 * PI)) * 2.0 / 3.0;
    ret
}

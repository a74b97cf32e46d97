//! # gcjtrans
//!
//! Offline coordinate converter between WGS84, GCJ02 and BD09.
//!
//! - WGS84: the international system, GPS receivers report it.
//! - GCJ02: the system every map provider in mainland China is required to use,
//!   derived from WGS84 by a non-linear offset (a.k.a. Mars coordinates).
//! - BD09: the system of Baidu Maps, derived from GCJ02 by a further polar offset.
//!
//! ```
//! use gcjtrans::{bd09_to_gcj02, gcj02_to_bd09, gcj02_to_wgs84, wgs84_to_gcj02};
//!
//! // Every function takes and returns (latitude, longitude) in degree
//! let (lat, lon) = wgs84_to_gcj02(39.915, 116.404);
//! assert!((lat - 39.91640428150164).abs() < 1e-8);
//! assert!((lon - 116.41024449916938).abs() < 1e-8);
//!
//! let (lat, lon) = gcj02_to_bd09(39.915, 116.404);
//! assert!((lat - 39.92133699351021).abs() < 1e-8);
//! assert!((lon - 116.41036949371029).abs() < 1e-8);
//!
//! let (lat, lon) = bd09_to_gcj02(39.915, 116.404);
//! assert!((lat - 39.90865673957631).abs() < 1e-8);
//! assert!((lon - 116.39762729119315).abs() < 1e-8);
//!
//! let (lat, lon) = gcj02_to_wgs84(39.915, 116.404);
//! assert!((lat - 39.91359571849836).abs() < 1e-8);
//! assert!((lon - 116.39775550083061).abs() < 1e-8);
//! ```
//!
//! Points outside China (see [`out_of_china`]) are not shifted by GCJ02.
//!
//! The conversions into WGS84 are approximations,
//! they do not solve the inverse problem,
//! and the error is from sub-meter to a few meters.
//!
//! # Typed API
//!
//! [`Point`], [`Crs`] and [`Transformer`] wrap the functions above.
//!
//! ```
//! use gcjtrans::{Crs, Point, Transformer};
//!
//! # fn main() -> gcjtrans::Result<()> {
//! let tf = Transformer::new("WGS84".parse()?, Crs::BD09);
//!
//! let origin = Point::new(39.915, 116.404);
//! let result = tf.forward(&origin);
//! let p = tf.backward(&result);
//!
//! assert!((p.latitude() - origin.latitude()).abs() < 1e-3);
//! assert!((p.longitude() - origin.longitude()).abs() < 1e-3);
//! # Ok(())}
//! ```
//!
//! # Serialization and Deserialization
//!
//! [`Point`], [`Crs`] and [`Transformer`] support (de)serialization by
//! [`serde` crate](https://crates.io/crates/serde) only if the feature `serde` is enabled.
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # fn main() -> serde_json::Result<()> {
//! use gcjtrans::{Crs, Transformer};
//!
//! let tf = Transformer::new(Crs::GCJ02, Crs::BD09);
//!
//! let json = serde_json::to_string(&tf)?;
//! assert_eq!(json, r#"{"source":"GCJ02","target":"BD09"}"#);
//!
//! let result: Transformer = serde_json::from_str(&json)?;
//! assert_eq!(result, tf);
//! # Ok(())}
//! # #[cfg(not(feature = "serde"))]
//! # fn main() {}
//! ```

#[doc(inline)]
pub use convert::{
    bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_wgs84, out_of_china, wgs84_to_bd09,
    wgs84_to_gcj02,
};
#[doc(inline)]
pub use crs::Crs;
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use transformer::{transform, Transformer};

pub mod convert;
pub mod crs;
pub mod error;
pub mod point;
pub mod transformer;

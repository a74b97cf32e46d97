//! Provides [`Crs`].
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::Error;

/// Represents the coordinate reference systems supported.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # fn main() -> Result<()> {
/// assert_eq!("GCJ02".parse::<Crs>()?, Crs::GCJ02);
/// assert_eq!("bd-09".parse::<Crs>()?, Crs::BD09);
/// assert_eq!(Crs::WGS84.to_string(), "WGS84");
///
/// assert!("EPSG:4326".parse::<Crs>().is_err());
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Crs {
    /// World Geodetic System 1984, the GPS one.
    WGS84,
    /// The obfuscated system mandated in mainland China, a.k.a. Mars coordinates.
    GCJ02,
    /// The system of Baidu Maps, derived from [`Crs::GCJ02`].
    BD09,
}

impl Crs {
    /// Returns the canonical name.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WGS84 => "WGS84",
            Self::GCJ02 => "GCJ02",
            Self::BD09 => "BD09",
        }
    }
}

impl Display for Crs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Crs {
    type Err = Error;

    /// Makes a [`Crs`] from a name.
    ///
    /// Case-insensitive, accepts `WGS84`, `WGS-84`, `GPS84`,
    /// `GCJ02`, `GCJ-02`, `BD09` and `BD-09`.
    ///
    /// # Errors
    ///
    /// If `s` is not one of them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WGS84" | "WGS-84" | "GPS84" => Ok(Self::WGS84),
            "GCJ02" | "GCJ-02" => Ok(Self::GCJ02),
            "BD09" | "BD-09" => Ok(Self::BD09),
            _ => Err(Error::new_parse_crs(s)),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Crs {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Crs {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Crs, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format_args!(
                "invalid value: string `{}`, expected WGS84, GCJ02 or BD09",
                s,
            ))
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorImpl;

    #[test]
    fn test_from_str() {
        for (s, e) in [
            ("WGS84", Crs::WGS84),
            ("wgs84", Crs::WGS84),
            ("WGS-84", Crs::WGS84),
            ("GPS84", Crs::WGS84),
            ("GCJ02", Crs::GCJ02),
            ("gcj-02", Crs::GCJ02),
            (" BD09 ", Crs::BD09),
            ("Bd-09", Crs::BD09),
        ] {
            assert_eq!(s.parse::<Crs>().unwrap(), e);
        }

        let e = "EPSG:4326".parse::<Crs>().unwrap_err();
        assert_eq!(
            e.kind(),
            &ErrorImpl::ParseCrs {
                s: "EPSG:4326".to_string()
            }
        );
        assert!("".parse::<Crs>().is_err());
    }

    #[test]
    fn test_display() {
        for crs in [Crs::WGS84, Crs::GCJ02, Crs::BD09] {
            assert_eq!(crs.to_string().parse::<Crs>().unwrap(), crs);
        }
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        use serde_test::{assert_de_tokens_error, assert_tokens, Token};

        assert_tokens(&Crs::WGS84, &[Token::Str("WGS84")]);
        assert_tokens(&Crs::GCJ02, &[Token::Str("GCJ02")]);
        assert_tokens(&Crs::BD09, &[Token::Str("BD09")]);

        assert_de_tokens_error::<Crs>(
            &[Token::Str("CGCS2000")],
            "invalid value: string `CGCS2000`, expected WGS84, GCJ02 or BD09",
        );
    }
}

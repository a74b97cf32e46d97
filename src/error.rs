//! Provides [`Error`] etc.

/// Alias for a `Result<T, gcjtrans::error::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors that can occur by this crate.
///
/// The conversion functions never fail,
/// this is returned by parsing [`Crs`](crate::Crs) only.
#[derive(Debug)]
pub struct Error {
    pub err: Box<ErrorImpl>,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Error {
    /// Returns a error kind.
    pub fn kind(&self) -> &ErrorImpl {
        &self.err
    }
}

impl Error {
    pub(crate) fn new_parse_crs(s: &str) -> Self {
        Self {
            err: Box::new(ErrorImpl::ParseCrs { s: s.to_string() }),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ErrorImpl {
    /// Unknown coordinate reference system name.
    ParseCrs {
        /// Invalid data
        s: String,
    },
}

impl std::fmt::Display for ErrorImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ErrorImpl::ParseCrs { s } => write!(
                f,
                "invalid coordinate reference system: '{s}', expected WGS84, GCJ02 or BD09"
            ),
        }
    }
}

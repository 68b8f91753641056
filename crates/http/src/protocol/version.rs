use std::fmt;

use crate::protocol::{ConversionError, UNKNOWN_TOKEN};

/// Number of version identifiers, including [`Version::Unknown`].
pub const VERSION_COUNT: usize = Version::KNOWN.len() + 1;

/// Protocol version named on a request or status line.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Version {
    #[default]
    Unknown = 0,
    Http10,
    Http11,
    Http20,
}

impl Version {
    pub const KNOWN: &'static [Version] = &[Version::Http10, Version::Http11, Version::Http20];

    /// Classifies a raw version token, case-sensitively.
    pub fn from_bytes(token: &[u8]) -> Self {
        match token {
            b"HTTP/1.0" => Version::Http10,
            b"HTTP/1.1" => Version::Http11,
            b"HTTP/2.0" => Version::Http20,
            _ => Version::Unknown,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Version::Unknown => UNKNOWN_TOKEN,
            Version::Http10 => "HTTP/1.0",
            Version::Http11 => "HTTP/1.1",
            Version::Http20 => "HTTP/2.0",
        }
    }

    #[inline]
    pub const fn as_bytes(self) -> &'static [u8] {
        self.as_str().as_bytes()
    }

    #[inline]
    pub const fn is_known(self) -> bool {
        !matches!(self, Version::Unknown)
    }
}

#[inline]
pub fn version_to_str(version: Version) -> &'static str {
    version.as_str()
}

#[inline]
pub fn str_to_version(token: &[u8]) -> Version {
    Version::from_bytes(token)
}

impl From<&[u8]> for Version {
    #[inline]
    fn from(token: &[u8]) -> Self {
        Self::from_bytes(token)
    }
}

impl From<&str> for Version {
    #[inline]
    fn from(token: &str) -> Self {
        Self::from_bytes(token.as_bytes())
    }
}

impl From<http::Version> for Version {
    fn from(version: http::Version) -> Self {
        match version {
            http::Version::HTTP_10 => Version::Http10,
            http::Version::HTTP_11 => Version::Http11,
            http::Version::HTTP_2 => Version::Http20,
            // 0.9 and 3 have no identifier of their own
            _ => Version::Unknown,
        }
    }
}

impl TryFrom<Version> for http::Version {
    type Error = ConversionError;

    fn try_from(version: Version) -> Result<Self, Self::Error> {
        match version {
            Version::Unknown => Err(ConversionError::unknown("version")),
            Version::Http10 => Ok(http::Version::HTTP_10),
            Version::Http11 => Ok(http::Version::HTTP_11),
            Version::Http20 => Ok(http::Version::HTTP_2),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Request method tokens.
//!
//! Methods are fixed-case wire tokens, so matching is byte-exact: `GET` is a method,
//! `get` is not and classifies as [`Method::Unknown`].

use std::fmt;

use crate::protocol::{ConversionError, UNKNOWN_TOKEN};

/// Number of method identifiers, including [`Method::Unknown`].
pub const METHOD_COUNT: usize = Method::KNOWN.len() + 1;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Method {
    /// Any token that is not one of the methods below.
    #[default]
    Unknown = 0,
    Connect,
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
    Trace,
}

impl Method {
    /// Every method except [`Method::Unknown`], in declaration order.
    pub const KNOWN: &'static [Method] = &[
        Method::Connect,
        Method::Delete,
        Method::Get,
        Method::Head,
        Method::Options,
        Method::Patch,
        Method::Post,
        Method::Put,
        Method::Trace,
    ];

    /// Classifies a raw method token.
    pub fn from_bytes(token: &[u8]) -> Self {
        match token {
            b"CONNECT" => Method::Connect,
            b"DELETE" => Method::Delete,
            b"GET" => Method::Get,
            b"HEAD" => Method::Head,
            b"OPTIONS" => Method::Options,
            b"PATCH" => Method::Patch,
            b"POST" => Method::Post,
            b"PUT" => Method::Put,
            b"TRACE" => Method::Trace,
            _ => Method::Unknown,
        }
    }

    /// The canonical wire token, or `"Unknown"` for [`Method::Unknown`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Unknown => UNKNOWN_TOKEN,
            Method::Connect => "CONNECT",
            Method::Delete => "DELETE",
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Trace => "TRACE",
        }
    }

    #[inline]
    pub const fn as_bytes(self) -> &'static [u8] {
        self.as_str().as_bytes()
    }

    #[inline]
    pub const fn is_known(self) -> bool {
        !matches!(self, Method::Unknown)
    }
}

/// Returns the canonical token of `method`.
#[inline]
pub fn method_to_str(method: Method) -> &'static str {
    method.as_str()
}

/// Classifies `token`, case-sensitively.
#[inline]
pub fn str_to_method(token: &[u8]) -> Method {
    Method::from_bytes(token)
}

impl From<&[u8]> for Method {
    #[inline]
    fn from(token: &[u8]) -> Self {
        Self::from_bytes(token)
    }
}

impl From<&str> for Method {
    #[inline]
    fn from(token: &str) -> Self {
        Self::from_bytes(token.as_bytes())
    }
}

impl From<&http::Method> for Method {
    fn from(method: &http::Method) -> Self {
        Self::from_bytes(method.as_str().as_bytes())
    }
}

impl TryFrom<Method> for http::Method {
    type Error = ConversionError;

    fn try_from(method: Method) -> Result<Self, Self::Error> {
        match method {
            Method::Unknown => Err(ConversionError::unknown("method")),
            Method::Connect => Ok(http::Method::CONNECT),
            Method::Delete => Ok(http::Method::DELETE),
            Method::Get => Ok(http::Method::GET),
            Method::Head => Ok(http::Method::HEAD),
            Method::Options => Ok(http::Method::OPTIONS),
            Method::Patch => Ok(http::Method::PATCH),
            Method::Post => Ok(http::Method::POST),
            Method::Put => Ok(http::Method::PUT),
            Method::Trace => Ok(http::Method::TRACE),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Status code classification.
//!
//! [`int_to_code`] maps any integer to a [`StatusCode`] without failing. Two sentinels sit
//! outside the numeric table:
//!
//! - [`StatusCode::Unknown`] (0) for codes the table does not list, including odd values
//!   such as 0 or 600 and plausible but unlisted ones such as 299
//! - [`StatusCode::RequestNotMade`] (-1) for a stream that ended before any status line
//!   was parsed
//!
//! The table is intentionally not exhaustive over 100-599. Code that needs the class of a
//! response must use [`StatusClass::of`] on the raw integer rather than the identifier.

use std::fmt;

use crate::protocol::{ConversionError, UNKNOWN_TOKEN};

macro_rules! status_codes {
    ($($code:literal => ($variant:ident, $reason:literal),)+) => {
        /// Identifier of a status code.
        #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(i32)]
        pub enum StatusCode {
            #[default]
            Unknown = 0,
            RequestNotMade = -1,
            $($variant = $code,)+
        }

        impl StatusCode {
            /// Every numeric code in the table, ascending. The sentinels are not included.
            pub const KNOWN: &'static [StatusCode] = &[$(StatusCode::$variant,)+];

            /// Classifies `code`; never fails.
            pub const fn from_i32(code: i32) -> Self {
                match code {
                    -1 => StatusCode::RequestNotMade,
                    $($code => StatusCode::$variant,)+
                    _ => StatusCode::Unknown,
                }
            }

            /// Reason phrase, `"Unknown"` and `"Request Not Made"` for the sentinels.
            pub const fn reason(self) -> &'static str {
                match self {
                    StatusCode::Unknown => UNKNOWN_TOKEN,
                    StatusCode::RequestNotMade => "Request Not Made",
                    $(StatusCode::$variant => $reason,)+
                }
            }
        }
    };
}

status_codes! {
    100 => (Continue, "Continue"),
    101 => (SwitchingProtocols, "Switching Protocols"),
    102 => (Processing, "Processing"),
    200 => (Ok, "OK"),
    201 => (Created, "Created"),
    202 => (Accepted, "Accepted"),
    203 => (NonAuthoritativeInformation, "Non-Authoritative Information"),
    204 => (NoContent, "No Content"),
    205 => (ResetContent, "Reset Content"),
    206 => (PartialContent, "Partial Content"),
    207 => (MultiStatus, "Multi-Status"),
    208 => (AlreadyReported, "Already Reported"),
    226 => (ImUsed, "IM Used"),
    300 => (MultipleChoices, "Multiple Choices"),
    301 => (MovedPermanently, "Moved Permanently"),
    302 => (Found, "Found"),
    303 => (SeeOther, "See Other"),
    304 => (NotModified, "Not Modified"),
    305 => (UseProxy, "Use Proxy"),
    306 => (SwitchProxy, "Switch Proxy"),
    307 => (TemporaryRedirect, "Temporary Redirect"),
    308 => (PermanentRedirect, "Permanent Redirect"),
    400 => (BadRequest, "Bad Request"),
    401 => (Unauthorized, "Unauthorized"),
    402 => (PaymentRequired, "Payment Required"),
    403 => (Forbidden, "Forbidden"),
    404 => (NotFound, "Not Found"),
    405 => (MethodNotAllowed, "Method Not Allowed"),
    406 => (NotAcceptable, "Not Acceptable"),
    407 => (ProxyAuthenticationRequired, "Proxy Authentication Required"),
    408 => (RequestTimeout, "Request Timeout"),
    409 => (Conflict, "Conflict"),
    410 => (Gone, "Gone"),
    411 => (LengthRequired, "Length Required"),
    412 => (PreconditionFailed, "Precondition Failed"),
    413 => (RequestEntityTooLarge, "Request Entity Too Large"),
    414 => (RequestUriTooLong, "Request-URI Too Long"),
    415 => (UnsupportedMediaType, "Unsupported Media Type"),
    416 => (RequestedRangeNotSatisfiable, "Requested Range Not Satisfiable"),
    417 => (ExpectationFailed, "Expectation Failed"),
    418 => (ImATeapot, "I'm a teapot"),
    419 => (AuthenticationTimeout, "Authentication Timeout"),
    420 => (MethodFailure, "Method Failure"),
    422 => (UnprocessableEntity, "Unprocessable Entity"),
    423 => (Locked, "Locked"),
    424 => (FailedDependency, "Failed Dependency"),
    426 => (UpgradeRequired, "Upgrade Required"),
    427 => (PreconditionRequired, "Precondition Required"),
    429 => (TooManyRequests, "Too Many Requests"),
    431 => (RequestHeaderFieldsTooLarge, "Request Header Fields Too Large"),
    440 => (LoginTimeout, "Login Timeout"),
    444 => (NoResponse, "No Response"),
    449 => (RetryWith, "Retry With"),
    450 => (Blocked, "Blocked by Windows Parental Controls"),
    451 => (Redirect, "Redirect"),
    494 => (RequestHeaderTooLarge, "Request Header Too Large"),
    495 => (CertError, "Cert Error"),
    496 => (NoCert, "No Cert"),
    497 => (HttpToHttps, "HTTP to HTTPS"),
    499 => (ClientClosedToRequest, "Client Closed Request"),
    500 => (InternalServerError, "Internal Server Error"),
    501 => (NotImplemented, "Not Implemented"),
    502 => (BadGateway, "Bad Gateway"),
    503 => (ServiceUnavailable, "Service Unavailable"),
    504 => (GatewayTimeout, "Gateway Timeout"),
    505 => (HttpVersionNotSupported, "HTTP Version Not Supported"),
    506 => (VariantAlsoNegotiates, "Variant Also Negotiates"),
    507 => (InsufficientStorage, "Insufficient Storage"),
    508 => (LoopDetected, "Loop Detected"),
    509 => (BandwidthLimitExceeded, "Bandwidth Limit Exceeded"),
    510 => (NotExtended, "Not Extended"),
    511 => (NetworkAuthenticationRequired, "Network Authentication Required"),
    598 => (NetworkReadTimeout, "Network Read Timeout"),
    599 => (NetworkConnectTimeout, "Network Connect Timeout"),
}

impl StatusCode {
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Whether this is a table entry rather than one of the two sentinels.
    #[inline]
    pub const fn is_known(self) -> bool {
        !matches!(self, StatusCode::Unknown | StatusCode::RequestNotMade)
    }
}

/// Classifies an integer status code.
#[inline]
pub fn int_to_code(code: i32) -> StatusCode {
    StatusCode::from_i32(code)
}

/// Reason phrase of `code`.
#[inline]
pub fn code_to_str(code: StatusCode) -> &'static str {
    code.reason()
}

impl From<i32> for StatusCode {
    #[inline]
    fn from(code: i32) -> Self {
        Self::from_i32(code)
    }
}

impl From<StatusCode> for i32 {
    #[inline]
    fn from(code: StatusCode) -> Self {
        code.as_i32()
    }
}

impl From<http::StatusCode> for StatusCode {
    fn from(code: http::StatusCode) -> Self {
        Self::from_i32(i32::from(code.as_u16()))
    }
}

impl TryFrom<StatusCode> for http::StatusCode {
    type Error = ConversionError;

    fn try_from(code: StatusCode) -> Result<Self, Self::Error> {
        if !code.is_known() {
            return Err(ConversionError::unknown("status code"));
        }
        u16::try_from(code.as_i32())
            .ok()
            .and_then(|code| http::StatusCode::from_u16(code).ok())
            .ok_or_else(|| ConversionError::unknown("status code"))
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_i32(), self.reason())
    }
}

/// Class of a response, derived from the hundreds digit of the raw code.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusClass {
    #[default]
    Unknown,
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl StatusClass {
    /// Class of the raw integer `code`. Works for codes the table does not list.
    pub const fn of(code: i32) -> Self {
        match code / 100 {
            1 => StatusClass::Informational,
            2 => StatusClass::Success,
            3 => StatusClass::Redirection,
            4 => StatusClass::ClientError,
            5 => StatusClass::ServerError,
            _ => StatusClass::Unknown,
        }
    }
}

//! Well-known header field names and header records.
//!
//! Field names are case-insensitive on the wire, so [`HeaderName::from_bytes`] folds ASCII
//! case while matching. Names outside the well-known set classify as
//! [`HeaderName::Unknown`]; the [`HeaderRecord`] built for them still carries the raw bytes,
//! which keeps headers this crate does not enumerate usable by callers.
//!
//! # Lookup
//!
//! The known names are bucketed by length once, on first use. A lookup indexes the bucket
//! for the input length and compares only the handful of names in it, so classification
//! never allocates and never looks at names of a different length.

use std::fmt;

use tracing::trace;

use crate::protocol::{ConversionError, UNKNOWN_TOKEN};

macro_rules! header_names {
    ($($variant:ident => $token:literal,)+) => {
        /// Identifier of a well-known header field name.
        #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u8)]
        pub enum HeaderName {
            /// A valid field name that is not one of the well-known names.
            #[default]
            Unknown = 0,
            $($variant,)+
        }

        impl HeaderName {
            /// Every name except [`HeaderName::Unknown`], in declaration order.
            pub const KNOWN: &'static [HeaderName] = &[$(HeaderName::$variant,)+];

            /// The canonical spelling, or `"Unknown"` for [`HeaderName::Unknown`].
            pub const fn as_str(self) -> &'static str {
                match self {
                    HeaderName::Unknown => UNKNOWN_TOKEN,
                    $(HeaderName::$variant => $token,)+
                }
            }
        }
    };
}

header_names! {
    Accept => "Accept",
    AcceptCharset => "Accept-Charset",
    AcceptEncoding => "Accept-Encoding",
    AcceptLanguage => "Accept-Language",
    AcceptRanges => "Accept-Ranges",
    AccessControlAllowOrigin => "Access-Control-Allow-Origin",
    Age => "Age",
    Allow => "Allow",
    Authorization => "Authorization",
    CacheControl => "Cache-Control",
    Connection => "Connection",
    ContentDisposition => "Content-Disposition",
    ContentEncoding => "Content-Encoding",
    ContentLanguage => "Content-Language",
    ContentLength => "Content-Length",
    ContentLocation => "Content-Location",
    ContentRange => "Content-Range",
    ContentType => "Content-Type",
    Cookie => "Cookie",
    Date => "Date",
    ETag => "ETag",
    Expect => "Expect",
    Expires => "Expires",
    Forwarded => "Forwarded",
    From => "From",
    Host => "Host",
    IfMatch => "If-Match",
    IfModifiedSince => "If-Modified-Since",
    IfNoneMatch => "If-None-Match",
    IfRange => "If-Range",
    IfUnmodifiedSince => "If-Unmodified-Since",
    KeepAlive => "Keep-Alive",
    LastModified => "Last-Modified",
    Link => "Link",
    Location => "Location",
    MaxForwards => "Max-Forwards",
    Origin => "Origin",
    ProxyAuthenticate => "Proxy-Authenticate",
    ProxyAuthorization => "Proxy-Authorization",
    Range => "Range",
    Referer => "Referer",
    Refresh => "Refresh",
    RetryAfter => "Retry-After",
    Server => "Server",
    SetCookie => "Set-Cookie",
    StrictTransportSecurity => "Strict-Transport-Security",
    TransferEncoding => "Transfer-Encoding",
    Upgrade => "Upgrade",
    UserAgent => "User-Agent",
    Vary => "Vary",
    Via => "Via",
    WwwAuthenticate => "WWW-Authenticate",
}

/// Number of header name identifiers, including [`HeaderName::Unknown`].
pub const HEADER_NAME_COUNT: usize = HeaderName::KNOWN.len() + 1;

/// Length of the longest well-known name; anything longer is unknown without a lookup.
pub const MAX_HEADER_NAME_LEN: usize = longest_known_name();

const fn longest_known_name() -> usize {
    let mut longest = 0;
    let mut i = 0;
    while i < HeaderName::KNOWN.len() {
        let len = HeaderName::KNOWN[i].as_str().len();
        if len > longest {
            longest = len;
        }
        i += 1;
    }
    longest
}

const KNOWN_COUNT: usize = HeaderName::KNOWN.len();

/// Well-known names ordered by length, so each length is one contiguous bucket.
static NAMES_BY_LEN: [HeaderName; KNOWN_COUNT] = sort_by_len();

/// `NAMES_BY_LEN[BUCKET_STARTS[len]..BUCKET_STARTS[len + 1]]` holds the names of length `len`.
static BUCKET_STARTS: [usize; MAX_HEADER_NAME_LEN + 2] = bucket_starts();

const fn sort_by_len() -> [HeaderName; KNOWN_COUNT] {
    let mut sorted = [HeaderName::Unknown; KNOWN_COUNT];
    let mut next = 0;
    let mut len = 0;
    while len <= MAX_HEADER_NAME_LEN {
        let mut i = 0;
        while i < KNOWN_COUNT {
            if HeaderName::KNOWN[i].as_str().len() == len {
                sorted[next] = HeaderName::KNOWN[i];
                next += 1;
            }
            i += 1;
        }
        len += 1;
    }
    sorted
}

const fn bucket_starts() -> [usize; MAX_HEADER_NAME_LEN + 2] {
    let mut starts = [0; MAX_HEADER_NAME_LEN + 2];
    let mut i = 0;
    while i < KNOWN_COUNT {
        // every bucket after this name's length starts one slot later
        let mut len = HeaderName::KNOWN[i].as_str().len() + 1;
        while len < MAX_HEADER_NAME_LEN + 2 {
            starts[len] += 1;
            len += 1;
        }
        i += 1;
    }
    starts
}

impl HeaderName {
    /// Classifies a raw field name, ignoring ASCII case.
    pub fn from_bytes(token: &[u8]) -> Self {
        let len = token.len();
        if len > MAX_HEADER_NAME_LEN {
            return HeaderName::Unknown;
        }
        NAMES_BY_LEN[BUCKET_STARTS[len]..BUCKET_STARTS[len + 1]]
            .iter()
            .copied()
            .find(|name| name.as_bytes().eq_ignore_ascii_case(token))
            .unwrap_or_default()
    }

    #[inline]
    pub const fn as_bytes(self) -> &'static [u8] {
        self.as_str().as_bytes()
    }

    #[inline]
    pub const fn is_known(self) -> bool {
        !matches!(self, HeaderName::Unknown)
    }
}

#[inline]
pub fn header_name_to_str(name: HeaderName) -> &'static str {
    name.as_str()
}

/// Classifies `token`, case-insensitively over ASCII.
#[inline]
pub fn str_to_header_name(token: &[u8]) -> HeaderName {
    HeaderName::from_bytes(token)
}

impl From<&[u8]> for HeaderName {
    #[inline]
    fn from(token: &[u8]) -> Self {
        Self::from_bytes(token)
    }
}

impl From<&str> for HeaderName {
    #[inline]
    fn from(token: &str) -> Self {
        Self::from_bytes(token.as_bytes())
    }
}

impl From<&http::HeaderName> for HeaderName {
    fn from(name: &http::HeaderName) -> Self {
        Self::from_bytes(name.as_str().as_bytes())
    }
}

impl TryFrom<HeaderName> for http::HeaderName {
    type Error = ConversionError;

    fn try_from(name: HeaderName) -> Result<Self, Self::Error> {
        if !name.is_known() {
            return Err(ConversionError::unknown("header name"));
        }
        http::HeaderName::from_bytes(name.as_bytes()).ok().ok_or_else(|| ConversionError::unknown("header name"))
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One header field as seen on the wire.
///
/// `name_str` and `value` borrow the caller's buffer. When `name` is known, `name_str` is a
/// case-insensitive match of its canonical spelling; when it is [`HeaderName::Unknown`],
/// only `name_str` tells which header this is.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct HeaderRecord<'buf> {
    pub name: HeaderName,
    pub name_str: &'buf [u8],
    pub value: &'buf [u8],
}

impl<'buf> HeaderRecord<'buf> {
    /// Builds a record, classifying `name_str`.
    pub fn new(name_str: &'buf [u8], value: &'buf [u8]) -> Self {
        let name = HeaderName::from_bytes(name_str);
        if !name.is_known() {
            trace!(name = %String::from_utf8_lossy(name_str), "header name not in the well-known set");
        }
        Self { name, name_str, value }
    }

    /// Builds a record from a header parsed by `httparse`, borrowing the same buffer.
    pub fn from_httparse(header: &httparse::Header<'buf>) -> Self {
        Self::new(header.name.as_bytes(), header.value)
    }

    /// Fills `records` from parsed `headers` and returns how many were written.
    ///
    /// Stops at whichever of the two slices is shorter.
    pub fn record(headers: &[httparse::Header<'buf>], records: &mut [HeaderRecord<'buf>]) -> usize {
        let mut count = 0;
        for (header, record) in headers.iter().zip(records.iter_mut()) {
            *record = Self::from_httparse(header);
            count += 1;
        }
        count
    }

    /// Whether this record names `name`. Always false for [`HeaderName::Unknown`].
    #[inline]
    pub fn is(&self, name: HeaderName) -> bool {
        name.is_known() && self.name == name
    }
}

#[cfg(test)]
mod tests {
    use std::mem::MaybeUninit;

    use indoc::indoc;

    use super::*;

    #[test]
    fn length_buckets_cover_every_name() {
        assert_eq!(BUCKET_STARTS[0], 0);
        assert_eq!(BUCKET_STARTS[MAX_HEADER_NAME_LEN + 1], HeaderName::KNOWN.len());
        for len in 0..=MAX_HEADER_NAME_LEN {
            let bucket = &NAMES_BY_LEN[BUCKET_STARTS[len]..BUCKET_STARTS[len + 1]];
            assert!(bucket.iter().all(|name| name.as_str().len() == len), "bucket {len}");
        }
        for name in HeaderName::KNOWN {
            assert!(NAMES_BY_LEN.contains(name));
        }
        assert_eq!(BUCKET_STARTS[3 + 1] - BUCKET_STARTS[3], 2); // Age, Via
        assert_eq!(str_to_header_name(&[b'a'; MAX_HEADER_NAME_LEN + 1]), HeaderName::Unknown);
    }

    #[test]
    fn round_trip() {
        for &name in HeaderName::KNOWN {
            assert_eq!(str_to_header_name(header_name_to_str(name).as_bytes()), name);
        }
        assert_eq!(HEADER_NAME_COUNT, 53);
        assert_eq!(MAX_HEADER_NAME_LEN, "Access-Control-Allow-Origin".len());
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(str_to_header_name(b"content-type"), HeaderName::ContentType);
        assert_eq!(str_to_header_name(b"Content-Type"), HeaderName::ContentType);
        assert_eq!(str_to_header_name(b"CONTENT-TYPE"), HeaderName::ContentType);
        assert_eq!(str_to_header_name(b"www-authenticate"), HeaderName::WwwAuthenticate);
        assert_eq!(str_to_header_name(b"etag"), HeaderName::ETag);
    }

    #[test]
    fn round_trip_any_case() {
        for &name in HeaderName::KNOWN {
            let lower = name.as_str().to_ascii_lowercase();
            let upper = name.as_str().to_ascii_uppercase();
            assert_eq!(str_to_header_name(lower.as_bytes()), name);
            assert_eq!(str_to_header_name(upper.as_bytes()), name);
        }
    }

    #[test]
    fn no_partial_match() {
        assert_eq!(str_to_header_name(b""), HeaderName::Unknown);
        assert_eq!(str_to_header_name(b"Content"), HeaderName::Unknown);
        assert_eq!(str_to_header_name(b"Content-Type:"), HeaderName::Unknown);
        assert_eq!(str_to_header_name(b" Host"), HeaderName::Unknown);
        assert_eq!(str_to_header_name(b"Hos"), HeaderName::Unknown);
        assert_eq!(str_to_header_name(b"X-Request-Id"), HeaderName::Unknown);
        assert_eq!(str_to_header_name(&[b'a'; 4096]), HeaderName::Unknown);
    }

    #[test]
    fn only_ascii_is_folded() {
        // 0xC8 is 'H' with the high bit set
        assert_eq!(str_to_header_name(&[0xC8, b'o', b's', b't']), HeaderName::Unknown);
        assert_eq!(str_to_header_name("Ноst".as_bytes()), HeaderName::Unknown);
    }

    #[test]
    fn unknown_placeholder() {
        assert_eq!(HeaderName::default(), HeaderName::Unknown);
        assert_eq!(header_name_to_str(HeaderName::Unknown), "Unknown");
    }

    #[test]
    fn record_keeps_raw_bytes() {
        let record = HeaderRecord::new(b"X-Trace-Id", b"abc");
        assert_eq!(record.name, HeaderName::Unknown);
        assert_eq!(record.name_str, b"X-Trace-Id");
        assert_eq!(record.value, b"abc");
        assert!(!record.is(HeaderName::Unknown));

        let record = HeaderRecord::new(b"content-length", b"42");
        assert!(record.is(HeaderName::ContentLength));
        assert_eq!(record.name_str, b"content-length");

        let empty = HeaderRecord::default();
        assert_eq!(empty.name, HeaderName::Unknown);
        assert!(empty.name_str.is_empty());
    }

    #[test]
    fn from_curl() {
        let str = indoc! {r##"
        GET /index.html HTTP/1.1
        Host: 127.0.0.1:8080
        User-Agent: curl/7.79.1
        Accept: */*
        X-Custom: yes

        "##};

        let mut parsed_req = httparse::Request::new(&mut []);
        let mut headers: [MaybeUninit<httparse::Header>; 8] = [const { MaybeUninit::uninit() }; 8];
        parsed_req.parse_with_uninit_headers(str.as_bytes(), &mut headers).unwrap();

        let mut records = [HeaderRecord::default(); 8];
        let count = HeaderRecord::record(parsed_req.headers, &mut records);
        assert_eq!(count, 4);

        let names: Vec<HeaderName> = records[..count].iter().map(|record| record.name).collect();
        assert_eq!(names, [HeaderName::Host, HeaderName::UserAgent, HeaderName::Accept, HeaderName::Unknown]);

        assert_eq!(records[0].value, b"127.0.0.1:8080");
        assert_eq!(records[3].name_str, b"X-Custom");
        assert_eq!(records[3].value, b"yes");
    }

    #[test]
    fn from_edge() {
        let str = indoc! {r##"
        GET /index/?a=1&b=2&a=3 HTTP/1.1
        Host: 127.0.0.1:8080
        Connection: keep-alive
        Cache-Control: max-age=0
        sec-ch-ua: "#Not_A Brand";v="99", "Microsoft Edge";v="109", "Chromium";v="109"
        sec-ch-ua-mobile: ?0
        Upgrade-Insecure-Requests: 1
        User-Agent: Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/109.0.0.0 Safari/537.36 Edg/109.0.1518.52
        Accept: text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8
        Sec-Fetch-Site: none
        accept-encoding: gzip, deflate, br
        ACCEPT-LANGUAGE: zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7

        "##};

        let mut parsed_req = httparse::Request::new(&mut []);
        let mut headers: [MaybeUninit<httparse::Header>; 64] = [const { MaybeUninit::uninit() }; 64];
        parsed_req.parse_with_uninit_headers(str.as_bytes(), &mut headers).unwrap();

        let records: Vec<HeaderRecord> = parsed_req.headers.iter().map(HeaderRecord::from_httparse).collect();
        assert_eq!(records.len(), 11);

        let known = records.iter().filter(|record| record.name.is_known()).count();
        assert_eq!(known, 7);

        assert!(records[1].is(HeaderName::Connection));
        assert!(records[2].is(HeaderName::CacheControl));
        assert_eq!(records[3].name, HeaderName::Unknown);
        assert_eq!(records[3].name_str, b"sec-ch-ua");
        assert_eq!(records[5].name, HeaderName::Unknown);
        assert!(records[9].is(HeaderName::AcceptEncoding));
        assert!(records[10].is(HeaderName::AcceptLanguage));
        assert_eq!(records[10].name_str, b"ACCEPT-LANGUAGE");
    }

    #[test]
    fn http_interop() {
        assert_eq!(HeaderName::from(&http::header::CONTENT_TYPE), HeaderName::ContentType);
        assert_eq!(HeaderName::from(&http::header::UPGRADE_INSECURE_REQUESTS), HeaderName::Unknown);

        assert_eq!(http::HeaderName::try_from(HeaderName::SetCookie).unwrap(), http::header::SET_COOKIE);
        assert_eq!(http::HeaderName::try_from(HeaderName::Unknown), Err(ConversionError::unknown("header name")));
    }
}

//! Wire tokens of the HTTP protocol and their identifiers.
//!
//! Every token family is modelled as a closed enum whose first, zero-valued variant is
//! `Unknown`. Conversions from raw bytes are total: a token the enum does not list
//! classifies as `Unknown` instead of failing, so newer methods or headers flow through
//! untouched.
//!
//! - [`Method`]: request methods, matched byte-exactly
//! - [`Version`]: protocol versions, matched byte-exactly
//! - [`HeaderName`] and [`HeaderRecord`]: well-known field names, matched ignoring ASCII case
//! - [`StatusCode`] and [`StatusClass`]: response status codes
//! - [`HttpErrorCode`]: error codes this layer registers with the diagnostics registry
//!
//! All lookup tables are immutable once built, so every function here may be called from
//! any number of threads without synchronization.

mod error;
pub use error::ConversionError;
pub use error::HTTP_ERROR_BEGIN_RANGE;
pub use error::HTTP_ERROR_END_RANGE;
pub use error::HttpErrorCode;
pub use error::LIBRARY_NAME;
pub(crate) use error::HTTP_ERRORS;

mod header;
pub use header::HEADER_NAME_COUNT;
pub use header::HeaderName;
pub use header::HeaderRecord;
pub use header::MAX_HEADER_NAME_LEN;
pub use header::header_name_to_str;
pub use header::str_to_header_name;

mod method;
pub use method::METHOD_COUNT;
pub use method::Method;
pub use method::method_to_str;
pub use method::str_to_method;

mod status;
pub use status::StatusClass;
pub use status::StatusCode;
pub use status::code_to_str;
pub use status::int_to_code;

mod version;
pub use version::VERSION_COUNT;
pub use version::Version;
pub use version::str_to_version;
pub use version::version_to_str;

/// Placeholder returned when an `Unknown` identifier is turned back into a token.
pub const UNKNOWN_TOKEN: &str = "Unknown";

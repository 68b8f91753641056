//! HTTP token classification
//!
//! This crate turns the raw tokens an HTTP parser meets on the wire into compact identifiers
//! and back: request methods, protocol versions, well-known header field names and status
//! codes. Every lookup is total, allocation free and safe to call concurrently from any
//! thread, so it can run on each header of each request.
//!
//! It also carries the small pieces of shared plumbing the layers above rely on: the error
//! codes and log subjects this layer registers with [`micro_diagnostics`], and the latency
//! counters of an HTTP/1 channel.
//!
//! # Example
//!
//! ```
//! use micro_http_token::protocol::{
//!     HeaderName, HeaderRecord, Method, StatusClass, StatusCode, int_to_code, str_to_header_name,
//!     str_to_method,
//! };
//!
//! micro_http_token::init().expect("diagnostics registry accepts http strings");
//!
//! assert_eq!(str_to_method(b"GET"), Method::Get);
//! assert_eq!(str_to_method(b"get"), Method::Unknown);
//!
//! assert_eq!(str_to_header_name(b"content-type"), HeaderName::ContentType);
//!
//! let record = HeaderRecord::new(b"X-Request-Id", b"42");
//! assert_eq!(record.name, HeaderName::Unknown);
//! assert_eq!(record.name_str, b"X-Request-Id");
//!
//! assert_eq!(int_to_code(-1), StatusCode::RequestNotMade);
//! assert_eq!(StatusClass::of(299), StatusClass::Success);
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: token identifiers and conversions
//! - [`statistics`]: per-channel latency counters
//! - [`load_error_strings`] and [`load_log_subject_strings`]: one-time registration with
//!   the diagnostics registry
//!
//! # Forward compatibility
//!
//! Tokens this version does not enumerate are not errors. They classify as the `Unknown`
//! variant of their family and, for headers, the raw name stays available on the
//! [`HeaderRecord`](protocol::HeaderRecord).

pub mod protocol;
pub mod statistics;

mod log_subject;
mod registration;

pub use log_subject::LogSubject;
pub use micro_diagnostics::RegistryError;
pub use registration::{load_error_strings, load_log_subject_strings};

/// Registers this library's error strings and log subjects.
///
/// Idempotent. Returns the first registration failure.
pub fn init() -> Result<(), RegistryError> {
    load_error_strings()?;
    load_log_subject_strings()
}

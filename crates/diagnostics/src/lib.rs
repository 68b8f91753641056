//! Process-wide diagnostics registry
//!
//! Libraries that report errors, log lines and statistics through one shared pipeline need
//! a place to publish human readable names for their numeric identifiers. This crate is
//! that place:
//!
//! - [`package`]: package ids and the code/subject/category ranges reserved to each
//! - [`error_info`]: error code to message lookup
//! - [`log_subject`]: log subject to name lookup
//! - [`statistics`]: statistics category tag and the [`Statistics`] record trait
//!
//! Registrations are idempotent: installing the same static list twice is a no-op, so
//! libraries may call their registration routine from every entry point.
//!
//! # Example
//!
//! ```
//! use micro_diagnostics::{ErrorInfo, ErrorInfoList, error_str, register_error_info};
//!
//! static ERRORS: ErrorInfoList = ErrorInfoList::new(&[
//!     ErrorInfo { code: 0x2C00, literal_name: "DEMO_ERROR_BROKEN", message: "the demo is broken", library: "demo" },
//! ]);
//!
//! register_error_info(&ERRORS).unwrap();
//! assert_eq!(error_str(0x2C00), "the demo is broken");
//! ```

pub mod error_info;
pub mod log_subject;
pub mod package;
pub mod statistics;

mod error;
mod slots;
mod utils;

pub(crate) use utils::ensure;

pub use error::RegistryError;
pub use error_info::{
    ErrorInfo, ErrorInfoList, UNKNOWN_ERROR_STR, error_info, error_lib_name, error_name, error_str,
    register_error_info,
};
pub use log_subject::{
    LogSubjectInfo, LogSubjectInfoList, UNKNOWN_LOG_SUBJECT, log_subject_info, log_subject_name,
    register_log_subject_info_list,
};
pub use statistics::{Statistics, StatisticsCategory};

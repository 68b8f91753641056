//! Package identifiers and the numeric ranges reserved to each package.
//!
//! Every library that reports through the shared diagnostics pipeline owns one package id.
//! The id is turned into three disjoint ranges at compile time:
//!
//! - error codes: `id << ERROR_ENUM_STRIDE_BITS`
//! - log subjects: `id << LOG_SUBJECT_STRIDE_BITS`
//! - statistics categories: `id << STATISTICS_CATEGORY_STRIDE_BITS`
//!
//! Nothing is negotiated at runtime; a package simply starts its enums at the
//! `*_begin_range` of its id.
//!
//! Only ids below [`PACKAGE_SLOTS`] can register strings. The range functions accept any id
//! and never overflow: an `*_end_range` is always its `*_begin_range` plus one stride less one.

/// Identifier of a package inside the shared diagnostics pipeline.
pub type PackageId = u32;

/// The common runtime package.
pub const COMMON: PackageId = 0;

/// The io package.
pub const IO: PackageId = 1;

/// The http package.
pub const HTTP: PackageId = 2;

/// Number of packages the registry has slots for.
pub const PACKAGE_SLOTS: usize = 16;

pub const ERROR_ENUM_STRIDE_BITS: u32 = 10;
pub const ERROR_ENUM_STRIDE: i32 = 1 << ERROR_ENUM_STRIDE_BITS;

pub const LOG_SUBJECT_STRIDE_BITS: u32 = 10;
pub const LOG_SUBJECT_STRIDE: u32 = 1 << LOG_SUBJECT_STRIDE_BITS;

pub const STATISTICS_CATEGORY_STRIDE_BITS: u32 = 8;
pub const STATISTICS_CATEGORY_STRIDE: u32 = 1 << STATISTICS_CATEGORY_STRIDE_BITS;

/// First error code reserved to `package_id`.
#[inline]
pub const fn error_enum_begin_range(package_id: PackageId) -> i32 {
    (package_id as i32) << ERROR_ENUM_STRIDE_BITS
}

/// Last error code reserved to `package_id`.
#[inline]
pub const fn error_enum_end_range(package_id: PackageId) -> i32 {
    error_enum_begin_range(package_id) + (ERROR_ENUM_STRIDE - 1)
}

/// First log subject id reserved to `package_id`.
#[inline]
pub const fn log_subject_begin_range(package_id: PackageId) -> u32 {
    package_id << LOG_SUBJECT_STRIDE_BITS
}

/// Last log subject id reserved to `package_id`.
#[inline]
pub const fn log_subject_end_range(package_id: PackageId) -> u32 {
    log_subject_begin_range(package_id) + (LOG_SUBJECT_STRIDE - 1)
}

/// First statistics category reserved to `package_id`.
#[inline]
pub const fn statistics_category_begin_range(package_id: PackageId) -> u32 {
    package_id << STATISTICS_CATEGORY_STRIDE_BITS
}

/// Last statistics category reserved to `package_id`.
#[inline]
pub const fn statistics_category_end_range(package_id: PackageId) -> u32 {
    statistics_category_begin_range(package_id) + (STATISTICS_CATEGORY_STRIDE - 1)
}

/// Returns the package owning `code`, or `None` for negative codes.
#[inline]
pub const fn package_of_error(code: i32) -> Option<PackageId> {
    if code < 0 { None } else { Some((code >> ERROR_ENUM_STRIDE_BITS) as PackageId) }
}

/// Returns the package owning the log subject `subject_id`.
#[inline]
pub const fn package_of_log_subject(subject_id: u32) -> PackageId {
    subject_id >> LOG_SUBJECT_STRIDE_BITS
}

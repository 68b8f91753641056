//! Registry of human readable error strings.
//!
//! Each package hands over one [`ErrorInfoList`] describing its whole error range. Once
//! installed, [`error_str`] and friends turn any registered code back into text. Codes that
//! nobody registered render as [`UNKNOWN_ERROR_STR`], so lookups never fail.

use once_cell::sync::Lazy;

use crate::ensure;
use crate::error::RegistryError;
use crate::package::{ERROR_ENUM_STRIDE, PackageId, error_enum_begin_range, package_of_error};
use crate::slots::SlotTable;

/// Text returned for codes without a registered [`ErrorInfo`].
pub const UNKNOWN_ERROR_STR: &str = "Unknown Error Code";

const KIND: &str = "error";

static ERROR_SLOTS: Lazy<SlotTable<ErrorInfoList>> = Lazy::new(|| SlotTable::new(KIND));

/// Description of a single error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorInfo {
    pub code: i32,
    pub literal_name: &'static str,
    pub message: &'static str,
    pub library: &'static str,
}

impl ErrorInfo {
    pub const fn new(code: i32, literal_name: &'static str, message: &'static str, library: &'static str) -> Self {
        Self { code, literal_name, message, library }
    }
}

/// A contiguous run of [`ErrorInfo`] starting at the first code of a package range.
#[derive(Debug)]
pub struct ErrorInfoList {
    infos: &'static [ErrorInfo],
}

impl ErrorInfoList {
    pub const fn new(infos: &'static [ErrorInfo]) -> Self {
        Self { infos }
    }

    pub fn infos(&self) -> &'static [ErrorInfo] {
        self.infos
    }

    fn lookup(&self, code: i32) -> Option<&'static ErrorInfo> {
        let first = self.infos.first()?.code;
        let index = usize::try_from(code.checked_sub(first)?).ok()?;
        self.infos.get(index)
    }

    fn validate(&self) -> Result<PackageId, RegistryError> {
        let first = self.infos.first().ok_or_else(|| RegistryError::invalid_list(KIND, "list is empty"))?.code;
        let package_id =
            package_of_error(first).ok_or_else(|| RegistryError::invalid_list(KIND, format!("negative code {first}")))?;

        ensure!(
            first == error_enum_begin_range(package_id),
            RegistryError::invalid_list(KIND, format!("first code {first:#06x} is not the start of a package range"))
        );
        ensure!(
            self.infos.len() <= ERROR_ENUM_STRIDE as usize,
            RegistryError::invalid_list(KIND, format!("{} entries overflow the package range", self.infos.len()))
        );

        for (offset, info) in (0i32..).zip(self.infos) {
            ensure!(
                info.code == first + offset,
                RegistryError::invalid_list(KIND, format!("code {:#06x} breaks the contiguous run", info.code))
            );
        }

        Ok(package_id)
    }
}

/// Installs `list` so its codes can be rendered to text.
///
/// Registering the same list again is a no-op. A different list for an already populated
/// package, or a malformed list, is rejected.
pub fn register_error_info(list: &'static ErrorInfoList) -> Result<(), RegistryError> {
    let package_id = list.validate()?;
    ERROR_SLOTS.install(package_id, list).map(|_| ())
}

/// Returns the registered description of `code`.
pub fn error_info(code: i32) -> Option<&'static ErrorInfo> {
    let package_id = package_of_error(code)?;
    ERROR_SLOTS.get(package_id)?.lookup(code)
}

/// Human readable message for `code`.
pub fn error_str(code: i32) -> &'static str {
    error_info(code).map_or(UNKNOWN_ERROR_STR, |info| info.message)
}

/// Enum-style literal name for `code`, e.g. `HTTP_ERROR_PARSE`.
pub fn error_name(code: i32) -> &'static str {
    error_info(code).map_or(UNKNOWN_ERROR_STR, |info| info.literal_name)
}

/// Name of the library that owns `code`.
pub fn error_lib_name(code: i32) -> &'static str {
    error_info(code).map_or(UNKNOWN_ERROR_STR, |info| info.library)
}

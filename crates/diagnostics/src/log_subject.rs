//! Registry of log subject names.
//!
//! Log subjects tag log lines with the component they came from. As with error strings,
//! each package registers one contiguous [`LogSubjectInfoList`] for its range.

use once_cell::sync::Lazy;

use crate::ensure;
use crate::error::RegistryError;
use crate::package::{LOG_SUBJECT_STRIDE, PackageId, log_subject_begin_range, package_of_log_subject};
use crate::slots::SlotTable;

/// Name returned for subjects nobody registered.
pub const UNKNOWN_LOG_SUBJECT: &str = "Unknown";

const KIND: &str = "log subject";

static LOG_SUBJECT_SLOTS: Lazy<SlotTable<LogSubjectInfoList>> = Lazy::new(|| SlotTable::new(KIND));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSubjectInfo {
    pub subject_id: u32,
    pub subject_name: &'static str,
    pub subject_description: &'static str,
}

impl LogSubjectInfo {
    pub const fn new(subject_id: u32, subject_name: &'static str, subject_description: &'static str) -> Self {
        Self { subject_id, subject_name, subject_description }
    }
}

#[derive(Debug)]
pub struct LogSubjectInfoList {
    infos: &'static [LogSubjectInfo],
}

impl LogSubjectInfoList {
    pub const fn new(infos: &'static [LogSubjectInfo]) -> Self {
        Self { infos }
    }

    pub fn infos(&self) -> &'static [LogSubjectInfo] {
        self.infos
    }

    fn lookup(&self, subject_id: u32) -> Option<&'static LogSubjectInfo> {
        let first = self.infos.first()?.subject_id;
        let index = subject_id.checked_sub(first)? as usize;
        self.infos.get(index)
    }

    fn validate(&self) -> Result<PackageId, RegistryError> {
        let first = self.infos.first().ok_or_else(|| RegistryError::invalid_list(KIND, "list is empty"))?.subject_id;
        let package_id = package_of_log_subject(first);

        ensure!(
            first == log_subject_begin_range(package_id),
            RegistryError::invalid_list(KIND, format!("first subject {first:#06x} is not the start of a package range"))
        );
        ensure!(
            self.infos.len() <= LOG_SUBJECT_STRIDE as usize,
            RegistryError::invalid_list(KIND, format!("{} entries overflow the package range", self.infos.len()))
        );

        for (offset, info) in (0u32..).zip(self.infos) {
            ensure!(
                info.subject_id == first + offset,
                RegistryError::invalid_list(KIND, format!("subject {:#06x} breaks the contiguous run", info.subject_id))
            );
        }

        Ok(package_id)
    }
}

/// Installs `list` so its subjects can be rendered by name. Idempotent for the same list.
pub fn register_log_subject_info_list(list: &'static LogSubjectInfoList) -> Result<(), RegistryError> {
    let package_id = list.validate()?;
    LOG_SUBJECT_SLOTS.install(package_id, list).map(|_| ())
}

pub fn log_subject_info(subject_id: u32) -> Option<&'static LogSubjectInfo> {
    LOG_SUBJECT_SLOTS.get(package_of_log_subject(subject_id))?.lookup(subject_id)
}

/// Short name of `subject_id`, e.g. `http-connection`.
pub fn log_subject_name(subject_id: u32) -> &'static str {
    log_subject_info(subject_id).map_or(UNKNOWN_LOG_SUBJECT, |info| info.subject_name)
}

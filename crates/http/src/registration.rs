//! One-time registration of this library's strings with the diagnostics registry.
//!
//! Both routines may be called any number of times and from any number of threads. The
//! first successful call installs the strings; every later call returns immediately. A
//! rejected registration is returned to the caller and retried on the next call.
//!
//! Classification functions do not depend on registration and work either way.

use micro_diagnostics::{RegistryError, register_error_info, register_log_subject_info_list};
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::log_subject::HTTP_LOG_SUBJECTS;
use crate::protocol::HTTP_ERRORS;

static ERROR_STRINGS: OnceCell<()> = OnceCell::new();
static LOG_SUBJECT_STRINGS: OnceCell<()> = OnceCell::new();

/// Registers the messages of [`HttpErrorCode`](crate::protocol::HttpErrorCode).
pub fn load_error_strings() -> Result<(), RegistryError> {
    ERROR_STRINGS
        .get_or_try_init(|| {
            register_error_info(&HTTP_ERRORS)?;
            debug!(count = HTTP_ERRORS.infos().len(), "loaded http error strings");
            Ok(())
        })
        .copied()
}

/// Registers the names of [`LogSubject`](crate::LogSubject).
pub fn load_log_subject_strings() -> Result<(), RegistryError> {
    LOG_SUBJECT_STRINGS
        .get_or_try_init(|| {
            register_log_subject_info_list(&HTTP_LOG_SUBJECTS)?;
            debug!(count = HTTP_LOG_SUBJECTS.infos().len(), "loaded http log subject strings");
            Ok(())
        })
        .copied()
}

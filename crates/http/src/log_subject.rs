use std::fmt;

use micro_diagnostics::package::{self, log_subject_begin_range};
use micro_diagnostics::{LogSubjectInfo, LogSubjectInfoList};

/// Components of the http layer that log lines can be attributed to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum LogSubject {
    General = log_subject_begin_range(package::HTTP),
    Connection,
    Server,
    Stream,
}

impl LogSubject {
    pub const ALL: &'static [LogSubject] =
        &[LogSubject::General, LogSubject::Connection, LogSubject::Server, LogSubject::Stream];

    #[inline]
    pub const fn id(self) -> u32 {
        self as u32
    }

    pub const fn name(self) -> &'static str {
        match self {
            LogSubject::General => "http",
            LogSubject::Connection => "http-connection",
            LogSubject::Server => "http-server",
            LogSubject::Stream => "http-stream",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            LogSubject::General => "Misc HTTP logging",
            LogSubject::Connection => "HTTP client or server connection",
            LogSubject::Server => "HTTP server socket listening for incoming connections",
            LogSubject::Stream => "HTTP request-response exchange",
        }
    }
}

impl fmt::Display for LogSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static SUBJECT_INFOS: [LogSubjectInfo; 4] = [
    LogSubjectInfo {
        subject_id: LogSubject::General as u32,
        subject_name: LogSubject::General.name(),
        subject_description: LogSubject::General.description(),
    },
    LogSubjectInfo {
        subject_id: LogSubject::Connection as u32,
        subject_name: LogSubject::Connection.name(),
        subject_description: LogSubject::Connection.description(),
    },
    LogSubjectInfo {
        subject_id: LogSubject::Server as u32,
        subject_name: LogSubject::Server.name(),
        subject_description: LogSubject::Server.description(),
    },
    LogSubjectInfo {
        subject_id: LogSubject::Stream as u32,
        subject_name: LogSubject::Stream.name(),
        subject_description: LogSubject::Stream.description(),
    },
];

pub(crate) static HTTP_LOG_SUBJECTS: LogSubjectInfoList = LogSubjectInfoList::new(&SUBJECT_INFOS);

use micro_diagnostics::package::{self, error_enum_begin_range, error_enum_end_range};
use micro_diagnostics::{ErrorInfo, ErrorInfoList};
use thiserror::Error;

/// Library name attached to every registered error string.
pub const LIBRARY_NAME: &str = "micro-http";

/// First code of the http error range.
pub const HTTP_ERROR_BEGIN_RANGE: i32 = error_enum_begin_range(package::HTTP);

/// Last code of the http error range.
pub const HTTP_ERROR_END_RANGE: i32 = error_enum_end_range(package::HTTP);

macro_rules! http_errors {
    (
        $first:ident => ($first_name:tt, $first_message:tt),
        $($variant:ident => ($name:tt, $message:tt),)*
    ) => {
        /// Error codes of the http layer, numbered from [`HTTP_ERROR_BEGIN_RANGE`].
        #[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum HttpErrorCode {
            #[error($first_message)]
            $first = HTTP_ERROR_BEGIN_RANGE,
            $(
                #[error($message)]
                $variant,
            )*
        }

        impl HttpErrorCode {
            pub const ALL: &'static [HttpErrorCode] = &[HttpErrorCode::$first, $(HttpErrorCode::$variant,)*];

            /// Enum-style name, as registered with the diagnostics registry.
            pub const fn literal_name(self) -> &'static str {
                match self {
                    HttpErrorCode::$first => $first_name,
                    $(HttpErrorCode::$variant => $name,)*
                }
            }

            /// Human readable message, as registered with the diagnostics registry.
            pub const fn message(self) -> &'static str {
                match self {
                    HttpErrorCode::$first => $first_message,
                    $(HttpErrorCode::$variant => $message,)*
                }
            }
        }

        pub(crate) static HTTP_ERRORS: ErrorInfoList = ErrorInfoList::new(&[
            ErrorInfo {
                code: HttpErrorCode::$first as i32,
                literal_name: $first_name,
                message: $first_message,
                library: LIBRARY_NAME,
            },
            $(
                ErrorInfo {
                    code: HttpErrorCode::$variant as i32,
                    literal_name: $name,
                    message: $message,
                    library: LIBRARY_NAME,
                },
            )*
        ]);
    };
}

http_errors! {
    Unknown => ("HTTP_ERROR_UNKNOWN", "Encountered an unknown error."),
    Parse => ("HTTP_ERROR_PARSE", "Encountered an unexpected form when parsing an http message."),
    UserCallbackExit => ("HTTP_ERROR_USER_CALLBACK_EXIT", "User callback requested early exit."),
    InvalidParseState => ("HTTP_ERROR_INVALID_PARSE_STATE", "Parser is in an invalid state and cannot continue."),
    ConnectionClosed => ("HTTP_ERROR_CONNECTION_CLOSED", "The connection has closed or is closing."),
    UnsupportedProtocol => ("HTTP_ERROR_UNSUPPORTED_PROTOCOL", "Protocol is not supported."),
    ReactionRequired => ("HTTP_ERROR_REACTION_REQUIRED", "A necessary reaction was not taken by the caller."),
    DataNotAvailable => ("HTTP_ERROR_DATA_NOT_AVAILABLE", "This data is not yet available."),
}

impl HttpErrorCode {
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Maps a raw code back to its identifier, `None` outside the defined codes.
    pub fn from_code(code: i32) -> Option<Self> {
        let index = usize::try_from(code.checked_sub(HTTP_ERROR_BEGIN_RANGE)?).ok()?;
        Self::ALL.get(index).copied()
    }
}

impl From<HttpErrorCode> for i32 {
    #[inline]
    fn from(code: HttpErrorCode) -> Self {
        code.code()
    }
}

/// Failure converting an identifier into the matching `http` crate type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("unknown {kind} has no http representation")]
    Unknown { kind: &'static str },
}

impl ConversionError {
    pub fn unknown(kind: &'static str) -> Self {
        Self::Unknown { kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_start_at_the_reserved_offset() {
        assert_eq!(HttpErrorCode::Unknown.code(), 0x0800);
        assert_eq!(HttpErrorCode::Parse.code(), 0x0801);
        assert_eq!(HttpErrorCode::DataNotAvailable.code(), 0x0807);
        assert!(HttpErrorCode::DataNotAvailable.code() <= HTTP_ERROR_END_RANGE);
    }

    #[test]
    fn registered_list_matches_the_enum() {
        let infos = HTTP_ERRORS.infos();
        assert_eq!(infos.len(), HttpErrorCode::ALL.len());

        for (info, &code) in infos.iter().zip(HttpErrorCode::ALL) {
            assert_eq!(info.code, code.code());
            assert_eq!(info.literal_name, code.literal_name());
            assert_eq!(info.message, code.to_string());
            assert_eq!(info.library, LIBRARY_NAME);
        }
    }

    #[test]
    fn from_code() {
        assert_eq!(HttpErrorCode::from_code(0x0804), Some(HttpErrorCode::ConnectionClosed));
        assert_eq!(HttpErrorCode::from_code(0x0808), None);
        assert_eq!(HttpErrorCode::from_code(0x07FF), None);
        assert_eq!(HttpErrorCode::from_code(i32::MIN), None);
    }
}

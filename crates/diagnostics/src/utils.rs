//! Utility macros used across the registry implementation.

/// Returns early with `$error` when `$predicate` does not hold.
///
/// This is the `Result` counterpart of `assert!`:
///
/// ```ignore
/// ensure!(!list.is_empty(), RegistryError::invalid_list("error", "empty list"));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;

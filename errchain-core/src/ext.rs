//! Wrapping helpers for `Result`

use crate::{ErrorCode, ErrorRecord};

/// Extension trait lifting the error branch of a `Result` into a parent layer.
///
/// `Ok` values pass through untouched; an `Err` is consumed by
/// [`ErrorRecord::wrap`].
///
/// ```rust
/// use errchain_core::{error_code, ErrorRecord, ResultExt};
///
/// error_code! { pub enum Low { Timeout } }
/// error_code! { pub enum High { SyncFailed } }
///
/// let r: Result<(), ErrorRecord<Low>> = Err(Low::Timeout.into());
/// let err = r.wrap_err_with(High::SyncFailed, || format!("peer={}", 7)).unwrap_err();
/// assert_eq!(err.render(), "SyncFailed(peer=7) [Timeout]");
/// ```
pub trait ResultExt<T, C> {
    /// Wrap the error with the given code and details
    fn wrap_err<P: ErrorCode>(self, code: P, details: impl Into<String>) -> Result<T, ErrorRecord<P>>;

    /// Wrap the error, computing the details only on failure
    fn wrap_err_with<P, D, F>(self, code: P, details: F) -> Result<T, ErrorRecord<P>>
    where
        P: ErrorCode,
        D: Into<String>,
        F: FnOnce() -> D;
}

impl<T, C: ErrorCode> ResultExt<T, C> for Result<T, ErrorRecord<C>> {
    fn wrap_err<P: ErrorCode>(self, code: P, details: impl Into<String>) -> Result<T, ErrorRecord<P>> {
        self.map_err(|child| ErrorRecord::wrap(code, details, child))
    }

    fn wrap_err_with<P, D, F>(self, code: P, details: F) -> Result<T, ErrorRecord<P>>
    where
        P: ErrorCode,
        D: Into<String>,
        F: FnOnce() -> D,
    {
        self.map_err(|child| ErrorRecord::wrap(code, details(), child))
    }
}

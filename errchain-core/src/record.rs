//! The chained error record

use crate::ErrorCode;
use std::fmt;

/// An error raised at one layer, carrying the messages of every failure it
/// was wrapped around.
///
/// A record holds:
/// - `code`: the layer-specific variant
/// - `details`: free-text context, possibly empty
/// - `history`: messages of the wrapped ancestors, oldest first
///
/// Records are never mutated after construction. Moving up a layer goes
/// through [`ErrorRecord::wrap`], which consumes the child and reuses its
/// history buffer.
///
/// # Example
///
/// ```rust
/// use errchain_core::{error_code, ErrorRecord};
///
/// error_code! { pub enum Low { FileNotFound } }
/// error_code! { pub enum Mid { ConfigLoadFailed } }
///
/// let leaf = ErrorRecord::new(Low::FileNotFound, "filename=config.json");
/// let err = ErrorRecord::wrap(Mid::ConfigLoadFailed, "config details", leaf);
///
/// assert_eq!(
///     err.render(),
///     "ConfigLoadFailed(config details) [FileNotFound(filename=config.json)]"
/// );
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ErrorRecord<E> {
    code: E,
    details: String,
    history: Vec<String>,
}

impl<E: ErrorCode> ErrorRecord<E> {
    /// Create a leaf error with the given code and details
    pub fn new(code: E, details: impl Into<String>) -> Self {
        Self {
            code,
            details: details.into(),
            history: Vec::new(),
        }
    }

    /// Create a leaf error with no details
    pub fn from_code(code: E) -> Self {
        Self::new(code, String::new())
    }

    /// Promote a lower-layer error into this layer.
    ///
    /// The child's own message is appended to its history and the grown
    /// buffer becomes the history of the new record. Each wrap adds exactly
    /// one entry.
    ///
    /// The child is moved in and cannot be used afterwards:
    ///
    /// ```rust,compile_fail
    /// use errchain_core::{error_code, ErrorRecord};
    ///
    /// error_code! { pub enum Low { FileNotFound } }
    /// error_code! { pub enum Mid { ConfigLoadFailed } }
    ///
    /// let leaf = ErrorRecord::from_code(Low::FileNotFound);
    /// let parent = ErrorRecord::wrap(Mid::ConfigLoadFailed, "", leaf);
    /// println!("{} {}", parent, leaf.message());
    /// ```
    pub fn wrap<C: ErrorCode>(code: E, details: impl Into<String>, child: ErrorRecord<C>) -> Self {
        let message = child.message();
        let mut history = child.history;
        history.push(message);

        Self {
            code,
            details: details.into(),
            history,
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the error code
    pub fn code(&self) -> E {
        self.code
    }

    /// Get the details, empty when none were given
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Ancestor messages in the order they were wrapped (root cause first)
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Ancestor messages nearest first, as they are rendered
    pub fn history_recent_first(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.history.iter().rev().map(String::as_str)
    }

    /// Number of wraps this record went through
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// The message of the original failure, if this record wraps anything
    pub fn root_cause(&self) -> Option<&str> {
        self.history.first().map(String::as_str)
    }

    /// Whether this record was created directly rather than by wrapping
    pub fn is_leaf(&self) -> bool {
        self.history.is_empty()
    }

    /// Take the record apart
    pub fn into_parts(self) -> (E, String, Vec<String>) {
        (self.code, self.details, self.history)
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// `Code` or `Code(details)`.
    ///
    /// This is also the fragment a parent records when wrapping this error.
    pub fn message(&self) -> String {
        Message(self).to_string()
    }

    /// Full chain: own message, a space, then the history nearest first.
    ///
    /// Same output as `Display`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Method form of [`ErrorRecord::wrap`]
    pub fn wrap_into<P: ErrorCode>(self, code: P, details: impl Into<String>) -> ErrorRecord<P> {
        ErrorRecord::wrap(code, details, self)
    }
}

impl<E: ErrorCode> From<E> for ErrorRecord<E> {
    fn from(code: E) -> Self {
        Self::from_code(code)
    }
}

/// Writes `Code` or `Code(details)` without allocating
struct Message<'a, E>(&'a ErrorRecord<E>);

impl<E: ErrorCode> fmt::Display for Message<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.code.as_str())?;
        if !self.0.details.is_empty() {
            write!(f, "({})", self.0.details)?;
        }
        Ok(())
    }
}

// =============================================================================
// Display - the rendered chain, consumed verbatim by reporting sinks
// =============================================================================

impl<E: ErrorCode> fmt::Display for ErrorRecord<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", Message(self))?;
        for (i, entry) in self.history_recent_first().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            f.write_str(entry)?;
        }
        write!(f, "]")
    }
}

// =============================================================================
// Debug - verbose, multi-line format for debugging
// =============================================================================

impl<E: ErrorCode> fmt::Debug for ErrorRecord<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.code.as_str())?;

        if !self.details.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Details: {}", self.details)?;
        }

        if !self.history.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Caused by:")?;
            for (i, entry) in self.history_recent_first().enumerate() {
                writeln!(f, "        {}: {}", i, entry)?;
            }
        }

        Ok(())
    }
}

impl<E: ErrorCode> std::error::Error for ErrorRecord<E> {}

// =============================================================================
// Serialize - structured form, history in display order
// =============================================================================

#[cfg(feature = "serde")]
impl<E: ErrorCode> serde::Serialize for ErrorRecord<E> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let history: Vec<&str> = self.history_recent_first().collect();
        let mut state = serializer.serialize_struct("ErrorRecord", 4)?;
        state.serialize_field("code", self.code.as_str())?;
        state.serialize_field("details", &self.details)?;
        state.serialize_field("history", &history)?;
        state.serialize_field("rendered", &self.render())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_code;

    error_code! {
        enum Low {
            FileNotFound,
            PermissionDenied,
        }
    }

    error_code! {
        enum Mid {
            ConfigLoadFailed,
        }
    }

    error_code! {
        enum High {
            OperationFailed,
        }
    }

    fn config_chain() -> ErrorRecord<High> {
        let leaf = ErrorRecord::new(Low::FileNotFound, "filename=config.json");
        let mid = ErrorRecord::wrap(Mid::ConfigLoadFailed, "config details", leaf);
        ErrorRecord::wrap(High::OperationFailed, "my details", mid)
    }

    #[test]
    fn test_leaf_message() {
        let err = ErrorRecord::new(Low::FileNotFound, "filename=x");
        assert_eq!(err.message(), "FileNotFound(filename=x)");
        assert!(err.is_leaf());
        assert_eq!(err.depth(), 0);
    }

    #[test]
    fn test_message_without_details() {
        let err = ErrorRecord::from_code(Low::FileNotFound);
        assert_eq!(err.message(), "FileNotFound");
        assert_eq!(err.details(), "");

        let err: ErrorRecord<Low> = Low::PermissionDenied.into();
        assert_eq!(err.message(), "PermissionDenied");
    }

    #[test]
    fn test_leaf_render_has_empty_history() {
        let err = ErrorRecord::new(Low::PermissionDenied, "filename=/etc/shadow");
        assert_eq!(err.render(), "PermissionDenied(filename=/etc/shadow) []");
    }

    #[test]
    fn test_single_wrap() {
        let leaf = ErrorRecord::new(Low::FileNotFound, "filename=config.json");
        let err = ErrorRecord::wrap(Mid::ConfigLoadFailed, "config details", leaf);

        assert_eq!(err.code(), Mid::ConfigLoadFailed);
        assert_eq!(err.history(), ["FileNotFound(filename=config.json)"]);
        assert_eq!(
            err.render(),
            "ConfigLoadFailed(config details) [FileNotFound(filename=config.json)]"
        );
    }

    #[test]
    fn test_double_wrap_orders_nearest_first() {
        let err = config_chain();

        let rendered: Vec<&str> = err.history_recent_first().collect();
        assert_eq!(
            rendered,
            [
                "ConfigLoadFailed(config details)",
                "FileNotFound(filename=config.json)",
            ]
        );
        assert_eq!(
            err.render(),
            "OperationFailed(my details) [ConfigLoadFailed(config details), FileNotFound(filename=config.json)]"
        );
        // stored order is untouched by rendering
        assert_eq!(err.history()[0], "FileNotFound(filename=config.json)");
        assert_eq!(err.root_cause(), Some("FileNotFound(filename=config.json)"));
    }

    #[test]
    fn test_wrap_appends_exactly_one_entry() {
        let mut err = ErrorRecord::new(Mid::ConfigLoadFailed, "0");
        for n in 1..=8 {
            let before = err.history().to_vec();
            let message = err.message();
            err = ErrorRecord::wrap(Mid::ConfigLoadFailed, n.to_string(), err);

            assert_eq!(err.depth(), n);
            assert_eq!(&err.history()[..n - 1], before.as_slice());
            assert_eq!(err.history()[n - 1], message);
        }
        assert_eq!(err.root_cause(), Some("ConfigLoadFailed(0)"));
    }

    #[test]
    fn test_wrap_leaf_without_details() {
        let err = ErrorRecord::wrap(Mid::ConfigLoadFailed, "", ErrorRecord::from_code(Low::FileNotFound));
        assert_eq!(err.render(), "ConfigLoadFailed [FileNotFound]");
    }

    #[test]
    fn test_wrap_into_matches_wrap() {
        let a = ErrorRecord::new(Low::FileNotFound, "f").wrap_into(Mid::ConfigLoadFailed, "d");
        let b = ErrorRecord::wrap(Mid::ConfigLoadFailed, "d", ErrorRecord::new(Low::FileNotFound, "f"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_is_idempotent() {
        let err = config_chain();
        let first = err.render();
        let second = err.render();
        assert_eq!(first, second);
        assert_eq!(first, err.to_string());
        assert_eq!(err.depth(), 2);
    }

    #[test]
    fn test_into_parts() {
        let (code, details, history) = config_chain().into_parts();
        assert_eq!(code, High::OperationFailed);
        assert_eq!(details, "my details");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_debug_lists_causes() {
        let debug = format!("{:?}", config_chain());
        assert!(debug.starts_with("OperationFailed\n"));
        assert!(debug.contains("Details: my details"));
        assert!(debug.contains("0: ConfigLoadFailed(config details)"));
        assert!(debug.contains("1: FileNotFound(filename=config.json)"));
    }

    #[test]
    fn test_record_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ErrorRecord<Low>>();
        assert_send_sync::<ErrorRecord<High>>();

        let err = config_chain();
        let rendered = std::thread::spawn(move || err.render()).join().unwrap();
        assert_eq!(
            rendered,
            "OperationFailed(my details) [ConfigLoadFailed(config details), FileNotFound(filename=config.json)]"
        );
    }

    #[test]
    fn test_boxed_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(config_chain());
        assert!(err.to_string().starts_with("OperationFailed(my details) ["));
        assert!(err.source().is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize() {
        let value = serde_json::to_value(config_chain()).unwrap();
        assert_eq!(value["code"], "OperationFailed");
        assert_eq!(value["details"], "my details");
        assert_eq!(
            value["history"],
            serde_json::json!([
                "ConfigLoadFailed(config details)",
                "FileNotFound(filename=config.json)"
            ])
        );
        assert_eq!(value["rendered"], config_chain().render());
    }
}

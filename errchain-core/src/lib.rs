//! # errchain-core
//!
//! Typed error records that survive being passed up through layers.
//!
//! ## Design Philosophy
//!
//! - **ErrorCode**: each layer owns a closed enum of what can go wrong there
//! - **ErrorRecord**: a code, free-text details, and the messages of every
//!   failure underneath it
//! - **Wrap**: lifting a child error into a parent layer consumes the child and
//!   records its message, so nothing below is lost
//! - **Render**: one deterministic line, nearest cause first, root cause last
//!
//! ## Usage
//!
//! ```rust
//! use errchain_core::{error_code, ErrorRecord, ResultExt};
//!
//! error_code! { pub enum Low { FileNotFound, PermissionDenied } }
//! error_code! { pub enum Mid { ConfigLoadFailed } }
//! error_code! { pub enum High { OperationFailed } }
//!
//! fn open(path: &str) -> Result<i32, ErrorRecord<Low>> {
//!     Err(ErrorRecord::new(Low::FileNotFound, format!("filename={}", path)))
//! }
//!
//! fn load() -> Result<String, ErrorRecord<Mid>> {
//!     open("/path/to/config.json").wrap_err(Mid::ConfigLoadFailed, "config details")?;
//!     Ok("config data".to_string())
//! }
//!
//! fn perform() -> Result<(), ErrorRecord<High>> {
//!     load().wrap_err(High::OperationFailed, "my details")?;
//!     Ok(())
//! }
//!
//! let err = perform().unwrap_err();
//! assert_eq!(
//!     err.render(),
//!     "OperationFailed(my details) [ConfigLoadFailed(config details), FileNotFound(filename=/path/to/config.json)]"
//! );
//! ```
//!
//! ## Principles
//!
//! - Errors stay typed per layer; there is no flat catch-all type
//! - A layer either wraps a child error or propagates it unchanged with `?`
//! - Never build a parent error that drops the child's history

mod code;
mod ext;
mod record;

pub use code::ErrorCode;
pub use ext::ResultExt;
pub use record::ErrorRecord;

/// Result type alias for a layer with error codes `E`
pub type Result<T, E> = std::result::Result<T, ErrorRecord<E>>;
